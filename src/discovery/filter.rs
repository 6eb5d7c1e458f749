use std::path::Path;

/// Return true if `path` is a file whose name ends in `.{extension}`.
/// Matching is exact and case-sensitive.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.is_file() && name_has_extension(path, extension)
}

/// Name-only check, without touching the filesystem
pub fn name_has_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    let suffix_len = extension.len() + 1;

    name.len() >= suffix_len
        && name[name.len() - suffix_len] == b'.'
        && name.ends_with(extension.as_bytes())
}
