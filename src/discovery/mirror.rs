use crate::error::{ConversionError, ConversionResult};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recreate every directory under `source_root` (including empty ones) below
/// `target_root`. Files are not touched and existing directories are kept.
///
/// Returns the number of directories mirrored, counting the root itself.
pub fn mirror_directory_tree(source_root: &Path, target_root: &Path) -> ConversionResult<usize> {
    if !source_root.is_dir() {
        return Err(ConversionError::SourceMissing {
            path: source_root.to_path_buf(),
        });
    }

    fs::create_dir_all(target_root)
        .map_err(|e| ConversionError::directory_creation(target_root, e))?;

    let source = fs::canonicalize(source_root).map_err(|e| ConversionError::io(source_root, e))?;
    let target = fs::canonicalize(target_root).map_err(|e| ConversionError::io(target_root, e))?;

    // A target nested inside the source must not be walked, or every mirrored
    // directory would be discovered again.
    let walker = WalkDir::new(&source)
        .into_iter()
        .filter_entry(|entry| !entry.path().starts_with(&target));

    let mut count = 0;
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let relative = entry.path().strip_prefix(&source).map_err(|_| {
            ConversionError::io(
                entry.path(),
                std::io::Error::other("path is outside the source root"),
            )
        })?;
        let mirrored = target.join(relative);

        fs::create_dir_all(&mirrored)
            .map_err(|e| ConversionError::directory_creation(&mirrored, e))?;
        log::debug!("mirrored {}", mirrored.display());
        count += 1;
    }

    Ok(count)
}
