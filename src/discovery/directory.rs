use crate::error::ConversionResult;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every file under `dir` whose name ends in `.{extension}`, recursively.
///
/// Paths are returned sorted so batches run in a stable order.
pub fn find_matching_files(dir: &Path, extension: &str) -> ConversionResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();
        if crate::discovery::filter::has_extension(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
