use std::path::{Path, PathBuf};

/// Map an input file into its output path under `output_dir`.
/// This preserves the input directory structure relative to `input_dir`
/// and swaps the file extension for `extension`.
///
/// Returns `None` when `input_file` does not live under `input_dir`.
pub fn map_input_to_output(
    input_dir: &Path,
    input_file: &Path,
    output_dir: &Path,
    extension: &str,
) -> Option<PathBuf> {
    let relative = input_file.strip_prefix(input_dir).ok()?;
    let mut out = output_dir.join(relative);
    out.set_extension(extension);
    Some(out)
}
