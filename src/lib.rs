//! SVG to PNG batch converter
//!
//! Walks a source directory, mirrors its directory structure into a target
//! directory, and rasterizes every SVG file into a fixed-size PNG at the same
//! relative path.

pub mod cli;
pub mod conversion;
pub mod discovery;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use conversion::{
    check_capabilities, BatchConverter, BatchReport, ConversionConfig, ConversionJob,
    ConversionTally, Rasterizer, ResvgRasterizer,
};
pub use discovery::mirror_directory_tree;
pub use error::{ConversionError, ConversionResult};

use std::path::Path;

/// Convert every SVG under `source_root` into a PNG of `size` x `size`
/// under `target_root`, with default settings and no progress output.
pub fn convert_tree(
    source_root: &Path,
    target_root: &Path,
    size: u32,
) -> ConversionResult<BatchReport> {
    let rasterizer = ResvgRasterizer::new();
    let config = ConversionConfig::default().with_size(size);
    BatchConverter::new(config, &rasterizer)?.run(source_root, target_root, &mut ())
}
