//! Rasterization engine for SVG to PNG transformation

use crate::error::{ConversionError, ConversionResult};
use resvg::{tiny_skia, usvg};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Turns vector documents into encoded raster bytes
///
/// Implementations are synchronous and single-shot: a call either returns the
/// complete encoded image or an error, never a partial result.
pub trait Rasterizer {
    /// Rasterize an in-memory document into a `width` x `height` image.
    ///
    /// `resources_dir` is where relative references inside the document
    /// (linked images) are resolved from.
    fn rasterize_data(
        &self,
        data: &[u8],
        resources_dir: Option<&Path>,
        width: u32,
        height: u32,
    ) -> ConversionResult<Vec<u8>>;

    /// Rasterize the document stored at `path`
    fn rasterize(&self, path: &Path, width: u32, height: u32) -> ConversionResult<Vec<u8>> {
        let data = std::fs::read(path).map_err(|e| ConversionError::io(path, e))?;
        let resources_dir = resources_dir_for(path);
        self.rasterize_data(&data, resources_dir.as_deref(), width, height)
    }
}

fn resources_dir_for(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

/// `Rasterizer` backed by resvg, producing PNG bytes
pub struct ResvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl ResvgRasterizer {
    /// Create a rasterizer with the system fonts loaded
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        log::debug!("loaded {} font faces", fontdb.len());
        Self::with_fontdb(fontdb)
    }

    /// Create a rasterizer using the given font database
    pub fn with_fontdb(fontdb: usvg::fontdb::Database) -> Self {
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a rasterizer without any fonts. Text elements render as nothing.
    pub fn without_fonts() -> Self {
        Self::with_fontdb(usvg::fontdb::Database::new())
    }

    fn parse(&self, data: &[u8], resources_dir: Option<&Path>) -> ConversionResult<usvg::Tree> {
        let mut options = usvg::Options::default();
        options.resources_dir = resources_dir.map(Path::to_path_buf);
        options.fontdb = Arc::clone(&self.fontdb);

        usvg::Tree::from_data(data, &options).map_err(|e| ConversionError::rasterize(e.to_string()))
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize_data(
        &self,
        data: &[u8],
        resources_dir: Option<&Path>,
        width: u32,
        height: u32,
    ) -> ConversionResult<Vec<u8>> {
        let tree = self.parse(data, resources_dir)?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            ConversionError::rasterize(format!("cannot allocate a {}x{} pixmap", width, height))
        })?;

        let size = tree.size();
        let transform = fit_transform(size.width(), size.height(), width, height)?;
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| ConversionError::encode(e.to_string()))
    }
}

/// Uniform scale that fits the document inside the target and centers it
fn fit_transform(
    doc_width: f32,
    doc_height: f32,
    width: u32,
    height: u32,
) -> ConversionResult<tiny_skia::Transform> {
    if !(doc_width > 0.0 && doc_height > 0.0) {
        return Err(ConversionError::rasterize(format!(
            "document has an empty size {}x{}",
            doc_width, doc_height
        )));
    }

    let scale = (width as f32 / doc_width).min(height as f32 / doc_height);
    let dx = (width as f32 - doc_width * scale) / 2.0;
    let dy = (height as f32 - doc_height * scale) / 2.0;

    Ok(tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy))
}
