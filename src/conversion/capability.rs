//! Startup check that the rasterization and image handling stack works

use crate::conversion::engine::Rasterizer;
use crate::error::{ConversionError, ConversionResult};

const SAMPLE_SIZE: u32 = 8;

const SAMPLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
    <rect width="4" height="4" fill="black"/>
</svg>"#;

/// Verify the rasterizer renders and the PNG it produces decodes back to the
/// requested size. Run once before any conversion work.
pub fn check_capabilities(rasterizer: &dyn Rasterizer) -> ConversionResult<()> {
    let png = rasterizer
        .rasterize_data(SAMPLE_SVG.as_bytes(), None, SAMPLE_SIZE, SAMPLE_SIZE)
        .map_err(|e| ConversionError::capability(format!("sample render failed: {}", e)))?;

    let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .map_err(|e| ConversionError::capability(format!("PNG decode of the sample failed: {}", e)))?;

    if (decoded.width(), decoded.height()) != (SAMPLE_SIZE, SAMPLE_SIZE) {
        return Err(ConversionError::capability(format!(
            "sample rendered at {}x{}, expected {}x{}",
            decoded.width(),
            decoded.height(),
            SAMPLE_SIZE,
            SAMPLE_SIZE
        )));
    }

    log::debug!("capability check passed ({} PNG bytes)", png.len());
    Ok(())
}
