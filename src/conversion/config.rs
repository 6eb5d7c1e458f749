//! Configuration options for SVG to PNG conversion

/// Default edge length in pixels for both output dimensions
pub const DEFAULT_SIZE: u32 = 1024;

/// Largest edge length accepted for an output raster
pub const MAX_SIZE: u32 = 16384;

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Output raster width in pixels
    pub width: u32,
    /// Output raster height in pixels
    pub height: u32,
    /// Extension (without dot) a source file must end with to be converted
    pub input_extension: String,
    /// Extension (without dot) written in place of the input extension
    pub output_extension: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            input_extension: "svg".to_string(),
            output_extension: "png".to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both output dimensions to the same edge length
    pub fn with_size(mut self, size: u32) -> Self {
        self.width = size;
        self.height = size;
        self
    }

    /// Set output width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set output height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the extension input files must carry
    pub fn with_input_extension(mut self, extension: impl Into<String>) -> Self {
        self.input_extension = extension.into();
        self
    }

    /// Human-readable `WxH` form of the output size
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Output size must be non-zero, got {}",
                self.size_label()
            ));
        }

        if self.width > MAX_SIZE || self.height > MAX_SIZE {
            return Err(format!(
                "Output size {} exceeds the {}px limit",
                self.size_label(),
                MAX_SIZE
            ));
        }

        for (label, ext) in [
            ("Input", &self.input_extension),
            ("Output", &self.output_extension),
        ] {
            if ext.is_empty() {
                return Err(format!("{} extension must not be empty", label));
            }
            if ext.contains('.') || ext.contains(std::path::MAIN_SEPARATOR) {
                return Err(format!(
                    "{} extension '{}' must be a bare extension like 'svg'",
                    label, ext
                ));
            }
        }

        Ok(())
    }
}
