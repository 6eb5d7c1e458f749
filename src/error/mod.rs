//! Error types and handling infrastructure for SVG to PNG conversion

use std::path::PathBuf;

/// Main error type for conversion operations
///
/// Run-level variants (`SourceMissing`, `NoFilesFound`, `DirectoryCreation`,
/// `Capability`, `Configuration`, `Walk`) abort a batch. The per-file
/// variants (`Io`, `Rasterize`, `Encode`) are tallied by the batch driver
/// and never escalate.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Source directory '{}' does not exist", path.display())]
    SourceMissing { path: PathBuf },

    #[error("No {extension} files found in '{}'", path.display())]
    NoFilesFound { path: PathBuf, extension: String },

    #[error("Failed to create directory '{}': {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rasterization failed: {message}")]
    Rasterize { message: String },

    #[error("PNG encoding failed: {message}")]
    Encode { message: String },

    #[error("Required capability unavailable: {message}")]
    Capability { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ConversionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    pub fn rasterize(message: impl Into<String>) -> Self {
        Self::Rasterize {
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::SourceMissing { path } => {
                format!("Error: Source directory '{}' does not exist!", path.display())
            }
            Self::NoFilesFound { path, extension } => format!(
                "No {} files found in '{}'",
                extension.to_uppercase(),
                path.display()
            ),
            Self::Capability { message } => format!("Missing dependency: {}", message),
            Self::Walk(err) => match err.path() {
                Some(path) => format!("Failed to walk '{}': {}", path.display(), err),
                None => format!("Failed to walk directory: {}", err),
            },
            _ => self.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
