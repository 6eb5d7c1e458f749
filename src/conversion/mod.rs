//! SVG to PNG conversion module
//!
//! This module contains the rasterizer, the batch driver, configuration, and statistics.

pub mod batch;
pub mod capability;
pub mod config;
pub mod engine;
pub mod stats;

pub use batch::{BatchConverter, BatchEvent, BatchObserver, BatchReport, ConversionJob};
pub use capability::check_capabilities;
pub use config::ConversionConfig;
pub use engine::{Rasterizer, ResvgRasterizer};
pub use stats::{ConversionStatistics, ConversionTally};

pub use crate::error::ConversionResult;
