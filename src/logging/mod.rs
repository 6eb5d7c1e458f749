//! Diagnostic logging through the `log` facade.
//!
//! User-facing conversion notices are printed by [`crate::cli::CliUtils`];
//! this backend only carries debug and warning diagnostics to stderr.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "svgconv=debug,resvg=warn"). `RUST_LOG` is used when it is unset.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub verbose: bool,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else if config.verbose {
            builder
                .filter_level(log::LevelFilter::Warn)
                .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug);
        } else {
            // Font loading warnings from dependencies are noise for a batch run.
            builder
                .filter_level(log::LevelFilter::Off)
                .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Warn);
        }

        builder.format_timestamp(None);

        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
