//! Command-line interface module

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::config::{DEFAULT_SIZE, MAX_SIZE};
use crate::conversion::{BatchEvent, BatchObserver, BatchReport, ConversionConfig};
use crate::error::{ConversionError, ConversionResult};

pub mod path_mapping;

pub const DEFAULT_SOURCE: &str = "extracted-icons";
pub const DEFAULT_TARGET: &str = "extracted-icons-png";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "svgconv")]
#[command(about = "Convert a directory tree of SVG files into fixed-size PNG files")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Source directory containing SVG files
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Target directory for PNG files (created if missing)
    #[arg(default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Output edge length in pixels, used for width and height (default: 1024)
    #[arg(allow_negative_numbers = true)]
    pub size: Option<String>,

    /// Override the output width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the output height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Extension of the files to convert, matched exactly
    #[arg(long, default_value = "svg")]
    pub input_ext: String,

    /// Show a progress bar while converting
    #[arg(long)]
    pub progress: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
    /// Problems with the arguments that were recovered from
    pub warnings: Vec<String>,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let mut warnings = Vec::new();

        let size = match args.size.as_deref() {
            None => DEFAULT_SIZE,
            Some(raw) => parse_size(raw).unwrap_or_else(|message| {
                warnings.push(message);
                DEFAULT_SIZE
            }),
        };

        let mut config = ConversionConfig::default()
            .with_size(size)
            .with_input_extension(args.input_ext.clone());
        if let Some(width) = args.width {
            config = config.with_width(width);
        }
        if let Some(height) = args.height {
            config = config.with_height(height);
        }

        config.validate().map_err(ConversionError::configuration)?;

        Ok(Self {
            args,
            conversion_config: config,
            warnings,
        })
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    pub fn want_progress(&self) -> bool {
        self.args.progress && !self.args.quiet
    }
}

/// Parse the positional size argument. Values that are not a number in
/// `1..=MAX_SIZE` are rejected with the message shown to the user before
/// falling back to the default.
pub fn parse_size(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(size) if (1..=MAX_SIZE).contains(&size) => Ok(size),
        _ => Err(format!(
            "Invalid size argument: {}. Using default {}x{}.",
            raw, DEFAULT_SIZE, DEFAULT_SIZE
        )),
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(bar_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(bar_style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Show an informational line (if not in quiet mode)
    pub fn show_info(message: &str, quiet: bool) {
        if !quiet {
            println!("{}", message);
        }
    }
}

/// Prints per-file notices to the terminal, optionally under a progress bar
pub struct ConsoleObserver {
    quiet: bool,
    show_progress: bool,
    extension: String,
    progress: Option<ProgressBar>,
}

impl ConsoleObserver {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            quiet: config.is_quiet(),
            show_progress: config.want_progress(),
            extension: config.conversion_config.input_extension.to_uppercase(),
            progress: None,
        }
    }

    /// Clear the progress bar, if any
    pub fn finish(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }

    fn success(&self, message: &str) {
        match &self.progress {
            Some(pb) => pb.suspend(|| CliUtils::show_success(message, self.quiet)),
            None => CliUtils::show_success(message, self.quiet),
        }
    }

    fn error(&self, message: &str) {
        match &self.progress {
            Some(pb) => pb.suspend(|| CliUtils::show_error(message)),
            None => CliUtils::show_error(message),
        }
    }
}

impl BatchObserver for ConsoleObserver {
    fn on_event(&mut self, event: BatchEvent<'_>) {
        match event {
            BatchEvent::Mirrored { directories } => {
                log::debug!("mirrored {} directories", directories);
            }
            BatchEvent::Discovered { count } => {
                CliUtils::show_info(
                    &format!("Found {} {} files to convert...", count, self.extension),
                    self.quiet,
                );
                if self.show_progress {
                    self.progress = Some(CliUtils::create_progress_bar(count as u64));
                }
            }
            BatchEvent::Converted { job, .. } => {
                self.success(&format!(
                    "Converted: {} -> {}",
                    job.source_path.display(),
                    job.target_path.display()
                ));
                if let Some(pb) = &self.progress {
                    pb.inc(1);
                }
            }
            BatchEvent::Failed { source, error } => {
                self.error(&format!("Error converting {}: {}", source.display(), error));
                if let Some(pb) = &self.progress {
                    pb.inc(1);
                }
            }
        }
    }
}

/// Print the end-of-run summary
pub fn print_summary(report: &BatchReport, quiet: bool) {
    let tally = &report.tally;

    CliUtils::show_info("\nConversion complete!", quiet);
    CliUtils::show_success(
        &format!("Successfully converted: {} files", tally.successful),
        quiet,
    );
    if tally.has_failures() {
        CliUtils::show_error(&format!("Failed conversions: {} files", tally.failed));
        for failure in &tally.failures {
            eprintln!("    {}: {}", failure.source.display(), failure.message);
        }
    }
    CliUtils::show_info(
        &format!("\nPNG files saved in: {}", report.target_root.display()),
        quiet,
    );
}

/// Print the `--stats` block
pub fn print_statistics(report: &BatchReport) {
    let stats = &report.statistics;

    println!("\nConversion Statistics:");
    println!("Files discovered: {}", report.discovered);
    println!("Directories mirrored: {}", report.directories_mirrored);
    println!(
        "Output written: {}",
        CliUtils::format_file_size(stats.bytes_written)
    );
    println!("Processing time: {}", CliUtils::format_duration(stats.elapsed));
    println!("Average per file: {:.1}ms", stats.avg_time_per_file_ms());
    println!("{}", stats.summary());
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ConversionError::SourceMissing { .. } => {
            eprintln!("\nTip: pass the source directory as the first argument");
        }
        ConversionError::NoFilesFound { .. } => {
            eprintln!("\nTip: use --input-ext to match a different file extension");
        }
        ConversionError::Configuration { .. } => {
            eprintln!("\nTip: --width, --height and SIZE must be between 1 and 16384");
        }
        _ => {}
    }

    eprintln!("\nTry 'svgconv --help' for usage information.");
}
