use clap::Parser;
use std::process::ExitCode;

use anyhow::Result;

use svgconv::cli::{self, Args, CliConfig, CliUtils, ConsoleObserver};
use svgconv::logging::{init_logging, LoggingConfig};
use svgconv::{check_capabilities, BatchConverter, ConversionError, ResvgRasterizer};

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: None,
        verbose: args.verbose,
    });

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ConversionError>() {
                Some(conversion_err) => cli::handle_error(conversion_err),
                None => CliUtils::show_error(&format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    let quiet = config.is_quiet();

    CliUtils::show_info("SVG to PNG Converter", quiet);
    CliUtils::show_info(&"=".repeat(30), quiet);

    for warning in &config.warnings {
        CliUtils::show_warning(warning, quiet);
    }

    let rasterizer = ResvgRasterizer::new();
    check_capabilities(&rasterizer)?;
    CliUtils::show_success("Rasterizer and PNG codec are available.", quiet);

    let source = &config.args.source;
    let target = &config.args.target;

    CliUtils::show_info(&format!("Source directory: {}", source.display()), quiet);
    CliUtils::show_info(&format!("Target directory: {}", target.display()), quiet);
    CliUtils::show_info(
        &format!(
            "Target size: {} pixels\n",
            config.conversion_config.size_label()
        ),
        quiet,
    );

    let converter = BatchConverter::new(config.conversion_config.clone(), &rasterizer)?;

    if source.is_dir() {
        CliUtils::show_info(
            &format!("Creating directory structure in '{}'...", target.display()),
            quiet,
        );
    }

    let mut observer = ConsoleObserver::new(&config);
    let result = converter.run(source, target, &mut observer);
    observer.finish();
    let report = result?;

    cli::print_summary(&report, quiet);
    if config.want_stats() {
        cli::print_statistics(&report);
    }

    Ok(())
}
