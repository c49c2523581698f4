//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `exposure_check` library that handles:
//! - Command-line argument parsing (logging options only)
//! - Logger initialization
//! - Printing the single result line and setting the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use exposure_check::initialization::init_logger_with;
use exposure_check::{check_exposure, Config, LogFormat, LogLevel};

/// Check that the client portal script does not expose its debug uploader hook.
#[derive(Debug, Parser)]
#[command(name = "exposure_check", version, about)]
struct Cli {
    /// Log level for stderr diagnostics
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format for stderr diagnostics
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        log_level: cli.log_level,
        log_format: cli.log_format,
        ..Default::default()
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match check_exposure(&config) {
        Ok(report) => {
            println!("{report}");
            process::exit(report.exit_code())
        }
        Err(e) => {
            println!("{e}");
            process::exit(e.exit_code())
        }
    }
}
