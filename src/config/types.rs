//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{FORBIDDEN_STRING, TARGET_PATH};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// The binary always runs with the default target path and forbidden string;
/// both are fields so tests can point the check somewhere else.
///
/// # Examples
///
/// ```
/// use exposure_check::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     target_path: PathBuf::from("build/app.js"),
///     ..Default::default()
/// };
/// assert_eq!(config.forbidden, "window.ApertureClientUploader");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Asset file to inspect
    pub target_path: PathBuf,

    /// Literal that must not appear in the asset
    pub forbidden: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(TARGET_PATH),
            forbidden: FORBIDDEN_STRING.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks that the configuration can drive a meaningful check.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the offending field when the
    /// target path or the forbidden string is empty.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.target_path.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "target_path",
                message: "must not be empty".to_string(),
            });
        }
        if self.forbidden.is_empty() {
            return Err(ConfigValidationError {
                field: "forbidden",
                message: "must not be empty (an empty pattern matches every file)".to_string(),
            });
        }
        Ok(())
    }
}
