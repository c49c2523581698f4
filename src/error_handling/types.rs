//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::config::EXIT_FAILURE;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A configuration field that cannot drive a check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending `Config` field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Reasons a check run does not end in success.
///
/// The `Display` output of each variant is the exact line the CLI prints to
/// stdout.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The target asset does not exist.
    #[error("Error: {} does not exist.", .path.display())]
    MissingFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The target exists but its contents could not be read.
    #[error("Error: failed to read {}: {source}", .path.display())]
    Unreadable {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// The forbidden string occurs in the target asset.
    #[error("FAILURE: Found debug exposure '{forbidden}' in {}", .path.display())]
    ExposureDetected {
        /// Literal that was found
        forbidden: String,
        /// Asset that contains it
        path: PathBuf,
        /// 1-based line of the first occurrence
        line: usize,
    },

    /// The configuration was rejected before touching the filesystem.
    #[error("Error: invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),
}

impl CheckError {
    /// Process exit code reported for this failure.
    ///
    /// Every failure shares `EXIT_FAILURE`, so a caller cannot tell "could not
    /// run" apart from "ran and found the string" by exit code alone.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::MissingFile { .. }
            | CheckError::Unreadable { .. }
            | CheckError::ExposureDetected { .. }
            | CheckError::InvalidConfig(_) => EXIT_FAILURE,
        }
    }
}
