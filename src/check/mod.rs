//! The exposure check.
//!
//! Reads one asset file and reports whether the forbidden debug hook appears
//! in it. The whole run is a single synchronous read followed by a substring
//! search.

mod search;

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, error, info};

use crate::config::{Config, EXIT_SUCCESS};
use crate::error_handling::CheckError;

pub use search::first_occurrence_line;

/// Result of a passing check.
///
/// `Display` renders the success line the CLI prints to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Asset that was inspected
    pub path: PathBuf,
    /// Literal that was searched for
    pub forbidden: String,
    /// Size of the asset in bytes
    pub bytes_scanned: usize,
}

impl CheckReport {
    /// Process exit code for a passing check.
    pub fn exit_code(&self) -> i32 {
        EXIT_SUCCESS
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SUCCESS: '{}' not found in {}",
            self.forbidden,
            self.path.display()
        )
    }
}

/// Checks the configured asset for the forbidden string.
///
/// # Errors
///
/// - `CheckError::InvalidConfig` if the configuration fails validation
/// - `CheckError::MissingFile` if the target path does not exist
/// - `CheckError::Unreadable` if the target exists but cannot be read
/// - `CheckError::ExposureDetected` if the forbidden string is present
pub fn check_exposure(config: &Config) -> Result<CheckReport, CheckError> {
    config.validate()?;

    let path = &config.target_path;
    if !path.exists() {
        return Err(CheckError::MissingFile { path: path.clone() });
    }

    let bytes = fs::read(path).map_err(|source| CheckError::Unreadable {
        path: path.clone(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    // Invalid UTF-8 is replaced, never rejected; the forbidden string survives intact
    let content = String::from_utf8_lossy(&bytes);

    if let Some(line) = first_occurrence_line(&content, &config.forbidden) {
        error!(
            "Debug exposure '{}' at {}:{}",
            config.forbidden,
            path.display(),
            line
        );
        return Err(CheckError::ExposureDetected {
            forbidden: config.forbidden.clone(),
            path: path.clone(),
            line,
        });
    }

    info!("No debug exposure in {}", path.display());
    Ok(CheckReport {
        path: path.clone(),
        forbidden: config.forbidden.clone(),
        bytes_scanned: bytes.len(),
    })
}
