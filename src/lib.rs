//! exposure_check library: guard against a leaked debug hook in a client asset
//!
//! The client portal script must never ship with the `window.ApertureClientUploader`
//! debug export. This library reads the asset once, searches for that literal,
//! and reports the outcome as a `CheckReport` or a `CheckError`.
//!
//! # Example
//!
//! ```no_run
//! use exposure_check::{check_exposure, Config};
//!
//! match check_exposure(&Config::default()) {
//!     Ok(report) => println!("{report}"),
//!     Err(e) => {
//!         println!("{e}");
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod check;
pub mod config;
mod error_handling;
pub mod initialization;

// Re-export public API
pub use check::{check_exposure, first_occurrence_line, CheckReport};
pub use config::{
    Config, LogFormat, LogLevel, EXIT_FAILURE, EXIT_SUCCESS, FORBIDDEN_STRING, TARGET_PATH,
};
pub use error_handling::{CheckError, ConfigValidationError, InitializationError};
