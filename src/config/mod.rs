//! Application configuration and constants.
//!
//! This module provides:
//! - The fixed target path and forbidden string
//! - Exit code constants
//! - CLI option types (log level and format) and the library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
