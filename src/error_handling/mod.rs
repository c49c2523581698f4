//! Error handling.
//!
//! This module provides the error types for logger setup, configuration
//! validation, and the check itself. Check errors are categorized into:
//! - **Cannot run**: missing file, unreadable file, invalid configuration
//! - **Ran and failed**: the forbidden string was found

mod types;

// Re-export public API
pub use types::{CheckError, ConfigValidationError, InitializationError};
