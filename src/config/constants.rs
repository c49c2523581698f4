//! Configuration constants.
//!
//! The audited asset and the literal that must never ship inside it.

/// Asset file inspected by the check, relative to the working directory.
pub const TARGET_PATH: &str = "assets/js/client-portal.js";

/// Debug hook that must not appear anywhere in the target asset.
///
/// Matched as a plain, case-sensitive substring.
pub const FORBIDDEN_STRING: &str = "window.ApertureClientUploader";

/// Process exit code when the forbidden string is absent.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for every failure (missing file, read error, exposure found).
pub const EXIT_FAILURE: i32 = 1;
