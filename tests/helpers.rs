// Shared test helpers for asset setup and binary invocation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use exposure_check::TARGET_PATH;

/// Output of one binary run.
#[allow(dead_code)] // Not every test file reads every field
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Creates a working directory, optionally holding the target asset with `contents`.
#[allow(dead_code)] // Used by other test files
pub fn workspace_with_asset(contents: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    if let Some(contents) = contents {
        let asset = dir.path().join(TARGET_PATH);
        if let Some(parent) = asset.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create asset directory");
        }
        std::fs::write(&asset, contents).expect("Failed to write asset");
    }
    dir
}

/// Runs the compiled binary in `dir` with `args`.
#[allow(dead_code)] // Used by other test files
pub fn run_binary(dir: &Path, args: &[&str]) -> RunOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_exposure_check"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run exposure_check binary");

    RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code().expect("Process terminated by signal"),
    }
}
