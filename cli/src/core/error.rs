//! # Dev Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy used throughout the `dev` tool.
//! Errors fall into a handful of categories that map directly to how an
//! invocation ends:
//!
//! - `Bootstrap`: the config directory or generated files could not be
//!   prepared. Fatal, raised before any command is dispatched.
//! - `Spawn`: an external executable could not be found or started.
//! - `NonZeroExit`: an external command ran but failed. Its exit code becomes
//!   the exit code of `dev` itself (see `main.rs`).
//! - `Config`, `FileSystem`, `Template`: supporting failures in the ambient code.
//!
//! An unrecognized subcommand is deliberately *not* an error; the plugin
//! resolver prints a friendly message and returns `Ok(())`.
//!
//! ## Examples
//!
//! ```rust
//! // Recover the child's exit code from a propagated error
//! let code = match err.downcast_ref::<DevError>() {
//!     Some(DevError::NonZeroExit { code: Some(code), .. }) => *code,
//!     _ => 1,
//! };
//!
//! // Or, looking through any added context:
//! std::process::exit(exit_code_for(&err));
//! ```
//!
use thiserror::Error;

/// Custom error type for the `dev` application.
#[derive(Error, Debug)]
pub enum DevError {
    #[error("Unable to initialize dev tool: {0}")]
    Bootstrap(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {}", exit_description(.code))]
    NonZeroExit { program: String, code: Option<i32> },
}

impl DevError {
    /// Exit code `dev` should terminate with when this error reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            DevError::NonZeroExit {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Exit code for an error propagated to `main`: the first `DevError` found
/// in the context chain decides, anything else maps to 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<DevError>())
        .map_or(1, DevError::exit_code)
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
