//! # Dev Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from the
//! routing logic in `commands::` and the infrastructure in `core::`:
//!
//! - **`fs`**: directory creation and file writing.
//! - **`process`**: the `ProcessRunner` seam for spawning external commands
//!   with inherited I/O.
//! - **`system`**: the `ExecutableProbe` seam for checking whether an
//!   executable is on `PATH`.
//!
//! ```rust
//! use crate::common::{process::{ProcessRunner, SystemRunner}, system::{ExecutableProbe, PathProbe}};
//!
//! if PathProbe.is_installed("docker-compose") {
//!     SystemRunner.run("docker-compose", &["ps".to_string()])?;
//! }
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Spawning external processes with inherited stdio.
pub mod process;
/// Executable lookup on the search path.
pub mod system;
