//! # Dev Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers for the config directory and the generated files.
//! Import from the submodule, e.g. `use crate::common::fs::io::ensure_dir_exists;`.
//!

/// Directory creation and file writing (`ensure_dir_exists`, `write_string_to_file`).
pub mod io;
