//! # Dev Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: file locations under `~/.dev` and the optional user settings
//! - `error`: the error taxonomy and the `Result` alias
//! - `templating`: rendering of the generated compose and resolver files
//!
pub mod config;
pub mod error;
pub mod templating;
