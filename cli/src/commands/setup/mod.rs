//! # Dev Setup Commands
//!
//! File: cli/src/commands/setup/mod.rs
//!
//! ## Overview
//!
//! Host preparation commands:
//! - `update` (`dev update` / `dev U`): installs the package manager, the
//!   container runtime and the orchestration tool, then configures DNS.
//! - `dns` (`dev init-dns`, normally run through sudo by `update`): writes the
//!   resolver file for the development domain.
//!
pub mod dns;
pub mod update;
