//! # Dev System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Checks for executables on the search path. `ExecutableProbe` answers
//! "is `name` installed?" without running the program and without printing
//! anything. A failed lookup is a normal negative answer, never an error.
//!
//! `succeeds_quietly` covers the other kind of probe `dev` needs: running a
//! harmless check command (e.g. `sudo -n true`) with its output discarded and
//! only its exit status kept.
//!
//! Used by the plugin resolver (`dev-<subcommand>`) and by `dev update`
//! (package manager, docker, docker-compose), and replaced by a fake in tests.
//!
use std::process::{Command, Stdio};
use tracing::debug;

/// Answers whether an executable can be resolved on `PATH`.
pub trait ExecutableProbe {
    fn is_installed(&self, name: &str) -> bool;

    /// Runs a check command with all stdio discarded. Spawn failures and
    /// non-zero exits both read as `false`.
    fn succeeds_quietly(&self, program: &str, args: &[&str]) -> bool;
}

/// `ExecutableProbe` backed by the `which` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl ExecutableProbe for PathProbe {
    fn is_installed(&self, name: &str) -> bool {
        match which::which(name) {
            Ok(path) => {
                debug!("Found '{}' at {}", name, path.display());
                true
            }
            Err(e) => {
                debug!("'{}' not found on PATH: {}", name, e);
                false
            }
        }
    }

    fn succeeds_quietly(&self, program: &str, args: &[&str]) -> bool {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        debug!("Probe '{} {}': {:?}", program, args.join(" "), status);
        matches!(status, Ok(status) if status.success())
    }
}
