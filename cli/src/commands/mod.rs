//! # Dev Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Everything that turns an invocation into external process calls:
//!
//! - `invocation`: splits argv into command, args and additional args
//! - `router`: the builtin table, classification and dispatch
//! - `compose`: builtins forwarded to the orchestration tool (incl. `up`,
//!   `support-services` and the `run` placeholder)
//! - `plugin`: fallback to `dev-<command>` executables
//! - `bootstrap`: prepares `~/.dev` before anything runs
//! - `setup`: `update` and `init-dns`
//!
//! Handlers receive a `Session` holding their collaborators, so the process
//! runner and executable probe can be swapped for fakes in tests.
//!
use crate::common::{process::ProcessRunner, system::ExecutableProbe};
use crate::core::config::{Config, Paths};
use crate::core::error::Result;

pub mod bootstrap;
pub mod compose;
pub mod invocation;
pub mod plugin;
pub mod router;
pub mod setup;

/// Collaborators shared by every command handler for one invocation.
pub struct Session<'a> {
    pub runner: &'a dyn ProcessRunner,
    pub probe: &'a dyn ExecutableProbe,
    pub config: &'a Config,
    pub paths: &'a Paths,
}

impl Session<'_> {
    /// Runs the configured orchestration tool with `argv`.
    pub fn run_compose(&self, argv: &[String]) -> Result<()> {
        self.runner.run(&self.config.compose.command, argv)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Session;
    use crate::common::{process::fake::FakeRunner, system::fake::FakeProbe};
    use crate::core::config::{Config, Paths};
    use std::path::Path;

    pub fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Owns fake collaborators and default settings for handler tests.
    pub struct TestSession {
        pub runner: FakeRunner,
        pub probe: FakeProbe,
        pub config: Config,
        pub paths: Paths,
    }

    impl TestSession {
        /// Succeeding runner; `installed` names are visible to the probe.
        pub fn new(installed: &[&str]) -> Self {
            Self::with(FakeRunner::new(), FakeProbe::with(installed))
        }

        pub fn with_runner(runner: FakeRunner) -> Self {
            Self::with(runner, FakeProbe::default())
        }

        pub fn with(runner: FakeRunner, probe: FakeProbe) -> Self {
            Self {
                runner,
                probe,
                config: Config::default(),
                paths: Paths::with_home(Path::new("/home/me")),
            }
        }

        pub fn session(&self) -> Session<'_> {
            Session {
                runner: &self.runner,
                probe: &self.probe,
                config: &self.config,
                paths: &self.paths,
            }
        }
    }
}
