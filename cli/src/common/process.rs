//! # Dev Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Every external command `dev` issues (the orchestration tool, plugins, the
//! package manager, `sudo`) goes through the `ProcessRunner` trait. The real
//! implementation, `SystemRunner`, spawns the child with stdin, stdout and
//! stderr inherited from `dev`, blocks until it exits, and maps the outcome
//! into `DevError`:
//!
//! - the executable cannot be found or started: `DevError::Spawn`
//! - the child exits with a non-zero status: `DevError::NonZeroExit`
//!
//! Output is never captured. Interleaving with `dev`'s own messages is
//! expected because only one child runs at a time.
//!
//! Command handlers receive a `&dyn ProcessRunner`, so tests substitute a fake
//! that records the calls instead of running anything.
//!
use crate::core::error::{DevError, Result};
use anyhow::anyhow;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Runs an external executable to completion with inherited I/O.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()>;
}

/// `ProcessRunner` backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        info!("Running: {} {}", program, args.join(" "));
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| {
                anyhow!(DevError::Spawn {
                    program: program.to_string(),
                    source,
                })
            })?;
        debug!("'{}' finished with {}", program, status);

        if status.success() {
            Ok(())
        } else {
            Err(anyhow!(DevError::NonZeroExit {
                program: program.to_string(),
                code: status.code(),
            }))
        }
    }
}

/// Recording runner used by unit tests across the crate.
#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::RefCell;

    /// Records every call; fails calls whose program (and optionally first
    /// argument) matches a configured failure.
    #[derive(Default)]
    pub struct FakeRunner {
        pub calls: RefCell<Vec<(String, Vec<String>)>>,
        failures: Vec<(String, Option<String>, i32)>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes calls to `program` fail with `code`. When `first_arg` is
        /// set, only calls whose first argument equals it fail.
        pub fn failing(mut self, program: &str, first_arg: Option<&str>, code: i32) -> Self {
            self.failures
                .push((program.to_string(), first_arg.map(str::to_string), code));
            self
        }

        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.borrow().clone()
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            let first = args.first().map(String::as_str);
            let failure = self.failures.iter().find(|(p, expected_first, _)| {
                p == program && expected_first.as_deref().map_or(true, |f| first == Some(f))
            });
            match failure {
                Some((_, _, code)) => Err(anyhow!(DevError::NonZeroExit {
                    program: program.to_string(),
                    code: Some(*code),
                })),
                None => Ok(()),
            }
        }
    }
}
