//! # Dev Plugin Resolver
//!
//! File: cli/src/commands/plugin.rs
//!
//! ## Overview
//!
//! Any command that is not a builtin is looked up as an external plugin:
//! `dev foo bar` runs the executable `dev-foo` from `PATH` with `bar`
//! (followed by the additional arguments). The plugin inherits `dev`'s
//! stdio, and its exit status becomes the result of the invocation.
//!
//! Resolution is two separate steps, both going through the session so tests
//! can observe them:
//! 1. `ExecutableProbe::is_installed("dev-foo")`
//! 2. `ProcessRunner::run("dev-foo", args)`
//!
//! A missing plugin is not a failure: a short message is printed and the
//! invocation succeeds.
//!
use crate::commands::Session;
use crate::core::config::{PLUGIN_PREFIX, TOOL_NAME};
use crate::core::error::Result;
use anyhow::Context;
use tracing::{error, info};

/// Executable name for the plugin implementing `command`.
pub fn plugin_name(command: &str) -> String {
    format!("{}{}", PLUGIN_PREFIX, command)
}

/// `tail + additional`
pub fn plugin_args(tail: &[String], additional: &[String]) -> Vec<String> {
    let mut argv = tail.to_vec();
    argv.extend_from_slice(additional);
    argv
}

/// Runs the `dev-<command>` plugin if one is installed.
pub fn resolve_and_run(
    session: &Session<'_>,
    command: &str,
    tail: &[String],
    additional: &[String],
) -> Result<()> {
    let plugin = plugin_name(command);
    if !session.probe.is_installed(&plugin) {
        println!("{}: '{}' is not a {} command.", TOOL_NAME, command, TOOL_NAME);
        return Ok(());
    }

    let argv = plugin_args(tail, additional);
    info!("Calling plugin {} {:?}", plugin, argv);
    session
        .runner
        .run(&plugin, &argv)
        .map_err(|e| {
            error!("Plugin '{}' failed: {:#}", plugin, e);
            e
        })
        .with_context(|| format!("Unable to run {} plugin", plugin))
}
