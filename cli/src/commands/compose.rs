//! # Dev Compose Commands
//!
//! File: cli/src/commands/compose.rs
//!
//! ## Overview
//!
//! Handlers for the builtins that talk to the external orchestration tool
//! (`docker-compose` by default, see `compose.command` in the config).
//! Each handler builds an argument vector and hands it to the session's
//! `ProcessRunner`. The builders are plain functions so the exact vectors
//! can be tested without spawning anything.
//!
//! In every vector the additional arguments come last.
//!
//! ## Examples
//!
//! ```bash
//! dev b web            # docker-compose build web
//! dev up foo --verbose # support services `start`, then docker-compose up -d foo --verbose
//! dev ss stop          # docker-compose -f ~/.dev/support_services.yml -p dev stop
//! dev ss up            # docker-compose -f ~/.dev/support_services.yml -p dev up -d
//! ```
//!
use crate::commands::Session;
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::{info, warn};

/// Sub-invocation issued to the support services before `up`.
const SUPPORT_SERVICES_BEFORE_UP: &str = "start";

/// `[name] + args + additional`
pub fn proxied_args(name: &str, args: &[String], additional: &[String]) -> Vec<String> {
    let mut argv = vec![name.to_string()];
    argv.extend_from_slice(args);
    argv.extend_from_slice(additional);
    argv
}

/// `["up", "-d"] + args + additional`
pub fn up_args(args: &[String], additional: &[String]) -> Vec<String> {
    let mut argv = vec!["up".to_string(), "-d".to_string()];
    argv.extend_from_slice(args);
    argv.extend_from_slice(additional);
    argv
}

/// `["-f", file, "-p", project] + [first] + ["-d" if first == "up"] + rest + additional`
pub fn support_services_args(
    compose_file: &Path,
    project: &str,
    args: &[String],
    additional: &[String],
) -> Vec<String> {
    let mut argv = vec![
        "-f".to_string(),
        compose_file.to_string_lossy().into_owned(),
        "-p".to_string(),
        project.to_string(),
    ];
    if let Some((first, rest)) = args.split_first() {
        argv.push(first.clone());
        if first == "up" {
            argv.push("-d".to_string());
        }
        argv.extend_from_slice(rest);
    }
    argv.extend_from_slice(additional);
    argv
}

/// Forwards a builtin to the orchestration tool under its canonical name.
pub fn proxy(
    session: &Session<'_>,
    name: &str,
    args: &[String],
    additional: &[String],
) -> Result<()> {
    let argv = proxied_args(name, args, additional);
    session.run_compose(&argv)
}

/// Ensures the support services are running, then brings the project up
/// detached. A failure in the first step stops before the second.
pub fn up(session: &Session<'_>, args: &[String], additional: &[String]) -> Result<()> {
    info!("Ensuring support services are running before 'up'");
    support_services(session, &[SUPPORT_SERVICES_BEFORE_UP.to_string()], &[])
        .context("Unable to start support services")?;

    let argv = up_args(args, additional);
    session.run_compose(&argv)
}

/// Runs the orchestration tool against the support-services definition.
pub fn support_services(
    session: &Session<'_>,
    args: &[String],
    additional: &[String],
) -> Result<()> {
    let argv = support_services_args(
        &session.paths.support_services_file(),
        &session.config.support_services.project,
        args,
        additional,
    );
    session.run_compose(&argv)
}

/// `dev run` is not executed yet; it only reports the command it would run.
pub fn run_placeholder(
    session: &Session<'_>,
    args: &[String],
    additional: &[String],
) -> Result<()> {
    let mut argv = vec!["run".to_string(), "--rm".to_string()];
    argv.extend_from_slice(args);
    argv.extend_from_slice(additional);
    warn!("'run' is not implemented yet; nothing was executed");
    println!("{} {}", session.config.compose.command, argv.join(" "));
    Ok(())
}
