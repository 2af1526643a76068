//! # Dev DNS Resolver Setup
//!
//! File: cli/src/commands/setup/dns.rs
//!
//! ## Overview
//!
//! `dev init-dns` points the host's resolver for the development domain at
//! the dnsmasq support service. It writes `<resolver.directory>/<file name>`
//! (default `/etc/resolver/dev`) containing `nameserver 127.0.0.1`.
//!
//! Writing under `/etc` needs root, so `dev update` re-executes the binary as
//! `sudo dev init-dns` (see `request_privileged_init`).
//!
use crate::commands::Session;
use crate::common::fs::io as fsio;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::templating;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Writes the resolver file. Expects to run with enough privileges.
pub fn handle_init_dns(config: &Config) -> Result<()> {
    let directory = Path::new(&config.resolver.directory);
    let target = config.resolver_file();
    let content = templating::render_resolver(config)?;

    fsio::ensure_dir_exists(directory)
        .and_then(|_| fsio::write_string_to_file(&target, &content))
        .context("Unable to initialize DNS")?;

    info!("Resolver file written to {}", target.display());
    println!("DNS resolver configured at {}", target.display());
    Ok(())
}

/// Runs `sudo <this binary> init-dns`, telling the user a password is
/// needed when sudo cannot run non-interactively.
pub fn request_privileged_init(session: &Session<'_>) -> Result<()> {
    if !session.probe.succeeds_quietly("sudo", &["-n", "true"]) {
        println!("Please enter your password to initialize DNS:");
    }

    let current_exe = std::env::current_exe()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|_| crate::core::config::TOOL_NAME.to_string());
    let argv = vec![current_exe, "init-dns".to_string()];
    session
        .runner
        .run("sudo", &argv)
        .context("Unable to initialize DNS")
}
