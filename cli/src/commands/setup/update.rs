//! # Dev Update Handler
//!
//! File: cli/src/commands/setup/update.rs
//!
//! ## Overview
//!
//! Implements `dev update` (alias `U`), which prepares the host for the
//! containerized environment. Steps run in order and the first failure stops
//! the rest:
//!
//! 1. Install the package manager (default `brew`) with the configured
//!    installer command if it is not on `PATH`.
//! 2. `<package manager> install <pkg>` for each missing package
//!    (default `docker`, `docker-compose`).
//! 3. Configure DNS through `sudo dev init-dns`.
//!
//! Already-installed tools are skipped, so running the command again is cheap.
//!
//! ## Usage
//!
//! ```bash
//! dev update
//! dev U
//! ```
//!
use crate::commands::{setup::dns, Session};
use crate::core::error::Result;
use anyhow::Context;
use tracing::info;

pub fn handle_update(session: &Session<'_>) -> Result<()> {
    info!("Handling update command...");
    let update = &session.config.update;

    if !session.probe.is_installed(&update.package_manager) {
        println!("Installing {}...", update.package_manager);
        let (installer, installer_args) = update
            .installer
            .split_first()
            .context("No installer command configured")?;
        session
            .runner
            .run(installer, installer_args)
            .with_context(|| format!("Error installing {}", update.package_manager))?;
    }

    for package in &update.packages {
        if session.probe.is_installed(package) {
            info!("'{}' already installed", package);
            continue;
        }
        println!("Installing {}...", package);
        let argv = vec!["install".to_string(), package.clone()];
        session
            .runner
            .run(&update.package_manager, &argv)
            .with_context(|| format!("Error installing {}", package))?;
    }

    dns::request_privileged_init(session)?;

    println!("All up to date.");
    Ok(())
}
