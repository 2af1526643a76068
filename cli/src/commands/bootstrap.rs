//! # Dev Bootstrap
//!
//! File: cli/src/commands/bootstrap.rs
//!
//! ## Overview
//!
//! Runs before any command is dispatched. Guarantees that the config
//! directory (`~/.dev`) exists and that the support-services compose file
//! inside it matches the current template. The file is rewritten on every
//! run and never deleted. Any failure here aborts the invocation with
//! `DevError::Bootstrap`.
//!
use crate::common::fs::io as fsio;
use crate::core::config::{Config, Paths};
use crate::core::error::{DevError, Result};
use crate::core::templating;
use anyhow::anyhow;
use tracing::debug;

pub fn ensure_ready(paths: &Paths, config: &Config) -> Result<()> {
    prepare(paths, config).map_err(|e| anyhow!(DevError::Bootstrap(format!("{:#}", e))))
}

fn prepare(paths: &Paths, config: &Config) -> Result<()> {
    fsio::ensure_dir_exists(&paths.config_dir)?;
    let compose = templating::render_support_services(config)?;
    let target = paths.support_services_file();
    fsio::write_string_to_file(&target, &compose)?;
    debug!("Support services definition written to {}", target.display());
    Ok(())
}
