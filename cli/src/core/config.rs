//! # Dev Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module resolves where `dev` keeps its files and loads the optional
//! user settings. Every value has a default, so the tool works with zero
//! configuration; `~/.dev/config.toml` only needs to list what differs.
//!
//! ## Architecture
//!
//! - `Paths`: the config directory (`<home>/.dev`) and the files inside it.
//!   Built from the home directory reported by `dirs` (which honours `HOME`).
//! - `Config`: deserialized settings, grouped per concern (`compose`,
//!   `support_services`, `resolver`, `update`).
//! - `load_config`: read, expand `~` in paths, validate.
//!
//! ## Examples
//!
//! ```toml
//! [compose]
//! command = "docker-compose"
//!
//! [support_services]
//! domain = "test"
//!
//! [resolver]
//! directory = "/etc/resolver"
//! nameserver = "127.0.0.1"
//! ```
//!
use crate::core::error::{DevError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Name of the tool. Drives the config directory, plugin prefix and help output.
pub const TOOL_NAME: &str = "dev";
/// Prefix prepended to an unknown subcommand to find its plugin executable.
pub const PLUGIN_PREFIX: &str = "dev-";

const CONFIG_FILENAME: &str = "config.toml";
const SUPPORT_SERVICES_FILENAME: &str = "support_services.yml";

/// Locations of the files `dev` manages under the user's home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolves paths from the current user's home directory.
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            anyhow!(DevError::Bootstrap(
                "could not determine home directory (is HOME set?)".to_string()
            ))
        })?;
        Ok(Self::with_home(&home))
    }

    pub fn with_home(home: &Path) -> Self {
        Self {
            config_dir: home.join(format!(".{}", TOOL_NAME)),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// The generated compose definition for the support services.
    pub fn support_services_file(&self) -> PathBuf {
        self.config_dir.join(SUPPORT_SERVICES_FILENAME)
    }
}

/// Represents the main configuration structure, loaded from `config.toml`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub support_services: SupportServicesConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub update: UpdateConfig,
}

/// The external orchestration tool every proxied command is forwarded to.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    #[serde(default = "default_compose_command")]
    pub command: String,
}

/// The reverse proxy and DNS forwarder containers.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SupportServicesConfig {
    /// Project namespace passed to the orchestration tool with `-p`.
    #[serde(default = "default_project")]
    pub project: String,
    /// Wildcard domain the DNS forwarder maps to `loopback`.
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_proxy_image")]
    pub proxy_image: String,
    #[serde(default = "default_dns_image")]
    pub dns_image: String,
    #[serde(default = "default_loopback")]
    pub loopback: String,
}

/// Where the privileged `init-dns` command writes the resolver file.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default = "default_resolver_dir")]
    pub directory: String,
    /// Defaults to the support-services domain when unset.
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default = "default_loopback")]
    pub nameserver: String,
}

/// Host dependencies installed by `dev update`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfig {
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
    /// Command line run when the package manager itself is missing.
    #[serde(default = "default_installer")]
    pub installer: Vec<String>,
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            command: default_compose_command(),
        }
    }
}

impl Default for SupportServicesConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            domain: default_domain(),
            proxy_image: default_proxy_image(),
            dns_image: default_dns_image(),
            loopback: default_loopback(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            directory: default_resolver_dir(),
            file_name: None,
            nameserver: default_loopback(),
        }
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            installer: default_installer(),
            packages: default_packages(),
        }
    }
}

impl Config {
    /// Full path of the resolver file written by `init-dns`.
    pub fn resolver_file(&self) -> PathBuf {
        let file_name = self
            .resolver
            .file_name
            .as_deref()
            .unwrap_or(&self.support_services.domain);
        PathBuf::from(&self.resolver.directory).join(file_name)
    }
}

fn default_compose_command() -> String {
    "docker-compose".to_string()
}
fn default_project() -> String {
    TOOL_NAME.to_string()
}
fn default_domain() -> String {
    TOOL_NAME.to_string()
}
fn default_proxy_image() -> String {
    "jwilder/nginx-proxy".to_string()
}
fn default_dns_image() -> String {
    "andyshinn/dnsmasq".to_string()
}
fn default_loopback() -> String {
    "127.0.0.1".to_string()
}
fn default_resolver_dir() -> String {
    "/etc/resolver".to_string()
}
fn default_package_manager() -> String {
    "brew".to_string()
}
fn default_installer() -> Vec<String> {
    vec![
        "/usr/bin/ruby".to_string(),
        "-e".to_string(),
        "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/master/install)"
            .to_string(),
    ]
}
fn default_packages() -> Vec<String> {
    vec!["docker".to_string(), "docker-compose".to_string()]
}

/// Loads settings from `<config_dir>/config.toml`, falling back to defaults
/// when the file does not exist.
pub fn load_config(paths: &Paths) -> Result<Config> {
    let config_path = paths.config_file();
    let mut config = if config_path.is_file() {
        info!("Loading configuration from: {}", config_path.display());
        load_config_from_path(&config_path)?
    } else {
        debug!(
            "Configuration file not found at {}, using defaults",
            config_path.display()
        );
        Config::default()
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    config.resolver.directory = shellexpand::tilde(&config.resolver.directory).into_owned();
    debug!("Expanded resolver directory: {}", config.resolver.directory);
}

fn validate_config(config: &Config) -> Result<()> {
    let required = [
        ("compose.command", &config.compose.command),
        ("support_services.project", &config.support_services.project),
        ("support_services.domain", &config.support_services.domain),
        ("update.package_manager", &config.update.package_manager),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(anyhow!(DevError::Config(format!(
                "'{}' must not be empty.",
                key
            ))));
        }
    }
    if config.update.installer.is_empty() {
        return Err(anyhow!(DevError::Config(
            "'update.installer' must name a command to run.".to_string()
        )));
    }
    if let Some(name) = &config.resolver.file_name {
        if name.is_empty() || name.contains('/') {
            return Err(anyhow!(DevError::Config(format!(
                "Invalid resolver file name: '{}'. Expected a plain file name.",
                name
            ))));
        }
    }
    Ok(())
}
