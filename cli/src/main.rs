//! # Dev Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `dev` CLI, a thin router in front of an external
//! orchestration tool (`docker-compose`). It handles:
//! - Splitting off the additional arguments (everything after `--`)
//! - Parsing the tool's own flags using Clap
//! - Setting up logging based on verbosity flags
//! - Bootstrapping `~/.dev` before any command runs
//! - Routing to a builtin handler or to a `dev-<command>` plugin
//! - Mapping failures to the exit code of the external command
//!
//! ## Examples
//!
//! ```bash
//! dev                       # help
//! dev up web                # support services, then docker-compose up -d web
//! dev logs web -- -f        # docker-compose logs web -f
//! dev -vv ss ps             # with debug logging
//! dev db-shell              # runs dev-db-shell from PATH, if installed
//! ```
//!
//! Command processing flow:
//! 1. Split argv at the first `--` and parse the head with Clap
//! 2. Configure logging based on verbosity level
//! 3. Load settings and ensure the config directory and compose file exist
//! 4. Classify the command and dispatch it
//! 5. Report any error and exit with the propagated status
//!
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Routing, command handlers and plugin dispatch
mod common; // Process, probe and filesystem utilities
mod core; // Errors, config, templating

use crate::commands::{
    bootstrap,
    invocation::Invocation,
    router::{self, Route},
    Session,
};
use crate::common::{process::SystemRunner, system::PathProbe};
use crate::core::config::{self, Paths};
use crate::core::error::{exit_code_for, Result};

/// Top-level command line. Only the flags before the command belong to `dev`;
/// everything from the command onwards is collected verbatim.
#[derive(Parser, Debug)]
#[command(
    name = "dev",
    about = "a self-contained, mostly zero-configuration environment",
    long_about = "Proxies service commands to docker-compose, manages the nginx and dnsmasq\n\
                  support services, and runs `dev-<command>` plugins for anything else.",
    after_help = router::commands_help(),
    version
)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

fn main() {
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let (head, additional) = Invocation::split_additional(argv);
    let cli = Cli::parse_from(head);

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}, additional: {:?}", cli, additional);

    let invocation = Invocation::new(cli.command, additional);
    if let Err(e) = run(&invocation) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(invocation: &Invocation) -> Result<()> {
    let route = invocation.command().map(router::classify);

    let paths = Paths::from_env()?;
    let config = config::load_config(&paths)?;

    // init-dns normally runs under sudo, where the home directory is root's.
    if route != Some(Route::InitDns) {
        bootstrap::ensure_ready(&paths, &config)?;
    }

    let Some(route) = route else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let session = Session {
        runner: &SystemRunner,
        probe: &PathProbe,
        config: &config,
        paths: &paths,
    };
    router::dispatch(&session, route, invocation)
}
