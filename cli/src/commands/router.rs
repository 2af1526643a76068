//! # Dev Command Router
//!
//! File: cli/src/commands/router.rs
//!
//! ## Overview
//!
//! Decides what happens to an invocation. A static table lists the builtin
//! commands with their aliases; each entry carries the canonical name that is
//! forwarded to the orchestration tool (an alias is never passed through).
//!
//! ## Routes
//!
//! | Route             | Builtins                                  | Behaviour                                   |
//! |-------------------|-------------------------------------------|---------------------------------------------|
//! | `Proxied(name)`   | build, kill, logs, ps, pull, restart, ... | `<compose> <name> args... additional...`    |
//! | `SpecialUp`       | up / u                                    | support services `start`, then `up -d ...`  |
//! | `SupportServices` | support-services / ss                     | compose scoped to the support-services file |
//! | `Local`           | run                                       | handled in-process (placeholder)            |
//! | `Update`          | update / U                                | host dependency bootstrap                   |
//! | `InitDns`         | init-dns (hidden)                         | privileged resolver-file install            |
//! | `Unknown`         | anything else                             | plugin `dev-<command>`                      |
//!
//! Classification is a pure table lookup; `dispatch` then runs the handler for
//! the route with the collaborators held by `Session`.
//!
use crate::commands::{compose, invocation::Invocation, plugin, setup, Session};
use crate::core::error::Result;
use tracing::debug;

/// How a builtin command is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Proxied,
    SpecialUp,
    SupportServices,
    Local,
    Update,
    InitDns,
}

/// One entry of the builtin command table.
#[derive(Debug)]
pub struct CommandSpec {
    /// Canonical name, forwarded verbatim for proxied commands.
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub about: &'static str,
    pub kind: CommandKind,
    /// Left out of the help listing.
    pub hidden: bool,
}

const fn builtin(
    name: &'static str,
    aliases: &'static [&'static str],
    about: &'static str,
    kind: CommandKind,
) -> CommandSpec {
    CommandSpec {
        name,
        aliases,
        about,
        kind,
        hidden: false,
    }
}

/// Builtin commands. Names and aliases are unique across the table.
pub const BUILTINS: &[CommandSpec] = &[
    builtin("build", &["b"], "Build or rebuild services", CommandKind::Proxied),
    builtin("kill", &["k"], "Kill containers", CommandKind::Proxied),
    builtin("logs", &["l"], "View output from containers", CommandKind::Proxied),
    builtin("ps", &[], "List containers", CommandKind::Proxied),
    builtin("pull", &["p"], "Pulls service images", CommandKind::Proxied),
    builtin("restart", &["r"], "Restart services", CommandKind::Proxied),
    builtin("rm", &[], "Remove stopped containers", CommandKind::Proxied),
    builtin("run", &[], "Run a one-off command", CommandKind::Local),
    builtin("scale", &[], "Scales services", CommandKind::Proxied),
    builtin("start", &["s"], "Start services", CommandKind::Proxied),
    builtin("stop", &["st"], "Stops services", CommandKind::Proxied),
    builtin("up", &["u"], "Create and start containers", CommandKind::SpecialUp),
    builtin(
        "support-services",
        &["ss"],
        "Manage support services (nginx and dnsmasq)",
        CommandKind::SupportServices,
    ),
    builtin(
        "update",
        &["U"],
        "Update dev environment dependencies",
        CommandKind::Update,
    ),
    CommandSpec {
        name: "init-dns",
        aliases: &[],
        about: "Write the DNS resolver file (run via sudo by `update`)",
        kind: CommandKind::InitDns,
        hidden: true,
    },
];

/// Result of classifying a primary command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Forward to the orchestration tool under this canonical name.
    Proxied(&'static str),
    SpecialUp,
    SupportServices,
    Local,
    Update,
    InitDns,
    /// Not a builtin: try a plugin.
    Unknown,
}

/// Finds the builtin whose name or alias equals `name`.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    BUILTINS
        .iter()
        .find(|spec| spec.name == name || spec.aliases.iter().any(|alias| *alias == name))
}

pub fn classify(name: &str) -> Route {
    let route = match lookup(name) {
        None => Route::Unknown,
        Some(spec) => match spec.kind {
            CommandKind::Proxied => Route::Proxied(spec.name),
            CommandKind::SpecialUp => Route::SpecialUp,
            CommandKind::SupportServices => Route::SupportServices,
            CommandKind::Local => Route::Local,
            CommandKind::Update => Route::Update,
            CommandKind::InitDns => Route::InitDns,
        },
    };
    debug!("Classified '{}' as {:?}", name, route);
    route
}

/// Runs the handler for `route`.
pub fn dispatch(session: &Session<'_>, route: Route, invocation: &Invocation) -> Result<()> {
    let args = invocation.args();
    let additional = invocation.additional();
    match route {
        Route::Proxied(name) => compose::proxy(session, name, args, additional),
        Route::SpecialUp => compose::up(session, args, additional),
        Route::SupportServices => compose::support_services(session, args, additional),
        Route::Local => compose::run_placeholder(session, args, additional),
        Route::Update => setup::update::handle_update(session),
        Route::InitDns => setup::dns::handle_init_dns(session.config),
        Route::Unknown => {
            // `Unknown` is only produced for a present command.
            let command = invocation.command().unwrap_or_default();
            plugin::resolve_and_run(session, command, args, additional)
        }
    }
}

/// Help section listing the builtin commands, appended to clap's output.
pub fn commands_help() -> String {
    let mut help = String::from("Commands:\n");
    for spec in BUILTINS.iter().filter(|spec| !spec.hidden) {
        let label = std::iter::once(spec.name)
            .chain(spec.aliases.iter().copied())
            .collect::<Vec<_>>()
            .join(", ");
        help.push_str(&format!("  {:<22}{}\n", label, spec.about));
    }
    help.push_str(
        "\nAny other command runs the `dev-<command>` plugin found on PATH.\n\
         Arguments after `--` are appended unchanged to the command that runs.",
    );
    help
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_aliases_unique() {
        let mut seen = HashSet::new();
        for spec in BUILTINS {
            for name in std::iter::once(&spec.name).chain(spec.aliases.iter()) {
                assert!(seen.insert(*name), "duplicate command name '{}'", name);
            }
        }
    }

    #[test]
    fn test_every_alias_resolves_to_canonical_name() {
        for spec in BUILTINS {
            let canonical = classify(spec.name);
            for alias in spec.aliases {
                assert_eq!(classify(alias), canonical, "alias '{}'", alias);
            }
        }
        assert_eq!(classify("b"), Route::Proxied("build"));
        assert_eq!(classify("st"), Route::Proxied("stop"));
        assert_eq!(classify("s"), Route::Proxied("start"));
    }

    #[test]
    fn test_special_routes() {
        assert_eq!(classify("up"), Route::SpecialUp);
        assert_eq!(classify("u"), Route::SpecialUp);
        assert_eq!(classify("support-services"), Route::SupportServices);
        assert_eq!(classify("ss"), Route::SupportServices);
        assert_eq!(classify("run"), Route::Local);
        assert_eq!(classify("U"), Route::Update);
        assert_eq!(classify("init-dns"), Route::InitDns);
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        assert_eq!(classify("foo"), Route::Unknown);
        assert_eq!(classify("BUILD"), Route::Unknown);
        // `U` is update, `u` is up.
        assert_ne!(classify("U"), classify("u"));
    }

    #[test]
    fn test_commands_help_hides_init_dns() {
        let help = commands_help();
        assert!(help.contains("support-services, ss"));
        assert!(help.contains("build, b"));
        assert!(!help.contains("init-dns"));
    }
}
