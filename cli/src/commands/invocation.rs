//! # Dev Invocation Splitting
//!
//! File: cli/src/commands/invocation.rs
//!
//! ## Overview
//!
//! Splits the raw process arguments into the three parts every command
//! handler works with:
//!
//! ```text
//! dev [-v] <command> [args...] [-- additional...]
//!          ^^^^^^^^^ ^^^^^^^^^     ^^^^^^^^^^^^^
//!          command   args          additional
//! ```
//!
//! The additional arguments are peeled off *before* clap sees the command
//! line, so nothing after `--` is ever interpreted by `dev`. They are
//! re-appended, unmodified and last, to whatever external command ends up
//! running.
//!

/// Separator between the routed arguments and the additional arguments.
const ADDITIONAL_ARGS_SEPARATOR: &str = "--";

/// A parsed command line: primary command, its arguments, and the deferred
/// additional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    command: Option<String>,
    args: Vec<String>,
    additional: Vec<String>,
}

impl Invocation {
    /// Splits raw argv (program name included) at the first `--` that
    /// follows the program name. Returns the head, still including the
    /// program name, and the additional arguments without the separator.
    pub fn split_additional(mut argv: Vec<String>) -> (Vec<String>, Vec<String>) {
        let separator = argv
            .iter()
            .skip(1)
            .position(|arg| arg == ADDITIONAL_ARGS_SEPARATOR)
            .map(|index| index + 1);
        match separator {
            Some(index) => {
                let additional = argv.split_off(index + 1);
                argv.truncate(index);
                (argv, additional)
            }
            None => (argv, Vec::new()),
        }
    }

    /// Builds an invocation from the positional tokens clap collected
    /// (command first) and the previously split additional arguments.
    pub fn new(positional: Vec<String>, additional: Vec<String>) -> Self {
        let mut positional = positional.into_iter();
        let command = positional.next();
        Self {
            command,
            args: positional.collect(),
            additional,
        }
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Arguments that followed the command, before any `--`.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments after `--`, appended last to every external command.
    pub fn additional(&self) -> &[String] {
        &self.additional
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_without_separator() {
        let (head, additional) =
            Invocation::split_additional(strings(&["dev", "up", "foo", "--verbose"]));
        assert_eq!(head, strings(&["dev", "up", "foo", "--verbose"]));
        assert!(additional.is_empty());
    }

    #[test]
    fn test_split_at_first_separator_only() {
        let (head, additional) =
            Invocation::split_additional(strings(&["dev", "logs", "web", "--", "-f", "--", "x"]));
        assert_eq!(head, strings(&["dev", "logs", "web"]));
        assert_eq!(additional, strings(&["-f", "--", "x"]));
    }

    #[test]
    fn test_split_separator_with_nothing_after() {
        let (head, additional) = Invocation::split_additional(strings(&["dev", "ps", "--"]));
        assert_eq!(head, strings(&["dev", "ps"]));
        assert!(additional.is_empty());
    }

    #[test]
    fn test_split_program_name_never_treated_as_separator() {
        let (head, additional) = Invocation::split_additional(strings(&["--", "ps"]));
        assert_eq!(head, strings(&["--", "ps"]));
        assert!(additional.is_empty());
    }

    #[test]
    fn test_new_separates_command_and_args() {
        let invocation = Invocation::new(strings(&["ss", "stop", "nginx"]), strings(&["-t", "1"]));
        assert_eq!(invocation.command(), Some("ss"));
        assert_eq!(invocation.args(), &strings(&["stop", "nginx"])[..]);
        assert_eq!(invocation.additional(), &strings(&["-t", "1"])[..]);
    }

    #[test]
    fn test_new_without_command() {
        let invocation = Invocation::new(Vec::new(), Vec::new());
        assert_eq!(invocation.command(), None);
        assert!(invocation.args().is_empty());
    }
}
