//! # Dev CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Each test gets its own
//! `TestEnv`: a temporary `HOME` (so `~/.dev` is isolated) and a temporary
//! `bin` directory placed first on `PATH`, where tests install small shell
//! scripts standing in for `docker-compose` and `dev-*` plugins. The
//! recorder scripts print `[<name>] <args>` so tests can assert on the exact
//! argument vector `dev` forwarded.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `dev` binary.
pub fn dev_cmd() -> Command {
    Command::cargo_bin("dev").expect("Failed to find dev binary for testing")
}

/// Isolated HOME and PATH for one test.
pub struct TestEnv {
    pub home: TempDir,
    pub bin: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create temp HOME"),
            bin: TempDir::new().expect("Failed to create temp bin dir"),
        }
    }

    /// `dev` command running with this environment's HOME and PATH.
    pub fn cmd(&self) -> Command {
        let mut cmd = dev_cmd();
        cmd.env("HOME", self.home.path())
            .env("PATH", self.path_var())
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join(".dev")
    }

    pub fn support_services_file(&self) -> PathBuf {
        self.config_dir().join("support_services.yml")
    }

    /// Writes `~/.dev/config.toml`.
    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.config_dir()).expect("Failed to create config dir");
        fs::write(self.config_dir().join("config.toml"), content).expect("Failed to write config");
    }

    /// Installs a fake executable that prints `[<name>] <args>` and exits 0.
    #[cfg(unix)]
    pub fn install_recorder(&self, name: &str) {
        self.install_script(name, &format!("echo \"[{}] $*\"", name));
    }

    /// Installs `#!/bin/sh` + `body` as an executable named `name`.
    #[cfg(unix)]
    pub fn install_script(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
    }

    fn path_var(&self) -> OsString {
        let inherited = std::env::var_os("PATH").unwrap_or_default();
        let dirs = std::iter::once(self.bin.path().to_path_buf())
            .chain(std::env::split_paths(&inherited));
        std::env::join_paths(dirs).expect("Failed to build PATH")
    }
}

/// Position of `needle` in `haystack`, panicking with context when absent.
pub fn position_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in output:\n{}", needle, haystack))
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
