//! # Dev CLI Setup Integration Tests
//!
//! File: cli/tests/setup.rs
//!
//! ## Overview
//!
//! Integration tests for the host setup commands. `init-dns` is pointed at a
//! temporary resolver directory through `config.toml`, so no root access is
//! needed. `update` is not exercised here since it installs real software;
//! its step ordering is covered by unit tests with fake collaborators.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_dns_writes_configured_resolver_file() {
    let env = TestEnv::new();
    let resolver = tempdir().unwrap();
    let resolver_dir = resolver.path().join("resolver");
    env.write_config(&format!(
        "[resolver]\ndirectory = \"{}\"\nnameserver = \"127.0.0.1\"\n",
        path_str(&resolver_dir)
    ));

    env.cmd()
        .arg("init-dns")
        .assert()
        .success()
        .stdout(predicate::str::contains("DNS resolver configured"));

    let content = fs::read_to_string(resolver_dir.join("dev")).unwrap();
    assert_eq!(content, "nameserver 127.0.0.1\n");
    // init-dns skips the bootstrap step.
    assert!(!env.support_services_file().exists());
}

#[test]
fn test_init_dns_failure_is_reported() {
    let env = TestEnv::new();
    let blocker = tempdir().unwrap();
    let not_a_dir = blocker.path().join("file");
    fs::write(&not_a_dir, "").unwrap();
    env.write_config(&format!(
        "[resolver]\ndirectory = \"{}\"\n",
        path_str(&not_a_dir)
    ));

    env.cmd()
        .arg("init-dns")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to initialize DNS"));
}
