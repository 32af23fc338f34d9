use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Write a spec file into a unique temp path
fn write_spec(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("trellis-test-{}-{}.json", name, std::process::id()));
    let mut file = std::fs::File::create(&path).expect("Failed to create temp spec");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp spec");
    path
}

#[test]
fn test_help_command() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Declarative container network reconciler"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_version_command() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}

#[test]
fn test_invalid_command() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_apply_without_spec() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("apply")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_apply_missing_spec_file() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("apply")
        .arg("--spec")
        .arg("/nonexistent/spec.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read spec file"));
}

#[test]
fn test_apply_bad_ensure_fails_before_engine() {
    // No engine is installed in the test environment; a bad ensure value
    // must fail at parse time, before any engine invocation
    let path = write_spec("bad-ensure", r#"{"name": "mnet", "ensure": "latest"}"#);

    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("apply")
        .arg("--spec")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid network spec"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_apply_bad_name_fails_before_engine() {
    let path = write_spec("bad-name", r#"{"name": "bad name!"}"#);

    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("apply")
        .arg("--spec")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid network spec"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_apply_unreachable_engine_binary() {
    let path = write_spec("no-engine", r#"{"name": "mnet"}"#);

    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("--engine")
        .arg("/nonexistent/engine")
        .arg("apply")
        .arg("--spec")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_remove_without_name() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("remove")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_remove_invalid_name() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("remove")
        .arg("bad name!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid network name"));
}

#[test]
fn test_status_without_name() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_apply_help() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("apply")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reconcile a network"))
        .stdout(predicate::str::contains("--spec"));
}

#[test]
#[ignore] // Requires a working podman installation
fn test_status_against_real_engine() {
    Command::new(env!("CARGO_BIN_EXE_trellis"))
        .arg("status")
        .arg("trellis-no-such-network")
        .assert()
        .failure()
        .stdout(predicate::str::contains("absent"));
}
