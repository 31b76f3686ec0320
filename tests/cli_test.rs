// tests/cli_test.rs
use std::process::Command;

use serial_test::serial;

// The cargo invocations share the build lock, so keep them serial.

#[test]
#[serial]
fn test_release_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release"));
    assert!(stdout.contains("version"));
    assert!(stdout.contains("publish"));
}

#[test]
#[serial]
fn test_release_version_rejects_unknown_kind() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("CHANGELOG.md"), "## Unreleased\n- note\n").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--bin", "release", "--"])
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["version", "hotfix"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid argument"));
}

#[test]
#[serial]
fn test_release_fails_outside_git_repository() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("CHANGELOG.md"), "## Unreleased\n- note\n").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--bin", "release", "--"])
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["version", "patch"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
