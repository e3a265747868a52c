// tests/integration/end_to_end.rs
use std::fs;

use predicates::prelude::*;

use crate::common::{CONNECTOR_TEMPLATE, ConnectorRepo};

#[test]
fn no_arguments_is_a_silent_no_op() {
    // No connector file at all: the command must not even look for it.
    let dir = tempfile::tempdir().unwrap();
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_patch_version"))
        .env_remove("RUST_LOG")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn patches_the_default_connector() {
    let repo = ConnectorRepo::template();

    repo.command()
        .arg("v1.2.3-beta.4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Patching version: v1.2.3-beta.4"))
        .stdout(predicate::str::contains(
            "Patched connector version number in",
        ))
        .stdout(predicate::str::contains("Speckle.pq"));

    assert_eq!(
        repo.read_connector(),
        CONNECTOR_TEMPLATE.replace(r#"[Version = "3.0.0"]"#, r#"[Version = "1.2.3"]"#)
    );
}

#[test]
fn invalid_tag_fails_and_leaves_file_untouched() {
    let repo = ConnectorRepo::template();

    repo.command()
        .arg("not-a-version")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid tag provided: not-a-version"));

    assert_eq!(repo.read_connector(), CONNECTOR_TEMPLATE);
}

#[test]
fn error_line_names_each_cause_once() {
    let repo = ConnectorRepo::template();

    let output = repo.command().arg("not-a-version").output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.starts_with("Error: "));
    assert_eq!(stderr.matches("Invalid tag provided").count(), 1);
}

#[test]
fn two_part_tag_is_rejected() {
    let repo = ConnectorRepo::template();
    repo.command().arg("2024.08").assert().failure();
    assert_eq!(repo.read_connector(), CONNECTOR_TEMPLATE);
}

#[test]
fn missing_marker_succeeds_with_warning_only() {
    let content = "section Speckle;\n[Version = \"3.4.1\"]\n";
    let repo = ConnectorRepo::new(content);

    repo.command()
        .arg("1.2.3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Patching version: 1.2.3"))
        .stdout(predicate::str::contains("Patched connector").not())
        .stderr(predicate::str::contains("no version marker found"));

    assert_eq!(repo.read_connector(), content);
}

#[test]
fn second_run_with_same_tag_is_byte_identical() {
    let repo = ConnectorRepo::template();

    repo.command().args(["--any-version", "9.9.9"]).assert().success();
    let first = fs::read(repo.connector()).unwrap();
    repo.command().args(["--any-version", "9.9.9"]).assert().success();
    let second = fs::read(repo.connector()).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(second).unwrap().contains(r#"[Version = "9.9.9"]"#));
}

#[test]
fn missing_connector_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();

    assert_cmd::Command::new(env!("CARGO_BIN_EXE_patch_version"))
        .env_remove("RUST_LOG")
        .current_dir(dir.path())
        .arg("1.2.3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[cfg(unix)]
#[test]
fn read_only_connector_fails_and_is_left_untouched() {
    use std::os::unix::fs::PermissionsExt;

    let repo = ConnectorRepo::template();
    fs::set_permissions(repo.connector(), fs::Permissions::from_mode(0o444)).unwrap();
    if fs::OpenOptions::new()
        .write(true)
        .open(repo.connector())
        .is_ok()
    {
        // Running with privileges that ignore file modes.
        return;
    }

    repo.command()
        .arg("1.2.3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to write file"));

    assert_eq!(repo.read_connector(), CONNECTOR_TEMPLATE);
}

#[test]
fn crlf_connector_keeps_its_line_endings() {
    let content = "section Speckle;\r\n[Version = \"3.0.0\"]\r\nshared X = 1;\r\n";
    let repo = ConnectorRepo::new(content);

    repo.command().arg("4.5.6").assert().success();

    assert_eq!(
        repo.read_connector(),
        "section Speckle;\r\n[Version = \"4.5.6\"]\r\nshared X = 1;\r\n"
    );
}
