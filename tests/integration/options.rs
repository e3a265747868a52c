// tests/integration/options.rs
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{CONNECTOR_TEMPLATE, ConnectorRepo};

#[test]
fn explicit_file_overrides_default_location() {
    let repo = ConnectorRepo::template();
    let other = repo.write("custom/Other.pq", "x\n[Version = \"3.0.0\"]\n");

    repo.command()
        .args(["--file", "custom/Other.pq", "5.6.7"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(other).unwrap(),
        "x\n[Version = \"5.6.7\"]\n"
    );
    assert_eq!(repo.read_connector(), CONNECTOR_TEMPLATE);
}

#[test]
fn base_dir_locates_the_default_connector() {
    let repo = ConnectorRepo::template();
    let elsewhere = tempfile::tempdir().unwrap();

    assert_cmd::Command::new(env!("CARGO_BIN_EXE_patch_version"))
        .env_remove("RUST_LOG")
        .current_dir(elsewhere.path())
        .arg("-C")
        .arg(repo.root())
        .arg("1.0.0")
        .assert()
        .success();

    assert!(repo.read_connector().contains(r#"[Version = "1.0.0"]"#));
}

#[test]
fn custom_placeholder_is_matched() {
    let repo = ConnectorRepo::new("[Version = \"0.0.0-dev\"]\n");

    repo.command()
        .args(["--placeholder", "0.0.0-dev", "2.1.0"])
        .assert()
        .success();

    assert_eq!(repo.read_connector(), "[Version = \"2.1.0\"]\n");
}

#[test]
fn require_match_fails_when_marker_absent() {
    let content = "section Speckle;\n";
    let repo = ConnectorRepo::new(content);

    repo.command()
        .args(["--require-match", "1.2.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No version marker found"));

    assert_eq!(repo.read_connector(), content);
}

#[test]
fn dry_run_does_not_write() {
    let repo = ConnectorRepo::template();

    repo.command()
        .args(["--dry-run", "1.2.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would patch connector version number"));

    assert_eq!(repo.read_connector(), CONNECTOR_TEMPLATE);
}

#[test]
fn json_format_prints_a_report() {
    let repo = ConnectorRepo::template();

    let output = repo
        .command()
        .args(["--format", "json", "v1.2.3-rc.1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tag"], "v1.2.3-rc.1");
    assert_eq!(report["version"], "1.2.3");
    assert_eq!(report["outcome"]["status"], "patched");
    assert_eq!(report["outcome"]["line"], 3);
    assert_eq!(report["written"], true);
}

#[test]
fn verbose_logs_the_replaced_line() {
    let repo = ConnectorRepo::template();

    repo.command()
        .args(["-v", "1.2.3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO]"))
        .stderr(predicate::str::contains(r#"[Version = "3.0.0"] -> 1.2.3"#));
}

#[test]
fn quiet_hides_the_missing_marker_warning() {
    let repo = ConnectorRepo::new("section Speckle;\n");

    repo.command()
        .args(["-q", "1.2.3"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
