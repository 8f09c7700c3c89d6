use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn vbundle_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vbundle").unwrap();
    cmd.env_remove("VBUNDLE_CONFIG").env_remove("VBUNDLE_GIT_COMMIT");
    cmd
}

const BUNDLE: &str = r#"{
  "changelogs": [{"component": "etcd", "description": "Etcd version updated.", "kind": "changed"}],
  "components": [{"name": "etcd", "version": "3.2.0"}],
  "dependency": [],
  "deprecated": false,
  "name": "api",
  "time": "2017-09-18T10:00:00Z",
  "version": "0.2.0",
  "wip": false
}"#;

#[test]
fn test_validate_success() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("api.json"), BUNDLE).unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["validate", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("api (1 bundle(s), 0 deprecated, 0 wip)"));
}

#[test]
fn test_validate_all_deprecated_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("api.json"),
        BUNDLE.replace("\"deprecated\": false", "\"deprecated\": true"),
    )
    .unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["validate", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one bundle must not be deprecated"));
}

#[test]
fn test_list() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("api.json"), BUNDLE).unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["list", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("api (1)"))
        .stdout(predicate::str::contains("0.2.0"));
}

#[test]
fn test_health() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("api.json"), BUNDLE).unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["health", "."])
        .assert()
        .success();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["health", "missing-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Health check failed"));
}

#[test]
fn test_version_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("api.json"), BUNDLE).unwrap();
    fs::write(
        tmp.path().join("Vbundle.toml"),
        r#"
[service]
name = "api"
description = "test desc"
source = "microkit"
git-commit = "b6bf741b5c34be4fff51d944f973318d8b078284"
"#,
    )
    .unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["version", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"git_commit\": \"b6bf741b5c34be4fff51d944f973318d8b078284\"",
        ))
        .stdout(predicate::str::contains("\"version_bundles\""))
        .stdout(predicate::str::contains("\"os_arch\""));
}

#[test]
fn test_version_git_commit_from_env() {
    let tmp = TempDir::new().unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .env("VBUNDLE_GIT_COMMIT", "c0ffee")
        .args(["version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c0ffee"));
}

#[test]
fn test_help_lists_commands() {
    vbundle_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("aggregate"))
        .stdout(predicate::str::contains("explain"));
}
