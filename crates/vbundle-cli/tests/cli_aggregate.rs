use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn vbundle_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vbundle").unwrap();
    cmd.env_remove("VBUNDLE_CONFIG");
    cmd
}

const CLOUD_CONFIG: &str = r#"[
  {
    "changelogs": [{"component": "kubernetes", "description": "Kubernetes version updated.", "kind": "changed"}],
    "components": [{"name": "etcd", "version": "3.2.0"}, {"name": "kubernetes", "version": "1.7.1"}],
    "dependency": [],
    "deprecated": false,
    "name": "cloud-config-operator",
    "time": "2017-09-18T10:00:00Z",
    "version": "0.2.0",
    "wip": false
  },
  {
    "changelogs": [{"component": "kubernetes", "description": "Kubernetes version updated.", "kind": "changed"}],
    "components": [{"name": "etcd", "version": "3.2.0"}, {"name": "kubernetes", "version": "1.8.1"}],
    "dependency": [],
    "deprecated": false,
    "name": "cloud-config-operator",
    "time": "2017-10-02T10:00:00Z",
    "version": "0.3.0",
    "wip": true
  }
]"#;

const KUBERNETES_OPERATOR: &str = r#"
changelogs:
  - component: calico
    description: Calico version updated.
    kind: changed
components:
  - name: calico
    version: 1.1.0
dependency:
  - name: kubernetes
    version: "<= 1.8.x"
deprecated: false
name: kubernetes-operator
time: "2017-09-20T10:00:00Z"
version: 0.1.0
wip: false
"#;

fn write_fixture(dir: &Path) {
    fs::write(dir.join("cloud-config-operator.json"), CLOUD_CONFIG).unwrap();
    fs::write(dir.join("kubernetes-operator.yaml"), KUBERNETES_OPERATOR).unwrap();
}

#[test]
fn test_aggregate_text() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["aggregate", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 1:"))
        .stdout(predicate::str::contains("cloud-config-operator 0.2.0"))
        .stdout(predicate::str::contains("Group 2:").not());
}

#[test]
fn test_aggregate_include_wip() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["aggregate", ".", "--include-wip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 2:"))
        .stdout(predicate::str::contains("cloud-config-operator 0.3.0 (wip)"));
}

#[test]
fn test_aggregate_json() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["aggregate", ".", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dependency\""))
        .stdout(predicate::str::contains("\"kubernetes-operator\""));
}

#[test]
fn test_aggregate_unknown_format_fails() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["aggregate", ".", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn test_aggregate_reads_config_paths() {
    let tmp = TempDir::new().unwrap();
    let defs = tmp.path().join("bundles");
    fs::create_dir(&defs).unwrap();
    write_fixture(&defs);
    fs::write(
        tmp.path().join("Vbundle.toml"),
        "[bundles]\npaths = [\"bundles\"]\ninclude-wip = true\n",
    )
    .unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["aggregate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 2:"));
}

#[test]
fn test_aggregate_invalid_bundle_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("broken.json"),
        r#"{"name": "broken-operator", "version": "1.2.3.4"}"#,
    )
    .unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["aggregate", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bundle"));
}

#[test]
fn test_aggregate_without_compatible_groups() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());
    let strict = KUBERNETES_OPERATOR.replace("<= 1.8.x", "== 2.0.0");
    fs::write(tmp.path().join("kubernetes-operator.yaml"), strict).unwrap();

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["aggregate", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("No compatible groups."));

    vbundle_cmd()
        .current_dir(tmp.path())
        .args(["explain", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "kubernetes-operator@0.1.0 requires kubernetes == 2.0.0 but cloud-config-operator@0.2.0 provides 1.7.1",
        ));
}
