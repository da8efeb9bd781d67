#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const REGISTRY: &str = "\
plasma_current:
  documentation: docs
  units: A
  links:
  - https://example.org/issues/5
electron_temperature:
  documentation: docs
  units: eV
";

const GENERIC_NAMES: &str = "\
Unit,Generic Name
m^2,area
A,current
J,energy
";

fn stdnames_cmd() -> Command {
    Command::new(cargo_bin("stdnames"))
}

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("standardnames.yaml");
    let generic = temp.path().join("generic_names.csv");
    fs::write(&registry, REGISTRY).unwrap();
    fs::write(&generic, GENERIC_NAMES).unwrap();
    (temp, registry, generic)
}

fn write_submission(temp: &TempDir, payload: serde_json::Value) -> PathBuf {
    let path = temp.path().join("submission.json");
    fs::write(&path, payload.to_string()).unwrap();
    path
}

#[test]
fn test_update_accepts_valid_submission() {
    let (temp, registry, generic) = setup();
    let submission = write_submission(
        &temp,
        serde_json::json!({
            "name": "ion_temperature",
            "documentation": "multi-line\ndoc string",
            "units": "A",
            "tags": "",
            "options": [],
        }),
    );

    stdnames_cmd()
        .arg("update")
        .args([&registry, &generic, &submission])
        .args(["--issue-link", "https://example.org/issues/9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready for submission"))
        .stdout(predicate::str::contains("ion_temperature"));

    // the issue link was appended and the entry persisted
    let saved = fs::read_to_string(&registry).unwrap();
    assert!(saved.contains("ion_temperature"));
    assert!(saved.contains("https://example.org/issues/9"));
}

#[test]
fn test_update_duplicate_prints_error_banner_and_leaves_file_untouched() {
    let (temp, registry, generic) = setup();
    let submission = write_submission(
        &temp,
        serde_json::json!({
            "name": "plasma_current",
            "documentation": "docs",
            "units": "A",
        }),
    );
    let before = fs::read_to_string(&registry).unwrap();

    stdnames_cmd()
        .arg("update")
        .args([&registry, &generic, &submission])
        .assert()
        .success()
        .stdout(predicate::str::contains(":boom:"))
        .stdout(predicate::str::contains("**KeyError**"))
        .stdout(predicate::str::contains("overwrite"));

    assert_eq!(fs::read_to_string(&registry).unwrap(), before);
}

#[test]
fn test_update_overwrite_concatenates_links() {
    let (temp, registry, generic) = setup();
    let submission = write_submission(
        &temp,
        serde_json::json!({
            "name": "plasma_current",
            "documentation": "updated docs",
            "units": "A",
            "links": "https://example.org/issues/7",
        }),
    );

    stdnames_cmd()
        .arg("update")
        .args([&registry, &generic, &submission])
        .arg("--overwrite")
        .assert()
        .success()
        .stdout(predicate::str::contains("ready for submission"));

    let saved = fs::read_to_string(&registry).unwrap();
    let five = saved.find("issues/5").unwrap();
    let seven = saved.find("issues/7").unwrap();
    assert!(five < seven, "existing links must come first:\n{saved}");
}

#[test]
fn test_update_overwrite_option_in_submission() {
    let (temp, registry, generic) = setup();
    let submission = write_submission(
        &temp,
        serde_json::json!({
            "name": "plasma_current",
            "documentation": "updated docs",
            "units": "A",
            "options": ["overwrite"],
        }),
    );

    stdnames_cmd()
        .arg("update")
        .args([&registry, &generic, &submission])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready for submission"));

    assert!(fs::read_to_string(&registry).unwrap().contains("updated docs"));
}

#[test]
fn test_update_generic_name_is_rejected() {
    let (temp, registry, generic) = setup();
    let submission = write_submission(
        &temp,
        serde_json::json!({
            "name": "area",
            "documentation": "docs",
            "units": "m^2",
        }),
    );
    let before = fs::read_to_string(&registry).unwrap();

    stdnames_cmd()
        .arg("update")
        .args([&registry, &generic, &submission])
        .assert()
        .success()
        .stdout(predicate::str::contains("**NameConflict**"))
        .stdout(predicate::str::contains("Please propose a different name"));

    assert_eq!(fs::read_to_string(&registry).unwrap(), before);
}

#[test]
fn test_update_invalid_name_echoes_submission() {
    let (temp, registry, generic) = setup();
    let submission = write_submission(
        &temp,
        serde_json::json!({
            "name": "Ion Temperature",
            "documentation": "docs",
        }),
    );

    stdnames_cmd()
        .arg("update")
        .args([&registry, &generic, &submission])
        .assert()
        .success()
        .stdout(predicate::str::contains("**NameError**"))
        .stdout(predicate::str::contains("name: Ion Temperature"));
}

#[test]
fn test_update_missing_generic_names_file_is_an_error() {
    let (temp, registry, _generic) = setup();
    let submission = write_submission(
        &temp,
        serde_json::json!({
            "name": "ion_temperature",
            "documentation": "docs",
        }),
    );

    stdnames_cmd()
        .arg("update")
        .args([&registry, &temp.path().join("no_such.csv"), &submission])
        .assert()
        .failure()
        .stderr(predicate::str::contains("generic names"));
}

#[test]
fn test_has_prints_membership() {
    let (_temp, registry, _generic) = setup();

    stdnames_cmd()
        .arg("has")
        .arg(&registry)
        .arg("plasma_current")
        .assert()
        .success()
        .stdout("true\n");

    stdnames_cmd()
        .arg("has")
        .arg(&registry)
        .args(["plasma", "current"]) // words join with spaces, so no match
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_get_prints_entry_yaml() {
    let (_temp, registry, _generic) = setup();

    stdnames_cmd()
        .arg("get")
        .arg(&registry)
        .arg("electron_temperature")
        .assert()
        .success()
        .stdout(predicate::str::contains("electron_temperature:"))
        .stdout(predicate::str::contains("units: eV"));
}

#[test]
fn test_get_unit_format_override() {
    let (_temp, registry, _generic) = setup();

    stdnames_cmd()
        .arg("get")
        .arg(&registry)
        .arg("electron_temperature")
        .args(["--unit-format", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("units: electron_volt"));
}

#[test]
fn test_get_missing_entry_prints_key_error() {
    let (_temp, registry, _generic) = setup();

    stdnames_cmd()
        .arg("get")
        .arg(&registry)
        .arg("no_such_name")
        .assert()
        .success()
        .stdout(predicate::str::contains("**KeyError**"));
}

#[test]
fn test_is_generic_prints_membership() {
    let (_temp, _registry, generic) = setup();

    stdnames_cmd()
        .arg("is-generic")
        .arg(&generic)
        .arg("area")
        .assert()
        .success()
        .stdout("true\n");

    stdnames_cmd()
        .arg("is-generic")
        .arg(&generic)
        .arg("plasma_current")
        .assert()
        .success()
        .stdout("false\n");
}
