use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const TABLE_YAML: &str = r#"
hand_size: 10
global_cards: "wild, skip"
players:
  - name: "Alex"
    known_hand: "red 5, blue 12"
    discarded: "green 7"
  - unknown: 5
"#;

fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("table.yaml");
    fs::write(&path, TABLE_YAML).expect("config written");
    path
}

#[test]
fn renders_deck_summary_and_rankings() {
    let dir = tempdir().expect("temp dir");
    let path = write_config(&dir);

    Command::cargo_bin("cardtally")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        // 104 cards minus the five observed ones
        .stdout(predicate::str::contains("Remaining deck (99 cards):"))
        .stdout(predicate::str::contains("  Wild: 7"))
        .stdout(predicate::str::contains("Alex (8 unknown):"))
        .stdout(predicate::str::contains("Player 2 (5 unknown):"));
}

#[test]
fn json_mode_emits_full_report() {
    let dir = tempdir().expect("temp dir");
    let path = write_config(&dir);

    Command::cargo_bin("cardtally")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remaining_total\": 99"))
        .stdout(predicate::str::contains("\"name\": \"Alex\""));
}

#[test]
fn validate_only_skips_computation() {
    let dir = tempdir().expect("temp dir");
    let path = write_config(&dir);

    Command::cargo_bin("cardtally")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .arg("--validate-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid (2 players)"))
        .stdout(predicate::str::contains("Remaining deck").not());
}

#[test]
fn invalid_config_fails_with_field_context() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("table.yaml");
    fs::write(&path, "players: []\n").expect("config written");

    Command::cargo_bin("cardtally")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one player is required"));
}

#[test]
fn missing_config_fails() {
    let dir = tempdir().expect("temp dir");

    Command::cargo_bin("cardtally")
        .expect("binary built")
        .arg("--config")
        .arg(dir.path().join("nope.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read table config"));
}
