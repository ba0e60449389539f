//! Smoke tests for the gridcrit binary.

use assert_cmd::Command;
use gridcrit::table::{resolve_encoding, Table};

#[test]
fn score_command_scores_the_given_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("criticality.csv");

    let encoding = resolve_encoding("latin-1").unwrap();
    let text = "Übertragungsleistung Bezug;Einwohner;NKB;Infrastruktur;Gewerbe\n\
                200;300;0.6;3;15\n\
                50;100;0;0;2\n";
    let (bytes, _, _) = encoding.encode(text);
    std::fs::write(&path, bytes).unwrap();

    let output = Command::cargo_bin("gridcrit")
        .unwrap()
        .current_dir(dir.path())
        .arg("score")
        .arg("criticality.csv")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Results saved as new columns in: criticality.csv"));

    let table = Table::read(&path, b';', encoding).unwrap();
    let index = table.require_column("II_N").unwrap();
    assert_eq!(table.cell(0, index), "1");
    assert_eq!(table.cell(1, index), "0");
}

#[test]
fn score_command_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::cargo_bin("gridcrit")
        .unwrap()
        .current_dir(dir.path())
        .arg("score")
        .arg("does-not-exist.csv")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn init_command_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("gridcrit")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join(".gridcrit.toml").exists());

    // a second init without --force refuses to overwrite
    let output = Command::cargo_bin("gridcrit")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let output = Command::cargo_bin("gridcrit")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn init_config_round_trips_through_the_loader() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gridcrit")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .output()
        .unwrap();

    let contents = std::fs::read_to_string(dir.path().join(".gridcrit.toml")).unwrap();
    let config = gridcrit::config::loader::parse_and_validate_config(&contents).unwrap();

    let weights = config.weights.unwrap();
    assert_eq!(weights, gridcrit::IndexWeights::default());
    let thresholds = config.thresholds.unwrap();
    assert_eq!(thresholds, gridcrit::ClassificationThresholds::default());
    let columns = config.columns.unwrap();
    assert_eq!(columns.power_draw, "Übertragungsleistung Bezug");
}
