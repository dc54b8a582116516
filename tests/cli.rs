//! End-to-end tests for the `ice-planner` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SEASON_LINK: &str =
    "/ice-planner?team=Wolves&ice=150&hours=10&coach=500&jersey=40&players=15&fee=2&fixed=0.99";

fn planner(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ice-planner").unwrap();
    cmd.env("ICE_PLANNER_DATA_DIR", data_dir.path())
        .env_remove("ICE_PLANNER_LINK")
        .env_remove("ICE_PLANNER_LOG");
    cmd
}

#[test]
fn show_defaults_on_first_run() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bandits - Ice Program Planner"))
        .stdout(predicate::str::contains("Total Season Cost"))
        .stdout(predicate::str::contains("Link: /ice-planner?team=Bandits"));
}

#[test]
fn season_breakdown_from_link() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .args(["--link", SEASON_LINK, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wolves - Ice Program Planner"))
        .stdout(predicate::str::contains("$1,500"))
        .stdout(predicate::str::contains("$52.99"))
        .stdout(predicate::str::contains("$2,652.99"))
        .stdout(predicate::str::contains("$177"));
}

#[test]
fn edits_persist_between_runs() {
    let dir = TempDir::new().unwrap();

    planner(&dir).args(["set", "ice", "200"]).assert().success();
    planner(&dir).args(["set", "hours", "5"]).assert().success();
    planner(&dir).args(["set", "team", "Ice Cats"]).assert().success();

    planner(&dir)
        .arg("link")
        .assert()
        .success()
        .stdout(predicate::str::contains("team=Ice+Cats"))
        .stdout(predicate::str::contains("ice=200"))
        .stdout(predicate::str::contains("hours=5"));
}

#[test]
fn negative_input_is_floored() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .args(["set", "players", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("players=0"));
}

#[test]
fn unknown_field_fails() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .args(["set", "zamboni", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field: zamboni"));
}

#[test]
fn reset_restores_fee_defaults() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .args(["--link", SEASON_LINK, "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planner reset to defaults."))
        .stdout(predicate::str::contains("fee=2&fixed=0.99"))
        .stdout(predicate::str::contains("team=Bandits"));
}

#[test]
fn share_falls_back_to_manual_copy() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .args(["--link", SEASON_LINK, "share"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Copy this URL: /ice-planner?team=Wolves",
        ));
}

#[test]
fn export_then_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("season.json");

    planner(&dir)
        .args(["--link", SEASON_LINK, "export", "--format", "json", "--output"])
        .arg(&export_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&export_path).unwrap();
    assert!(contents.contains("\"iceRate\""));
    assert!(contents.contains("\"team\": \"Wolves\""));

    planner(&dir).arg("reset").assert().success();
    planner(&dir).arg("import").arg(&export_path).assert().success();

    planner(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wolves - Ice Program Planner"))
        .stdout(predicate::str::contains("$2,652.99"));
}

#[test]
fn csv_export_to_stdout() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .args(["--link", SEASON_LINK, "export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("section,field,value"))
        .stdout(predicate::str::contains("input,team,Wolves"));
}

#[test]
fn config_lists_paths() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ice Planner Configuration"))
        .stdout(predicate::str::contains("Storage key:     ice-planner-state"));

    assert!(dir.path().join("config.json").exists());
}
