//! CLI smoke tests over the built binary.

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn profile_json() -> &'static str {
    r#"{
        "name": "Test",
        "gender": "Male",
        "age": 50,
        "weight": 90,
        "height": 170,
        "waist": 110,
        "steps": 3000,
        "junkFood": 5,
        "exercise": 1,
        "alcohol": 20,
        "smoking": 1,
        "sleep": 5,
        "stress": 3,
        "familyHistory": 1,
        "highBp": true,
        "diabetes": true,
        "cholesterol": 260
    }"#
}

fn heartcheck() -> Command {
    let mut cmd = Command::cargo_bin("heartcheck").unwrap();
    cmd.env_remove("HEARTCHECK_USER");
    cmd
}

#[test]
fn assess_emits_json_with_clamped_score() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("profile.json");
    std::fs::write(&profile, profile_json()).unwrap();

    let output = heartcheck()
        .args(["assess", "--format", "json", "--seed", "1"])
        .arg(&profile)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["assessment"]["totalScore"], 60);
    assert_eq!(report["assessment"]["level"], "High");
    let percent = report["simulatedPercent"].as_f64().unwrap();
    assert!((1.0..=95.0).contains(&percent));
}

#[test]
fn assess_saves_and_history_shows_trend() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let profile = dir.path().join("profile.json");
    std::fs::write(&profile, profile_json()).unwrap();

    for _ in 0..2 {
        heartcheck()
            .args(["assess", "--format", "json", "--user", "tester"])
            .arg(&profile)
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    let output = heartcheck()
        .args(["history", "--user", "tester", "--format", "json"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let view: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(view["total"], 2);
    assert_eq!(view["records"].as_array().unwrap().len(), 2);
    // Same profile twice: identical scores, stable trend.
    assert_eq!(view["trend"]["direction"], "Stable");
    assert_eq!(view["trend"]["magnitude"], 0);
}

#[test]
fn invalid_age_fails_naming_the_field() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("profile.json");
    std::fs::write(
        &profile,
        r#"{"age": 150, "weight": 80, "height": 180, "waist": 90}"#,
    )
    .unwrap();

    let output = heartcheck().arg("assess").arg(&profile).assert().failure();
    let stderr = String::from_utf8(output.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("age must be between 1 and 120"));
}

#[test]
fn purge_refuses_without_confirmation() {
    let dir = TempDir::new().unwrap();
    let output = heartcheck()
        .args(["purge", "--user", "tester"])
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure();
    let stderr = String::from_utf8(output.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("--yes"));
}

#[test]
fn purge_with_confirmation_reports_count() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let profile = dir.path().join("profile.json");
    std::fs::write(&profile, profile_json()).unwrap();

    heartcheck()
        .args(["assess", "--format", "json", "--user", "tester"])
        .arg(&profile)
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    let output = heartcheck()
        .args(["purge", "--user", "tester", "--yes"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Deleted 1 records"));
}

#[test]
fn export_produces_a_complete_document() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let profile = dir.path().join("profile.json");
    std::fs::write(&profile, profile_json()).unwrap();

    heartcheck()
        .args(["assess", "--format", "json", "--user", "tester"])
        .arg(&profile)
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    let output = heartcheck()
        .args(["export", "--user", "tester"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(doc["userId"], "tester");
    assert_eq!(doc["recordCount"], 1);
    assert_eq!(doc["records"][0]["score"], 60);
}
