use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PORTFOLIO: &str = r#"[
  {"buildingId": "B1", "floor_area": 100, "construction_cost": 1000, "hazard_probability": 0.01, "inflation_rate": 0.02},
  {"buildingId": 2, "floor_area": 250.5, "construction_cost": 1800, "hazard_probability": 0.03, "inflation_rate": 0.015}
]"#;

fn workspace(data: &str) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    fs::write(tmp.path().join("data.json"), data).expect("write data.json");
    tmp
}

#[test]
fn projected_losses_reads_default_file() {
    let tmp = workspace(PORTFOLIO);
    cargo_bin_cmd!("projected_losses")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("Total Projected Loss: $199097.31\n");
}

#[test]
fn estimated_losses_reads_default_file() {
    let tmp = workspace(PORTFOLIO);
    cargo_bin_cmd!("estimated_losses")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(
            "Estimated Loss for $B1: $0.00\n\
             Estimated Loss for $2: $5742.96\n\
             Total Estimated Loss: $75562.45\n",
        );
}

#[test]
fn hazard_loss_runs_both_models() {
    let tmp = workspace(PORTFOLIO);
    cargo_bin_cmd!("hazard_loss")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(
            "Total Projected Loss: $199097.31\n\
             Estimated Loss for $B1: $0.00\n\
             Estimated Loss for $2: $5742.96\n\
             Total Estimated Loss: $75562.45\n",
        );
}

#[test]
fn hazard_loss_single_model() {
    let tmp = workspace(PORTFOLIO);
    cargo_bin_cmd!("hazard_loss")
        .current_dir(tmp.path())
        .args(["--model", "projected"])
        .assert()
        .success()
        .stdout("Total Projected Loss: $199097.31\n");
}

#[test]
fn explicit_data_path() {
    let tmp = workspace("[]");
    let other = tmp.path().join("portfolio.json");
    fs::write(&other, PORTFOLIO).unwrap();

    cargo_bin_cmd!("projected_losses")
        .arg("--data")
        .arg(&other)
        .assert()
        .success()
        .stdout(contains("$199097.31"));
}

#[test]
fn empty_portfolio_totals_zero() {
    let tmp = workspace("[]");
    cargo_bin_cmd!("hazard_loss")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("Total Projected Loss: $0.00\nTotal Estimated Loss: $0.00\n");
}

#[test]
fn json_summary() {
    let tmp = workspace(PORTFOLIO);
    let out = cargo_bin_cmd!("hazard_loss")
        .current_dir(tmp.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let summary: Value = serde_json::from_slice(&out).expect("valid json output");

    assert_eq!(summary["building_count"], 2);
    assert_eq!(summary["discount_rate"], 0.05);
    assert_eq!(summary["estimated"]["buildings"][0]["building_id"], "B1");
    let projected = summary["projected_total"].as_f64().unwrap();
    assert!((projected - 199_097.309_654_595_74).abs() < 1e-6);
}

#[test]
fn breakdown_csv_written() {
    let tmp = workspace(PORTFOLIO);
    let csv_path = tmp.path().join("breakdown.csv");

    cargo_bin_cmd!("hazard_loss")
        .current_dir(tmp.path())
        .arg("--breakdown")
        .arg(&csv_path)
        .assert()
        .success();

    let text = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().nth(1).unwrap().starts_with("B1,"));
}

#[test]
fn missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    cargo_bin_cmd!("projected_losses")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("data.json"));
}

#[test]
fn non_numeric_field_fails() {
    let tmp = workspace(
        r#"[{"buildingId": "B1", "floor_area": "100", "construction_cost": 1000,
             "hazard_probability": 0.01, "inflation_rate": 0.02}]"#,
    );
    cargo_bin_cmd!("projected_losses")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("invalid building data"));
    cargo_bin_cmd!("estimated_losses")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("invalid building data"));
}

#[test]
fn missing_building_id_aborts_estimate() {
    let tmp = workspace(
        r#"[{"buildingId": "B1", "floor_area": 100, "construction_cost": 1000,
             "hazard_probability": 0.01, "inflation_rate": 0.02},
            {"floor_area": 100, "construction_cost": 1000,
             "hazard_probability": 0.01, "inflation_rate": 0.02}]"#,
    );

    cargo_bin_cmd!("estimated_losses")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout("Estimated Loss for $B1: $0.00\n")
        .stderr(contains("buildingId"));

    // The projected model does not need identifiers
    cargo_bin_cmd!("projected_losses")
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn non_scalar_building_id_is_displayed_as_json() {
    let tmp = workspace(
        r#"[{"buildingId": true, "floor_area": 100, "construction_cost": 1000,
             "hazard_probability": 0.01, "inflation_rate": 0.02}]"#,
    );

    cargo_bin_cmd!("projected_losses")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("Total Projected Loss: $37851.30\n");
    cargo_bin_cmd!("estimated_losses")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("Estimated Loss for $true: $0.00\nTotal Estimated Loss: $5742.96\n");
}

#[test]
fn repeated_runs_are_identical() {
    let tmp = workspace(PORTFOLIO);
    let run = |dir: &Path| {
        cargo_bin_cmd!("hazard_loss")
            .current_dir(dir)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(tmp.path()), run(tmp.path()));
}
