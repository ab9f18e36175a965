//! CLI command integration tests.
//! Each test uses a temp directory via WEDPLAN_DATA_DIR for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wedplan(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("wedplan").unwrap();
    cmd.env("WEDPLAN_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn init_plan(dir: &TempDir) {
    wedplan(dir)
        .args(["init", "--name", "Sam & Alex", "--budget", "$30,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan: Sam & Alex"));
}

fn set_top_priorities(dir: &TempDir) {
    for category in ["cat_001", "Photography", "cat_026"] {
        wedplan(dir)
            .args(["plan", "tier", category, "top"])
            .assert()
            .success();
    }
}

#[test]
fn commands_need_a_plan() {
    let dir = TempDir::new().unwrap();
    wedplan(&dir)
        .args(["plan", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("run 'wedplan init' first"));
}

#[test]
fn init_then_show() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    wedplan(&dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan: Sam & Alex"))
        .stdout(predicate::str::contains("$30,000.00"))
        .stdout(predicate::str::contains("27 enabled"));
}

#[test]
fn init_twice_fails() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    wedplan(&dir)
        .args(["init", "--name", "Again", "--budget", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan already exists"));
}

#[test]
fn negative_budget_rejected() {
    let dir = TempDir::new().unwrap();
    wedplan(&dir)
        .args(["init", "--name", "Test", "--budget=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn priorities_messages() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    wedplan(&dir)
        .arg("priorities")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please select at least 3 top priorities (currently 0)",
        ));

    set_top_priorities(&dir);
    wedplan(&dir)
        .arg("priorities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority count is valid"));
}

#[test]
fn unknown_tier_rejected() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    wedplan(&dir)
        .args(["plan", "tier", "cat_001", "huge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tier"));
}

#[test]
fn allocate_enforces_priority_count() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    wedplan(&dir)
        .arg("allocate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select at least 3 top priorities"));

    wedplan(&dir)
        .args(["allocate", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("Allocation saved"));
}

#[test]
fn dry_run_does_not_save() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);
    set_top_priorities(&dir);

    wedplan(&dir)
        .args(["allocate", "--dry-run", "--debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview (not saved)"))
        .stdout(predicate::str::contains("Sum of effective weights"));

    wedplan(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No allocation generated"));
}

#[test]
fn allocate_and_export_csv_sums_to_budget() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);
    set_top_priorities(&dir);

    wedplan(&dir)
        .arg("allocate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Venue & Rentals"))
        .stdout(predicate::str::contains("$30,000.00"))
        .stdout(predicate::str::contains("Enhancements"))
        .stdout(predicate::str::contains("Safety Net"));

    wedplan(&dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By group:"))
        .stdout(predicate::str::contains("3 Top priority"));

    let output = dir.path().join("allocation.csv");
    wedplan(&dir)
        .args(["export", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 27 categories"));

    let text = std::fs::read_to_string(&output).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Category ID,Category,Group,Tier,Base Weight,Amount")
    );

    let mut total_cents = 0u64;
    let mut rows = 0;
    for line in lines {
        let amount = line.rsplit(',').next().unwrap();
        let (dollars, cents) = amount.split_once('.').unwrap();
        total_cents += dollars.parse::<u64>().unwrap() * 100 + cents.parse::<u64>().unwrap();
        rows += 1;
    }
    assert_eq!(rows, 27);
    assert_eq!(total_cents, 3_000_000);
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);
    set_top_priorities(&dir);
    wedplan(&dir).arg("allocate").assert().success();

    let output = wedplan(&dir)
        .args(["export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plan_name"], "Sam & Alex");
    assert_eq!(value["total_budget_cents"], 3_000_000);
    assert_eq!(value["stale"], false);
    assert_eq!(value["rows"].as_array().unwrap().len(), 27);
}

#[test]
fn budget_change_marks_allocation_stale() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);
    set_top_priorities(&dir);
    wedplan(&dir).arg("allocate").assert().success();

    wedplan(&dir)
        .args(["plan", "budget", "25000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 'wedplan allocate'"));

    wedplan(&dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out of date"));
}

#[test]
fn custom_categories_need_flag() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);

    wedplan(&dir)
        .args(["plan", "enable", "photo_booth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: photo_booth"));

    wedplan(&dir)
        .args(["plan", "enable", "photo_booth", "--custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled: photo_booth"));
}

#[test]
fn catalog_lists_categories() {
    let dir = TempDir::new().unwrap();
    wedplan(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Safety Net"))
        .stdout(predicate::str::contains("cat_027"));
}

#[test]
fn audit_records_changes() {
    let dir = TempDir::new().unwrap();
    init_plan(&dir);
    wedplan(&dir)
        .args(["plan", "tier", "cat_004", "top"])
        .assert()
        .success();

    wedplan(&dir)
        .args(["audit", "--count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Plan"))
        .stdout(predicate::str::contains("tier: IMPORTANT -> TOP"));
}
