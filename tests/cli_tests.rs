use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "budget";

fn budget(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_TRACKER_DATA_DIR", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(home: &Path, args: &[&str]) {
    budget(home).args(args).assert().success();
}

fn stored_ledger(home: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(home.join("data").join("ledger.json"))
        .expect("ledger slot written");
    serde_json::from_str(&text).expect("ledger slot is json")
}

#[test]
fn dashboard_on_fresh_home_shows_savings() {
    let home = TempDir::new().unwrap();

    budget(home.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Savings").and(contains("Unallocated")));
}

#[test]
fn income_category_expense_flow() {
    let home = TempDir::new().unwrap();
    run(home.path(), &["income", "set", "5000"]);
    run(home.path(), &["category", "add", "Food", "800"]);
    run(home.path(), &["expense", "add", "Food", "Lunch", "50"]);
    run(home.path(), &["expense", "add", "food", "Dinner", "40"]);

    budget(home.path())
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(contains("$4200.00"));

    budget(home.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("$710.00").and(contains("$90.00")));

    let ledger = stored_ledger(home.path());
    assert_eq!(ledger["income"], 5000.0);
    assert_eq!(ledger["categories"].as_array().unwrap().len(), 2);
    assert_eq!(ledger["expenses"].as_array().unwrap().len(), 2);
    assert_eq!(ledger["expenses"][0]["description"], "Lunch");
}

#[test]
fn deleting_a_category_removes_its_expenses() {
    let home = TempDir::new().unwrap();
    run(home.path(), &["category", "add", "Food", "800"]);
    run(home.path(), &["expense", "add", "Food", "Lunch", "50"]);

    budget(home.path())
        .args(["category", "delete", "Food"])
        .assert()
        .success()
        .stdout(contains("Removed 1 expense(s)"));

    let ledger = stored_ledger(home.path());
    assert_eq!(ledger["categories"].as_array().unwrap().len(), 1);
    assert!(ledger["expenses"].as_array().unwrap().is_empty());
}

#[test]
fn savings_category_cannot_be_deleted() {
    let home = TempDir::new().unwrap();

    budget(home.path())
        .args(["category", "delete", "savings"])
        .assert()
        .success()
        .stdout(contains("Nothing changed"));
}

#[test]
fn expense_against_savings_is_rejected() {
    let home = TempDir::new().unwrap();

    budget(home.path())
        .args(["expense", "add", "savings", "Oops", "10"])
        .assert()
        .success()
        .stdout(contains("Nothing changed"));
    assert!(!home.path().join("data").join("ledger.json").exists());
}

#[test]
fn savings_earnings_follow_pool_and_rate() {
    let home = TempDir::new().unwrap();
    run(home.path(), &["savings", "pool", "1000"]);
    run(home.path(), &["savings", "rate", "6%"]);

    budget(home.path())
        .args(["savings", "show"])
        .assert()
        .success()
        .stdout(contains("$5.00").and(contains("$60.00")));

    let ledger = stored_ledger(home.path());
    assert_eq!(ledger["savingsAnnualRate"], 6.0);
}

#[test]
fn expense_delete_by_id() {
    let home = TempDir::new().unwrap();
    run(home.path(), &["category", "add", "Food", "800"]);
    run(home.path(), &["expense", "add", "Food", "Lunch", "50"]);

    let ledger = stored_ledger(home.path());
    let id = ledger["expenses"][0]["id"].as_str().unwrap().to_string();

    run(home.path(), &["expense", "delete", &id]);
    assert!(stored_ledger(home.path())["expenses"]
        .as_array()
        .unwrap()
        .is_empty());

    budget(home.path())
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(contains("Nothing changed"));
}

#[test]
fn export_report_to_stdout() {
    let home = TempDir::new().unwrap();
    run(home.path(), &["category", "add", "Rent, Utilities", "1200"]);

    budget(home.path())
        .args(["export", "report"])
        .assert()
        .success()
        .stdout(
            contains("Category,Budget,Spent,Balance,Type\n")
                .and(contains("Savings,0.00,0.00,0.00,Savings\n"))
                .and(contains("\"Rent, Utilities\",1200.00,0.00,1200.00,Expense\n")),
        );
}

#[test]
fn export_all_writes_yaml_snapshot() {
    let home = TempDir::new().unwrap();
    let output = home.path().join("snapshot.yaml");
    run(home.path(), &["category", "add", "Food", "800"]);

    budget(home.path())
        .args(["export", "all"])
        .arg(&output)
        .args(["--format", "yaml"])
        .assert()
        .success();

    let text = std::fs::read_to_string(output).unwrap();
    assert!(text.contains("Food"));
}

#[test]
fn corrupt_slot_degrades_to_defaults() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("ledger.json"), "{ not json").unwrap();

    budget(home.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Savings"));
}

#[test]
fn audit_lists_applied_mutations() {
    let home = TempDir::new().unwrap();
    run(home.path(), &["income", "set", "5000"]);
    run(home.path(), &["category", "add", "Food", "800"]);
    run(home.path(), &["category", "add", "", "800"]);

    budget(home.path())
        .args(["audit", "--limit", "10"])
        .assert()
        .success()
        .stdout(contains("Food").and(contains("income")));

    let log = std::fs::read_to_string(home.path().join("audit.log")).unwrap();
    assert_eq!(log.lines().count(), 2);
}

#[test]
fn config_shows_paths() {
    let home = TempDir::new().unwrap();

    budget(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("ledger.json").and(contains("Currency symbol")));
}
