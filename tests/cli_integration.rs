use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn stockpile(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.env("STOCKPILE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_show() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "5", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Pen'"));

    stockpile(home.path())
        .args(["show", "pen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Qty: 5"))
        .stdout(predicate::str::contains("₹2.00"))
        .stdout(predicate::str::contains("₹10.00"));

    assert!(home.path().join("inventory.json").exists());
}

#[test]
fn adding_same_name_restocks() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "5", "2.0"])
        .assert()
        .success();
    stockpile(home.path())
        .args(["add", "pen ", "3", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restocked"));

    stockpile(home.path())
        .args(["show", "PEN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Qty: 8"))
        .stdout(predicate::str::contains("₹2.50"))
        .stdout(predicate::str::contains("₹20.00"));

    let raw = std::fs::read_to_string(home.path().join("inventory.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["items"].as_object().unwrap().len(), 1);
}

#[test]
fn overspending_fails_and_keeps_stock() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "5", "2"])
        .assert()
        .success();

    stockpile(home.path())
        .args(["spend", "pen", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available: 5"));

    stockpile(home.path())
        .args(["spend", "pen", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.00"));

    stockpile(home.path())
        .args(["show", "pen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Qty: 3"));
}

#[test]
fn update_rejects_negative_quantity() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "5", "2"])
        .assert()
        .success();

    stockpile(home.path())
        .args(["update", "pen", "--quantity", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));

    stockpile(home.path())
        .args(["update", "pen", "--quantity", "12", "--price", "1.25"])
        .assert()
        .success();

    stockpile(home.path())
        .args(["show", "pen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Qty: 12"))
        .stdout(predicate::str::contains("₹15.00"));
}

#[test]
fn update_without_fields_changes_nothing() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "5", "2"])
        .assert()
        .success();

    stockpile(home.path())
        .args(["update", "pen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No updates provided"));
}

#[test]
fn delete_with_and_without_confirmation() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "5", "2"])
        .assert()
        .success();

    stockpile(home.path())
        .args(["delete", "pen"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));

    stockpile(home.path())
        .args(["delete", "pen", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Pen'"));

    stockpile(home.path())
        .args(["show", "pen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item named 'pen'"));

    stockpile(home.path())
        .args(["delete", "pen", "--yes"])
        .assert()
        .failure();
}

#[test]
fn corrupted_file_starts_empty_with_warning() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("inventory.json"), "{ definitely not json").unwrap();

    stockpile(home.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting with an empty inventory"))
        .stdout(predicate::str::contains("No items in inventory."));
}

#[test]
fn list_shows_totals() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "5", "2"])
        .assert()
        .success();
    stockpile(home.path())
        .args(["add", "Notebook", "2", "4"])
        .assert()
        .success();

    stockpile(home.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notebook"))
        .stdout(predicate::str::contains("Pen"))
        .stdout(predicate::str::contains("2 items, 7 units"))
        .stdout(predicate::str::contains("₹18.00"));
}

#[test]
fn data_flag_overrides_config() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("elsewhere").join("shop.json");

    stockpile(home.path())
        .arg("--data")
        .arg(&data)
        .args(["add", "Pen", "1", "1"])
        .assert()
        .success();

    assert!(data.exists());
    assert!(!home.path().join("inventory.json").exists());
}

#[test]
fn currency_comes_from_config() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["config", "currency", "$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("currency set to $"));

    stockpile(home.path())
        .args(["add", "Pen", "5", "2"])
        .assert()
        .success();

    stockpile(home.path())
        .args(["show", "pen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$10.00"));
}

#[test]
fn suggest_filters_names() {
    let home = tempfile::tempdir().unwrap();

    for name in ["Pen", "Pencil", "Notebook"] {
        stockpile(home.path())
            .args(["add", name, "1", "1"])
            .assert()
            .success();
    }

    stockpile(home.path())
        .args(["suggest", "pe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pen\nPencil\n"))
        .stdout(predicate::str::contains("Notebook").not());
}

#[test]
fn invalid_add_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Pen", "0", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity must be a positive"));

    stockpile(home.path())
        .args(["add", "Pen", "3", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unit price must be a positive"));

    assert!(!home.path().join("inventory.json").exists());
}
