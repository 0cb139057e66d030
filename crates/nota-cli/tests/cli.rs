//! End-to-end tests for the nota binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn nota() -> Command {
    Command::cargo_bin("nota").unwrap()
}

#[test]
fn due_cash_is_invoice_date() {
    nota()
        .args(["due", "19/12/2025", "--terms", "cash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("19/12/2025"));
}

#[test]
fn due_two_week_rolls_to_month_end() {
    nota()
        .args(["due", "19/12/2025", "--terms", "2week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("31/12/2025"));
}

#[test]
fn due_rejects_bad_date() {
    nota()
        .args(["due", "2025-12-19"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn scan_missing_input_fails() {
    nota()
        .args(["scan", "/nonexistent/receipt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn scan_receipt_outputs_json() {
    let mut receipt = tempfile::NamedTempFile::new().unwrap();
    write!(
        receipt,
        "Thirst Trap\n19/12/2025\nMango Smoothie 2 PCS 500000\nTOTAL AMOUNT 4000000\n"
    )
    .unwrap();

    let mut registry = tempfile::NamedTempFile::new().unwrap();
    write!(
        registry,
        r#"[{{"id": 7, "company_name": "PT Segar Jaya Abadi", "short_name": "Thirst Trap"}}]"#
    )
    .unwrap();

    nota()
        .arg("scan")
        .arg(receipt.path())
        .arg("--suppliers")
        .arg(registry.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mango Smoothie"))
        .stdout(predicate::str::contains("2025-12-19"))
        .stdout(predicate::str::contains("4000000"));
}

#[test]
fn scan_without_registry_warns() {
    let mut receipt = tempfile::NamedTempFile::new().unwrap();
    write!(receipt, "Some Store\n19/12/2025\nTOTAL 150000\n").unwrap();

    nota()
        .arg("scan")
        .arg(receipt.path())
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("supplier not found"));
}
