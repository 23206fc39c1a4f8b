use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir.path())
        .env_remove("EXPENSE_LEDGER_PASSPHRASE")
        .env_remove("RUST_LOG");
    cmd
}

fn signup(data_dir: &TempDir, email: &str, passphrase: &str) {
    expenses(data_dir)
        .args(["account", "signup", email, "--passphrase", passphrase])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created for"));
}

#[test]
fn test_no_command_prints_usage_hint() {
    let data_dir = TempDir::new().unwrap();
    expenses(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses login <email>"));
}

#[test]
fn test_signup_rejects_short_passphrase() {
    let data_dir = TempDir::new().unwrap();
    expenses(&data_dir)
        .args(["account", "signup", "me@example.com", "--passphrase", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn test_login_with_wrong_passphrase_fails() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "me@example.com", "passphrase1");

    expenses(&data_dir)
        .args(["login", "me@example.com", "--passphrase", "passphrase2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to log in"));
}

#[test]
fn test_dashboard_session() {
    let data_dir = TempDir::new().unwrap();
    let export_dir = TempDir::new().unwrap();
    signup(&data_dir, "me@example.com", "passphrase1");

    let script = format!(
        "budget 500\n\
         add Groceries 120 2024-01-05\n\
         item Transit\namount 40\ndate 2024-01-06\nadd\n\
         balance\n\
         download {}\n\
         share\n\
         logout\n",
        export_dir.path().display()
    );

    expenses(&data_dir)
        .args(["login", "me@example.com"])
        .env("EXPENSE_LEDGER_PASSPHRASE", "passphrase1")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: me@example.com"))
        .stdout(predicate::str::contains("Remaining Amount: 340"))
        .stdout(predicate::str::contains(
            "mailto:me@example.com?subject=Expense%20List&body=",
        ))
        .stdout(predicate::str::contains("Logged out."));

    let exported = std::fs::read_to_string(export_dir.path().join("expense-list.txt")).unwrap();
    assert_eq!(
        exported,
        "Expense List:\n\
         1. Item Name: Groceries, Expense Amount: 120, Date: 2024-01-05\n\
         2. Item Name: Transit, Expense Amount: 40, Date: 2024-01-06"
    );
}

#[test]
fn test_ledger_does_not_survive_sessions() {
    let data_dir = TempDir::new().unwrap();
    signup(&data_dir, "me@example.com", "passphrase1");

    expenses(&data_dir)
        .args(["login", "me@example.com", "--passphrase", "passphrase1"])
        .write_stdin("budget 100\nadd Lunch 15 2024-02-01\nlogout\n")
        .assert()
        .success();

    expenses(&data_dir)
        .args(["login", "me@example.com", "--passphrase", "passphrase1"])
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses added yet."))
        .stdout(predicate::str::contains("Remaining Amount").not())
        .stdout(predicate::str::contains("expense list was discarded"));
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();
    expenses(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense-list.txt"))
        .stdout(predicate::str::contains("credentials.json"))
        .stdout(predicate::str::contains("Wrote default settings"));

    let written = std::fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"export_file_name\": \"expense-list.txt\""));

    expenses(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings").not());
}
