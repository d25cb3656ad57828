use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn bankcli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bankcli").unwrap();
    cmd.env_remove("BANKCLI_HOME")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--home")
        .arg(home);
    cmd
}

fn create_account(home: &Path, holder: &str, deposit: &str) -> String {
    let output = bankcli(home)
        .args(["create", holder, deposit])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find("ACC-").expect("created id in output");
    stdout[start..start + 8].to_string()
}

fn snapshot(home: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(home.join("bank-data.json")).unwrap()).unwrap()
}

#[test]
fn create_then_list_shows_account() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "Ada Lovelace", "1234567.50");

    bankcli(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains(id.as_str()))
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("$1,234,567.50"))
        .stdout(contains("Total Accounts: 1"));

    let data = snapshot(home.path());
    let account = &data["accounts"][0];
    assert_eq!(account["id"], id.as_str());
    assert_eq!(account["holderName"], "Ada Lovelace");
    assert_eq!(account["transactions"][0]["type"], "DEPOSIT");
    assert_eq!(account["transactions"][0]["description"], "Initial deposit");
}

#[test]
fn deposit_withdraw_and_history() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "Ada", "100");

    bankcli(home.path())
        .args(["deposit", &id, "25.50"])
        .assert()
        .success()
        .stdout(contains("New balance: $125.50"));

    bankcli(home.path())
        .args(["withdraw", &id, "20"])
        .assert()
        .success()
        .stdout(contains("New balance: $105.50"));

    bankcli(home.path())
        .args(["history", &id])
        .assert()
        .success()
        .stdout(contains("Balance After"))
        .stdout(contains("WITHDRAWAL"))
        .stdout(contains("$105.50"));
}

#[test]
fn overdraft_is_refused() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "Ada", "100");

    bankcli(home.path())
        .args(["withdraw", &id, "150"])
        .assert()
        .failure()
        .stderr(contains("Insufficient funds"));

    bankcli(home.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(contains("$100.00"));
}

#[test]
fn overdraft_allowed_by_settings() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("bank-settings.json"),
        r#"{ "allow_overdraft": true }"#,
    )
    .unwrap();
    let id = create_account(home.path(), "Ada", "100");

    bankcli(home.path())
        .args(["withdraw", &id, "150"])
        .assert()
        .success()
        .stdout(contains("-$50.00"));

    let data = snapshot(home.path());
    assert_eq!(data["accounts"][0]["balance"], -50);
    assert_eq!(data["accounts"][0]["transactions"][1]["balanceAfter"], -50);
}

#[test]
fn missing_account_fails() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .args(["deposit", "ACC-0000", "10"])
        .assert()
        .failure()
        .stderr(contains("Account not found: ACC-0000"));
}

#[test]
fn invalid_amount_fails() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "Ada", "100");

    bankcli(home.path())
        .args(["deposit", &id, "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    bankcli(home.path())
        .args(["deposit", &id, "-5"])
        .assert()
        .failure()
        .stderr(contains("must be positive"));
}

#[test]
fn transfer_opens_missing_destination() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "Ada", "100");

    bankcli(home.path())
        .args(["transfer", &id, "ACC-9999", "75"])
        .assert()
        .success()
        .stdout(contains("ACC-9999 did not exist"))
        .stdout(contains("$25.00"));

    bankcli(home.path())
        .args(["show", "ACC-9999"])
        .assert()
        .success()
        .stdout(contains("$75.00"))
        .stdout(contains("(none)"));
}

#[test]
fn delete_removes_account() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "Ada", "10");

    bankcli(home.path()).args(["delete", &id]).assert().success();

    bankcli(home.path())
        .args(["show", &id])
        .assert()
        .failure()
        .stderr(contains("Account not found"));
    bankcli(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No accounts found."));
}

#[test]
fn corrupt_snapshot_is_not_fatal() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("bank-data.json");
    fs::write(&data_file, "{ not json").unwrap();

    bankcli(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No accounts found."));

    assert_eq!(fs::read_to_string(&data_file).unwrap(), "{ not json");
}

#[test]
fn malformed_settings_are_fatal() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("bank-settings.json"), "nope").unwrap();

    bankcli(home.path()).arg("list").assert().failure();
}

#[test]
fn config_shows_paths() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("bank-data.json"))
        .stdout(contains("legacy_transfer_rules"));
}

#[test]
fn shell_lists_and_exits() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .write_stdin("3\n9\n")
        .assert()
        .success()
        .stdout(contains("1. Create New Account"))
        .stdout(contains("No accounts found."))
        .stdout(contains("Saving and exiting..."));
}

#[test]
fn shell_recovers_from_bad_input() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .arg("shell")
        .write_stdin("42\n4\nACC-0000\n9\n")
        .assert()
        .success()
        .stderr(contains("Invalid option. Please select 1-9."))
        .stderr(contains("Account not found"))
        .stdout(contains("Saving and exiting..."));
}

#[test]
fn shell_creates_account_and_persists_on_exit() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .write_stdin("1\nGrace Hopper\n250\n9\n")
        .assert()
        .success()
        .stdout(contains("Account created successfully."));

    let data = snapshot(home.path());
    assert_eq!(data["accounts"][0]["holderName"], "Grace Hopper");
    assert_eq!(data["accounts"][0]["balance"], 250);
}

#[test]
fn shell_exits_cleanly_at_end_of_input() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Saving and exiting...").and(contains("BANKCLI")));
}

#[test]
fn null_amounts_from_older_snapshots_keep_accounts() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("bank-data.json"),
        r#"{
  "accounts": [
    { "id": "ACC-1111", "holderName": "Valid", "balance": 500,
      "createdAt": "2024-05-01T09:00:00.000Z", "transactions": [] },
    { "id": "ACC-2222", "holderName": "Typo", "balance": null,
      "createdAt": "2024-05-01T09:00:00.000Z", "transactions": [] }
  ]
}"#,
    )
    .unwrap();

    create_account(home.path(), "New", "10");

    let data = snapshot(home.path());
    let ids: Vec<_> = data["accounts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], "ACC-1111");
    assert_eq!(ids[1], "ACC-2222");
    assert_eq!(data["accounts"][0]["balance"], 500);
    assert_eq!(data["accounts"][1]["balance"], 0);
}

#[test]
fn shell_survives_invalid_utf8_input() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .write_stdin(b"1\nGrace\n250\n\xff\xfe\n3\n9\n".to_vec())
        .assert()
        .success()
        .stderr(contains("not valid UTF-8"))
        .stdout(contains("Grace"))
        .stdout(contains("Saving and exiting..."));

    let data = snapshot(home.path());
    assert_eq!(data["accounts"][0]["holderName"], "Grace");
}

#[test]
fn overflowing_deposit_fails_cleanly() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "A", "92233720368547758");

    bankcli(home.path())
        .args(["deposit", &id, "92233720368547758"])
        .assert()
        .failure()
        .stderr(contains("overflow"))
        .stderr(contains("panicked").not());

    let data = snapshot(home.path());
    assert_eq!(data["accounts"][0]["transactions"].as_array().unwrap().len(), 1);
}

#[test]
fn invalid_date_format_is_rejected_at_startup() {
    let home = TempDir::new().unwrap();
    let id = create_account(home.path(), "Ada", "10");
    fs::write(
        home.path().join("bank-settings.json"),
        r#"{ "date_format": "%Q" }"#,
    )
    .unwrap();

    bankcli(home.path())
        .args(["history", &id])
        .assert()
        .failure()
        .stderr(contains("Invalid date_format"))
        .stderr(contains("panicked").not());
}

#[test]
fn config_write_saves_settings() {
    let home = TempDir::new().unwrap();

    bankcli(home.path())
        .args(["config", "--write"])
        .assert()
        .success()
        .stdout(contains("Wrote"));

    let saved: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(home.path().join("bank-settings.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(saved["currency_symbol"], "$");
    assert_eq!(saved["legacy_transfer_rules"], false);
}
