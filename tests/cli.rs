use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".seller-dash").join("config.json")
}

const BINARY_NAME: &str = "seller-dash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Page numbers start at 1.
fn table_rejects_page_zero() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["table", "orders", "--page", "0"])
        .assert()
        .failure();
}

#[test]
fn table_rejects_unknown_kind() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["table", "customers"]).assert().failure();
}

#[test]
fn invalid_api_url_flag_is_an_error() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["sellers", "--api-url", "not-a-url"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));
}

#[test]
/// set-api-url should write the URL to the config file.
fn set_api_url_writes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-api-url", "https://olist.example.com/"])
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("API URL saved"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("https://olist.example.com"));
}

#[test]
/// reset-config should delete an existing config file.
fn reset_config_deletes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-config")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Resetting configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
#[ignore] // Needs a running analytics API.
fn sellers_lists_the_directory() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("sellers").assert().success().stdout(contains("*"));
}
