use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn leftover(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("leftover").unwrap();
    cmd.env("LEFTOVER_CONFIG_DIR", config_dir.path())
        .env_remove("LEFTOVER_LOCALE")
        .env_remove("LEFTOVER_CURRENCY");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    leftover(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    leftover(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale:          nb-NO"))
        .stdout(predicate::str::contains("Currency suffix: kr"))
        .stdout(predicate::str::contains("config.json"));

    // Reading config never writes anything
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_config_respects_overrides() {
    let dir = TempDir::new().unwrap();
    leftover(&dir)
        .args(["--locale", "en-US", "--currency", "NOK", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale:          en-US"))
        .stdout(predicate::str::contains("Currency suffix: NOK"));
}

#[test]
fn test_locale_from_environment() {
    let dir = TempDir::new().unwrap();
    leftover(&dir)
        .env("LEFTOVER_LOCALE", "de")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale:          de-DE"));
}

#[test]
fn test_unknown_locale_fails() {
    let dir = TempDir::new().unwrap();
    leftover(&dir)
        .args(["--locale", "xx-YY", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xx-YY"));
}

#[test]
fn test_init_writes_settings_once() {
    let dir = TempDir::new().unwrap();
    leftover(&dir)
        .args(["--currency", "NOK", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings"));

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"currency_suffix\": \"NOK\""));

    leftover(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));

    leftover(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency suffix: NOK"));
}

#[test]
fn test_malformed_settings_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
    leftover(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings"));
}
