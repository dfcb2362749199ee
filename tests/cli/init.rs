use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .trmergerc.json"));

    let content = test.read_file(".trmergerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["reference"], "translations/en.json");
    assert_eq!(parsed["localeEnv"], "LOCALE");
    assert_eq!(parsed["combine"], "keys");
    assert!(parsed["sources"]["fr"].is_array());
    assert!(test.root().join(".trmergerc.json").exists());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trmergerc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".trmergerc.json already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("translations/en.json", r#"{"app": {"en": {"title": "Hub"}}}"#)?;
    test.write_file(
        "translations/backstage-fr.json",
        r#"{"app": {"fr": {"title": "Concentrateur"}}}"#,
    )?;

    let output = test
        .lookup_command("app", "title")
        .env("LOCALE", "fr")
        .output()?;
    assert!(
        output.status.success(),
        "Lookup should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Concentrateur\n");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
