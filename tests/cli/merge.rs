use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_merge_prints_total_table() -> Result<()> {
    let test = CliTest::with_portal_translations()?;

    let output = test.command().arg("merge").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let merged: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(merged["app"]["en"], json!({"subtitle": "Portal", "title": "Hub"}));
    assert_eq!(
        merged["app"]["fr"],
        json!({"subtitle": "Portail", "title": "Concentrateur"})
    );
    assert_eq!(merged["app"]["it"], merged["app"]["en"]);
    assert_eq!(
        merged["plugin.extensions"]["ja"],
        json!({"common.readMore": "続きを読む", "header.title": "Extensions"})
    );
    assert_eq!(merged["settings"]["en"], json!({}));
    assert_eq!(merged["settings"]["ja"], json!({"rhdhLanguage": "日本語"}));

    Ok(())
}

#[test]
fn test_merge_is_stable_across_runs() -> Result<()> {
    let test = CliTest::with_portal_translations()?;

    let first = stdout(&test.command().arg("merge").output()?);
    let second = stdout(&test.command().arg("merge").output()?);
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_merge_single_namespace() -> Result<()> {
    let test = CliTest::with_portal_translations()?;

    let output = test
        .command()
        .args(["merge", "--namespace", "settings"])
        .output()?;
    let merged: Value = serde_json::from_str(&stdout(&output))?;
    let namespaces: Vec<_> = merged.as_object().unwrap().keys().cloned().collect();
    assert_eq!(namespaces, vec!["settings"]);

    Ok(())
}

#[test]
fn test_merge_unknown_namespace_fails() -> Result<()> {
    let test = CliTest::with_portal_translations()?;

    let output = test
        .command()
        .args(["merge", "--namespace", "nope"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown namespace \"nope\""));

    Ok(())
}

#[test]
fn test_merge_writes_output_file() -> Result<()> {
    let test = CliTest::with_portal_translations()?;

    let output = test
        .command()
        .args(["merge", "--output", "merged.json"])
        .output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Wrote 3 namespaces to merged.json"));

    let merged: Value = serde_json::from_str(&test.read_file("merged.json")?)?;
    assert_eq!(merged["app"]["fr"]["title"], "Concentrateur");

    Ok(())
}

#[test]
fn test_merge_reference_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_portal_translations()?;
    test.write_json("other-en.json", &json!({"app": {"en": {"title": "Other"}}}))?;

    let output = test
        .command()
        .args(["merge", "--reference", "other-en.json"])
        .output()?;
    let merged: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(merged["app"]["en"], json!({"title": "Other"}));
    assert_eq!(merged["app"]["ja"], json!({"title": "Other"}));

    Ok(())
}

#[test]
fn test_merge_default_layout_without_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_json("translations/en.json", &json!({"app": {"en": {"title": "Hub"}}}))?;
    test.write_json(
        "translations/community-plugins-it.json",
        &json!({"app": {"it": {"title": "Centro"}}}),
    )?;

    let output = test.command().arg("merge").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let merged: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(merged["app"]["it"]["title"], "Centro");
    assert_eq!(merged["app"]["fr"]["title"], "Hub");

    // fr and ja globs matched nothing
    assert!(stderr(&output).contains("2 problem(s) while loading translations"));

    Ok(())
}

#[test]
fn test_merge_verbose_lists_skipped_values() -> Result<()> {
    let test = CliTest::with_portal_translations()?;
    test.write_json(
        "translations/test/rhdh-ja.json",
        &json!({"app": {"ja": {"title": "ハブ", "count": 2}}}),
    )?;

    let output = test.command().args(["merge", "-v"]).output()?;
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("rhdh-ja.json"));
    assert!(err.contains("skipped non-string value for \"count\""));

    Ok(())
}
