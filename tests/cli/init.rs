use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .eventlintrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".eventlintrc.json")?;
    let config: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(config["pluginMarker"], "CMakeLists.txt");
    assert_eq!(config["markers"]["declaration"], "EVENT_H");

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_files(&[(".eventlintrc.json", "{}")])?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .eventlintrc.json already exists
    ");

    assert_eq!(test.read_file(".eventlintrc.json")?, "{}");

    Ok(())
}
