use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created ./.tsglotrc.json"));
    assert!(test.root().join(".tsglotrc.json").exists());

    let config: Value = serde_json::from_str(&test.read_file(".tsglotrc.json")?)?;
    assert_eq!(config["catalogsRoot"], ".");
    assert_eq!(config["includes"][0], "**/*.ts");
    assert_eq!(config["includeUnfinished"], true);
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tsglotrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .tsglotrc.json already exists
    ");

    assert_eq!(test.read_file(".tsglotrc.json")?, "{}");
    Ok(())
}
