use anyhow::Result;

use crate::{CliTest, clean_project, run, ts_file};

#[test]
fn test_lookup_vietnamese_all_files() -> Result<()> {
    let test = clean_project()?;

    let mut cmd = test.lookup_command("QGuiApplication", "All Files (*)");
    cmd.args(["--catalog", "*_vi.ts"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("QGuiApplication::All Files (*)"));
    assert!(output.stdout.contains("(vi_VN)  Mọi tập tin (*)"));
    assert!(!output.stdout.contains("uk_UA"));
    assert!(output.stdout.contains("Translated in 1 of 1 catalog(s)"));
    Ok(())
}

#[test]
fn test_lookup_numerus_form_by_count() -> Result<()> {
    let test = clean_project()?;

    let mut cmd = test.lookup_command("QGuiApplication", "%n layer(s)");
    cmd.args(["--count", "5", "--catalog", "*_uk.ts"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("5 шарів"));
    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = clean_project()?;

    let output = run(test.lookup_command("QGuiApplication", "Quit"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("Quit  (untranslated)"));
    assert!(output.stdout.contains("Translated in 0 of 2 catalog(s)"));
    Ok(())
}

#[test]
fn test_lookup_comment_falls_back_to_plain_key() -> Result<()> {
    let test = clean_project()?;

    let mut cmd = test.lookup_command("QGuiApplication", "All Files (*)");
    cmd.args(["--comment", "file dialog filter"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Translated in 2 of 2 catalog(s)"));
    Ok(())
}

#[test]
fn test_lookup_unfinished_respects_config() -> Result<()> {
    let body = r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Close</source>
        <translation type="unfinished">Закрити</translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("app_uk.ts", &ts_file("uk_UA", body))?;

    let output = run(test.lookup_command("MainWindow", "Close"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Закрити"));

    test.write_file(".tsglotrc.json", r#"{ "includeUnfinished": false }"#)?;
    let output = run(test.lookup_command("MainWindow", "Close"))?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("Close  (untranslated)"));
    Ok(())
}

#[test]
fn test_lookup_invalid_catalog_glob() -> Result<()> {
    let test = clean_project()?;

    let mut cmd = test.lookup_command("QGuiApplication", "All Files (*)");
    cmd.args(["--catalog", "[vi"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid glob pattern"));
    Ok(())
}
