use anyhow::Result;

use crate::{CliTest, clean_project, run, ts_file};

const WITH_OBSOLETE: &str = r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Open</source>
        <translation>Mở</translation>
    </message>
    <message>
        <source>Old label</source>
        <translation type="obsolete">Nhãn cũ</translation>
    </message>
    <message>
        <source>Gone</source>
        <translation type="vanished">Đã mất</translation>
    </message>
</context>
"#;

#[test]
fn test_clean_nothing_to_do() -> Result<()> {
    let test = clean_project()?;

    let output = run(test.clean_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no obsolete entries"));
    Ok(())
}

#[test]
fn test_clean_dry_run_leaves_files_untouched() -> Result<()> {
    let original = ts_file("vi_VN", WITH_OBSOLETE);
    let test = CliTest::with_file("app_vi.ts", &original)?;

    let output = run(test.clean_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("MainWindow::Old label"));
    assert!(output.stdout.contains("MainWindow::Gone"));
    assert!(output.stdout.contains("Would remove 2 entry(ies) in 1 file(s)."));
    assert!(output.stdout.contains("Run with --apply"));
    assert_eq!(test.read_file("app_vi.ts")?, original);
    Ok(())
}

#[test]
fn test_clean_apply_removes_entries() -> Result<()> {
    let test = CliTest::with_file("app_vi.ts", &ts_file("vi_VN", WITH_OBSOLETE))?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stdout:\n{}", output.stdout);
    assert!(output.stdout.contains("Removed 2 entry(ies) in 1 file(s)."));

    let content = test.read_file("app_vi.ts")?;
    assert!(content.contains("<source>Open</source>"));
    assert!(content.contains("<translation>Mở</translation>"));
    assert!(!content.contains("Old label"));
    assert!(!content.contains("Gone"));

    // The rewritten catalog is clean.
    let output = run(test.clean_command())?;
    assert_eq!(output.code, Some(0));
    Ok(())
}
