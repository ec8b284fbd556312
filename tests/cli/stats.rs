use anyhow::Result;

use crate::{CliTest, clean_project, run, ts_file};

#[test]
fn test_stats_lists_every_catalog() -> Result<()> {
    let test = clean_project()?;

    let output = run(test.stats_command())?;

    assert_eq!(output.code, Some(0));
    let lines: Vec<&str> = output.stdout.lines().collect();
    assert!(lines[0].starts_with("CATALOG"));
    assert!(lines[0].contains("FORMS"));

    let uk = lines
        .iter()
        .find(|line| line.contains("drawpile_uk.ts"))
        .expect("uk row");
    assert!(uk.contains("uk_UA"));
    assert!(uk.contains("100.0%"));
    let vi = lines
        .iter()
        .find(|line| line.contains("drawpile_vi.ts"))
        .expect("vi row");
    assert!(vi.contains("vi_VN"));

    assert!(
        output
            .stdout
            .contains("2 catalog(s), 4 of 4 message(s) finished (100.0%)")
    );
    Ok(())
}

#[test]
fn test_stats_counts_unfinished_and_obsolete() -> Result<()> {
    let body = r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Open</source>
        <translation>Відкрити</translation>
    </message>
    <message>
        <source>Close</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Old</source>
        <translation type="vanished">Старе</translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("app_uk.ts", &ts_file("uk_UA", body))?;

    let output = run(test.stats_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("50.0%"));
    assert!(
        output
            .stdout
            .contains("1 catalog(s), 1 of 2 message(s) finished (50.0%)")
    );
    Ok(())
}

#[test]
fn test_stats_reports_unparseable_catalogs() -> Result<()> {
    let test = CliTest::with_file("broken_de.ts", "<TS version=\"2.1\" language=\"de_DE\">\n<context>")?;

    let output = run(test.stats_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("No catalogs found."));
    assert!(
        output
            .stderr
            .contains("1 catalog(s) could not be parsed (use -v for details)")
    );
    Ok(())
}
