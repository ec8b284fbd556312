use anyhow::Result;

use crate::{CliTest, UK_BODY, VI_BODY, clean_project, run, ts_file};

const UK_SINGLE_FORM: &str = r#"<context>
    <name>QGuiApplication</name>
    <message>
        <location filename="../src/desktop/main.cpp" line="120"/>
        <source>All Files (*)</source>
        <translation>Усі файли (*)</translation>
    </message>
    <message numerus="yes">
        <location line="+12"/>
        <source>%n layer(s)</source>
        <translation>
            <numerusform>%n шар</numerusform>
        </translation>
    </message>
</context>
"#;

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = clean_project()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout:\n{}", output.stdout);
    assert!(
        output
            .stdout
            .contains("Checked 2 catalogs, 4 messages - no issues found")
    );
    Ok(())
}

#[test]
fn test_check_single_form_vietnamese_is_valid() -> Result<()> {
    let test = CliTest::with_file("i18n/drawpile_vi.ts", &ts_file("vi_VN", VI_BODY))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout:\n{}", output.stdout);
    assert!(!output.stdout.contains("numerus-count"));
    Ok(())
}

#[test]
fn test_check_ukrainian_single_form_is_an_error() -> Result<()> {
    let test = CliTest::with_file("i18n/drawpile_uk.ts", &ts_file("uk_UA", UK_SINGLE_FORM))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"%n layer(s)\"  numerus-count"));
    assert!(output.stdout.contains("drawpile_uk.ts:13:9"));
    assert!(output.stdout.contains("13 |         <source>%n layer(s)</source>"));
    assert!(
        output
            .stdout
            .contains("= note: 1 numerus form(s), uk_UA needs 3")
    );
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_warnings_do_not_fail() -> Result<()> {
    let body = r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Old label</source>
        <translation type="obsolete">Nhãn cũ</translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("app_vi.ts", &ts_file("vi_VN", body))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Old label\"  obsolete-message"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_check_parse_error_does_not_stop_other_catalogs() -> Result<()> {
    let test = CliTest::with_file("i18n/drawpile_uk.ts", &ts_file("uk_UA", UK_SINGLE_FORM))?;
    test.write_file(
        "i18n/drawpile_de.ts",
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"de_DE\">\n<context>\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("drawpile_de.ts"));
    assert!(output.stdout.contains("numerus-count"));
    assert!(output.stdout.contains("2 problems (2 errors, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_selected_rules_only() -> Result<()> {
    let body = r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Old label</source>
        <translation type="vanished">Старий</translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("i18n/drawpile_uk.ts", &ts_file("uk_UA", UK_SINGLE_FORM))?;
    test.write_file("i18n/extra_uk.ts", &ts_file("uk_UA", body))?;

    let mut cmd = test.check_command();
    cmd.arg("obsolete-message");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("obsolete-message"));
    assert!(!output.stdout.contains("numerus-count"));
    Ok(())
}

#[test]
fn test_check_disabled_rule_in_config() -> Result<()> {
    let test = CliTest::with_file("i18n/drawpile_uk.ts", &ts_file("uk_UA", UK_SINGLE_FORM))?;
    test.write_file(".tsglotrc.json", r#"{ "disabledRules": ["numerus-count"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout:\n{}", output.stdout);
    assert!(output.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_translator_comment_suppression() -> Result<()> {
    let body = r#"<context>
    <name>QGuiApplication</name>
    <message numerus="yes">
        <source>%n layer(s)</source>
        <translatorcomment>Singular only in this UI. tsglot-disable numerus-count</translatorcomment>
        <translation>
            <numerusform>%n шар</numerusform>
        </translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("app_uk.ts", &ts_file("uk_UA", body))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout:\n{}", output.stdout);
    Ok(())
}

#[test]
fn test_check_placeholder_mismatch() -> Result<()> {
    let body = r#"<context>
    <name>LoginDialog</name>
    <message>
        <source>Connecting to %1 as %2...</source>
        <translation>Đang kết nối tới %1...</translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("app_vi.ts", &ts_file("vi_VN", body))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("placeholder-mismatch"));
    assert!(output.stdout.contains("= note: translation: missing %2"));
    Ok(())
}

#[test]
fn test_check_missing_message_in_sibling() -> Result<()> {
    let uk_without_layers = r#"<context>
    <name>QGuiApplication</name>
    <message>
        <location filename="../src/desktop/main.cpp" line="120"/>
        <source>All Files (*)</source>
        <translation>Усі файли (*)</translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("i18n/drawpile_vi.ts", &ts_file("vi_VN", VI_BODY))?;
    test.write_file("i18n/drawpile_uk.ts", &ts_file("uk_UA", uk_without_layers))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"%n layer(s)\"  missing-message"));
    assert!(output.stdout.contains("QGuiApplication::%n layer(s) missing in:"));
    assert!(output.stdout.contains("drawpile_uk.ts"));
    Ok(())
}

#[test]
fn test_check_catalogs_root_flag() -> Result<()> {
    let test = CliTest::with_file("translations/drawpile_uk.ts", &ts_file("uk_UA", UK_BODY))?;
    test.write_file("other/broken_uk.ts", &ts_file("uk_UA", UK_SINGLE_FORM))?;

    let mut cmd = test.check_command();
    cmd.args(["--catalogs-root", "translations"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stdout:\n{}", output.stdout);
    assert!(output.stdout.contains("Checked 1 catalog, 2 messages"));
    Ok(())
}

#[test]
fn test_check_missing_catalogs_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.check_command();
    cmd.args(["--catalogs-root", "nope"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("does not exist"));
    Ok(())
}

#[test]
fn test_check_reports_each_empty_plural_form() -> Result<()> {
    let body = r#"<context>
    <name>A</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n файл</numerusform>
            <numerusform></numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("app_uk.ts", &ts_file("uk_UA", body))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout:\n{}", output.stdout);
    assert!(output.stdout.contains("warning: \"%n file(s)\"  empty-translation"));
    assert!(
        output
            .stdout
            .contains("= note: numerus form 1 of a finished translation is empty")
    );
    assert!(
        output
            .stdout
            .contains("= note: numerus form 2 of a finished translation is empty")
    );
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));
    Ok(())
}

#[test]
fn test_check_overflowing_relative_line_is_a_parse_error() -> Result<()> {
    let body = r#"<context>
    <name>A</name>
    <message>
        <location filename="x.cpp" line="5"/>
        <location line="+9223372036854775807"/>
        <source>Open</source>
        <translation>Відкрити</translation>
    </message>
</context>
"#;
    let test = CliTest::with_file("app_uk.ts", &ts_file("uk_UA", body))?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1), "stderr:\n{}", output.stderr);
    assert!(output.stdout.contains("parse-error"));
    assert!(
        output
            .stdout
            .contains(r#"invalid line="+9223372036854775807" on <location>"#)
    );
    Ok(())
}
