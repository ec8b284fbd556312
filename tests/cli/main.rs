use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod clean;
mod init;
mod lookup;
mod stats;

const BIN_NAME: &str = "tsglot";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

/// Captured result of one binary invocation.
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn lookup_command(&self, context: &str, source: &str) -> Command {
        let mut cmd = self.command();
        cmd.args(["lookup", context, source]);
        cmd
    }

    pub fn clean_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clean");
        cmd
    }

    pub fn fix_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fix");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn run(mut cmd: Command) -> Result<RunOutput> {
    let output = cmd.output().context("Failed to run tsglot")?;
    Ok(RunOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}

/// Wrap context blocks in the header lupdate writes.
pub fn ts_file(language: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{}\">\n{}</TS>\n",
        language, body
    )
}

pub const VI_BODY: &str = r#"<context>
    <name>QGuiApplication</name>
    <message>
        <location filename="../src/desktop/main.cpp" line="120"/>
        <source>All Files (*)</source>
        <translation>Mọi tập tin (*)</translation>
    </message>
    <message numerus="yes">
        <location line="+12"/>
        <source>%n layer(s)</source>
        <translation>
            <numerusform>%n lớp</numerusform>
        </translation>
    </message>
</context>
"#;

pub const UK_BODY: &str = r#"<context>
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
            <numerusform>%n шари</numerusform>
            <numerusform>%n шарів</numerusform>
        </translation>
    </message>
</context>
"#;

/// A Vietnamese and a Ukrainian catalog with no problems.
pub fn clean_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("i18n/drawpile_vi.ts", &ts_file("vi_VN", VI_BODY))?;
    test.write_file("i18n/drawpile_uk.ts", &ts_file("uk_UA", UK_BODY))?;
    Ok(test)
}
