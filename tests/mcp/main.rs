use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with an `i18n/` directory of `.ts` catalogs
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("i18n"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with catalogs
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("drawpile_vi.ts", "vi_VN", VI_BODY),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: Vec<(&str, &str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (file_name, language, body) in catalogs {
            fixture.write_catalog(file_name, language, body)?;
        }
        Ok(fixture)
    }

    /// Write `i18n/<file_name>` with the lupdate header around `body`
    pub fn write_catalog(&self, file_name: &str, language: &str, body: &str) -> Result<()> {
        let path = self.project_root.join("i18n").join(file_name);
        let content = format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{}\">\n{}</TS>\n",
            language, body
        );
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    /// Write raw content to `i18n/<file_name>`
    pub fn write_raw(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("i18n").join(file_name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .tsglotrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tsglotrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

pub const VI_BODY: &str = r#"<context>
    <name>QGuiApplication</name>
    <message>
        <source>All Files (*)</source>
        <translation>Mọi tập tin (*)</translation>
    </message>
    <message numerus="yes">
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
        <source>All Files (*)</source>
        <translation type="unfinished"></translation>
    </message>
    <message numerus="yes">
        <source>%n layer(s)</source>
        <translation>
            <numerusform>%n шар</numerusform>
        </translation>
    </message>
    <message>
        <source>Old</source>
        <translation type="vanished">Старе</translation>
    </message>
</context>
"#;

/// A clean Vietnamese catalog and a Ukrainian one with a single numerus form
/// and a vanished entry
pub fn fixture_drawpile() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![
        ("drawpile_vi.ts", "vi_VN", VI_BODY),
        ("drawpile_uk.ts", "uk_UA", UK_BODY),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
