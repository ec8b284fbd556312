use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    cli::commands::{CatalogStats, LookupEntry},
    issues::{Issue, Report, ReportLocation},
};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "numerus-count")
    pub rule: Option<String>,
    /// Maximum number of items (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupMessageParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Context name, e.g. "QGuiApplication"
    pub context: String,
    /// Source text exactly as written in the catalog
    pub source: String,
    /// Disambiguating comment
    pub comment: Option<String>,
    /// Count used to pick a numerus form
    pub count: Option<i64>,
    /// Glob matched against catalog file names
    pub catalog: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub catalogs_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub disabled_rules: Vec<String>,
    pub include_unfinished: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            catalogs_root: c.catalogs_root,
            includes: c.includes,
            ignores: c.ignores,
            ignore_contexts: c.ignore_contexts,
            disabled_rules: c.disabled_rules,
            include_unfinished: c.include_unfinished,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub catalogs_dir: String,
    pub catalogs: Vec<CatalogInfo>,
    pub parse_errors: Vec<ParseErrorItem>,
}

/// A parsed catalog and its progress
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub family: String,
    /// Numerus forms required by the language, if known
    pub form_count: Option<usize>,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
}

impl CatalogInfo {
    pub fn new(family: String, stats: CatalogStats) -> Self {
        Self {
            file_path: stats.file_path,
            language: stats.language,
            family,
            form_count: stats.form_count,
            messages: stats.messages,
            finished: stats.finished,
            unfinished: stats.unfinished,
            obsolete: stats.obsolete,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub message_count: usize,
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// One entry per rule with at least one issue
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub total_count: usize,
    pub file_count: usize,
}

// ============================================================
// Issue Scan Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueScanResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// A single issue, flattened for JSON consumers
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (line, col, context, source) = match issue.location() {
            ReportLocation::Message(ctx) => (
                Some(ctx.line()),
                Some(ctx.col()),
                Some(ctx.context.clone()),
                Some(ctx.source.clone()),
            ),
            ReportLocation::File { .. } => (None, None, None, None),
        };

        Self {
            rule: issue.report_rule().to_string(),
            severity: issue.report_severity().to_string(),
            file_path: issue.file_path().to_string(),
            line,
            col,
            context,
            source,
            message: issue.message(),
            details: issue.details(),
            hint: issue.hint(),
        }
    }
}

// ============================================================
// Lookup Types (lookup_message)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub context: String,
    pub source: String,
    pub translated_count: usize,
    pub results: Vec<LookupItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub file_path: String,
    pub language: Option<String>,
    /// Translation, or the source text when `translated` is false
    pub text: String,
    pub translated: bool,
}

impl From<LookupEntry> for LookupItem {
    fn from(entry: LookupEntry) -> Self {
        Self {
            file_path: entry.file_path,
            language: entry.language,
            text: entry.text,
            translated: entry.translated,
        }
    }
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
