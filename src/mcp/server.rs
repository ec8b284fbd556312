use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::Result;
use glob::Pattern;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::commands::{lookup::lookup_in, stats::catalog_stats},
    config::load_config,
    core::{CheckContext, MessageKey},
    issues::{Issue, Rule, Severity},
    rules::run_rules,
};

use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetCatalogsParams, GetConfigParams,
    IssueItem, IssueScanResult, LookupItem, LookupMessageParams, LookupResult, Pagination,
    ParseErrorItem, RuleStats, ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
};

#[derive(Clone)]
pub struct TsglotMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsglotMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TsglotMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tsglot configuration
    #[tool(description = "Get the current tsglot configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file(),
            config_path: result
                .path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            config: ConfigValues::from(result.config),
        };

        to_tool_result(&config_dto)
    }

    /// List catalogs with language, family and progress
    #[tool(
        description = "List the .ts catalogs of the project with their language, family, numerus form count and message counts. Catalogs that fail to parse are listed under parseErrors."
    )]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = open_context(&params.0.project_root_path)?;

        let catalogs = ctx
            .catalogs()
            .iter()
            .map(|catalog| CatalogInfo::new(catalog.family(), catalog_stats(catalog)))
            .collect();

        let parse_errors = ctx
            .parse_errors()
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();

        let result = CatalogsResult {
            catalogs_dir: ctx.catalogs_dir.to_string_lossy().to_string(),
            catalogs,
            parse_errors,
        };

        to_tool_result(&result)
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get issue counts per rule without detailed items. Use this first to understand the overall state before diving into details with scan_issues."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = open_context(&params.0.project_root_path)?;
        let issues = run_rules(&ctx, &[]);

        let mut per_rule: BTreeMap<Rule, (usize, HashSet<&str>)> = BTreeMap::new();
        for issue in &issues {
            let entry = per_rule.entry(issue.rule()).or_default();
            entry.0 += 1;
            entry.1.insert(issue.file_path());
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        let overview = ScanOverviewResult {
            catalog_count: ctx.catalogs().len(),
            message_count: ctx.catalogs().iter().map(|c| c.message_count()).sum(),
            total_count: issues.len(),
            error_count,
            warning_count: issues.len() - error_count,
            rules: per_rule
                .into_iter()
                .map(|(rule, (total_count, files))| RuleStats {
                    rule: rule.to_string(),
                    severity: rule.severity().to_string(),
                    total_count,
                    file_count: files.len(),
                })
                .collect(),
        };

        to_tool_result(&overview)
    }

    /// Scan for issues, optionally restricted to one rule
    #[tool(
        description = "Scan catalogs for issues. Optionally filter by rule name (e.g. numerus-count, placeholder-mismatch). Returns a paginated list sorted by file and line."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let rules = match params.0.rule.as_deref() {
            Some(name) => vec![parse_rule(name)?],
            None => Vec::new(),
        };

        let ctx = open_context(&params.0.project_root_path)?;
        let mut issues = run_rules(&ctx, &rules);
        // Parse errors are always attached; keep them only when asked for.
        if !rules.is_empty() {
            issues.retain(|issue| rules.contains(&issue.rule()));
        }

        let total_count = issues.len();
        let total_file_count = issues
            .iter()
            .map(Issue::file_path)
            .collect::<HashSet<_>>()
            .len();

        // Apply pagination
        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();

        let has_more = offset + items.len() < total_count;

        let scan_result = IssueScanResult {
            total_count,
            total_file_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_tool_result(&scan_result)
    }

    /// Resolve one message in every catalog
    #[tool(
        description = "Look up the translation of a message (context + source text, optional comment and count) in every catalog. Falls back to the source text, with translated=false, where no usable translation exists."
    )]
    pub async fn lookup_message(
        &self,
        params: Parameters<LookupMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let filter = params
            .catalog
            .as_deref()
            .map(|glob| {
                Pattern::new(glob).map_err(|e| {
                    McpError::invalid_params(format!("Invalid catalog glob \"{}\": {}", glob, e), None)
                })
            })
            .transpose()?;

        let ctx = open_context(&params.project_root_path)?;
        let key = MessageKey::new(
            params.context.as_str(),
            params.source.as_str(),
            params.comment.as_deref().unwrap_or(""),
        );
        let results: Vec<LookupItem> = lookup_in(
            ctx.catalogs(),
            filter.as_ref(),
            ctx.config.include_unfinished,
            &key,
            params.count,
        )
        .into_iter()
        .map(LookupItem::from)
        .collect();

        let result = LookupResult {
            context: params.context,
            source: params.source,
            translated_count: results.iter().filter(|r| r.translated).count(),
            results,
        };

        to_tool_result(&result)
    }
}

fn open_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    debug!("opening project {}", project_root_path);
    CheckContext::with_options(Path::new(project_root_path), None, false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

/// Any checkable rule, plus `parse-error`.
fn parse_rule(name: &str) -> Result<Rule, McpError> {
    let parse_error = Rule::ParseError.as_str();
    let rule = Rule::parse(name).or_else(|| (name.trim() == parse_error).then_some(Rule::ParseError));
    rule.ok_or_else(|| {
        let mut known: Vec<&str> = Rule::all().iter().map(|r| r.as_str()).collect();
        known.push(parse_error);
        McpError::invalid_params(
            format!("Unknown rule \"{}\". Known rules: {}", name, known.join(", ")),
            None,
        )
    })
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for TsglotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsglot MCP helps AI agents review Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - List catalogs with language, family and progress\n\
                 3. scan_overview - Get issue counts per rule\n\
                 4. scan_issues - Get detailed issues, optionally for one rule (paginated)\n\
                 5. lookup_message - Resolve a message in every catalog\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix parse-error and other error-severity rules first\n\
                 3. Then review warnings such as missing-message and accelerator-mismatch\n\n\
                 Catalogs are generated by lupdate: edit translations, never source texts."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsglotMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
