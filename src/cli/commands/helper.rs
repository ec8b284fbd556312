use super::{CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::{Issue, Severity},
};

/// Build a [`CommandResult`], counting severities over `issues`.
pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>, ctx: &CheckContext) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    let catalogs = ctx.catalogs();
    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        parse_error_count,
        catalogs_checked: catalogs.len(),
        messages_checked: catalogs.iter().map(|c| c.message_count()).sum(),
    }
}

/// Parse errors wrapped as issues, for commands that do not run rules.
pub fn parse_error_issues(ctx: &CheckContext) -> Vec<Issue> {
    ctx.parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect()
}
