//! Clean command - remove obsolete and vanished entries.
//!
//! Use `--apply` to rewrite catalogs (default is dry-run mode).

use std::collections::HashSet;

use anyhow::Result;

use super::super::{
    actions::{Action, RemoveObsolete},
    args::CleanCommand,
};
use super::helper::{finish, parse_error_issues};
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::ObsoleteMessageIssue,
    rules::obsolete::check_obsolete_message_issues,
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let obsolete_issues: Vec<ObsoleteMessageIssue> = check_obsolete_message_issues(&ctx);
    let obsolete_count = obsolete_issues.len();

    let (applied_count, file_count) = if apply && !obsolete_issues.is_empty() {
        let stats = RemoveObsolete::run(&obsolete_issues)?;
        (stats.changes_applied, stats.files_modified)
    } else {
        let files: HashSet<&str> = obsolete_issues
            .iter()
            .map(|issue| issue.context.file_path())
            .collect();
        (0, files.len())
    };

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            obsolete_count,
            applied_count,
            file_count,
            is_apply: apply,
            obsolete_issues,
        }),
        parse_error_issues(&ctx),
        &ctx,
    ))
}
