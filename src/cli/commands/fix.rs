//! Fix command - reset broken translations to unfinished.
//!
//! Fixes two kinds of issues:
//! - `empty-translation`: finished but empty (or with an empty numerus form),
//!   marked unfinished
//! - `numerus-count`: form list resized to the language's count, marked unfinished
//!
//! Both kinds are applied in one pass per catalog, since rewriting a file
//! moves every message after it.
//!
//! Use `--apply` to rewrite catalogs (default is dry-run mode).

use std::collections::HashSet;

use anyhow::Result;

use super::super::{
    actions::{Action, FixTranslation, Operation, execute_operations},
    args::FixCommand,
};
use super::helper::{finish, parse_error_issues};
use super::{CommandResult, CommandSummary, FixSummary};
use crate::{
    core::CheckContext,
    issues::Rule,
    rules::{empty::check_empty_translation_issues, numerus::check_numerus_count_issues},
};

pub fn fix(cmd: FixCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let empty_issues = if ctx.is_rule_enabled(Rule::EmptyTranslation) {
        check_empty_translation_issues(&ctx)
    } else {
        Vec::new()
    };
    let numerus_issues = if ctx.is_rule_enabled(Rule::NumerusCount) {
        check_numerus_count_issues(&ctx)
    } else {
        Vec::new()
    };

    let (applied_count, file_count) = if apply {
        let mut ops: Vec<Operation> = FixTranslation::to_operations(&empty_issues);
        ops.extend(FixTranslation::to_operations(&numerus_issues));
        let stats = execute_operations(&ops)?;
        (stats.changes_applied, stats.files_modified)
    } else {
        let files: HashSet<&str> = empty_issues
            .iter()
            .map(|issue| issue.context.file_path())
            .chain(numerus_issues.iter().map(|issue| issue.context.file_path()))
            .collect();
        (0, files.len())
    };

    Ok(finish(
        CommandSummary::Fix(FixSummary {
            empty_count: FixTranslation::to_operations(&empty_issues).len(),
            numerus_count: numerus_issues.len(),
            applied_count,
            file_count,
            is_apply: apply,
            empty_issues,
            numerus_issues,
        }),
        parse_error_issues(&ctx),
        &ctx,
    ))
}
