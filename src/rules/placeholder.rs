//! Placeholder mismatch rule.
//!
//! `%1`..`%99` and `%n` in the source must reappear in every non-empty
//! translated form, and a translation must not invent new ones. Numerus forms
//! may omit `%n`.

use crate::{
    core::{Catalog, CheckContext},
    issues::{PlaceholderMismatchIssue, Rule},
    rules::helpers::{checked_messages, message_context, sort_by_location},
    utils::placeholder_diff,
};

pub fn check_placeholder_mismatch_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    check_placeholder_mismatches(ctx.catalogs(), ctx.ignore_contexts())
}

pub fn check_placeholder_mismatches(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (context, message) in
            checked_messages(catalog, ignore_contexts, Rule::PlaceholderMismatch)
        {
            for (form, text) in message.translation.forms().iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                let (missing, extra) = placeholder_diff(&message.source, text, message.numerus);
                if missing.is_empty() && extra.is_empty() {
                    continue;
                }
                issues.push(PlaceholderMismatchIssue {
                    context: message_context(catalog, context, message),
                    form,
                    numerus: message.numerus,
                    missing,
                    extra,
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
