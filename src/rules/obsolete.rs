//! Obsolete and vanished entries.
//!
//! `lupdate` keeps strings that disappeared from the code so their translations
//! can be reused. They are dead weight once nobody needs them; `tsglot clean`
//! removes them.

use crate::{
    core::{Catalog, CheckContext, suppressions},
    issues::{ObsoleteMessageIssue, Rule},
    rules::helpers::{is_ignored_context, message_context, sort_by_location},
};

pub fn check_obsolete_message_issues(ctx: &CheckContext) -> Vec<ObsoleteMessageIssue> {
    check_obsolete_messages(ctx.catalogs(), ctx.ignore_contexts())
}

pub fn check_obsolete_messages(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<ObsoleteMessageIssue> {
    let mut issues: Vec<ObsoleteMessageIssue> = catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .messages()
                .filter(|(context, message)| {
                    message.translation.kind.is_dead()
                        && !is_ignored_context(context, ignore_contexts)
                        && !suppressions::is_suppressed(message, Rule::ObsoleteMessage)
                })
                .map(move |(context, message)| ObsoleteMessageIssue {
                    context: message_context(catalog, context, message),
                    kind: message.translation.kind,
                })
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
