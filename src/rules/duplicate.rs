//! Duplicate message detection rule.
//!
//! Within one context, `(source, comment)` identifies a message. A second entry
//! with the same key can never be looked up, so it is reported at every
//! occurrence after the first.

use std::collections::HashMap;

use crate::{
    core::{Catalog, CatalogLocation, CheckContext, suppressions::is_suppressed},
    issues::{DuplicateMessageIssue, Rule},
    rules::helpers::{is_ignored_context, message_context, sort_by_location},
};

pub fn check_duplicate_message_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    check_duplicate_messages(ctx.catalogs(), ctx.ignore_contexts())
}

pub fn check_duplicate_messages(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        let mut first_seen: HashMap<(&str, &str, &str), CatalogLocation> = HashMap::new();
        // Suppressed messages still claim their key, so a later copy is reported.
        for (context, message) in catalog
            .active_messages()
            .filter(|(context, _)| !is_ignored_context(context, ignore_contexts))
        {
            let key = (
                context.name.as_str(),
                message.source.as_str(),
                message.comment_str(),
            );
            if let Some(first) = first_seen.get(&key) {
                if !is_suppressed(message, Rule::DuplicateMessage) {
                    issues.push(DuplicateMessageIssue {
                        context: message_context(catalog, context, message),
                        first: first.clone(),
                    });
                }
            } else {
                first_seen.insert(
                    key,
                    CatalogLocation::at(&catalog.file_path, message.source_position),
                );
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
