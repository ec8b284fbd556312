//! Missing message detection rule.
//!
//! Catalogs of one family (`drawpile_vi.ts`, `drawpile_uk.ts`, ...) are produced
//! from the same sources, so they should carry the same message keys. A key
//! present in one sibling but absent (or only obsolete) in another means that
//! catalog was not regenerated.

use std::collections::{BTreeMap, HashSet};

use crate::{
    core::{Catalog, CheckContext, MessageKey},
    issues::{MissingMessageIssue, Rule},
    rules::helpers::{checked_messages, is_ignored_context, message_context, sort_by_location},
};

pub fn check_missing_message_issues(ctx: &CheckContext) -> Vec<MissingMessageIssue> {
    check_missing_messages(ctx.catalogs(), ctx.ignore_contexts())
}

/// Group catalogs by [`Catalog::family`], keeping only families with siblings.
pub fn families(catalogs: &[Catalog]) -> BTreeMap<String, Vec<&Catalog>> {
    let mut by_family: BTreeMap<String, Vec<&Catalog>> = BTreeMap::new();
    for catalog in catalogs {
        by_family.entry(catalog.family()).or_default().push(catalog);
    }
    by_family.retain(|_, members| members.len() > 1);
    by_family
}

/// Report each key once, at the first catalog (by path) that has it.
pub fn check_missing_messages(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<MissingMessageIssue> {
    let mut issues = Vec::new();

    for (family, mut members) in families(catalogs) {
        members.sort_by(|a, b| a.file_path.cmp(&b.file_path));

        let present: Vec<HashSet<MessageKey>> = members
            .iter()
            .map(|catalog| {
                catalog
                    .active_messages()
                    .filter(|(context, _)| !is_ignored_context(context, ignore_contexts))
                    .map(|(context, message)| message.key(&context.name))
                    .collect()
            })
            .collect();

        let mut seen: HashSet<MessageKey> = HashSet::new();
        for catalog in &members {
            for (context, message) in
                checked_messages(catalog, ignore_contexts, Rule::MissingMessage)
            {
                let key = message.key(&context.name);
                if !seen.insert(key.clone()) {
                    continue;
                }

                let missing_in: Vec<String> = members
                    .iter()
                    .zip(&present)
                    .filter(|(_, keys)| !keys.contains(&key))
                    .map(|(sibling, _)| sibling.file_path.clone())
                    .collect();

                if !missing_in.is_empty() {
                    issues.push(MissingMessageIssue {
                        context: message_context(catalog, context, message),
                        family: family.clone(),
                        missing_in,
                    });
                }
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
