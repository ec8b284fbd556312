//! Accelerator (mnemonic) mismatch rule.
//!
//! `&File` in a menu label gives Alt+F. When the source has a mnemonic and the
//! translation drops it, keyboard users lose the shortcut; the reverse usually
//! means a stray `&`. Rich text is skipped because HTML entities look like
//! mnemonics.

use crate::{
    core::{Catalog, CheckContext},
    issues::{AcceleratorMismatchIssue, Rule},
    rules::helpers::{checked_messages, message_context, sort_by_location},
    utils::{contains_alphabetic, has_accelerator, is_rich_text},
};

pub fn check_accelerator_mismatch_issues(ctx: &CheckContext) -> Vec<AcceleratorMismatchIssue> {
    check_accelerator_mismatches(ctx.catalogs(), ctx.ignore_contexts())
}

pub fn check_accelerator_mismatches(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<AcceleratorMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (context, message) in
            checked_messages(catalog, ignore_contexts, Rule::AcceleratorMismatch)
        {
            if is_rich_text(&message.source) {
                continue;
            }
            let source_has = has_accelerator(&message.source);

            let mismatch = message.translation.forms().iter().find(|text| {
                !text.is_empty()
                    && contains_alphabetic(text)
                    && !is_rich_text(text)
                    && has_accelerator(text) != source_has
            });

            if let Some(text) = mismatch {
                issues.push(AcceleratorMismatchIssue {
                    context: message_context(catalog, context, message),
                    source_has_accelerator: source_has,
                    translation: text.clone(),
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
