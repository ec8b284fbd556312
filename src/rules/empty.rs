//! Empty and unfinished translation rules.
//!
//! - `empty-translation`: marked finished but has no text, so the runtime shows
//!   the source string. A plural translation is reported once per empty form
//!   when the other forms are filled in.
//! - `unfinished-text`: has text but is still marked unfinished; usually a
//!   translator forgot to mark it done.

use crate::{
    core::{Catalog, CheckContext, TranslationKind},
    issues::{EmptyTranslationIssue, Rule, UnfinishedTextIssue},
    rules::helpers::{checked_messages, message_context, sort_by_location},
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    check_empty_translations(ctx.catalogs(), ctx.ignore_contexts())
}

pub fn check_empty_translations(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<EmptyTranslationIssue> {
    let mut issues: Vec<EmptyTranslationIssue> = catalogs
        .iter()
        .flat_map(|catalog| {
            checked_messages(catalog, ignore_contexts, Rule::EmptyTranslation)
                .filter(|(_, message)| {
                    message.translation.kind == TranslationKind::Finished
                        && !message.source.is_empty()
                })
                .flat_map(move |(context, message)| {
                    let translation = &message.translation;
                    let forms: Vec<Option<usize>> = if translation.is_empty() {
                        vec![None]
                    } else if translation.is_plural() {
                        empty_forms(translation.forms()).map(Some).collect()
                    } else {
                        Vec::new()
                    };
                    forms.into_iter().map(move |form| EmptyTranslationIssue {
                        context: message_context(catalog, context, message),
                        numerus: translation.is_plural(),
                        form,
                    })
                })
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}

fn empty_forms(forms: &[String]) -> impl Iterator<Item = usize> + '_ {
    forms
        .iter()
        .enumerate()
        .filter(|(_, form)| form.is_empty())
        .map(|(i, _)| i)
}

pub fn check_unfinished_text_issues(ctx: &CheckContext) -> Vec<UnfinishedTextIssue> {
    check_unfinished_texts(ctx.catalogs(), ctx.ignore_contexts())
}

pub fn check_unfinished_texts(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<UnfinishedTextIssue> {
    let mut issues: Vec<UnfinishedTextIssue> = catalogs
        .iter()
        .flat_map(|catalog| {
            checked_messages(catalog, ignore_contexts, Rule::UnfinishedText)
                .filter(|(_, message)| {
                    message.translation.kind == TranslationKind::Unfinished
                        && !message.translation.is_empty()
                })
                .map(move |(context, message)| UnfinishedTextIssue {
                    context: message_context(catalog, context, message),
                    text: first_text(message.translation.forms()),
                })
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}

fn first_text(forms: &[String]) -> String {
    forms
        .iter()
        .find(|form| !form.is_empty())
        .cloned()
        .unwrap_or_default()
}
