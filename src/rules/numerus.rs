//! Numerus form count rule.
//!
//! A numerus message must carry exactly as many `<numerusform>` entries as the
//! catalog language has plural forms (Vietnamese 1, Ukrainian 3, ...).

use crate::{
    core::{Catalog, CheckContext, TranslationKind, TranslationText, plural::plural_rule},
    issues::{NumerusCountIssue, NumerusProblem, Rule},
    rules::helpers::{checked_messages, message_context, sort_by_location},
};

pub fn check_numerus_count_issues(ctx: &CheckContext) -> Vec<NumerusCountIssue> {
    check_numerus_counts(ctx.catalogs(), ctx.ignore_contexts())
}

/// Check numerus form counts against each catalog's plural rule.
///
/// Catalogs without a known language only get the structural checks
/// (plural forms on a non-numerus message).
pub fn check_numerus_counts(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<NumerusCountIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        let language = catalog.language.clone().unwrap_or_default();
        let expected = catalog
            .language
            .as_deref()
            .and_then(plural_rule)
            .map(|rule| rule.form_count());

        for (context, message) in checked_messages(catalog, ignore_contexts, Rule::NumerusCount) {
            let translation = &message.translation;
            let problem = match (&translation.text, message.numerus, expected) {
                (TranslationText::Plural(forms), false, _) => {
                    Some((NumerusProblem::NotNumerus, 1, forms.len()))
                }
                (TranslationText::Plural(forms), true, Some(expected))
                    if forms.len() != expected =>
                {
                    Some((NumerusProblem::WrongCount, expected, forms.len()))
                }
                (TranslationText::Single(text), true, Some(expected)) => {
                    let untouched =
                        text.is_empty() && translation.kind == TranslationKind::Unfinished;
                    (!untouched).then_some((NumerusProblem::NoForms, expected, 1))
                }
                _ => None,
            };

            if let Some((problem, expected, found)) = problem {
                issues.push(NumerusCountIssue {
                    context: message_context(catalog, context, message),
                    problem,
                    language: language.clone(),
                    expected,
                    found,
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
