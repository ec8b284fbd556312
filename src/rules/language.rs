//! Catalogs whose `language` attribute is missing or has no numerus rule.
//!
//! Without a rule the numerus-count check cannot know how many forms to expect
//! and skips the catalog, so the gap is surfaced here instead.

use crate::{
    core::{Catalog, CheckContext, plural::plural_rule},
    issues::UnknownLanguageIssue,
};

pub fn check_unknown_language_issues(ctx: &CheckContext) -> Vec<UnknownLanguageIssue> {
    check_unknown_languages(ctx.catalogs())
}

pub fn check_unknown_languages(catalogs: &[Catalog]) -> Vec<UnknownLanguageIssue> {
    let mut issues: Vec<UnknownLanguageIssue> = catalogs
        .iter()
        .filter_map(|catalog| {
            let language = catalog
                .language
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty());
            match language {
                Some(language) if plural_rule(language).is_some() => None,
                _ => Some(UnknownLanguageIssue {
                    file_path: catalog.file_path.clone(),
                    language: language.map(String::from),
                }),
            }
        })
        .collect();

    issues.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    issues
}
