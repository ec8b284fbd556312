//! Rule implementations for tsglot.
//!
//! Each rule is a pure function over parsed catalogs that returns its own
//! issue type. The `check_*_issues(ctx)` wrappers pull inputs from a
//! [`CheckContext`]; the plain `check_*` functions take only what they need.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared filtering and sorting (ignored contexts, suppressions)
//! - `duplicate`: Same key twice in one context
//! - `numerus`: Numerus form count against the language's plural rule
//! - `empty`: Empty finished translations and unfinished ones with text
//! - `location`: Malformed `<location>` records
//! - `placeholder`: `%1`/`%n` markers lost or invented by the translation
//! - `accelerator`: `&x` mnemonics lost or invented by the translation
//! - `missing`: Keys absent from sibling catalogs of the same family
//! - `obsolete`: Obsolete and vanished entries
//! - `language`: Missing or unknown `language` attribute

pub mod accelerator;
pub mod duplicate;
pub mod empty;
pub mod helpers;
pub mod language;
pub mod location;
pub mod missing;
pub mod numerus;
pub mod obsolete;
pub mod placeholder;

use tracing::debug;

use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
};

/// Run one rule and wrap its findings as [`Issue`]s.
///
/// Parse failures are not a rule; callers add [`CheckContext::parse_errors`].
pub fn run_rule(ctx: &CheckContext, rule: Rule) -> Vec<Issue> {
    let issues: Vec<Issue> = match rule {
        Rule::DuplicateMessage => duplicate::check_duplicate_message_issues(ctx)
            .into_iter()
            .map(Issue::DuplicateMessage)
            .collect(),
        Rule::NumerusCount => numerus::check_numerus_count_issues(ctx)
            .into_iter()
            .map(Issue::NumerusCount)
            .collect(),
        Rule::EmptyTranslation => empty::check_empty_translation_issues(ctx)
            .into_iter()
            .map(Issue::EmptyTranslation)
            .collect(),
        Rule::UnfinishedText => empty::check_unfinished_text_issues(ctx)
            .into_iter()
            .map(Issue::UnfinishedText)
            .collect(),
        Rule::InvalidLocation => location::check_invalid_location_issues(ctx)
            .into_iter()
            .map(Issue::InvalidLocation)
            .collect(),
        Rule::PlaceholderMismatch => placeholder::check_placeholder_mismatch_issues(ctx)
            .into_iter()
            .map(Issue::PlaceholderMismatch)
            .collect(),
        Rule::AcceleratorMismatch => accelerator::check_accelerator_mismatch_issues(ctx)
            .into_iter()
            .map(Issue::AcceleratorMismatch)
            .collect(),
        Rule::MissingMessage => missing::check_missing_message_issues(ctx)
            .into_iter()
            .map(Issue::MissingMessage)
            .collect(),
        Rule::ObsoleteMessage => obsolete::check_obsolete_message_issues(ctx)
            .into_iter()
            .map(Issue::ObsoleteMessage)
            .collect(),
        Rule::UnknownLanguage => language::check_unknown_language_issues(ctx)
            .into_iter()
            .map(Issue::UnknownLanguage)
            .collect(),
        Rule::ParseError => Vec::new(),
    };
    debug!("{}: {} issue(s)", rule, issues.len());
    issues
}

/// Run the requested rules (all rules when empty), skipping ones disabled in
/// the config, and append parse errors. The result is sorted.
pub fn run_rules(ctx: &CheckContext, rules: &[Rule]) -> Vec<Issue> {
    let mut selected: Vec<Rule> = if rules.is_empty() {
        Rule::all()
    } else {
        rules.to_vec()
    };
    selected.sort();
    selected.dedup();

    let mut issues: Vec<Issue> = selected
        .into_iter()
        .filter(|rule| ctx.is_rule_enabled(*rule))
        .flat_map(|rule| run_rule(ctx, rule))
        .collect();

    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
    issues.sort();
    issues
}
