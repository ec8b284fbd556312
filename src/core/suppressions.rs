//! Per-message suppression directives.
//!
//! Translators silence rules for a single message from the translator comment:
//!
//! ```text
//! <translatorcomment>tsglot-disable</translatorcomment>
//! <translatorcomment>Intentional. tsglot-disable accelerator-mismatch, placeholder-mismatch</translatorcomment>
//! ```
//!
//! Without rule names every rule is disabled. Unknown names are ignored.

use std::collections::HashSet;

use crate::{core::Message, issues::Rule};

pub const DISABLE_DIRECTIVE: &str = "tsglot-disable";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Suppressions {
    #[default]
    None,
    All,
    Rules(HashSet<Rule>),
}

impl Suppressions {
    pub fn parse(comment: &str) -> Self {
        let Some(start) = comment.find(DISABLE_DIRECTIVE) else {
            return Suppressions::None;
        };
        let rest = &comment[start + DISABLE_DIRECTIVE.len()..];
        // `tsglot-disabled` is not the directive.
        if rest
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace() && c != ':')
        {
            return Suppressions::None;
        }

        let rest = rest.trim_start_matches(':');
        let line = rest.lines().next().unwrap_or("");
        let names: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if names.is_empty() {
            return Suppressions::All;
        }

        let rules: HashSet<Rule> = names.iter().filter_map(|name| Rule::parse(name)).collect();
        if rules.is_empty() {
            // Free text after the directive, e.g. "tsglot-disable because ..."
            Suppressions::All
        } else {
            Suppressions::Rules(rules)
        }
    }

    pub fn for_message(message: &Message) -> Self {
        message
            .translator_comment
            .as_deref()
            .map(Self::parse)
            .unwrap_or_default()
    }

    pub fn is_suppressed(&self, rule: Rule) -> bool {
        match self {
            Suppressions::None => false,
            Suppressions::All => true,
            Suppressions::Rules(rules) => rules.contains(&rule),
        }
    }
}

/// Shorthand used by rules.
pub fn is_suppressed(message: &Message, rule: Rule) -> bool {
    message
        .translator_comment
        .as_deref()
        .is_some_and(|comment| Suppressions::parse(comment).is_suppressed(rule))
}
