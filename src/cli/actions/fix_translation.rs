//! FixTranslation action.
//!
//! Resets translations that would misbehave at runtime so translators pick
//! them up again. Used by the `tsglot fix` command.
//!
//! - Empty finished translations, or finished plurals with an empty form, are
//!   marked unfinished once per message.
//! - Numerus form lists are resized to the language's form count and marked
//!   unfinished. Existing forms are kept.

use super::operation::Operation;
use super::traits::Action;
use crate::issues::{EmptyTranslationIssue, NumerusCountIssue};

pub struct FixTranslation;

impl Action<EmptyTranslationIssue> for FixTranslation {
    fn to_operations(issues: &[EmptyTranslationIssue]) -> Vec<Operation> {
        // Issues are sorted by location, so forms of one message are adjacent.
        let mut ops: Vec<Operation> = issues
            .iter()
            .map(|issue| Operation::MarkUnfinished {
                context: issue.context.clone(),
            })
            .collect();
        ops.dedup();
        ops
    }
}

impl Action<NumerusCountIssue> for FixTranslation {
    fn to_operations(issues: &[NumerusCountIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::ResizeForms {
                context: issue.context.clone(),
                count: issue.expected,
            })
            .collect()
    }
}
