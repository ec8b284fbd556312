//! RemoveObsolete action.
//!
//! Drops obsolete and vanished entries from catalogs.
//! Used by the `tsglot clean` command.

use super::operation::Operation;
use super::traits::Action;
use crate::issues::ObsoleteMessageIssue;

pub struct RemoveObsolete;

impl Action<ObsoleteMessageIssue> for RemoveObsolete {
    fn to_operations(issues: &[ObsoleteMessageIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::RemoveMessage {
                context: issue.context.clone(),
                kind: issue.kind,
            })
            .collect()
    }
}
