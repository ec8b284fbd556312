//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::operation::Operation;
use crate::core::{parsers::parse_catalog_file, writer::save_catalog};

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of issues processed.
    pub processed: usize,
    /// Number of operations whose message was no longer in the file.
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}

/// Action trait - converts Issues into Operations and executes them.
///
/// ```ignore
/// if apply {
///     RemoveObsolete::run(&issues)?;
/// } else {
///     RemoveObsolete::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (rewrite catalogs).
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview(issues: &[I]) {
        let ops = Self::to_operations(issues);
        for op in &ops {
            op.preview();
        }
    }
}

/// Apply operations file by file: parse, edit, write back once.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut ops_by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        ops_by_file.entry(op.file_path()).or_default().push(op);
    }

    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };

    for (file_path, file_ops) in ops_by_file {
        let path = Path::new(file_path);
        let mut catalog = parse_catalog_file(path)
            .with_context(|| format!("Failed to re-read catalog: {}", file_path))?;

        let mut applied = 0;
        for op in file_ops {
            if op.apply(&mut catalog) {
                applied += 1;
            } else {
                warn!(
                    "{}: message {} not found, skipping",
                    file_path,
                    op.context().qualified_key()
                );
                stats.skipped += 1;
            }
        }

        if applied > 0 {
            save_catalog(&catalog, path)?;
            debug!("{}: {} change(s) written", file_path, applied);
            stats.changes_applied += applied;
            stats.files_modified += 1;
        }
    }

    Ok(stats)
}
