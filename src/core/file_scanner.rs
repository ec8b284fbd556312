use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths (prefix match).
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled include/ignore list.
#[derive(Debug, Default)]
struct PathFilter {
    literals: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl PathFilter {
    fn new(patterns: &[String]) -> Self {
        let mut filter = Self::default();
        for p in patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => filter.globs.push(pattern),
                    Err(e) => warn!("invalid glob pattern '{}': {}", p, e),
                }
            } else {
                let literal = p.trim_start_matches("./").trim_end_matches('/');
                let literal = if literal == "." { "" } else { literal };
                filter.literals.push(PathBuf::from(literal));
            }
        }
        filter
    }

    fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.globs.is_empty()
    }

    /// `relative` is the path below the scan root.
    fn matches(&self, relative: &Path) -> bool {
        if self
            .literals
            .iter()
            .any(|literal| literal.as_os_str().is_empty() || relative.starts_with(literal))
        {
            return true;
        }
        let as_str = relative.to_string_lossy().replace('\\', "/");
        self.globs
            .iter()
            .any(|p| p.matches_with(&as_str, MATCH_OPTIONS))
    }
}

/// Result of scanning for catalog files.
pub struct ScanResult {
    /// Catalog candidates in sorted order.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Collect `.ts` files below `base_dir` that match `includes` and not `ignores`.
///
/// Patterns are matched against the path relative to `base_dir`. A pattern
/// without wildcards matches a file or directory prefix.
pub fn scan_files(base_dir: &Path, includes: &[String], ignores: &[String]) -> ScanResult {
    let include_filter = PathFilter::new(includes);
    let ignore_filter = PathFilter::new(ignores);
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(base_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != ".git");

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                warn!("cannot access path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_catalog_candidate(entry.path()) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(base_dir).unwrap_or(path);

        if ignore_filter.matches(relative) {
            debug!("ignored: {}", path.display());
            continue;
        }
        if !include_filter.is_empty() && !include_filter.matches(relative) {
            continue;
        }

        files.insert(path.to_string_lossy().into_owned());
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn is_catalog_candidate(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("ts"))
}
