use std::{
    cell::OnceCell,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        Catalog,
        file_scanner::scan_files,
        parsers::{looks_like_catalog, parse_catalog},
    },
    issues::{ParseErrorIssue, Rule},
};

/// Catalogs loaded from disk, plus the files that failed.
#[derive(Debug, Default)]
pub struct LoadedCatalogs {
    /// Successfully parsed catalogs, sorted by file path.
    pub catalogs: Vec<Catalog>,
    pub parse_errors: Vec<ParseErrorIssue>,
    /// `.ts` files that are not Qt catalogs (TypeScript sources and the like).
    pub skipped: Vec<String>,
}

/// Everything a command needs to run rules over a project.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--catalogs-root i18n`)
/// 2. `.tsglotrc.json` config file
/// 3. Built-in defaults
///
/// Catalogs are read lazily on first access, so commands that only need the
/// configuration never touch the files.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Where the config file was found, `None` when using defaults.
    pub config_path: Option<PathBuf>,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Directory scanned for catalogs.
    pub catalogs_dir: PathBuf,

    /// Candidate `.ts` files, sorted.
    pub files: Vec<String>,

    pub verbose: bool,

    loaded: OnceCell<LoadedCatalogs>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the catalogs root does not exist.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        Self::with_options(
            &common_args.path,
            common_args.catalogs_root.as_deref(),
            common_args.verbose,
        )
    }

    /// Create a context rooted at `root_dir`, optionally overriding `catalogsRoot`.
    pub fn with_options(
        root_dir: &Path,
        catalogs_root: Option<&Path>,
        verbose: bool,
    ) -> Result<Self> {
        let config_result = load_config(root_dir)?;
        match &config_result.path {
            Some(path) => debug!("using config file {}", path.display()),
            None => info!("no config file found, using default configuration"),
        }

        let mut config = config_result.config;
        if let Some(catalogs_root) = catalogs_root {
            config.catalogs_root = catalogs_root.to_string_lossy().to_string();
        }

        let catalogs_dir = resolve_dir(root_dir, &config.catalogs_root);
        if !catalogs_dir.is_dir() {
            bail!(
                "Catalogs root '{}' does not exist or is not a directory",
                catalogs_dir.display()
            );
        }

        let scan_result = scan_files(&catalogs_dir, &config.includes, &config.ignores);
        if scan_result.skipped_count > 0 {
            warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }
        debug!(
            "found {} candidate file(s) under {}",
            scan_result.files.len(),
            catalogs_dir.display()
        );

        Ok(Self {
            config,
            config_path: config_result.path,
            root_dir: root_dir.to_path_buf(),
            catalogs_dir,
            files: scan_result.files,
            verbose,
            loaded: OnceCell::new(),
        })
    }

    /// Parsed catalogs and parse failures (lazy initialization).
    ///
    /// Files are read and parsed in parallel. A file that fails to parse
    /// becomes a [`ParseErrorIssue`] and never aborts the run.
    pub fn loaded(&self) -> &LoadedCatalogs {
        self.loaded.get_or_init(|| load_catalogs(&self.files))
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.loaded().catalogs
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.loaded().parse_errors
    }

    /// Number of files that were recognized as catalogs (parsed or not).
    pub fn catalog_file_count(&self) -> usize {
        let loaded = self.loaded();
        loaded.catalogs.len() + loaded.parse_errors.len()
    }

    pub fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.config.is_rule_enabled(rule)
    }

    pub fn ignore_contexts(&self) -> &[String] {
        &self.config.ignore_contexts
    }
}

/// Read and parse every candidate file.
pub fn load_catalogs(files: &[String]) -> LoadedCatalogs {
    let results: Vec<(String, Result<Option<Catalog>, String>)> = files
        .par_iter()
        .map(|file_path| {
            let result = match fs::read_to_string(file_path) {
                Ok(content) if !looks_like_catalog(&content) => Ok(None),
                Ok(content) => parse_catalog(&content, file_path)
                    .map(Some)
                    .map_err(|e| e.to_string()),
                Err(e) => Err(format!("Failed to read file: {}", e)),
            };
            (file_path.clone(), result)
        })
        .collect();

    let mut loaded = LoadedCatalogs::default();
    for (file_path, result) in results {
        match result {
            Ok(Some(catalog)) => {
                debug!(
                    "parsed {} ({} message(s))",
                    file_path,
                    catalog.message_count()
                );
                loaded.catalogs.push(catalog);
            }
            Ok(None) => {
                debug!("skipped {}: not a Qt Linguist catalog", file_path);
                loaded.skipped.push(file_path);
            }
            Err(error) => {
                debug!("failed to parse {}: {}", file_path, error);
                loaded.parse_errors.push(ParseErrorIssue { file_path, error });
            }
        }
    }
    loaded
        .catalogs
        .sort_by(|a, b| a.file_path.cmp(&b.file_path));
    loaded
}

/// Join `dir` onto `root_dir`, keeping `./`-style paths when the root is the
/// current directory.
fn resolve_dir(root_dir: &Path, dir: &str) -> PathBuf {
    let p = Path::new(dir);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        Path::new(".").join(p.strip_prefix(".").unwrap_or(p))
    } else {
        let rel = p.strip_prefix(".").unwrap_or(p);
        root_dir.join(rel)
    }
}
