use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::issues::Rule;

pub const CONFIG_FILE_NAME: &str = ".tsglotrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned for catalogs, relative to the project root.
    #[serde(default = "default_catalogs_root")]
    pub catalogs_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Context names excluded from every rule.
    #[serde(default)]
    pub ignore_contexts: Vec<String>,
    #[serde(default)]
    pub disabled_rules: Vec<String>,
    /// Let lookups use non-empty unfinished translations.
    #[serde(default = "default_include_unfinished")]
    pub include_unfinished: bool,
}

fn default_catalogs_root() -> String {
    ".".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["**/*.ts".to_string()]
}

fn default_include_unfinished() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogs_root: default_catalogs_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_contexts: Vec::new(),
            disabled_rules: Vec::new(),
            include_unfinished: default_include_unfinished(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns and unknown rule names.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        for name in &self.disabled_rules {
            if Rule::parse(name).is_none() {
                bail!(
                    "Unknown rule in 'disabledRules': \"{}\" (expected one of: {})",
                    name,
                    Rule::all()
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }

        Ok(())
    }

    /// Rules listed in `disabledRules`.
    pub fn disabled(&self) -> Vec<Rule> {
        self.disabled_rules
            .iter()
            .filter_map(|name| Rule::parse(name))
            .collect()
    }

    pub fn is_rule_enabled(&self, rule: Rule) -> bool {
        !self.disabled().contains(&rule)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
