use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default `.tsglotrc.json` into the current directory.
pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let error = if config_path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        None
    };

    Ok(CommandResult {
        error_count: usize::from(error.is_some()),
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            error,
        }),
        warning_count: 0,
        issues: Vec::new(),
        parse_error_count: 0,
        catalogs_checked: 0,
        messages_checked: 0,
    })
}
