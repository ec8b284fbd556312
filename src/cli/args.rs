//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog rules
//! - `stats`: Translation progress per catalog
//! - `lookup`: Resolve a message the way the application would at runtime
//! - `clean`: Remove obsolete and vanished entries
//! - `fix`: Reset broken translations to unfinished
//! - `init`: Create `.tsglotrc.json`
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::issues::Rule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Stats(cmd)) => Some(&cmd.common),
            Some(Command::Lookup(cmd)) => Some(&cmd.common),
            Some(Command::Clean(cmd)) => Some(&cmd.common),
            Some(Command::Fix(cmd)) => Some(&cmd.common),
            Some(Command::Init) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Catalogs directory (overrides config file)
    #[arg(long)]
    pub catalogs_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all enabled rules)
    #[arg(value_enum)]
    pub rules: Vec<Rule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Context name, e.g. `QGuiApplication`
    pub context: String,

    /// Source text, e.g. `All Files (*)`
    pub source: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count used to pick the numerus form and fill `%n`
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Only look in catalogs whose file name or path matches this glob
    #[arg(long)]
    pub catalog: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for duplicates, plural form counts, placeholders and more
    Check(CheckCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Look up the translation of a message in every catalog
    Lookup(LookupCommand),
    /// Remove obsolete and vanished entries from catalogs
    Clean(CleanCommand),
    /// Mark empty and wrongly sized translations as unfinished
    Fix(FixCommand),
    /// Initialize a new .tsglotrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
