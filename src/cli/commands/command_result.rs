use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::issues::{EmptyTranslationIssue, Issue, NumerusCountIssue, ObsoleteMessageIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Clean(CleanSummary),
    Fix(FixSummary),
    Init(InitSummary),
}

/// Progress of one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub file_path: String,
    pub language: Option<String>,
    /// Numerus forms the language needs, `None` when the language is unknown.
    pub form_count: Option<usize>,
    /// Active (not obsolete/vanished) messages.
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Obsolete and vanished entries.
    pub obsolete: usize,
}

impl CatalogStats {
    /// Share of active messages marked finished, in percent.
    pub fn completion(&self) -> f64 {
        if self.messages == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / self.messages as f64
        }
    }
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub file_path: String,
    pub language: Option<String>,
    pub text: String,
    /// False when the source text was returned as a fallback.
    pub translated: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub context: String,
    pub source: String,
    pub results: Vec<LookupEntry>,
}

impl LookupSummary {
    pub fn translated_count(&self) -> usize {
        self.results.iter().filter(|r| r.translated).count()
    }
}

#[derive(Debug)]
pub struct CleanSummary {
    pub obsolete_count: usize,
    pub applied_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub obsolete_issues: Vec<ObsoleteMessageIssue>,
}

#[derive(Debug)]
pub struct FixSummary {
    pub empty_count: usize,
    pub numerus_count: usize,
    pub applied_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub empty_issues: Vec<EmptyTranslationIssue>,
    pub numerus_issues: Vec<NumerusCountIssue>,
}

impl FixSummary {
    pub fn total(&self) -> usize {
        self.empty_count + self.numerus_count
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running tsglot commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issues to report. For `check` these are all findings; other commands
    /// only carry parse errors here.
    pub issues: Vec<Issue>,
    /// Number of catalogs that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were read.
    pub catalogs_checked: usize,
    /// Number of messages across those catalogs.
    pub messages_checked: usize,
}

impl CommandResult {
    /// Work left for a dry-run command, or a lookup that found nothing.
    fn pending(&self) -> bool {
        match &self.summary {
            CommandSummary::Clean(summary) => !summary.is_apply && summary.obsolete_count > 0,
            CommandSummary::Fix(summary) => !summary.is_apply && summary.total() > 0,
            CommandSummary::Lookup(summary) => summary.translated_count() == 0,
            CommandSummary::Check | CommandSummary::Stats(_) | CommandSummary::Init(_) => false,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.pending() || self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
