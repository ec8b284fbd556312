//! Issue types for catalog checks.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users (CLI, MCP)
//! - Action: to fix the issue (`clean`, `fix`)

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;

use crate::core::{CatalogLocation, Location, MessageContext, TranslationKind};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Rule {
    DuplicateMessage,
    NumerusCount,
    EmptyTranslation,
    UnfinishedText,
    InvalidLocation,
    PlaceholderMismatch,
    AcceleratorMismatch,
    MissingMessage,
    ObsoleteMessage,
    UnknownLanguage,
    #[value(skip)]
    ParseError,
}

impl Rule {
    /// Rules that `check` can run (everything but parse errors).
    pub fn all() -> Vec<Rule> {
        vec![
            Rule::DuplicateMessage,
            Rule::NumerusCount,
            Rule::EmptyTranslation,
            Rule::UnfinishedText,
            Rule::InvalidLocation,
            Rule::PlaceholderMismatch,
            Rule::AcceleratorMismatch,
            Rule::MissingMessage,
            Rule::ObsoleteMessage,
            Rule::UnknownLanguage,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::DuplicateMessage => "duplicate-message",
            Rule::NumerusCount => "numerus-count",
            Rule::EmptyTranslation => "empty-translation",
            Rule::UnfinishedText => "unfinished-text",
            Rule::InvalidLocation => "invalid-location",
            Rule::PlaceholderMismatch => "placeholder-mismatch",
            Rule::AcceleratorMismatch => "accelerator-mismatch",
            Rule::MissingMessage => "missing-message",
            Rule::ObsoleteMessage => "obsolete-message",
            Rule::UnknownLanguage => "unknown-language",
            Rule::ParseError => "parse-error",
        }
    }

    /// Parse a checkable rule name (case insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::all().into_iter().find(|rule| rule.as_str() == s)
    }

    pub fn severity(&self) -> Severity {
        match self {
            Rule::DuplicateMessage
            | Rule::NumerusCount
            | Rule::InvalidLocation
            | Rule::PlaceholderMismatch
            | Rule::ParseError => Severity::Error,
            Rule::EmptyTranslation
            | Rule::UnfinishedText
            | Rule::AcceleratorMismatch
            | Rule::MissingMessage
            | Rule::ObsoleteMessage
            | Rule::UnknownLanguage => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// Same (source, comment) twice in one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub context: MessageContext,
    /// Where the key first appeared.
    pub first: CatalogLocation,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Rule::DuplicateMessage.severity()
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// What is wrong with a message's numerus forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumerusProblem {
    /// Plural translation with the wrong number of forms.
    WrongCount,
    /// Plural forms on a message not marked `numerus="yes"`.
    NotNumerus,
    /// `numerus="yes"` but the translation is plain text.
    NoForms,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusCountIssue {
    pub context: MessageContext,
    pub problem: NumerusProblem,
    /// Target language of the catalog.
    pub language: String,
    pub expected: usize,
    pub found: usize,
}

impl NumerusCountIssue {
    pub fn severity() -> Severity {
        Rule::NumerusCount.severity()
    }

    pub fn rule() -> Rule {
        Rule::NumerusCount
    }
}

/// Finished translation with no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
    pub numerus: bool,
    /// Empty numerus form of an otherwise filled translation; `None` when
    /// the whole translation is empty.
    pub form: Option<usize>,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Rule::EmptyTranslation.severity()
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Unfinished translation that already has text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedTextIssue {
    pub context: MessageContext,
    pub text: String,
}

impl UnfinishedTextIssue {
    pub fn severity() -> Severity {
        Rule::UnfinishedText.severity()
    }

    pub fn rule() -> Rule {
        Rule::UnfinishedText
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLocationIssue {
    pub context: MessageContext,
    pub location: Location,
}

impl InvalidLocationIssue {
    pub fn severity() -> Severity {
        Rule::InvalidLocation.severity()
    }

    pub fn rule() -> Rule {
        Rule::InvalidLocation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// Index of the offending numerus form (0 for plain text).
    pub form: usize,
    pub numerus: bool,
    /// In the source but not in the translation.
    pub missing: Vec<String>,
    /// In the translation but not in the source.
    pub extra: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Rule::PlaceholderMismatch.severity()
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorMismatchIssue {
    pub context: MessageContext,
    /// True when the source has a mnemonic and the translation lost it.
    pub source_has_accelerator: bool,
    pub translation: String,
}

impl AcceleratorMismatchIssue {
    pub fn severity() -> Severity {
        Rule::AcceleratorMismatch.severity()
    }

    pub fn rule() -> Rule {
        Rule::AcceleratorMismatch
    }
}

/// Key present in one catalog of a family but absent from siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMessageIssue {
    pub context: MessageContext,
    pub family: String,
    /// Sibling catalogs (by file path) that lack the key.
    pub missing_in: Vec<String>,
}

impl MissingMessageIssue {
    pub fn severity() -> Severity {
        Rule::MissingMessage.severity()
    }

    pub fn rule() -> Rule {
        Rule::MissingMessage
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteMessageIssue {
    pub context: MessageContext,
    pub kind: TranslationKind,
}

impl ObsoleteMessageIssue {
    pub fn severity() -> Severity {
        Rule::ObsoleteMessage.severity()
    }

    pub fn rule() -> Rule {
        Rule::ObsoleteMessage
    }
}

// ============================================================
// Issue Types - Whole Catalog
// ============================================================

/// `language` attribute missing or without a known numerus rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguageIssue {
    pub file_path: String,
    pub language: Option<String>,
}

impl UnknownLanguageIssue {
    pub fn severity() -> Severity {
        Rule::UnknownLanguage.severity()
    }

    pub fn rule() -> Rule {
        Rule::UnknownLanguage
    }
}

/// Catalog could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Rule::ParseError.severity()
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateMessage(DuplicateMessageIssue),
    NumerusCount(NumerusCountIssue),
    EmptyTranslation(EmptyTranslationIssue),
    UnfinishedText(UnfinishedTextIssue),
    InvalidLocation(InvalidLocationIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    AcceleratorMismatch(AcceleratorMismatchIssue),
    MissingMessage(MissingMessageIssue),
    ObsoleteMessage(ObsoleteMessageIssue),
    UnknownLanguage(UnknownLanguageIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog (has the catalog line for context display).
    Message(&'a MessageContext),
    /// File-level only (parse errors, catalog header problems).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} already defined at {}",
            self.context.qualified_key(),
            self.first
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("add a disambiguating <comment> or remove the duplicate".to_string())
    }
}

impl Report for NumerusCountIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(match self.problem {
            NumerusProblem::WrongCount => format!(
                "{} numerus form(s), {} needs {}",
                self.found, self.language, self.expected
            ),
            NumerusProblem::NotNumerus => format!(
                "{} numerus form(s) on a message without numerus=\"yes\"",
                self.found
            ),
            NumerusProblem::NoForms => format!(
                "numerus message has plain text, {} needs {} form(s)",
                self.language, self.expected
            ),
        })
    }

    fn hint(&self) -> Option<String> {
        match self.problem {
            NumerusProblem::NotNumerus => None,
            _ => Some("run `tsglot fix` to resize the form list".to_string()),
        }
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(match (self.form, self.numerus) {
            (Some(form), _) => format!("numerus form {} of a finished translation is empty", form),
            (None, true) => "finished translation has only empty numerus forms".to_string(),
            (None, false) => "finished translation is empty".to_string(),
        })
    }
}

impl Report for UnfinishedTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("marked unfinished but translated as \"{}\"", self.text))
    }
}

impl Report for InvalidLocationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "location filename=\"{}\" line=\"{}\"",
            self.location.file, self.location.line
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("unexpected {}", self.extra.join(", ")));
        }
        let form = if self.numerus {
            format!(" form {}", self.form)
        } else {
            String::new()
        };
        Some(format!("translation{}: {}", form, parts.join("; ")))
    }
}

impl Report for AcceleratorMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(if self.source_has_accelerator {
            format!("translation \"{}\" has no & accelerator", self.translation)
        } else {
            format!(
                "translation \"{}\" adds an & accelerator the source does not have",
                self.translation
            )
        })
    }
}

impl Report for MissingMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} missing in: {}",
            self.context.qualified_key(),
            self.missing_in.join(", ")
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("run lupdate to regenerate the sibling catalogs".to_string())
    }
}

impl Report for ObsoleteMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} entry in {}", self.kind, self.context.context))
    }

    fn hint(&self) -> Option<String> {
        Some("run `tsglot clean --apply` to remove it".to_string())
    }
}

impl Report for UnknownLanguageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        match &self.language {
            Some(language) if !language.is_empty() => {
                format!("no numerus rule for language \"{}\"", language)
            }
            _ => "catalog has no language attribute".to_string(),
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("numerus form counts were not checked".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    /// Sort by file path, line, column, rule, then message.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
