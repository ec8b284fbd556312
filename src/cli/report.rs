//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tsglot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{Action, FixTranslation, RemoveObsolete},
    commands::{
        CleanSummary, CommandResult, CommandSummary, FixSummary, InitSummary, LookupSummary,
        StatsSummary,
    },
};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// Issues are sorted and displayed with severity, location, the catalog line
/// and any note or hint.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize, messages: usize) {
    print_success_to(catalogs, messages, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, messages: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {}, {} {} - no issues found",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" },
            messages,
            if messages == 1 { "message" } else { "messages" }
        )
        .green()
    );
}

/// Print a warning about catalogs that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} catalog(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match loc {
        ReportLocation::Message(ctx) => {
            let (line, col) = (ctx.line(), ctx.col());
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                line,
                col
            );
            print_source_line(writer, &ctx.source_line, line, col, severity, max_line_width);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_source_line<W: Write>(
    writer: &mut W,
    source_line: &str,
    line: usize,
    col: usize,
    severity: Severity,
    max_line_width: usize,
) {
    if source_line.is_empty() {
        return;
    }

    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.catalogs_checked, result.messages_checked);
            }
            return;
        }
        CommandSummary::Stats(summary) => {
            print_stats_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Lookup(summary) => {
            print_lookup_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary, result.catalogs_checked);
        }
        CommandSummary::Fix(summary) => {
            print_fix(summary, result.catalogs_checked);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }

    print_parse_warning(result.parse_error_count, verbose);
}

/// Per-catalog progress table.
pub fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.catalogs.is_empty() {
        let _ = writeln!(writer, "{}", "No catalogs found.".yellow());
        return;
    }

    let path_width = summary
        .catalogs
        .iter()
        .map(|c| UnicodeWidthStr::width(c.file_path.as_str()))
        .max()
        .unwrap_or(0)
        .max("CATALOG".len());

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{:<path_width$}  {:<8}  {:>5}  {:>8}  {:>8}  {:>10}  {:>8}  {:>6}",
            "CATALOG",
            "LANGUAGE",
            "FORMS",
            "MESSAGES",
            "FINISHED",
            "UNFINISHED",
            "OBSOLETE",
            "DONE",
        )
        .bold()
    );

    for stats in &summary.catalogs {
        let padding = path_width - UnicodeWidthStr::width(stats.file_path.as_str());
        let completion = format!("{:.1}%", stats.completion());
        let completion = if stats.unfinished == 0 {
            completion.green()
        } else {
            completion.yellow()
        };
        let _ = writeln!(
            writer,
            "{}{:padding$}  {:<8}  {:>5}  {:>8}  {:>8}  {:>10}  {:>8}  {:>6}",
            stats.file_path,
            "",
            stats.language.as_deref().unwrap_or("-"),
            stats
                .form_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string()),
            stats.messages,
            stats.finished,
            stats.unfinished,
            stats.obsolete,
            completion,
        );
    }

    let messages: usize = summary.catalogs.iter().map(|c| c.messages).sum();
    let finished: usize = summary.catalogs.iter().map(|c| c.finished).sum();
    let percent = if messages == 0 {
        100.0
    } else {
        finished as f64 * 100.0 / messages as f64
    };
    let _ = writeln!(
        writer,
        "\n{} catalog(s), {} of {} message(s) finished ({:.1}%)",
        summary.catalogs.len(),
        finished,
        messages,
        percent
    );
}

/// One line per catalog; fallbacks to the source text are marked.
pub fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        format!("{}::{}", summary.context, summary.source).bold()
    );

    if summary.results.is_empty() {
        let _ = writeln!(writer, "  {}", "No catalogs matched.".yellow());
        return;
    }

    for entry in &summary.results {
        let language = entry.language.as_deref().unwrap_or("?");
        let label = format!("{} ({})", entry.file_path, language);
        if entry.translated {
            let _ = writeln!(writer, "  {}  {}", label.blue(), entry.text);
        } else {
            let _ = writeln!(
                writer,
                "  {}  {}  {}",
                label.blue(),
                entry.text,
                "(untranslated)".dimmed()
            );
        }
    }

    let _ = writeln!(
        writer,
        "\nTranslated in {} of {} catalog(s)",
        summary.translated_count(),
        summary.results.len()
    );
}

fn print_clean(summary: &CleanSummary, catalogs: usize) {
    if summary.obsolete_count == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} catalog(s) - no obsolete entries", catalogs).green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} entry(ies) in {} file(s).",
            "Removed".green().bold(),
            summary.applied_count,
            summary.file_count
        );
        let skipped = summary.obsolete_count - summary.applied_count.min(summary.obsolete_count);
        if skipped > 0 {
            println!("  - skipped: {} entry(ies) no longer in the file", skipped);
        }
    } else {
        RemoveObsolete::preview(&summary.obsolete_issues);
        println!();
        println!(
            "{} {} entry(ies) in {} file(s).",
            "Would remove".yellow().bold(),
            summary.obsolete_count,
            summary.file_count
        );
        println!("Run with {} to remove these entries.", "--apply".cyan());
    }
}

fn print_fix(summary: &FixSummary, catalogs: usize) {
    let total = summary.total();
    if total == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} catalog(s) - nothing to fix", catalogs).green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} translation(s) in {} file(s) (processed {} issue(s)).",
            "Fixed".green().bold(),
            summary.applied_count,
            summary.file_count,
            total
        );
    } else {
        FixTranslation::preview(&summary.empty_issues);
        FixTranslation::preview(&summary.numerus_issues);
        println!();
        println!(
            "{} {} translation(s) in {} file(s):",
            "Would fix".yellow().bold(),
            total,
            summary.file_count
        );
        if summary.empty_count > 0 {
            println!("  - empty-translation: {} mark unfinished", summary.empty_count);
        }
        if summary.numerus_count > 0 {
            println!("  - numerus-count: {} resize forms", summary.numerus_count);
        }
        println!("Run with {} to rewrite these catalogs.", "--apply".cyan());
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => {
            eprintln!("{} {}", "error:".bold().red(), error);
        }
        None => {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}

// ============================================================
// Tests
// ============================================================
