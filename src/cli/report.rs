//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow lingot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, StatsSummary, UpdateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Severity, compare_issues};
use crate::merge::MergeStats;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
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
    sorted.sort_by(compare_issues);

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize, catalog_files: usize) {
    print_success_to(source_files, catalog_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, catalog_files: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, {} {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" },
            catalog_files,
            if catalog_files == 1 { "catalog" } else { "catalogs" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    if issue.line() > 0 {
        let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), issue.file_path(), issue.line());
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
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

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result, verbose);

    if matches!(result.summary, CommandSummary::Check) && result.issues.is_empty() {
        print_success(result.source_files_checked, result.catalog_files_checked);
    }

    // Non-check commands keep parse errors out of their summary output;
    // verbose mode prints them in full, otherwise a count goes to stderr.
    if verbose && !matches!(result.summary, CommandSummary::Check) {
        report(&result.issues);
    }
    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Update(summary) => {
            print_update(summary, verbose);
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_update(summary: &UpdateSummary, verbose: bool) {
    let mut changed_files = 0;

    for file in &summary.files {
        if !file.stats.changed() && !file.created {
            if verbose {
                println!("{} is up to date", file.path.as_str().dimmed());
            }
            continue;
        }
        changed_files += 1;

        let action = match (summary.is_apply, file.created) {
            (true, true) => "Created".green().bold(),
            (true, false) => "Updated".green().bold(),
            (false, true) => "Would create".yellow().bold(),
            (false, false) => "Would update".yellow().bold(),
        };
        println!("{} {}: {}", action, file.path, format_stats(&file.stats));
    }

    if changed_files == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "All catalogs are up to date".green()
        );
    } else if !summary.is_apply {
        println!("Run with {} to write these changes.", "--apply".cyan());
    }
}

fn format_stats(stats: &MergeStats) -> String {
    let mut parts = Vec::new();
    if stats.added > 0 {
        parts.push(format!("{} added", stats.added));
    }
    if stats.updated > 0 {
        parts.push(format!("{} location update(s)", stats.updated));
    }
    if stats.revived > 0 {
        parts.push(format!("{} revived", stats.revived));
    }
    if stats.vanished > 0 {
        parts.push(format!("{} vanished", stats.vanished));
    }
    if stats.removed > 0 {
        parts.push(format!("{} removed", stats.removed));
    }
    if parts.is_empty() {
        parts.push("no changes".to_string());
    }
    parts.join(", ")
}

fn print_stats(summary: &StatsSummary) {
    if summary.catalogs.is_empty() {
        println!("No catalog files found.");
        return;
    }

    let labels: Vec<String> = summary
        .catalogs
        .iter()
        .map(|stats| match &stats.language {
            Some(language) => format!("{} ({})", stats.path, language),
            None => stats.path.clone(),
        })
        .collect();
    // Align on display width so non-ASCII paths keep the columns straight
    let max_width = labels
        .iter()
        .map(|label| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    for (label, stats) in labels.iter().zip(&summary.catalogs) {
        let padding = " ".repeat(max_width - UnicodeWidthStr::width(label.as_str()));
        println!(
            "{}{}  {} message(s) in {} context(s) - {} finished, {} unfinished, {} obsolete ({}% complete)",
            label.as_str().bold(),
            padding,
            stats.messages,
            stats.contexts,
            stats.finished,
            stats.unfinished,
            stats.obsolete,
            stats.percent_finished()
        );
    }

    if summary.catalogs.len() > 1 {
        let finished: usize = summary.catalogs.iter().map(|s| s.finished).sum();
        let unfinished: usize = summary.catalogs.iter().map(|s| s.unfinished).sum();
        let active = finished + unfinished;
        let percent = if active == 0 { 100 } else { finished * 100 / active };
        println!(
            "Total: {} of {} active message(s) finished ({}%)",
            finished, active, percent
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
