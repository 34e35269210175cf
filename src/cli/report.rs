//! Report formatting and printing utilities.
//!
//! Separate from core logic so eventlint can be used as a library without
//! printing side effects. Every printer has a `_to` variant taking a writer.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ListSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::registry::EventRegistry;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command to stdout (and warnings to stderr).
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match &result.summary {
        CommandSummary::Check(summary) => {
            if result.issues.is_empty() {
                print_success_to(result.files_checked, summary.event_count, &mut stdout);
            } else {
                report_to(&result.issues, &mut stdout);
            }
        }
        CommandSummary::List(ListSummary { registry, json }) => {
            if *json {
                let rendered = serde_json::to_string_pretty(registry)
                    .context("Failed to serialize event registry")?;
                let _ = writeln!(stdout, "{}", rendered);
            } else {
                print_registry_to(registry, &mut stdout);
            }
        }
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    stdout,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            }
        }
    }

    print_skipped_warning_to(result.skipped_count, verbose, &mut io::stderr().lock());
    Ok(())
}

/// Print one line per event: `identifier: declaration,definition,global_name`.
///
/// Unset fields render as empty strings.
pub fn print_registry_to<W: Write>(registry: &EventRegistry, writer: &mut W) {
    for (id, event) in registry.iter() {
        let _ = writeln!(
            writer,
            "{}: {},{},{}",
            id,
            event.declaration.as_deref().unwrap_or_default(),
            event.definition.as_deref().unwrap_or_default(),
            event.global_name.as_deref().unwrap_or_default()
        );
    }
}

/// Print issues in cargo-style format, followed by a summary line.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(files: usize, events: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, {} {} - no issues found",
            files,
            if files == 1 { "file" } else { "files" },
            events,
            if events == 1 { "event" } else { "events" }
        )
        .green()
    );
}

/// Print a warning about directory entries that could not be read.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (use {} for details)",
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
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.event(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let location = issue.location();
    match location.line {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), location.file, line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), location.file);
        }
    }

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

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 {
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

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
