//! Report formatting and printing utilities.
//!
//! Command results go to stdout; load warnings and notes go to stderr.
//! Separate from core logic to allow trmerge to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, CoverageSummary, InitSummary, LookupSummary, MergeSummary,
};
use crate::core::LoadWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const COVERAGE_HEADERS: [&str; 6] = [
    "namespace",
    "locale",
    "translated",
    "fallback",
    "extra",
    "total",
];

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match &result.summary {
        CommandSummary::Merge(summary) => print_merge_to(summary, &mut stdout),
        CommandSummary::Lookup(summary) => {
            print_lookup_to(summary, &mut stdout);
            if verbose {
                print_lookup_note_to(summary, &mut stderr);
            }
        }
        CommandSummary::Coverage(summary) => print_coverage_to(summary, &mut stdout),
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }

    print_warnings_to(&result.warnings, verbose, &mut stderr);
}

pub fn print_merge_to<W: Write>(summary: &MergeSummary, writer: &mut W) {
    if let Some(json) = &summary.json {
        let _ = writeln!(writer, "{}", json);
    }
    if let Some(output) = &summary.output {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Wrote {} {} to {}",
                summary.namespace_count,
                if summary.namespace_count == 1 {
                    "namespace"
                } else {
                    "namespaces"
                },
                output.display()
            )
            .green()
        );
    }
}

/// The resolved text alone, so the output can be captured by scripts.
pub fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
}

pub fn print_lookup_note_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let note = if !summary.resolved {
        format!(
            "no translation for \"{}\" in {} ({}), printed the key",
            summary.key, summary.namespace, summary.locale
        )
    } else if summary.fallback {
        format!(
            "\"{}\" is not translated for {}, used the English value",
            summary.key, summary.locale
        )
    } else {
        format!("resolved \"{}\" for {}", summary.key, summary.locale)
    };
    let _ = writeln!(writer, "{} {}", "note:".bold().cyan(), note);
}

pub fn print_coverage_to<W: Write>(summary: &CoverageSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "{}", "No namespaces to report".dimmed());
        return;
    }

    let namespace_width = summary
        .rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.namespace.as_str()))
        .chain(std::iter::once(COVERAGE_HEADERS[0].len()))
        .max()
        .unwrap_or(0);

    let header = format!(
        "{}  {:<6}  {:>10}  {:>8}  {:>5}  {:>5}",
        pad(COVERAGE_HEADERS[0], namespace_width),
        COVERAGE_HEADERS[1],
        COVERAGE_HEADERS[2],
        COVERAGE_HEADERS[3],
        COVERAGE_HEADERS[4],
        COVERAGE_HEADERS[5],
    );
    let _ = writeln!(writer, "{}", header.bold());

    for row in &summary.rows {
        let fallback = format!("{:>8}", row.fallback);
        let fallback = if row.fallback > 0 {
            fallback.yellow()
        } else {
            fallback.normal()
        };
        let _ = writeln!(
            writer,
            "{}  {:<6}  {:>10}  {}  {:>5}  {:>5}",
            pad(&row.namespace, namespace_width),
            row.locale.code(),
            row.translated,
            fallback,
            row.extra,
            row.total,
        );
    }

    let _ = writeln!(writer);
    let fallback_count = summary.fallback_count();
    if fallback_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} namespace/locale {} fully translated",
                summary.rows.len(),
                if summary.rows.len() == 1 {
                    "pair"
                } else {
                    "pairs"
                }
            )
            .green()
        );
    } else {
        let mark = if summary.strict {
            FAILURE_MARK.red()
        } else {
            FAILURE_MARK.yellow()
        };
        let _ = writeln!(
            writer,
            "{} {} {} {} back to English in {} namespace/locale {}",
            mark,
            fallback_count,
            if fallback_count == 1 { "key" } else { "keys" },
            if fallback_count == 1 { "falls" } else { "fall" },
            summary.incomplete_count(),
            if summary.incomplete_count() == 1 {
                "pair"
            } else {
                "pairs"
            }
        );
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let name = summary
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| summary.path.display().to_string());
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", name).green()
    );
}

/// Print load warnings: one line per warning when verbose, else a count.
pub fn print_warnings_to<W: Write>(warnings: &[LoadWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.message
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} problem(s) while loading translations (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}
