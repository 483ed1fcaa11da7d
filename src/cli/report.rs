//! Report formatting and printing utilities.
//!
//! Kept out of the library modules so the export pipeline stays print-free.

use std::io::{self, Write};

use colored::Colorize;

use crate::extraction::Diagnostic;
use crate::pipeline::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print skipped literals and per-file errors to stderr.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    print_diagnostics_to(diagnostics, &mut io::stderr().lock());
}

/// Print diagnostics to a custom writer.
pub fn print_diagnostics_to<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    for diagnostic in diagnostics {
        let (label, message, literal) = match diagnostic {
            Diagnostic::Skipped {
                reason, literal, ..
            } => ("warning:".bold().yellow(), reason.to_string(), Some(*literal)),
            Diagnostic::Failed {
                message, literal, ..
            } => ("error:".bold().red(), message.clone(), *literal),
        };

        let location = match literal {
            Some(index) => format!("{} (gql literal #{})", diagnostic.file().display(), index),
            None => diagnostic.file().display().to_string(),
        };

        let _ = writeln!(writer, "{} {}", label, message);
        let _ = writeln!(writer, "  {} {}", "-->".blue(), location);
    }
}

/// Print the final summary line (and details when verbose) to stdout.
pub fn print_summary(summary: &RunSummary, verbose: bool) {
    print_summary_to(summary, verbose, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &RunSummary, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "Scanned {} source {}",
            summary.files.len(),
            if summary.files.len() == 1 { "file" } else { "files" }
        );
        for file in &summary.files {
            let _ = writeln!(writer, "  {}", file.display().to_string().dimmed());
        }
        for name in &summary.resource_names {
            let _ = writeln!(writer, "  {} {}", "+".green(), name);
        }
    }

    let count = summary.resource_count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Created {} {} for import into {}!",
            count,
            if count == 1 { "resource" } else { "resources" },
            summary.output.display()
        )
        .green()
    );

    let warnings = summary.warning_count();
    let errors = summary.error_count();
    if warnings > 0 || errors > 0 {
        let _ = writeln!(
            writer,
            "  {} gql {} skipped: {} {}, {} {}",
            warnings + errors,
            if warnings + errors == 1 { "literal" } else { "literals" },
            warnings,
            if warnings == 1 { "warning" } else { "warnings" },
            errors,
            if errors == 1 { "error" } else { "errors" }
        );
    }
}
