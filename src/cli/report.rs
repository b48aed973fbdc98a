//! Console output for CLI commands.
//!
//! Every printer has a `*_to` variant taking a writer so the output can be
//! tested. Colors follow the `colored` crate defaults (disabled by `NO_COLOR`).

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::{GenerateWarning, Generation};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_error(message: &str) {
    print_error_to(message, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), message);
}

pub fn print_warnings(warnings: &[GenerateWarning]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[GenerateWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

pub fn print_config_source(path: Option<&Path>) {
    print_config_source_to(path, &mut io::stdout().lock());
}

pub fn print_config_source_to<W: Write>(path: Option<&Path>, writer: &mut W) {
    let source = match path {
        Some(path) => path.display().to_string(),
        None => "defaults".to_string(),
    };
    let _ = writeln!(writer, "{} {}", "config:".bold().cyan(), source);
}

/// Print which documents were read.
pub fn print_documents(generation: &Generation) {
    print_documents_to(generation, &mut io::stdout().lock());
}

pub fn print_documents_to<W: Write>(generation: &Generation, writer: &mut W) {
    for document in &generation.documents {
        let marker = if document.name == generation.reference {
            " (reference)".dimmed().to_string()
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "  {} {} {}{}",
            "-->".blue(),
            document.path.display(),
            pluralize(document.key_count, "key", "keys").dimmed(),
            marker
        );
    }
}

/// Print the result of a written generation.
pub fn print_generated(generation: &Generation) {
    print_generated_to(generation, &mut io::stdout().lock());
}

pub fn print_generated_to<W: Write>(generation: &Generation, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} from '{}' and {}",
            pluralize(generation.constant_count, "key constant", "key constants"),
            generation.reference,
            pluralize(generation.documents.len(), "locale", "locales"),
        )
        .green()
    );
    for file in [&generation.keys, &generation.messages] {
        let _ = writeln!(writer, "  {} {}", "wrote".dimmed(), file.path.display());
    }
}

/// Print the summary after a failed run.
pub fn print_failure(message: &str) {
    print_failure_to(message, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("{} (no files were written)", message).red()
    );
}
