//! Subcommand implementations

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bookshelf_domain::{validate_books, BookBody};
use bookshelf_identifiers::{IsbnFormat, IsbnValidator};
use serde::Serialize;

/// Outcome of checking one ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub input: String,
    /// Cleaned digit sequence; `None` when strict shape checking rejected the input
    pub cleaned: Option<String>,
    pub format: IsbnFormat,
    pub valid: bool,
}

pub fn check_isbn(validator: &IsbnValidator, input: &str) -> CheckReport {
    let cleaned = validator.clean(input);
    let format = cleaned
        .as_deref()
        .map_or(IsbnFormat::Invalid, IsbnFormat::classify);

    CheckReport {
        input: input.to_string(),
        valid: validator.validate(Some(input)),
        cleaned,
        format,
    }
}

/// Non-blank lines of `reader`, trimmed.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Check each input and write one report per line (or a JSON array).
///
/// Returns whether every input was valid.
pub fn run_check(
    validator: &IsbnValidator,
    inputs: &[String],
    json: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let reports: Vec<CheckReport> = inputs
        .iter()
        .map(|input| check_isbn(validator, input))
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    } else {
        for report in &reports {
            let verdict = if report.valid { "valid" } else { "invalid" };
            writeln!(
                out,
                "{}\t{}\t{}",
                report.input,
                report.format.display_name(),
                verdict
            )?;
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!("Checked {} ISBNs, {} invalid", reports.len(), invalid);
    Ok(invalid == 0)
}

/// Validate every book in a JSON body file.
///
/// Returns whether every record was accepted.
pub fn run_books(validator: &IsbnValidator, path: &Path, out: &mut impl Write) -> Result<bool> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let inputs = BookBody::from_json(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?
        .into_inputs();

    let mut all_ok = true;
    for (i, result) in validate_books(&inputs, validator).into_iter().enumerate() {
        match result {
            Ok(book) => writeln!(out, "#{}\tok\t{}", i + 1, book.isbn)?,
            Err(err) => {
                all_ok = false;
                for message in err.messages() {
                    writeln!(out, "#{}\trejected\t{}", i + 1, message)?;
                }
            }
        }
    }

    Ok(all_ok)
}
