//! Implementation of `brdocs validate <kind> <value>...`.
//!
//! Checks every value against the selected document type and prints one
//! verdict per value. A value of `-` reads newline-separated values from
//! stdin; blank lines are skipped.
//!
//! Exit codes:
//! - 0 = every value is valid
//! - 1 = at least one value is invalid
//! - 2 = usage error (`ie` without `--state`, output failure)
use std::io::{BufRead, Write};

use brdocs_core::{DocumentKind, Rejection};
use serde::Serialize;

use crate::error::CliError;
use crate::format::{FormatMode, paint_verdict, write_record};

/// One verdict in JSON mode.
#[derive(Debug, Serialize)]
struct Verdict<'a> {
    kind: String,
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Expands the `-` sentinel into the non-blank lines of `stdin`.
fn collect_values<R: BufRead>(values: &[String], stdin: R) -> Result<Vec<String>, CliError> {
    if !values.iter().any(|v| v == "-") {
        return Ok(values.to_vec());
    }
    let piped = stdin
        .lines()
        .map(|line| line.map(|l| l.trim().to_owned()))
        .filter(|line| !matches!(line, Ok(l) if l.is_empty()))
        .collect::<Result<Vec<_>, _>>()?;
    let mut expanded = Vec::with_capacity(values.len() + piped.len());
    for value in values {
        if value == "-" {
            expanded.extend(piped.iter().cloned());
        } else {
            expanded.push(value.clone());
        }
    }
    Ok(expanded)
}

/// Runs the `validate` command.
///
/// # Errors
///
/// - [`CliError::Invalid`] when one or more values are rejected.
/// - [`CliError::Output`] when stdin cannot be read or stdout cannot be
///   written.
pub fn run<R: BufRead, W: Write>(
    kind: DocumentKind,
    values: &[String],
    stdin: R,
    mode: FormatMode,
    colors: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let doc = kind.document();
    let values = collect_values(values, stdin)?;
    let mut rejected = 0usize;

    for value in &values {
        let outcome: Result<(), Rejection> = doc.inspect(value);
        let human = match &outcome {
            Ok(()) => format!("{value}\t{}", paint_verdict("valid", true, colors)),
            Err(reason) => {
                let verdict = format!("invalid ({reason})");
                format!("{value}\t{}", paint_verdict(&verdict, false, colors))
            }
        };
        if let Err(reason) = &outcome {
            tracing::debug!(%kind, %value, %reason, "rejected");
            rejected += 1;
        }
        let record = Verdict {
            kind: kind.to_string(),
            value,
            valid: outcome.is_ok(),
            reason: outcome.err().map(|r| r.to_string()),
        };
        write_record(out, mode, &human, &record)?;
    }

    tracing::info!(%kind, checked = values.len(), rejected, "validation finished");
    if rejected == 0 {
        Ok(())
    } else {
        Err(CliError::Invalid {
            kind: kind.to_string(),
            rejected,
        })
    }
}
