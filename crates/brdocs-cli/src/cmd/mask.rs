//! Implementation of `brdocs mask <kind>`.
use std::io::Write;

use brdocs_core::DocumentKind;
use serde::Serialize;

use crate::error::CliError;
use crate::format::{FormatMode, write_record};

#[derive(Debug, Serialize)]
struct MaskRecord {
    kind: String,
    mask: &'static str,
    digits: usize,
}

/// Runs the `mask` command.
///
/// # Errors
///
/// Returns [`CliError::Output`] if stdout cannot be written.
pub fn run<W: Write>(kind: DocumentKind, mode: FormatMode, out: &mut W) -> Result<(), CliError> {
    let doc = kind.document();
    let record = MaskRecord {
        kind: kind.to_string(),
        mask: doc.mask(),
        digits: doc.digit_count(),
    };
    write_record(out, mode, record.mask, &record)?;
    Ok(())
}
