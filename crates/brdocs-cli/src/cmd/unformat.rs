//! Implementation of `brdocs unformat <kind> <value>`.
//!
//! Exit codes:
//! - 0 = digits printed
//! - 1 = digit count does not fit the mask
//! - 2 = usage error
use std::io::Write;

use brdocs_core::DocumentKind;

use crate::cmd::format::{Conversion, cannot_format};
use crate::error::CliError;
use crate::format::{FormatMode, write_record};

/// Runs the `unformat` command.
///
/// # Errors
///
/// Returns [`CliError::CannotFormat`] when the digit count is wrong.
pub fn run<W: Write>(
    kind: DocumentKind,
    value: &str,
    mode: FormatMode,
    out: &mut W,
) -> Result<(), CliError> {
    let digits = kind
        .document()
        .unformat(value)
        .ok_or_else(|| cannot_format(kind, value))?;
    let record = Conversion {
        kind: kind.to_string(),
        input: value,
        output: &digits,
    };
    write_record(out, mode, &digits, &record)?;
    Ok(())
}
