//! Implementation of `brdocs format <kind> <value>`.
//!
//! Exit codes:
//! - 0 = formatted value printed
//! - 1 = digit count does not fit the mask
//! - 2 = usage error
use std::io::Write;

use brdocs_core::{DocumentKind, check_digits::digits_of};
use serde::Serialize;

use crate::error::CliError;
use crate::format::{FormatMode, write_record};

/// A value before and after conversion, shared with `unformat`.
#[derive(Debug, Serialize)]
pub struct Conversion<'a> {
    /// Display name of the document kind.
    pub kind: String,
    /// The value as given.
    pub input: &'a str,
    /// The converted value.
    pub output: &'a str,
}

/// The error for a value whose digit count does not fit `kind`'s mask.
pub fn cannot_format(kind: DocumentKind, value: &str) -> CliError {
    CliError::CannotFormat {
        kind: kind.to_string(),
        expected: kind.document().digit_count(),
        found: digits_of(value).len(),
    }
}

/// Runs the `format` command. The value is not validated, only shaped.
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
    let formatted = kind
        .document()
        .format(value)
        .ok_or_else(|| cannot_format(kind, value))?;
    let record = Conversion {
        kind: kind.to_string(),
        input: value,
        output: &formatted,
    };
    write_record(out, mode, &formatted, &record)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn formats_raw_digits() {
        let mut out = Vec::new();
        run(DocumentKind::Cnpj, "86507991000118", FormatMode::Human, &mut out).expect("format");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "86.507.991/0001-18\n");
    }

    #[test]
    fn reformats_foreign_punctuation() {
        let mut out = Vec::new();
        run(DocumentKind::Cpf, "681 113 352 / 02", FormatMode::Human, &mut out).expect("format");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "681.113.352-02\n");
    }

    #[test]
    fn wrong_digit_count_is_reported() {
        let mut out = Vec::new();
        let err = run(DocumentKind::Cpf, "123", FormatMode::Human, &mut out).expect_err("short");
        assert!(matches!(
            err,
            CliError::CannotFormat {
                expected: 11,
                found: 3,
                ..
            }
        ));
        assert!(out.is_empty());
    }
}
