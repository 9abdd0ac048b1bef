//! Implementation of `brdocs states`: one line per federative unit with its
//! code, name and registration mask.
use std::io::Write;

use brdocs_core::StateCode;
use serde::Serialize;

use crate::error::CliError;
use crate::format::{FormatMode, write_record};

#[derive(Debug, Serialize)]
struct StateRecord {
    code: StateCode,
    name: &'static str,
    mask: &'static str,
}

/// Runs the `states` command.
///
/// # Errors
///
/// Returns [`CliError::Output`] if stdout cannot be written.
pub fn run<W: Write>(mode: FormatMode, out: &mut W) -> Result<(), CliError> {
    for code in StateCode::ALL {
        let record = StateRecord {
            code,
            name: code.name(),
            mask: code.registration().mask(),
        };
        let human = format!("{code}\t{}\t{}", record.mask, record.name);
        write_record(out, mode, &human, &record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn lists_every_unit() {
        let mut out = Vec::new();
        run(FormatMode::Human, &mut out).expect("states");
        let text = String::from_utf8(out).expect("utf-8");
        assert_eq!(text.lines().count(), 27);
        assert!(text.lines().any(|l| l.starts_with("BA\t999.999.999\t")), "{text}");
    }

    #[test]
    fn json_uses_uppercase_codes() {
        let mut out = Vec::new();
        run(FormatMode::Json, &mut out).expect("states");
        let first: serde_json::Value =
            serde_json::from_slice(out.split(|&b| b == b'\n').next().expect("line"))
                .expect("json");
        assert_eq!(first["code"], "AC");
        assert_eq!(first["mask"], "99.999.999/999-99");
    }
}
