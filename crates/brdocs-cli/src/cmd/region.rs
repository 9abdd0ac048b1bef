//! Implementation of `brdocs region <kind> <value>`.
//!
//! Only `cpf` (fiscal region from the ninth digit) and `voter-id` (issuing
//! unit from digits nine and ten) carry regional information.
//!
//! Exit codes:
//! - 0 = region printed
//! - 1 = the value is invalid or its region code is unassigned
//! - 2 = the kind carries no region, or another usage error
use std::io::Write;

use brdocs_core::{Cpf, DocumentKind, VoterId};
use serde::Serialize;

use crate::error::CliError;
use crate::format::{FormatMode, write_record};

#[derive(Debug, Serialize)]
struct RegionRecord<'a> {
    kind: String,
    value: &'a str,
    region: &'static str,
}

/// Runs the `region` command.
///
/// # Errors
///
/// - [`CliError::RegionUnsupported`] for kinds other than `cpf` and
///   `voter-id`.
/// - [`CliError::NoRegion`] when the value is invalid.
pub fn run<W: Write>(
    kind: DocumentKind,
    value: &str,
    mode: FormatMode,
    out: &mut W,
) -> Result<(), CliError> {
    let lookup = match kind {
        DocumentKind::Cpf => Cpf.region(value),
        DocumentKind::VoterId => VoterId.region(value),
        DocumentKind::Cnpj
        | DocumentKind::Cei
        | DocumentKind::Cnh
        | DocumentKind::Nis
        | DocumentKind::Renavam
        | DocumentKind::SaoPauloRural
        | DocumentKind::StateRegistration(_) => {
            return Err(CliError::RegionUnsupported {
                kind: kind.to_string(),
            });
        }
    };
    let region = lookup.ok_or_else(|| CliError::NoRegion {
        kind: kind.to_string(),
    })?;
    let record = RegionRecord {
        kind: kind.to_string(),
        value,
        region,
    };
    write_record(out, mode, region, &record)?;
    Ok(())
}
