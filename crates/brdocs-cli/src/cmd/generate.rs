//! Implementation of `brdocs generate <kind>`.
//!
//! Prints `--count` random valid numbers, punctuated unless `--raw` is given.
//! `--seed` (or `BRDOCS_SEED`) makes the output reproducible. For `ie`
//! without `--state` each value comes from a randomly chosen unit and human
//! output is prefixed with the unit code.
//!
//! Generated numbers are test data. The generator is not cryptographic and
//! the values are not registered with any authority.
//!
//! Exit codes:
//! - 0 = values printed
//! - 2 = usage error
use std::io::Write;

use brdocs_core::{DocumentKind, GeneratedRegistration, state};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;

use crate::cli::{Kind, Target};
use crate::error::CliError;
use crate::format::{FormatMode, write_record};

/// Options for one `generate` invocation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number of values to print.
    pub count: u32,
    /// Print punctuated values.
    pub formatted: bool,
    /// Fixed seed, or `None` for the thread-local generator.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct Generated {
    kind: String,
    value: String,
}

/// What the invocation produces: a single document kind, or state
/// registrations from any unit.
enum Source {
    Document(DocumentKind),
    AnyState,
}

fn source(target: &Target) -> Result<Source, CliError> {
    if target.kind == Kind::Ie && target.state.is_none() {
        return Ok(Source::AnyState);
    }
    target.document_kind().map(Source::Document)
}

fn rng_for(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

/// Runs the `generate` command.
///
/// # Errors
///
/// - [`CliError::UnexpectedState`] when `--state` accompanies a kind other
///   than `ie`.
/// - [`CliError::Output`] if stdout cannot be written.
pub fn run<W: Write>(
    target: &Target,
    opts: &GenerateOptions,
    mode: FormatMode,
    out: &mut W,
) -> Result<(), CliError> {
    let source = source(target)?;
    let mut rng = rng_for(opts.seed);
    tracing::info!(count = opts.count, seed = ?opts.seed, "generating");

    for _ in 0..opts.count {
        match source {
            Source::Document(kind) => {
                let value = kind.document().generate_with(&mut *rng, opts.formatted);
                if let DocumentKind::StateRegistration(code) = kind {
                    let record = GeneratedRegistration { state: code, value };
                    write_record(out, mode, &record.value, &record)?;
                } else {
                    let record = Generated {
                        kind: kind.to_string(),
                        value,
                    };
                    write_record(out, mode, &record.value, &record)?;
                }
            }
            Source::AnyState => {
                let record = state::generate_with(&mut *rng, opts.formatted, None)
                    .ok_or(CliError::MissingState)?;
                let human = format!("{}\t{}", record.state, record.value);
                write_record(out, mode, &human, &record)?;
            }
        }
    }
    Ok(())
}
