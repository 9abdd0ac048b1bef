/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `brdocs` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: usage failure. The arguments do not describe a
///   command that can run (a state registration without `--state`, a region
///   lookup for a document that has none) or output could not be written.
/// - Exit code **1**: logical failure. The command ran but the value is not
///   a valid document, cannot be formatted, or has no region.
use std::fmt;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `brdocs` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: usage failures ---
    /// `ie` was selected without `--state`.
    MissingState,

    /// `--state` was given for a document that is not a state registration.
    UnexpectedState {
        /// Name of the selected document kind.
        kind: String,
    },

    /// `region` was requested for a document without regional information.
    RegionUnsupported {
        /// Name of the selected document kind.
        kind: String,
    },

    /// Writing to stdout failed.
    Output {
        /// The underlying I/O error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// At least one value failed validation. Verdicts have already been
    /// printed; this variant carries the exit status.
    Invalid {
        /// Name of the selected document kind.
        kind: String,
        /// Number of values rejected.
        rejected: usize,
    },

    /// The value's digit count does not fit the document mask.
    CannotFormat {
        /// Name of the selected document kind.
        kind: String,
        /// Digits required by the mask.
        expected: usize,
        /// Digits present in the value.
        found: usize,
    },

    /// The value is invalid or its region code is unassigned.
    NoRegion {
        /// Name of the selected document kind.
        kind: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingState
            | Self::UnexpectedState { .. }
            | Self::RegionUnsupported { .. }
            | Self::Output { .. } => 2,

            Self::Invalid { .. } | Self::CannotFormat { .. } | Self::NoRegion { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::MissingState => "error: kind `ie` requires --state <UF>".to_owned(),
            Self::UnexpectedState { kind } => {
                format!("error: --state only applies to `ie`, not `{kind}`")
            }
            Self::RegionUnsupported { kind } => {
                format!("error: `{kind}` carries no region; use cpf or voter-id")
            }
            Self::Output { detail } => format!("error: failed to write output: {detail}"),
            Self::Invalid { kind, rejected: 1 } => format!("error: 1 invalid {kind} value"),
            Self::Invalid { kind, rejected } => {
                format!("error: {rejected} invalid {kind} values")
            }
            Self::CannotFormat {
                kind,
                expected,
                found,
            } => {
                format!("error: cannot format {kind}: expected {expected} digits, found {found}")
            }
            Self::NoRegion { kind } => format!("error: no region for this {kind}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Output {
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
