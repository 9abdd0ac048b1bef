//! Clap CLI definition: root struct, subcommands, and shared argument types.
use brdocs_core::{DocumentError, DocumentKind, StateCode};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::CliError;

/// Output format for CLI commands.
///
/// `Human` emits one plain line per result to stdout. `Json` emits one JSON
/// object per result (NDJSON).
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured NDJSON output.
    Json,
}

/// Document type selected on the command line.
///
/// `ie` covers the 27 state tax registrations and needs `--state` to pick
/// the unit, except for `generate`, where a missing state means "any".
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Individual taxpayer registry.
    Cpf,
    /// Company taxpayer registry.
    Cnpj,
    /// INSS employer registry.
    Cei,
    /// Driver's licence.
    Cnh,
    /// PIS/PASEP/NIS social integration number.
    Nis,
    /// Vehicle registry.
    Renavam,
    /// Voter registration (Título de Eleitor).
    VoterId,
    /// São Paulo rural producer registration.
    SpRural,
    /// State tax registration (Inscrição Estadual); requires `--state`.
    Ie,
}

impl Kind {
    /// The library kind for documents that need no state, `None` for `ie`.
    pub fn standalone(self) -> Option<DocumentKind> {
        match self {
            Self::Cpf => Some(DocumentKind::Cpf),
            Self::Cnpj => Some(DocumentKind::Cnpj),
            Self::Cei => Some(DocumentKind::Cei),
            Self::Cnh => Some(DocumentKind::Cnh),
            Self::Nis => Some(DocumentKind::Nis),
            Self::Renavam => Some(DocumentKind::Renavam),
            Self::VoterId => Some(DocumentKind::VoterId),
            Self::SpRural => Some(DocumentKind::SaoPauloRural),
            Self::Ie => None,
        }
    }
}

/// Parses a federative unit code, accepting either case.
fn parse_state(s: &str) -> Result<StateCode, DocumentError> {
    s.trim().to_ascii_uppercase().parse()
}

/// Document selection shared by every per-document subcommand.
#[derive(Args, Clone, Debug)]
pub struct Target {
    /// Document type.
    #[arg(value_enum)]
    pub kind: Kind,

    /// Federative unit for `ie`, e.g. `SP` or `ba`.
    #[arg(long, short = 's', value_name = "UF", value_parser = parse_state)]
    pub state: Option<StateCode>,
}

impl Target {
    /// Resolves the selection to a single library document kind.
    ///
    /// # Errors
    ///
    /// - [`CliError::MissingState`] when `ie` is selected without `--state`.
    /// - [`CliError::UnexpectedState`] when `--state` accompanies any other
    ///   kind.
    pub fn document_kind(&self) -> Result<DocumentKind, CliError> {
        match (self.kind.standalone(), self.state) {
            (Some(kind), None) => Ok(kind),
            (Some(kind), Some(_)) => Err(CliError::UnexpectedState {
                kind: kind.to_string(),
            }),
            (None, Some(code)) => Ok(DocumentKind::StateRegistration(code)),
            (None, None) => Err(CliError::MissingState),
        }
    }
}

/// All subcommands exposed by the `brdocs` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one or more values; `-` reads newline-separated values from stdin.
    Validate {
        #[command(flatten)]
        target: Target,
        /// Values to check.
        #[arg(required = true, num_args = 1.., value_name = "VALUE")]
        values: Vec<String>,
    },
    /// Print a value in its punctuated display form.
    Format {
        #[command(flatten)]
        target: Target,
        /// Digits to format; punctuation is ignored.
        value: String,
    },
    /// Print a value with all punctuation stripped.
    Unformat {
        #[command(flatten)]
        target: Target,
        /// Value to strip.
        value: String,
    },
    /// Print the display mask of a document type.
    Mask {
        #[command(flatten)]
        target: Target,
    },
    /// Generate random valid numbers for testing.
    Generate {
        #[command(flatten)]
        target: Target,
        /// How many values to print.
        #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Print digits only, without punctuation.
        #[arg(long)]
        raw: bool,
        /// Seed for reproducible output.
        #[arg(long, env = "BRDOCS_SEED")]
        seed: Option<u64>,
    },
    /// Print the issuing region of a CPF or voter registration.
    Region {
        #[command(flatten)]
        target: Target,
        /// Value to look up.
        value: String,
    },
    /// List the 27 federative units and their registration masks.
    States,
}

/// Root CLI struct for the `brdocs` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "brdocs",
    version,
    about = "Brazilian document number toolkit",
    long_about = "Validates, formats and generates Brazilian document numbers:\n\
                  CPF, CNPJ, CEI, CNH, NIS, RENAVAM, voter registration and\n\
                  the state tax registrations of all 27 federative units."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit debug logs to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable ANSI colors in human output.
    ///
    /// Colors are also disabled when `NO_COLOR` is set or stdout is not a
    /// terminal.
    #[arg(long, global = true)]
    pub no_color: bool,
}
