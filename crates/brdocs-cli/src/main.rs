//! `brdocs`: validate, format and generate Brazilian document numbers.
use std::io::Write as _;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod cmd;
mod error;
mod format;

pub use cli::OutputFormat;

use cli::{Cli, Command};
use error::CliError;
use format::{FormatMode, colors_enabled};

/// Installs the stderr log subscriber.
///
/// `--verbose` forces debug logs. Otherwise `RUST_LOG` applies, falling back
/// to warnings (or errors only under `--quiet`).
fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if quiet { "error" } else { "warn" }))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatches the parsed command line to its subcommand.
fn dispatch<W: std::io::Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let mode = FormatMode::from(&cli.format);
    match &cli.command {
        Command::Validate { target, values } => cmd::validate::run(
            target.document_kind()?,
            values,
            std::io::stdin().lock(),
            mode,
            colors_enabled(cli.no_color),
            out,
        ),
        Command::Format { target, value } => {
            cmd::format::run(target.document_kind()?, value, mode, out)
        }
        Command::Unformat { target, value } => {
            cmd::unformat::run(target.document_kind()?, value, mode, out)
        }
        Command::Mask { target } => cmd::mask::run(target.document_kind()?, mode, out),
        Command::Generate {
            target,
            count,
            raw,
            seed,
        } => {
            let opts = cmd::generate::GenerateOptions {
                count: *count,
                formatted: !raw,
                seed: *seed,
            };
            cmd::generate::run(target, &opts, mode, out)
        }
        Command::Region { target, value } => {
            cmd::region::run(target.document_kind()?, value, mode, out)
        }
        Command::States => cmd::states::run(mode, out),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = dispatch(&cli, &mut out).and_then(|()| out.flush().map_err(CliError::from));

    if let Err(err) = result {
        drop(out);
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}
