/// Command module for the `brdocs` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the resolved arguments and an output writer, and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod format;
pub mod generate;
pub mod mask;
pub mod region;
pub mod states;
pub mod unformat;
pub mod validate;
