#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod check_digits;
pub mod cei;
pub mod cnh;
pub mod cnpj;
pub mod cpf;
pub mod document;
pub mod error;
pub mod mask;
pub mod nis;
pub mod renavam;
pub mod state;
pub mod voter_id;

pub use cei::Cei;
pub use cnh::Cnh;
pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use document::{Document, DocumentKind};
pub use error::{DocumentError, Rejection};
pub use nis::Nis;
pub use renavam::Renavam;
pub use state::{GeneratedRegistration, SaoPauloRural, StateCode};
pub use voter_id::VoterId;

/// Returns the current version of the brdocs-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
