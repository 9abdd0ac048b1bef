//! The capability set shared by every document type.
//!
//! A document module supplies its mask, its punctuation pattern, a checksum
//! routine over already-extracted digits, and a generator of random base
//! digits. Everything else (digit extraction, length checks, formatting,
//! byte-level argument checking and rendering generated values) is provided
//! by [`Document`] itself.

use std::fmt;

use rand::RngCore;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::check_digits::{digits_of, is_repeated, render};
use crate::error::{DocumentError, Rejection};
use crate::mask;
use crate::state::StateCode;

// ---------------------------------------------------------------------------
// Document trait
// ---------------------------------------------------------------------------

/// Validation, formatting and generation for one document type.
///
/// Implementors are zero-sized and stateless, so a single `&'static dyn
/// Document` can be shared freely across threads.
pub trait Document: Send + Sync {
    /// Short human-readable name, e.g. `"CPF"` or `"IE-BA"`.
    fn name(&self) -> &'static str;

    /// Display mask. ASCII digits are placeholders.
    fn mask(&self) -> &'static str;

    /// Pattern a fully punctuated value must match, `None` if the pattern
    /// failed to compile.
    fn pattern(&self) -> Option<&'static Regex>;

    /// Runs the checksum over `digits`.
    ///
    /// Callers guarantee `digits.len() == self.digit_count()`; implementations
    /// return `false` rather than panic if that does not hold.
    fn verify(&self, digits: &[u8]) -> bool;

    /// Produces a complete, checksum-valid digit sequence.
    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8>;

    /// Whether sequences of one repeated digit are rejected before the
    /// checksum runs.
    fn rejects_repeated_digits(&self) -> bool {
        false
    }

    /// Number of digits a value must contain.
    fn digit_count(&self) -> usize {
        mask::placeholder_count(self.mask())
    }

    /// Validates `value`, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies: wrong digit count, a
    /// repeated-digit sequence (for documents that reject them), or a check
    /// digit mismatch.
    fn inspect(&self, value: &str) -> Result<(), Rejection> {
        let digits = digits_of(value);
        let expected = self.digit_count();
        if digits.len() != expected {
            return Err(Rejection::Length {
                expected,
                found: digits.len(),
            });
        }
        if self.rejects_repeated_digits() && is_repeated(&digits) {
            return Err(Rejection::RepeatedDigits);
        }
        if self.verify(&digits) {
            Ok(())
        } else {
            Err(Rejection::CheckDigit)
        }
    }

    /// Returns `true` if `value` is a valid number of this document type.
    ///
    /// Punctuation is ignored. Never panics.
    fn is_valid(&self, value: &str) -> bool {
        self.inspect(value).is_ok()
    }

    /// Validates raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidArgument`] when `raw` is not a UTF-8
    /// string. A string that is simply not a valid document yields
    /// `Ok(false)`.
    fn check_bytes(&self, raw: &[u8]) -> Result<bool, DocumentError> {
        let value = std::str::from_utf8(raw).map_err(|e| DocumentError::InvalidArgument {
            reason: format!(
                "{} input is not UTF-8: first invalid byte at offset {}",
                self.name(),
                e.valid_up_to()
            ),
        })?;
        Ok(self.is_valid(value))
    }

    /// Validates an optional value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidArgument`] when `value` is `None`.
    fn check_optional(&self, value: Option<&str>) -> Result<bool, DocumentError> {
        value
            .map(|v| self.is_valid(v))
            .ok_or_else(|| DocumentError::InvalidArgument {
                reason: format!("no {} value supplied", self.name()),
            })
    }

    /// Applies the mask to `value`, or `None` if its digit count is wrong.
    fn format(&self, value: &str) -> Option<String> {
        mask::can_be_formatted(value, self.mask()).then(|| mask::format(self.mask(), value))
    }

    /// Strips punctuation from `value`, or `None` if its digit count is wrong.
    fn unformat(&self, value: &str) -> Option<String> {
        mask::can_be_formatted(value, self.mask()).then(|| mask::unformat(value))
    }

    /// Returns `true` if `value` is written in the punctuated display form.
    fn is_formatted(&self, value: &str) -> bool {
        mask::is_formatted(value, self.pattern())
    }

    /// Generates a random valid number using the thread-local generator.
    ///
    /// Output is test data only: the generator is not cryptographic.
    fn generate(&self, formatted: bool) -> String {
        let mut rng = rand::thread_rng();
        self.generate_with(&mut rng, formatted)
    }

    /// Generates a random valid number from the supplied generator.
    fn generate_with(&self, rng: &mut dyn RngCore, formatted: bool) -> String {
        let raw = render(&self.synthesize(rng));
        tracing::trace!(document = self.name(), "generated value");
        if formatted {
            mask::format(self.mask(), &raw)
        } else {
            raw
        }
    }
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// Every document type the crate knows, as a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Individual taxpayer registry.
    Cpf,
    /// Company taxpayer registry.
    Cnpj,
    /// INSS employer registry.
    Cei,
    /// Driver's licence.
    Cnh,
    /// Social integration number (PIS/PASEP/NIS).
    Nis,
    /// Vehicle registry.
    Renavam,
    /// Voter registration (Título de Eleitor).
    VoterId,
    /// São Paulo rural producer registration.
    SaoPauloRural,
    /// State tax registration (Inscrição Estadual) of one federative unit.
    StateRegistration(StateCode),
}

impl DocumentKind {
    /// Kinds that are not selected through a state code.
    pub const STANDALONE: [DocumentKind; 8] = [
        DocumentKind::Cpf,
        DocumentKind::Cnpj,
        DocumentKind::Cei,
        DocumentKind::Cnh,
        DocumentKind::Nis,
        DocumentKind::Renavam,
        DocumentKind::VoterId,
        DocumentKind::SaoPauloRural,
    ];

    /// Returns the module implementing this kind.
    pub fn document(self) -> &'static dyn Document {
        match self {
            Self::Cpf => &crate::cpf::Cpf,
            Self::Cnpj => &crate::cnpj::Cnpj,
            Self::Cei => &crate::cei::Cei,
            Self::Cnh => &crate::cnh::Cnh,
            Self::Nis => &crate::nis::Nis,
            Self::Renavam => &crate::renavam::Renavam,
            Self::VoterId => &crate::voter_id::VoterId,
            Self::SaoPauloRural => &crate::state::SaoPauloRural,
            Self::StateRegistration(code) => code.registration(),
        }
    }

    /// Every kind: the standalone documents followed by the 27 states.
    pub fn all() -> impl Iterator<Item = DocumentKind> {
        Self::STANDALONE
            .into_iter()
            .chain(StateCode::ALL.into_iter().map(Self::StateRegistration))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => f.write_str("cpf"),
            Self::Cnpj => f.write_str("cnpj"),
            Self::Cei => f.write_str("cei"),
            Self::Cnh => f.write_str("cnh"),
            Self::Nis => f.write_str("nis"),
            Self::Renavam => f.write_str("renavam"),
            Self::VoterId => f.write_str("voter-id"),
            Self::SaoPauloRural => f.write_str("sp-rural"),
            Self::StateRegistration(code) => write!(f, "ie-{code}"),
        }
    }
}
