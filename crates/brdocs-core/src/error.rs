/// Error and rejection types for document validation.
///
/// Two distinct failure channels exist:
///
/// - [`Rejection`] explains why a well-formed string is not a valid document
///   number. It is the detailed form of a `false` from
///   [`crate::Document::is_valid`] and is never raised as a hard error.
/// - [`DocumentError`] signals misuse of the API itself: input that is not a
///   string at all, or a state code that does not name a federative unit.
use thiserror::Error;

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

/// Reason a candidate value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The number of digits left after stripping punctuation does not match
    /// the document mask.
    #[error("expected {expected} digits, found {found}")]
    Length {
        /// Placeholder count of the document mask.
        expected: usize,
        /// Digits present in the input.
        found: usize,
    },

    /// Every digit is the same (`000…0` through `999…9`).
    #[error("all digits are identical")]
    RepeatedDigits,

    /// The computed check digit(s) differ from the trailing digit(s).
    #[error("check digit mismatch")]
    CheckDigit,
}

// ---------------------------------------------------------------------------
// DocumentError
// ---------------------------------------------------------------------------

/// Errors produced by malformed calls, as opposed to invalid documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The argument is not a string (absent, or bytes that are not UTF-8).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of what was wrong with the argument.
        reason: String,
    },

    /// The state code does not name one of the 27 federative units.
    #[error("unknown state code {code:?}")]
    UnknownState {
        /// The code that was rejected.
        code: String,
    },
}
