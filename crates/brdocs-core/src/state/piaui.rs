//! Piauí. Unpunctuated, starting with `19`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^19[0-9]{7}$"));

/// Piauí state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Piaui;

impl Document for Piaui {
    fn name(&self) -> &'static str {
        "IE-PI"
    }

    fn mask(&self) -> &'static str {
        "999999999"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify_mod11(digits, &NINE_TO_TWO)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize_mod11(rng, &[1, 9], &NINE_TO_TWO)
    }
}
