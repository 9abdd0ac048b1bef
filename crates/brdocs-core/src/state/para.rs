//! Pará. Registrations start with `15`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^15\.[0-9]{6}-[0-9]$"));

/// Pará state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Para;

impl Document for Para {
    fn name(&self) -> &'static str {
        "IE-PA"
    }

    fn mask(&self) -> &'static str {
        "99.999999-9"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify_mod11(digits, &NINE_TO_TWO)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize_mod11(rng, &[1, 5], &NINE_TO_TWO)
    }
}
