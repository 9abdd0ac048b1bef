//! Ceará.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{2}\.[0-9]{6}-[0-9]$"));

/// Ceará state registration: eight digits and a mod-11 check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ceara;

impl Document for Ceara {
    fn name(&self) -> &'static str {
        "IE-CE"
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
        synthesize_mod11(rng, &[], &NINE_TO_TWO)
    }
}
