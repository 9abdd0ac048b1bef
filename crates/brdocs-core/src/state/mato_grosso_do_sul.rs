//! Mato Grosso do Sul. Registrations start with `28`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^28\.[0-9]{3}\.[0-9]{3}-[0-9]$"));

/// Mato Grosso do Sul state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatoGrossoDoSul;

impl Document for MatoGrossoDoSul {
    fn name(&self) -> &'static str {
        "IE-MS"
    }

    fn mask(&self) -> &'static str {
        "99.999.999-9"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify_mod11(digits, &NINE_TO_TWO)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize_mod11(rng, &[2, 8], &NINE_TO_TWO)
    }
}
