use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{2}-[0-9]$"));

/// Espírito Santo state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EspiritoSanto;

impl Document for EspiritoSanto {
    fn name(&self) -> &'static str {
        "IE-ES"
    }

    fn mask(&self) -> &'static str {
        "999.999.99-9"
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
