//! Rio de Janeiro. Eight digits, weights `2,7,6,5,4,3,2`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{2}-[0-9]$"));

const WEIGHTS: [u32; 7] = [2, 7, 6, 5, 4, 3, 2];

/// Rio de Janeiro state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RioDeJaneiro;

impl Document for RioDeJaneiro {
    fn name(&self) -> &'static str {
        "IE-RJ"
    }

    fn mask(&self) -> &'static str {
        "99.999.99-9"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify_mod11(digits, &WEIGHTS)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize_mod11(rng, &[], &WEIGHTS)
    }
}
