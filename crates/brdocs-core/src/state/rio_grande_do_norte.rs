//! Rio Grande do Norte. Check digit as in Alagoas; numbers start with `20`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, alagoas, body};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^20\.[0-9]{3}\.[0-9]{3}-[0-9]$"));

/// Rio Grande do Norte state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RioGrandeDoNorte;

impl Document for RioGrandeDoNorte {
    fn name(&self) -> &'static str {
        "IE-RN"
    }

    fn mask(&self) -> &'static str {
        "99.999.999-9"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        alagoas::verify(digits)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut digits = body(rng, &[2, 0], NINE_TO_TWO.len());
        digits.push(alagoas::check_digit(&digits));
        digits
    }
}
