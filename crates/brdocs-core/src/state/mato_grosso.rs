//! Mato Grosso.
//!
//! Eleven digits; the ten-digit body is weighted `3,2,9..2`. Generated values
//! start with `00`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{4}(\.[0-9]{3}){2}-[0-9]$"));

const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Mato Grosso state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatoGrosso;

impl Document for MatoGrosso {
    fn name(&self) -> &'static str {
        "IE-MT"
    }

    fn mask(&self) -> &'static str {
        "9999.999.999-9"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify_mod11(digits, &WEIGHTS)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize_mod11(rng, &[0, 0], &WEIGHTS)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(MatoGrosso.is_valid("0013.000.001-9"));
        assert!(MatoGrosso.is_valid("00130000019"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!MatoGrosso.is_valid("0013.000.001-8"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(110);
        for _ in 0..1000 {
            let formatted = MatoGrosso.generate_with(&mut rng, true);
            assert!(MatoGrosso.is_valid(&formatted), "{formatted}");
            let raw = MatoGrosso.generate_with(&mut rng, false);
            assert!(MatoGrosso.is_valid(&raw), "{raw}");
            assert!(raw.starts_with("00"), "{raw}");
        }
    }
}
