//! Renavam (Registro Nacional de Veículos Automotores), the vehicle registry.
//!
//! Uses the same weights and remainder rule as [`Nis`](crate::Nis) over its
//! first ten digits; only the mask differs.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;
use crate::nis::WEIGHTS;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{4}\.[0-9]{6}-[0-9]$"));

/// Vehicle registry number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renavam;

impl Document for Renavam {
    fn name(&self) -> &'static str {
        "Renavam"
    }

    fn mask(&self) -> &'static str {
        "9999.999999-9"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        let Some((&check, base)) = digits.split_last() else {
            return false;
        };
        mod11(weighted_sum(base, &WEIGHTS)) == check
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut digits = random_digits(rng, 10);
        digits.push(mod11(weighted_sum(&digits, &WEIGHTS)));
        digits
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(Renavam.is_valid("0063.925181-1"));
        assert!(Renavam.is_valid("00639251811"));
        assert!(Renavam.is_valid("1234.567890-0"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!Renavam.is_valid("0063.925181-2"));
    }

    #[test]
    fn legacy_nine_digit_numbers_are_not_padded() {
        assert!(!Renavam.is_valid("639251811"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..1000 {
            let formatted = Renavam.generate_with(&mut rng, true);
            assert!(Renavam.is_valid(&formatted), "{formatted}");
            assert!(Renavam.is_formatted(&formatted), "{formatted}");
            let raw = Renavam.generate_with(&mut rng, false);
            assert!(Renavam.is_valid(&raw), "{raw}");
        }
    }
}
