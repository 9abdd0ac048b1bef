//! NIS (Número de Identificação Social), shared by PIS, PASEP and NIT.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{3}\.[0-9]{5}\.[0-9]{2}-[0-9]$"));

pub(crate) const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Social integration number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nis;

impl Document for Nis {
    fn name(&self) -> &'static str {
        "NIS"
    }

    fn mask(&self) -> &'static str {
        "999.99999.99-9"
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
        assert!(Nis.is_valid("120.12345.67-2"));
        assert!(Nis.is_valid("12345678900"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!Nis.is_valid("120.12345.67-3"));
        assert!(!Nis.is_valid("12345678901"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!Nis.is_valid("120.12345.67"));
        assert!(!Nis.is_valid("120.12345.67-20"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let formatted = Nis.generate_with(&mut rng, true);
            assert!(Nis.is_valid(&formatted), "{formatted}");
            let raw = Nis.generate_with(&mut rng, false);
            assert!(Nis.is_valid(&raw), "{raw}");
        }
    }
}
