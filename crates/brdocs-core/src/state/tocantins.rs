//! Tocantins.
//!
//! Eleven digits: a two-digit prefix, a two-digit company category (`01`,
//! `02`, `03` or `99`), a six-digit sequence and a check digit. The category
//! digits are left out of the weighted sum.

use std::sync::LazyLock;

use rand::RngCore;
use rand::seq::SliceRandom;
use regex::Regex;

use super::NINE_TO_TWO;
use crate::check_digits::{mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{2}\.(01|02|03|99)\.[0-9]{6}-[0-9]$"));

/// Company categories as `[tens, units]`: producer, company, public body and
/// special registration.
const CATEGORIES: [[u8; 2]; 4] = [[0, 1], [0, 2], [0, 3], [9, 9]];

/// Tocantins state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tocantins;

/// Check digit for a ten-digit body, skipping the category at positions
/// three and four.
fn check_digit(base: &[u8]) -> u8 {
    let weighted: Vec<u8> = base
        .iter()
        .enumerate()
        .filter(|&(i, _)| !(2..4).contains(&i))
        .map(|(_, &d)| d)
        .collect();
    mod11(weighted_sum(&weighted, &NINE_TO_TWO))
}

impl Document for Tocantins {
    fn name(&self) -> &'static str {
        "IE-TO"
    }

    fn mask(&self) -> &'static str {
        "99.99.999999-9"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        let Some((&check, base)) = digits.split_last() else {
            return false;
        };
        check_digit(base) == check
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let category = CATEGORIES.choose(rng).copied().unwrap_or([0, 1]);
        let mut digits = random_digits(rng, 2);
        digits.extend_from_slice(&category);
        digits.extend(random_digits(rng, 6));
        digits.push(check_digit(&digits));
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
        assert!(Tocantins.is_valid("29.03.000000-9"));
        assert!(Tocantins.is_valid("29.01.022783-6"));
        assert!(Tocantins.is_valid("29010227836"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!Tocantins.is_valid("29.01.022783-7"));
    }

    #[test]
    fn category_digits_do_not_affect_check_digit() {
        assert!(Tocantins.is_valid("29.99.022783-6"));
        assert!(Tocantins.is_valid("29.02.022783-6"));
    }

    #[test]
    fn generated_numbers_use_known_categories() {
        let mut rng = StdRng::seed_from_u64(228);
        for _ in 0..1000 {
            let formatted = Tocantins.generate_with(&mut rng, true);
            assert!(Tocantins.is_valid(&formatted), "{formatted}");
            assert!(Tocantins.is_formatted(&formatted), "{formatted}");
            let raw = Tocantins.generate_with(&mut rng, false);
            assert!(Tocantins.is_valid(&raw), "{raw}");
        }
    }
}
