//! Minas Gerais.
//!
//! Thirteen digits: a three-digit municipality code, a six-digit sequence,
//! a two-digit order number and two check digits.
//!
//! The first check digit is a Luhn-style sum: a `0` is inserted after the
//! municipality code, the resulting twelve digits are multiplied alternately
//! by 1 and 2, the digits of every product are added, and the check digit is
//! the complement of that total to the next multiple of ten. The second
//! check digit is a mod-11 complement over the first twelve digits.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{mod10, mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{9}\.[0-9]{2}-[0-9]{2}$"));

const WEIGHTS_2: [u32; 12] = [3, 2, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Minas Gerais state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinasGerais;

fn first_check_digit(base: &[u8]) -> u8 {
    let (municipality, rest) = base.split_at(base.len().min(3));
    let sum: u32 = municipality
        .iter()
        .chain(std::iter::once(&0))
        .chain(rest)
        .zip([1u32, 2].into_iter().cycle())
        .map(|(&d, factor)| {
            let product = u32::from(d) * factor;
            product / 10 + product % 10
        })
        .sum();
    mod10(sum)
}

fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = first_check_digit(base);
    let mut extended = base.to_vec();
    extended.push(first);
    [first, mod11(weighted_sum(&extended, &WEIGHTS_2))]
}

impl Document for MinasGerais {
    fn name(&self) -> &'static str {
        "IE-MG"
    }

    fn mask(&self) -> &'static str {
        "999999999.99-99"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        let Some((base, check)) = digits.split_last_chunk::<2>() else {
            return false;
        };
        check_digits(base) == *check
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut digits = random_digits(rng, 11);
        let check = check_digits(&digits);
        digits.extend_from_slice(&check);
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
        assert!(MinasGerais.is_valid("062000319.00-98"));
        assert!(MinasGerais.is_valid("062.307.904/0081"));
        assert!(MinasGerais.is_valid("0623079040081"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!MinasGerais.is_valid("062307904.00-82"));
        assert!(!MinasGerais.is_valid("062307904.00-91"));
    }

    #[test]
    fn first_digit_sums_product_digits() {
        assert_eq!(first_check_digit(&[0, 6, 2, 3, 0, 7, 9, 0, 4, 0, 0]), 8);
    }

    #[test]
    fn formats_raw_input() {
        assert_eq!(
            MinasGerais.format("0623079040081").as_deref(),
            Some("062307904.00-81")
        );
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(211);
        for _ in 0..1000 {
            let formatted = MinasGerais.generate_with(&mut rng, true);
            assert!(MinasGerais.is_valid(&formatted), "{formatted}");
            let raw = MinasGerais.generate_with(&mut rng, false);
            assert!(MinasGerais.is_valid(&raw), "{raw}");
        }
    }
}
