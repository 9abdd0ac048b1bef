//! CNH (Carteira Nacional de Habilitação), the driver's licence register.
//!
//! Eleven unpunctuated digits. The first check digit is `s1 % 11` over the
//! base with weights 9 down to 1; when that remainder exceeds 9 the digit is
//! zero and the second check digit is lowered by 2.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::random_digits;
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{11}$"));

/// Driver's licence number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cnh;

fn check_digits(base: &[u8]) -> [u8; 2] {
    let (s1, s2) = base
        .iter()
        .take(9)
        .zip(0u32..)
        .fold((0u32, 0u32), |(s1, s2), (&d, i)| {
            (s1 + u32::from(d) * (9 - i), s2 + u32::from(d) * (1 + i))
        });

    let r1 = s1 % 11;
    let first = if r1 > 9 { 0 } else { r1 };

    let discount = if r1 > 9 { 2 } else { 0 };
    let mut second = i64::from(s2 % 11) - discount;
    if second < 0 {
        second += 11;
    }
    let second = if second > 9 { 0 } else { second };

    [first as u8, second as u8]
}

impl Document for Cnh {
    fn name(&self) -> &'static str {
        "CNH"
    }

    fn mask(&self) -> &'static str {
        "99999999999"
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
        let mut digits = random_digits(rng, 9);
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
        assert!(Cnh.is_valid("12345678900"));
        assert!(Cnh.is_valid("98765432109"));
        assert!(Cnh.is_valid("00000000119"));
    }

    #[test]
    fn first_remainder_ten_discounts_second_digit() {
        // s1 % 11 == 10 here, so the second digit is (40 % 11) - 2 = 5.
        assert!(Cnh.is_valid("00010000405"));
        assert!(!Cnh.is_valid("00010000407"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!Cnh.is_valid("12345678901"));
        assert!(!Cnh.is_valid("12345678910"));
    }

    #[test]
    fn requires_exactly_eleven_digits() {
        assert!(!Cnh.is_valid("123456789"));
        assert!(!Cnh.is_valid("1234567890"));
        assert!(!Cnh.is_valid("123456789001"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1000 {
            let value = Cnh.generate_with(&mut rng, true);
            assert_eq!(value.len(), 11);
            assert!(Cnh.is_valid(&value), "{value}");
        }
    }
}
