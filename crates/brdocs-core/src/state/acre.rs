//! Acre.
//!
//! Thirteen digits starting with `01`: an eleven-digit body followed by two
//! mod-11 complement check digits. The same two-digit scheme is used by the
//! Distrito Federal.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::body;
use crate::check_digits::{mod11, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^01(\.[0-9]{3}){2}/[0-9]{3}-[0-9]{2}$"));

const WEIGHTS_1: [u32; 11] = [4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const WEIGHTS_2: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Acre state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Acre;

/// Both check digits of an eleven-digit body.
pub(super) fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = mod11(weighted_sum(base, &WEIGHTS_1));
    let mut extended = base.to_vec();
    extended.push(first);
    [first, mod11(weighted_sum(&extended, &WEIGHTS_2))]
}

pub(super) fn verify(digits: &[u8]) -> bool {
    let Some((base, check)) = digits.split_last_chunk::<2>() else {
        return false;
    };
    check_digits(base) == *check
}

pub(super) fn synthesize(rng: &mut dyn RngCore, prefix: &[u8]) -> Vec<u8> {
    let mut digits = body(rng, prefix, WEIGHTS_1.len());
    let check = check_digits(&digits);
    digits.extend_from_slice(&check);
    digits
}

impl Document for Acre {
    fn name(&self) -> &'static str {
        "IE-AC"
    }

    fn mask(&self) -> &'static str {
        "99.999.999/999-99"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify(digits)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize(rng, &[0, 1])
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(Acre.is_valid("01.004.823/001-12"));
        assert!(Acre.is_valid("0100482300112"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!Acre.is_valid("01.004.823/001-13"));
        assert!(!Acre.is_valid("01.004.823/001-22"));
    }

    #[test]
    fn rejects_old_nine_digit_numbers() {
        assert!(!Acre.is_valid("01.004.823"));
    }

    #[test]
    fn generated_numbers_start_with_01() {
        let mut rng = StdRng::seed_from_u64(201);
        for _ in 0..1000 {
            let formatted = Acre.generate_with(&mut rng, true);
            assert!(Acre.is_valid(&formatted), "{formatted}");
            assert!(formatted.starts_with("01."), "{formatted}");
            let raw = Acre.generate_with(&mut rng, false);
            assert!(Acre.is_valid(&raw), "{raw}");
        }
    }
}
