//! Amapá.
//!
//! Nine digits starting with `03`. The check digit is `11 - r` where `r` is
//! the remainder of the weighted sum plus an offset; both the offset and the
//! digit used when `r == 0` depend on which issuing range the eight-digit
//! body falls in:
//!
//! | Body range              | Offset | `r == 0` digit |
//! |-------------------------|--------|----------------|
//! | 03000001 ..= 03017000   | 5      | 0              |
//! | 03017001 ..= 03019022   | 9      | 1              |
//! | otherwise               | 0      | 0              |

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, body};
use crate::check_digits::{to_number, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^03\.[0-9]{6}-[0-9]$"));

/// Amapá state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Amapa;

/// `(offset, digit for remainder zero)` for the issuing range of `base`.
fn range_parameters(base: &[u8]) -> (u32, u8) {
    match to_number(base) {
        3_000_001..=3_017_000 => (5, 0),
        3_017_001..=3_019_022 => (9, 1),
        _ => (0, 0),
    }
}

fn check_digit(base: &[u8]) -> u8 {
    let (offset, zero_digit) = range_parameters(base);
    match 11 - (offset + weighted_sum(base, &NINE_TO_TWO)) % 11 {
        10 => 0,
        11 => zero_digit,
        d => d as u8,
    }
}

impl Document for Amapa {
    fn name(&self) -> &'static str {
        "IE-AP"
    }

    fn mask(&self) -> &'static str {
        "99.999999-9"
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
        let mut digits = body(rng, &[0, 3], NINE_TO_TWO.len());
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
    fn accepts_numbers_from_each_range() {
        assert!(Amapa.is_valid("03.012345-9"));
        assert!(Amapa.is_valid("03.018000-9"));
        assert!(Amapa.is_valid("03.123456-9"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!Amapa.is_valid("03.012345-8"));
        assert!(!Amapa.is_valid("03.123456-0"));
    }

    #[test]
    fn range_parameters_follow_issuing_ranges() {
        assert_eq!(range_parameters(&[0, 3, 0, 0, 0, 0, 0, 1]), (5, 0));
        assert_eq!(range_parameters(&[0, 3, 0, 1, 7, 0, 0, 0]), (5, 0));
        assert_eq!(range_parameters(&[0, 3, 0, 1, 7, 0, 0, 1]), (9, 1));
        assert_eq!(range_parameters(&[0, 3, 0, 1, 9, 0, 2, 2]), (9, 1));
        assert_eq!(range_parameters(&[0, 3, 0, 1, 9, 0, 2, 3]), (0, 0));
    }

    #[test]
    fn remainder_zero_uses_range_digit() {
        // Offset 9 range: 9 + sum is a multiple of 11, so the digit is 1.
        assert!(Amapa.is_valid("03.017007-1"));
        // Outside the special ranges the same situation gives 0.
        assert!(Amapa.is_valid("03.100001-0"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(204);
        for _ in 0..1000 {
            let formatted = Amapa.generate_with(&mut rng, true);
            assert!(Amapa.is_valid(&formatted), "{formatted}");
            assert!(Amapa.is_formatted(&formatted), "{formatted}");
            let raw = Amapa.generate_with(&mut rng, false);
            assert!(Amapa.is_valid(&raw), "{raw}");
        }
    }
}
