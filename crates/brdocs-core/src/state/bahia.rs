//! Bahia.
//!
//! Nine digits: a seven-digit body and two check digits computed *last
//! first*. The modulus depends on the second body digit: 10 when it is one
//! of `0,1,2,3,4,5,8`, otherwise 11.
//!
//! 1. The ninth digit uses weights `8..2` over the body.
//! 2. The eighth digit uses weights `9..2` over the body followed by the
//!    ninth digit.
//!
//! Under modulus 10 a zero remainder gives 0; under modulus 11 remainders 0
//! and 1 give 0. Anything else is `modulus - remainder`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::NINE_TO_TWO;
use crate::check_digits::{mod10, mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{3}(\.[0-9]{3}){2}$"));

const WEIGHTS_LAST: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

/// Second body digits that select modulus 10.
const MODULUS_10_DIGITS: [u8; 7] = [0, 1, 2, 3, 4, 5, 8];

/// Bahia state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bahia;

/// Returns `[eighth, ninth]` for a seven-digit body.
fn check_digits(base: &[u8]) -> [u8; 2] {
    let modulus_10 = base.get(1).is_some_and(|d| MODULUS_10_DIGITS.contains(d));
    let rule = |sum: u32| if modulus_10 { mod10(sum) } else { mod11(sum) };

    let last = rule(weighted_sum(base, &WEIGHTS_LAST));
    let mut extended = base.to_vec();
    extended.push(last);
    [rule(weighted_sum(&extended, &NINE_TO_TWO)), last]
}

impl Document for Bahia {
    fn name(&self) -> &'static str {
        "IE-BA"
    }

    fn mask(&self) -> &'static str {
        "999.999.999"
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
        let mut digits = random_digits(rng, 7);
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
    use crate::error::Rejection;

    #[test]
    fn accepts_modulus_10_numbers() {
        assert!(Bahia.is_valid("122.096.866"));
        assert!(Bahia.is_valid("123.456.748"));
        assert!(Bahia.is_valid("100000306"));
    }

    #[test]
    fn accepts_modulus_11_numbers() {
        assert!(Bahia.is_valid("612.345.685"));
        assert!(Bahia.is_valid("160.000.005"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!Bahia.is_valid("122.096.867"));
        assert!(!Bahia.is_valid("122.096.876"));
        assert!(!Bahia.is_valid("612.345.686"));
    }

    #[test]
    fn rejects_eight_and_ten_digit_numbers() {
        assert_eq!(
            Bahia.inspect("1234567-4"),
            Err(Rejection::Length {
                expected: 9,
                found: 8
            })
        );
        assert!(!Bahia.is_valid("1234567-4"));
        assert!(!Bahia.is_valid("123.456.748-0"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(205);
        for _ in 0..1000 {
            let formatted = Bahia.generate_with(&mut rng, true);
            assert!(Bahia.is_valid(&formatted), "{formatted}");
            let raw = Bahia.generate_with(&mut rng, false);
            assert!(Bahia.is_valid(&raw), "{raw}");
        }
    }
}
