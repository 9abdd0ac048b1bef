//! Alagoas.
//!
//! Nine unpunctuated digits: `24`, a company-type digit, a five-digit
//! sequence and the check digit `(sum * 10) % 11` (10 becomes 0). Rio Grande
//! do Norte uses the same check digit.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, body};
use crate::check_digits::{pick, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^24[03578][0-9]{6}$"));

/// Company types: normal, rural producer, substitute taxpayer, micro
/// company (ambulant) and micro company.
const COMPANY_TYPES: [u8; 5] = [0, 3, 5, 7, 8];

/// Alagoas state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alagoas;

pub(super) fn check_digit(base: &[u8]) -> u8 {
    let r = weighted_sum(base, &NINE_TO_TWO) * 10 % 11;
    if r == 10 { 0 } else { r as u8 }
}

pub(super) fn verify(digits: &[u8]) -> bool {
    let Some((&check, base)) = digits.split_last() else {
        return false;
    };
    check_digit(base) == check
}

impl Document for Alagoas {
    fn name(&self) -> &'static str {
        "IE-AL"
    }

    fn mask(&self) -> &'static str {
        "999999999"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify(digits)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let company_type = pick(rng, &COMPANY_TYPES);
        let mut digits = body(rng, &[2, 4, company_type], NINE_TO_TWO.len());
        digits.push(check_digit(&digits));
        digits
    }
}
