//! Rondônia.
//!
//! Fourteen digits. The check digit is `11 - (sum % 11)` over weights
//! `6,5,4,3,2,9..2`; results of 10 and 11 wrap to 0 and 1.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{13}-[0-9]$"));

const WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Rondônia state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rondonia;

fn check_digit(base: &[u8]) -> u8 {
    let d = 11 - weighted_sum(base, &WEIGHTS) % 11;
    (if d >= 10 { d - 10 } else { d }) as u8
}

impl Document for Rondonia {
    fn name(&self) -> &'static str {
        "IE-RO"
    }

    fn mask(&self) -> &'static str {
        "9999999999999-9"
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
        let mut digits = random_digits(rng, WEIGHTS.len());
        digits.push(check_digit(&digits));
        digits
    }
}
