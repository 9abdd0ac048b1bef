//! Amazonas.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, body};
use crate::check_digits::{mod11, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}-[0-9]$"));

/// Amazonas state registration.
///
/// Weighted sums below 11 use `11 - sum` directly instead of the remainder;
/// results of 10 or more become 0 either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Amazonas;

fn check_digit(base: &[u8]) -> u8 {
    let sum = weighted_sum(base, &NINE_TO_TWO);
    if sum < 11 {
        let d = 11 - sum;
        if d >= 10 { 0 } else { d as u8 }
    } else {
        mod11(sum)
    }
}

impl Document for Amazonas {
    fn name(&self) -> &'static str {
        "IE-AM"
    }

    fn mask(&self) -> &'static str {
        "99.999.999-9"
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
        let mut digits = body(rng, &[0, 4], NINE_TO_TWO.len());
        digits.push(check_digit(&digits));
        digits
    }
}
