//! Goiás.
//!
//! Nine digits starting with `10`, `11` or `15`; weights `9..2`, and
//! `11 - r` for remainders above one. A remainder of one gives 1 only for
//! bodies in the range 10103105 ..= 10119997, otherwise 0. The body
//! 11094402 was issued with both 0 and 1 and accepts either.

use std::sync::LazyLock;

use rand::{Rng, RngCore};
use regex::Regex;

use super::{NINE_TO_TWO, body};
use crate::check_digits::{pick, to_number, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^(10|11|15)(\.[0-9]{3}){2}-[0-9]$"));

const DUAL_DIGIT_BODY: u64 = 11_094_402;

/// Goiás state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Goias;

fn check_digit(base: &[u8]) -> u8 {
    match weighted_sum(base, &NINE_TO_TWO) % 11 {
        0 => 0,
        1 if (10_103_105..=10_119_997).contains(&to_number(base)) => 1,
        1 => 0,
        r => (11 - r) as u8,
    }
}

impl Document for Goias {
    fn name(&self) -> &'static str {
        "IE-GO"
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
        if to_number(base) == DUAL_DIGIT_BODY {
            return check <= 1;
        }
        check_digit(base) == check
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let second = pick(rng, &[0, 1, 5]);
        let mut digits = body(rng, &[1, second], NINE_TO_TWO.len());
        let check = if to_number(&digits) == DUAL_DIGIT_BODY {
            rng.gen_range(0..=1)
        } else {
            check_digit(&digits)
        };
        digits.push(check);
        digits
    }
}
