//! Pernambuco (eFisco format): seven body digits and two mod-11 check digits.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::NINE_TO_TWO;
use crate::check_digits::{mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{7}-[0-9]{2}$"));

const WEIGHTS_1: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

/// Pernambuco state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pernambuco;

fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = mod11(weighted_sum(base, &WEIGHTS_1));
    let mut extended = base.to_vec();
    extended.push(first);
    [first, mod11(weighted_sum(&extended, &NINE_TO_TWO))]
}

impl Document for Pernambuco {
    fn name(&self) -> &'static str {
        "IE-PE"
    }

    fn mask(&self) -> &'static str {
        "9999999-99"
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
