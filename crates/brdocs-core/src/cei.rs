//! CEI (Cadastro Específico do INSS), the social security employer registry.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{5}/[0-9]{2}$"));

const WEIGHTS: [u32; 11] = [7, 4, 1, 8, 5, 2, 1, 6, 3, 7, 4];

/// INSS employer registry number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cei;

/// The weighted sum (reduced mod 100 above 100) has its tens and units
/// added; the check digit is ten minus the units of that total.
fn check_digit(base: &[u8]) -> u8 {
    let mut sum = weighted_sum(base, &WEIGHTS);
    if sum > 100 {
        sum %= 100;
    }
    let total = sum / 10 + sum % 10;
    let d = 10 - total % 10;
    if d > 9 { 0 } else { d as u8 }
}

impl Document for Cei {
    fn name(&self) -> &'static str {
        "CEI"
    }

    fn mask(&self) -> &'static str {
        "99.999.99999/99"
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
        let mut digits = random_digits(rng, 11);
        digits.push(check_digit(&digits));
        digits
    }
}
