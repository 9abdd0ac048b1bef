//! São Paulo (industrial and commercial registrations).
//!
//! Twelve digits with check digits at positions 9 and 12. Both are the plain
//! remainder of eleven, with 10 mapped to 0.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{mod11_remainder, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{3}(\.[0-9]{3}){3}$"));

const WEIGHTS_1: [u32; 8] = [1, 3, 4, 5, 6, 7, 8, 10];
const WEIGHTS_2: [u32; 11] = [3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// São Paulo state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaoPaulo;

/// Check digit following the eight-digit root. Shared with rural producer
/// registrations.
pub(super) fn root_check_digit(root: &[u8]) -> u8 {
    mod11_remainder(weighted_sum(root, &WEIGHTS_1))
}

impl Document for SaoPaulo {
    fn name(&self) -> &'static str {
        "IE-SP"
    }

    fn mask(&self) -> &'static str {
        "999.999.999.999"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        let Some((head, &[last])) = digits.split_last_chunk::<1>() else {
            return false;
        };
        let Some((root, &[ninth, ..])) = head.split_first_chunk::<8>() else {
            return false;
        };
        root_check_digit(root) == ninth && mod11_remainder(weighted_sum(head, &WEIGHTS_2)) == last
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut digits = random_digits(rng, 8);
        digits.push(root_check_digit(&digits));
        digits.extend(random_digits(rng, 2));
        digits.push(mod11_remainder(weighted_sum(&digits, &WEIGHTS_2)));
        digits
    }
}
