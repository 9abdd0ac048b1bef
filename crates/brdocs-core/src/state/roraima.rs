//! Roraima. The only unit using modulus 9.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::body;
use crate::check_digits::weighted_sum;
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^24\.[0-9]{6}-[0-9]$"));

const WEIGHTS: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// Roraima state registration: `24` plus six digits and a check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Roraima;

fn check_digit(base: &[u8]) -> u8 {
    let d = 9 - weighted_sum(base, &WEIGHTS) % 9;
    if d == 9 { 0 } else { d as u8 }
}

impl Document for Roraima {
    fn name(&self) -> &'static str {
        "IE-RR"
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
        let mut digits = body(rng, &[2, 4], WEIGHTS.len());
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
    fn accepts_known_valid_numbers() {
        assert!(Roraima.is_valid("24.006628-1"));
        assert!(Roraima.is_valid("240066281"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!Roraima.is_valid("24.006628-2"));
    }

    #[test]
    fn multiple_of_nine_gives_zero() {
        // 2*8 + 4*7 + 1*1 = 45.
        assert!(Roraima.is_valid("24.000001-0"));
        assert!(!Roraima.is_valid("24.000001-9"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(222);
        for _ in 0..1000 {
            let formatted = Roraima.generate_with(&mut rng, true);
            assert!(Roraima.is_valid(&formatted), "{formatted}");
            assert!(Roraima.is_formatted(&formatted), "{formatted}");
            let raw = Roraima.generate_with(&mut rng, false);
            assert!(Roraima.is_valid(&raw), "{raw}");
        }
    }
}
