//! Título de Eleitor, the voter registration card.
//!
//! Twelve digits: an eight-digit sequence, a two-digit issuing-state code
//! (`01`..`28`) and two check digits. Both check digits are remainders of
//! eleven with 10 mapped to 0; the second covers the state code and the
//! first check digit.

use std::sync::LazyLock;

use rand::{Rng, RngCore};
use regex::Regex;

use crate::check_digits::{digits_of, mod11_remainder, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{10}-[0-9]{2}$"));

const WEIGHTS_1: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Issuing unit for state codes `01`..`28`, in code order.
const ISSUERS: [&str; 28] = [
    "SP", "MG", "RJ", "RS", "BA", "PR", "CE", "PE", "SC", "GO", "MA", "PB", "PA", "ES", "PI",
    "RN", "AL", "MT", "MS", "DF", "SE", "AM", "RO", "AC", "AP", "RR", "TO", "Exterior",
];

/// Voter registration number.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoterId;

impl VoterId {
    /// Returns the issuing state of `value` (or `"Exterior"` for voters
    /// registered abroad), or `None` if it is not a valid registration.
    pub fn region(&self, value: &str) -> Option<&'static str> {
        if !self.is_valid(value) {
            return None;
        }
        let digits = digits_of(value);
        let code = usize::from(*digits.get(8)?) * 10 + usize::from(*digits.get(9)?);
        ISSUERS.get(code.checked_sub(1)?).copied()
    }
}

fn check_digits(body: &[u8]) -> Option<[u8; 2]> {
    let (sequence, state) = body.split_first_chunk::<8>()?;
    let &[s1, s2] = state else {
        return None;
    };
    let first = mod11_remainder(weighted_sum(sequence, &WEIGHTS_1));
    let second = mod11_remainder(u32::from(s1) * 7 + u32::from(s2) * 8 + u32::from(first) * 9);
    Some([first, second])
}

impl Document for VoterId {
    fn name(&self) -> &'static str {
        "Título de Eleitor"
    }

    fn mask(&self) -> &'static str {
        "9999999999-99"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        let Some((body, check)) = digits.split_last_chunk::<2>() else {
            return false;
        };
        check_digits(body) == Some(*check)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut digits = random_digits(rng, 8);
        let state = rng.gen_range(1u8..=28);
        digits.extend_from_slice(&[state / 10, state % 10]);
        if let Some(check) = check_digits(&digits) {
            digits.extend_from_slice(&check);
        }
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
        assert!(VoterId.is_valid("1023456701-83"));
        assert!(VoterId.is_valid("000000012895"));
        assert!(VoterId.is_valid("1234567823-99"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!VoterId.is_valid("1023456701-84"));
        assert!(!VoterId.is_valid("1023456701-93"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!VoterId.is_valid("1023456701-8"));
        assert!(!VoterId.is_valid("1023456701-830"));
    }

    #[test]
    fn region_reads_state_code() {
        assert_eq!(VoterId.region("1023456701-83"), Some("SP"));
        assert_eq!(VoterId.region("1234567823-99"), Some("RO"));
        assert_eq!(VoterId.region("0000000128-95"), Some("Exterior"));
        assert_eq!(VoterId.region("1023456701-84"), None);
    }

    #[test]
    fn region_is_none_for_unassigned_codes() {
        // Check digits are consistent but state code 00 is never issued.
        let digits = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];
        let check = check_digits(&digits).unwrap_or_default();
        let value: String = digits
            .iter()
            .chain(check.iter())
            .map(|d| char::from(b'0' + d))
            .collect();
        assert!(VoterId.is_valid(&value));
        assert_eq!(VoterId.region(&value), None);
    }

    #[test]
    fn generated_numbers_validate_and_carry_a_state() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let formatted = VoterId.generate_with(&mut rng, true);
            assert!(VoterId.is_valid(&formatted), "{formatted}");
            assert!(VoterId.region(&formatted).is_some(), "{formatted}");
            let raw = VoterId.generate_with(&mut rng, false);
            assert!(VoterId.is_valid(&raw), "{raw}");
        }
    }
}
