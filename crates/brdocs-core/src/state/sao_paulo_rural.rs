//! São Paulo rural producer registration.
//!
//! Written `P-` followed by twelve digits. Only the ninth digit is a check
//! digit, computed like the first check digit of [`SaoPaulo`](super::SaoPaulo).

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::sao_paulo::root_check_digit;
use crate::check_digits::random_digits;
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^P-[0-9]{8}\.[0-9]/[0-9]{3}$"));

/// São Paulo rural producer registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaoPauloRural;

impl Document for SaoPauloRural {
    fn name(&self) -> &'static str {
        "IE-SP rural"
    }

    fn mask(&self) -> &'static str {
        "P-99999999.9/999"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        let Some((root, &[ninth, ..])) = digits.split_first_chunk::<8>() else {
            return false;
        };
        root_check_digit(root) == ninth
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut digits = random_digits(rng, 8);
        digits.push(root_check_digit(&digits));
        digits.extend(random_digits(rng, 3));
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
        assert!(SaoPauloRural.is_valid("P-01100424.3/016"));
        assert!(SaoPauloRural.is_valid("011004243016"));
    }

    #[test]
    fn trailing_digits_are_not_checked() {
        assert!(SaoPauloRural.is_valid("P-01100424.3/999"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!SaoPauloRural.is_valid("P-01100424.4/016"));
    }

    #[test]
    fn formatting_keeps_the_prefix_letter() {
        assert_eq!(
            SaoPauloRural.format("011004243016").as_deref(),
            Some("P-01100424.3/016")
        );
        assert!(SaoPauloRural.is_formatted("P-01100424.3/016"));
        assert!(!SaoPauloRural.is_formatted("01100424.3/016"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(227);
        for _ in 0..1000 {
            let formatted = SaoPauloRural.generate_with(&mut rng, true);
            assert!(SaoPauloRural.is_valid(&formatted), "{formatted}");
            assert!(formatted.starts_with("P-"), "{formatted}");
            let raw = SaoPauloRural.generate_with(&mut rng, false);
            assert!(SaoPauloRural.is_valid(&raw), "{raw}");
        }
    }
}
