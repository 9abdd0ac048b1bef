use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{NINE_TO_TWO, synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{3}(\.[0-9]{3}){2}$"));

/// Santa Catarina state registration: eight digits and a mod-11 check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SantaCatarina;

impl Document for SantaCatarina {
    fn name(&self) -> &'static str {
        "IE-SC"
    }

    fn mask(&self) -> &'static str {
        "999.999.999"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify_mod11(digits, &NINE_TO_TWO)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize_mod11(rng, &[], &NINE_TO_TWO)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(SantaCatarina.is_valid("251.040.240"));
        assert!(SantaCatarina.is_valid("251040852"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!SantaCatarina.is_valid("251.040.241"));
        assert!(!SantaCatarina.is_valid("251040853"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(108);
        for _ in 0..1000 {
            let formatted = SantaCatarina.generate_with(&mut rng, true);
            assert!(SantaCatarina.is_valid(&formatted), "{formatted}");
            let raw = SantaCatarina.generate_with(&mut rng, false);
            assert!(SantaCatarina.is_valid(&raw), "{raw}");
        }
    }
}
