//! Distrito Federal. Same check digits as Acre, different mask and prefix.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::acre;
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^07\.[0-9]{6}\.[0-9]{3}-[0-9]{2}$"));

/// Distrito Federal state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistritoFederal;

impl Document for DistritoFederal {
    fn name(&self) -> &'static str {
        "IE-DF"
    }

    fn mask(&self) -> &'static str {
        "99.999999.999-99"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        acre::verify(digits)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        acre::synthesize(rng, &[0, 7])
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(DistritoFederal.is_valid("07.300001.001-09"));
        assert!(DistritoFederal.is_valid("0730000100109"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!DistritoFederal.is_valid("07.300001.001-08"));
        assert!(!DistritoFederal.is_valid("07.300001.001-19"));
    }

    #[test]
    fn generated_numbers_validate() {
        let mut rng = StdRng::seed_from_u64(207);
        for _ in 0..1000 {
            let formatted = DistritoFederal.generate_with(&mut rng, true);
            assert!(DistritoFederal.is_valid(&formatted), "{formatted}");
            assert!(DistritoFederal.is_formatted(&formatted), "{formatted}");
            let raw = DistritoFederal.generate_with(&mut rng, false);
            assert!(DistritoFederal.is_valid(&raw), "{raw}");
        }
    }
}
