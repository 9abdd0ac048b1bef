//! Rio Grande do Sul.
//!
//! Ten digits: a three-digit municipality code, a six-digit sequence and a
//! mod-11 check digit over weights `2,9..2`.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use super::{synthesize_mod11, verify_mod11};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{3}/[0-9]{7}$"));

const WEIGHTS: [u32; 9] = [2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Rio Grande do Sul state registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RioGrandeDoSul;

impl Document for RioGrandeDoSul {
    fn name(&self) -> &'static str {
        "IE-RS"
    }

    fn mask(&self) -> &'static str {
        "999/9999999"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        PATTERN.as_ref()
    }

    fn verify(&self, digits: &[u8]) -> bool {
        verify_mod11(digits, &WEIGHTS)
    }

    fn synthesize(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        synthesize_mod11(rng, &[], &WEIGHTS)
    }
}
