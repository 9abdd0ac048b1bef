//! CPF (Cadastro de Pessoas Físicas), the individual taxpayer registry.
//!
//! Eleven digits: nine base digits followed by two check digits, each the
//! mod-11 complement of a weighted sum (weights 10 down to 2, then 11 down
//! to 2 including the first check digit). Sequences of a single repeated
//! digit pass the arithmetic but are not valid CPFs.

use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;

use crate::check_digits::{digits_of, is_repeated, mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::mask::compile;

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$"));

const WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Fiscal region names indexed by the ninth digit of a CPF.
const FISCAL_REGIONS: [&str; 10] = [
    "Rio Grande do Sul",
    "Distrito Federal, Goiás, Mato Grosso, Mato Grosso do Sul e Tocantins",
    "Amazonas, Pará, Roraima, Amapá, Acre e Rondônia",
    "Ceará, Maranhão e Piauí",
    "Paraíba, Pernambuco, Alagoas e Rio Grande do Norte",
    "Bahia e Sergipe",
    "Minas Gerais",
    "Rio de Janeiro e Espírito Santo",
    "São Paulo",
    "Paraná e Santa Catarina",
];

/// Individual taxpayer registry number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cpf;

impl Cpf {
    /// Returns the fiscal region that issued `value`, or `None` if it is not
    /// a valid CPF.
    ///
    /// # Examples
    ///
    /// ```
    /// use brdocs_core::Cpf;
    ///
    /// assert_eq!(Cpf.region("681.113.352-02"), Some("Amazonas, Pará, Roraima, Amapá, Acre e Rondônia"));
    /// assert_eq!(Cpf.region("681.113.352-03"), None);
    /// ```
    pub fn region(&self, value: &str) -> Option<&'static str> {
        if !self.is_valid(value) {
            return None;
        }
        let digit = *digits_of(value).get(8)?;
        FISCAL_REGIONS.get(usize::from(digit)).copied()
    }
}

fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = mod11(weighted_sum(base, &WEIGHTS_1));
    let mut extended = base.to_vec();
    extended.push(first);
    [first, mod11(weighted_sum(&extended, &WEIGHTS_2))]
}

impl Document for Cpf {
    fn name(&self) -> &'static str {
        "CPF"
    }

    fn mask(&self) -> &'static str {
        "999.999.999-99"
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
        let mut digits = random_digits(rng, 9);
        while is_repeated(&digits) {
            digits = random_digits(rng, 9);
        }
        let check = check_digits(&digits);
        digits.extend_from_slice(&check);
        digits
    }
}
