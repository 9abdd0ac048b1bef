//! Inscrição Estadual (state tax registration) for the 27 federative units.
//!
//! Each unit has its own mask and checksum, implemented as one zero-sized
//! [`Document`] per file in this module. [`StateCode::registration`] is the
//! lookup table; the free functions [`is_valid`], [`mask`] and [`generate`]
//! dispatch on a textual two-letter code and treat an unknown code as
//! "nothing matched" rather than as an error.
//!
//! Generators emit the prefixes each unit actually issues (Acre numbers
//! start with `01`, Roraima with `24` and so on). Validation checks only the
//! checksum.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::check_digits::{mod11, random_digits, weighted_sum};
use crate::document::Document;
use crate::error::DocumentError;

mod acre;
mod alagoas;
mod amapa;
mod amazonas;
mod bahia;
mod ceara;
mod distrito_federal;
mod espirito_santo;
mod goias;
mod maranhao;
mod mato_grosso;
mod mato_grosso_do_sul;
mod minas_gerais;
mod para;
mod paraiba;
mod parana;
mod pernambuco;
mod piaui;
mod rio_de_janeiro;
mod rio_grande_do_norte;
mod rio_grande_do_sul;
mod rondonia;
mod roraima;
mod santa_catarina;
mod sao_paulo;
mod sao_paulo_rural;
mod sergipe;
mod tocantins;

pub use acre::Acre;
pub use alagoas::Alagoas;
pub use amapa::Amapa;
pub use amazonas::Amazonas;
pub use bahia::Bahia;
pub use ceara::Ceara;
pub use distrito_federal::DistritoFederal;
pub use espirito_santo::EspiritoSanto;
pub use goias::Goias;
pub use maranhao::Maranhao;
pub use mato_grosso::MatoGrosso;
pub use mato_grosso_do_sul::MatoGrossoDoSul;
pub use minas_gerais::MinasGerais;
pub use para::Para;
pub use paraiba::Paraiba;
pub use parana::Parana;
pub use pernambuco::Pernambuco;
pub use piaui::Piaui;
pub use rio_de_janeiro::RioDeJaneiro;
pub use rio_grande_do_norte::RioGrandeDoNorte;
pub use rio_grande_do_sul::RioGrandeDoSul;
pub use rondonia::Rondonia;
pub use roraima::Roraima;
pub use santa_catarina::SantaCatarina;
pub use sao_paulo::SaoPaulo;
pub use sao_paulo_rural::SaoPauloRural;
pub use sergipe::Sergipe;
pub use tocantins::Tocantins;

// ---------------------------------------------------------------------------
// StateCode
// ---------------------------------------------------------------------------

/// A Brazilian federative unit, identified by its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateCode {
    /// Acre.
    Ac,
    /// Alagoas.
    Al,
    /// Amazonas.
    Am,
    /// Amapá.
    Ap,
    /// Bahia.
    Ba,
    /// Ceará.
    Ce,
    /// Distrito Federal.
    Df,
    /// Espírito Santo.
    Es,
    /// Goiás.
    Go,
    /// Maranhão.
    Ma,
    /// Minas Gerais.
    Mg,
    /// Mato Grosso do Sul.
    Ms,
    /// Mato Grosso.
    Mt,
    /// Pará.
    Pa,
    /// Paraíba.
    Pb,
    /// Pernambuco.
    Pe,
    /// Piauí.
    Pi,
    /// Paraná.
    Pr,
    /// Rio de Janeiro.
    Rj,
    /// Rio Grande do Norte.
    Rn,
    /// Rondônia.
    Ro,
    /// Roraima.
    Rr,
    /// Rio Grande do Sul.
    Rs,
    /// Santa Catarina.
    Sc,
    /// Sergipe.
    Se,
    /// São Paulo.
    Sp,
    /// Tocantins.
    To,
}

impl StateCode {
    /// All 27 units in alphabetical order of their codes.
    pub const ALL: [StateCode; 27] = [
        Self::Ac,
        Self::Al,
        Self::Am,
        Self::Ap,
        Self::Ba,
        Self::Ce,
        Self::Df,
        Self::Es,
        Self::Go,
        Self::Ma,
        Self::Mg,
        Self::Ms,
        Self::Mt,
        Self::Pa,
        Self::Pb,
        Self::Pe,
        Self::Pi,
        Self::Pr,
        Self::Rj,
        Self::Rn,
        Self::Ro,
        Self::Rr,
        Self::Rs,
        Self::Sc,
        Self::Se,
        Self::Sp,
        Self::To,
    ];

    /// The two-letter code, e.g. `"BA"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Am => "AM",
            Self::Ap => "AP",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mg => "MG",
            Self::Ms => "MS",
            Self::Mt => "MT",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Pr => "PR",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Rs => "RS",
            Self::Sc => "SC",
            Self::Se => "SE",
            Self::Sp => "SP",
            Self::To => "TO",
        }
    }

    /// Full name of the unit.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ac => "Acre",
            Self::Al => "Alagoas",
            Self::Am => "Amazonas",
            Self::Ap => "Amapá",
            Self::Ba => "Bahia",
            Self::Ce => "Ceará",
            Self::Df => "Distrito Federal",
            Self::Es => "Espírito Santo",
            Self::Go => "Goiás",
            Self::Ma => "Maranhão",
            Self::Mg => "Minas Gerais",
            Self::Ms => "Mato Grosso do Sul",
            Self::Mt => "Mato Grosso",
            Self::Pa => "Pará",
            Self::Pb => "Paraíba",
            Self::Pe => "Pernambuco",
            Self::Pi => "Piauí",
            Self::Pr => "Paraná",
            Self::Rj => "Rio de Janeiro",
            Self::Rn => "Rio Grande do Norte",
            Self::Ro => "Rondônia",
            Self::Rr => "Roraima",
            Self::Rs => "Rio Grande do Sul",
            Self::Sc => "Santa Catarina",
            Self::Se => "Sergipe",
            Self::Sp => "São Paulo",
            Self::To => "Tocantins",
        }
    }

    /// The state registration document of this unit.
    pub fn registration(self) -> &'static dyn Document {
        match self {
            Self::Ac => &Acre,
            Self::Al => &Alagoas,
            Self::Am => &Amazonas,
            Self::Ap => &Amapa,
            Self::Ba => &Bahia,
            Self::Ce => &Ceara,
            Self::Df => &DistritoFederal,
            Self::Es => &EspiritoSanto,
            Self::Go => &Goias,
            Self::Ma => &Maranhao,
            Self::Mg => &MinasGerais,
            Self::Ms => &MatoGrossoDoSul,
            Self::Mt => &MatoGrosso,
            Self::Pa => &Para,
            Self::Pb => &Paraiba,
            Self::Pe => &Pernambuco,
            Self::Pi => &Piaui,
            Self::Pr => &Parana,
            Self::Rj => &RioDeJaneiro,
            Self::Rn => &RioGrandeDoNorte,
            Self::Ro => &Rondonia,
            Self::Rr => &Roraima,
            Self::Rs => &RioGrandeDoSul,
            Self::Sc => &SantaCatarina,
            Self::Se => &Sergipe,
            Self::Sp => &SaoPaulo,
            Self::To => &Tocantins,
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = DocumentError;

    /// Parses an exact uppercase code. `"ba"` and `" BA"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownState { code: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// A generated registration together with the unit it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRegistration {
    /// Unit whose rules produced `value`.
    pub state: StateCode,
    /// The registration number, formatted or raw as requested.
    pub value: String,
}

fn lookup(state_code: &str) -> Option<StateCode> {
    match state_code.parse::<StateCode>() {
        Ok(code) => Some(code),
        Err(err) => {
            tracing::debug!(%err, "no state registration rule");
            None
        }
    }
}

/// Validates `value` as a registration of the unit named by `state_code`.
///
/// An unrecognised code yields `false`.
///
/// # Examples
///
/// ```
/// use brdocs_core::state;
///
/// assert!(state::is_valid("122.096.866", "BA"));
/// assert!(!state::is_valid("122.096.866", "ZZ"));
/// ```
pub fn is_valid(value: &str, state_code: &str) -> bool {
    lookup(state_code).is_some_and(|code| code.registration().is_valid(value))
}

/// The display mask for `state_code`, or `""` if the code is unknown.
pub fn mask(state_code: &str) -> &'static str {
    lookup(state_code).map_or("", |code| code.registration().mask())
}

/// Generates a registration using the thread-local generator.
///
/// With `state_code` set to `None` a unit is picked uniformly at random.
/// Returns `None` only when a code is given and not recognised.
pub fn generate(formatted: bool, state_code: Option<&str>) -> Option<GeneratedRegistration> {
    let mut rng = rand::thread_rng();
    generate_with(&mut rng, formatted, state_code)
}

/// Like [`generate`], drawing from the supplied generator.
pub fn generate_with(
    rng: &mut dyn RngCore,
    formatted: bool,
    state_code: Option<&str>,
) -> Option<GeneratedRegistration> {
    let state = match state_code {
        Some(code) => lookup(code)?,
        None => *StateCode::ALL.choose(rng)?,
    };
    Some(GeneratedRegistration {
        state,
        value: state.registration().generate_with(rng, formatted),
    })
}

// ---------------------------------------------------------------------------
// Shared rule helpers
// ---------------------------------------------------------------------------

/// Weights 9 down to 2, the most common state weight table.
const NINE_TO_TWO: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// `prefix` followed by random digits up to `len` digits in total.
fn body(rng: &mut dyn RngCore, prefix: &[u8], len: usize) -> Vec<u8> {
    let mut digits = prefix.to_vec();
    digits.extend(random_digits(rng, len.saturating_sub(prefix.len())));
    digits
}

/// Checks a single trailing mod-11 complement digit.
fn verify_mod11(digits: &[u8], weights: &[u32]) -> bool {
    let Some((&check, base)) = digits.split_last() else {
        return false;
    };
    mod11(weighted_sum(base, weights)) == check
}

/// Builds `prefix` + random digits + a mod-11 complement digit.
fn synthesize_mod11(rng: &mut dyn RngCore, prefix: &[u8], weights: &[u32]) -> Vec<u8> {
    let mut digits = body(rng, prefix, weights.len());
    digits.push(mod11(weighted_sum(&digits, weights)));
    digits
}
