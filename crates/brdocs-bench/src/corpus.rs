//! Seeded corpus generator.
//!
//! Every sample starts as a generated valid value and is then optionally
//! mutated. The mutation records what validation is expected to say about
//! the result.

use brdocs_core::DocumentKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How a sample was derived from its generated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Left untouched.
    None,
    /// One digit replaced by a different digit.
    AlterDigit,
    /// Last digit removed.
    DropDigit,
    /// A digit appended.
    ExtraDigit,
}

impl Mutation {
    /// The validation result the mutation guarantees, if any.
    ///
    /// Altering a digit usually invalidates a value, but not always: some
    /// state rules leave digits unchecked or accept two check digits.
    pub fn expected_valid(self) -> Option<bool> {
        match self {
            Self::None => Some(true),
            Self::DropDigit | Self::ExtraDigit => Some(false),
            Self::AlterDigit => None,
        }
    }
}

/// One corpus entry.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Document type the value was generated for.
    pub kind: DocumentKind,
    /// The candidate value.
    pub value: String,
    /// How `value` was derived.
    pub mutation: Mutation,
}

/// Configuration for the corpus generator.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Samples per document kind.
    pub per_kind: usize,
    /// Fraction of samples that are mutated (0.0-1.0).
    pub mutation_rate: f64,
    /// Fraction of samples written in punctuated form (0.0-1.0).
    pub formatted_rate: f64,
}

/// Predefined corpus sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 10 samples per kind, 350 in total.
    Small,
    /// 200 samples per kind, 7 000 in total.
    Medium,
    /// 2 000 samples per kind, 70 000 in total.
    Large,
}

impl SizeTier {
    /// Returns the default [`CorpusConfig`] for this size tier.
    pub fn config(self, seed: u64) -> CorpusConfig {
        let per_kind = match self {
            Self::Small => 10,
            Self::Medium => 200,
            Self::Large => 2_000,
        };
        CorpusConfig {
            seed,
            per_kind,
            mutation_rate: 0.3,
            formatted_rate: 0.5,
        }
    }
}

fn mutate(rng: &mut StdRng, value: &str) -> (String, Mutation) {
    let digit_positions: Vec<usize> = value
        .char_indices()
        .filter(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)
        .collect();
    match rng.gen_range(0..3u8) {
        0 => {
            let Some(&pos) = digit_positions.get(rng.gen_range(0..digit_positions.len().max(1)))
            else {
                return (value.to_owned(), Mutation::None);
            };
            let old = value.as_bytes().get(pos).map_or(0, |b| b - b'0');
            let new = (old + rng.gen_range(1..10u8)) % 10;
            let mut altered = value.to_owned();
            altered.replace_range(pos..=pos, &char::from(b'0' + new).to_string());
            (altered, Mutation::AlterDigit)
        }
        1 => {
            let Some(&pos) = digit_positions.last() else {
                return (value.to_owned(), Mutation::None);
            };
            let mut shorter = value.to_owned();
            shorter.remove(pos);
            (shorter, Mutation::DropDigit)
        }
        _ => {
            let extra = char::from(b'0' + rng.gen_range(0..10u8));
            (format!("{value}{extra}"), Mutation::ExtraDigit)
        }
    }
}

/// Generates a corpus covering every document kind, in kind order.
pub fn generate_corpus(config: &CorpusConfig) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.per_kind * DocumentKind::all().count());
    for kind in DocumentKind::all() {
        let doc = kind.document();
        for _ in 0..config.per_kind {
            let formatted = rng.gen_bool(config.formatted_rate.clamp(0.0, 1.0));
            let value = doc.generate_with(&mut rng, formatted);
            let (value, mutation) = if rng.gen_bool(config.mutation_rate.clamp(0.0, 1.0)) {
                mutate(&mut rng, &value)
            } else {
                (value, Mutation::None)
            };
            samples.push(Sample {
                kind,
                value,
                mutation,
            });
        }
    }
    samples
}
