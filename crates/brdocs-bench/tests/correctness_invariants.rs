//! Property-based checks of validation and formatting invariants over
//! generated corpora.
#![allow(clippy::expect_used)]

use brdocs_bench::correctness::{check_round_trip, check_verdict};
use brdocs_bench::{CorpusConfig, SizeTier, generate_corpus};
use proptest::prelude::*;

#[test]
fn medium_corpus_satisfies_invariants() {
    for sample in generate_corpus(&SizeTier::Medium.config(2024)) {
        check_verdict(&sample).expect("verdict");
        check_round_trip(&sample).expect("round trip");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_seed_satisfies_invariants(seed in any::<u64>(), rate in 0.0f64..=1.0) {
        let config = CorpusConfig {
            seed,
            per_kind: 4,
            mutation_rate: rate,
            formatted_rate: 0.5,
        };
        for sample in generate_corpus(&config) {
            prop_assert_eq!(check_verdict(&sample), Ok(()));
            prop_assert_eq!(check_round_trip(&sample), Ok(()));
        }
    }
}
