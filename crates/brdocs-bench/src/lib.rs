//! Corpus generator and benchmark utilities for brdocs.
//!
//! This crate provides deterministic generation of document-number corpora,
//! mixing valid values with mutated ones, for benchmarking and
//! property-based testing of `brdocs-core`.

pub mod corpus;
pub mod correctness;

pub use corpus::{CorpusConfig, Mutation, Sample, SizeTier, generate_corpus};
