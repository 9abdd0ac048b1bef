//! Invariant checkers shared by the correctness tests and the benchmarks.

use brdocs_core::check_digits::digits_of;

use crate::corpus::{Mutation, Sample};

/// Verifies that validation agrees with what the sample's mutation
/// guarantees, and that `is_valid` agrees with `inspect`.
pub fn check_verdict(sample: &Sample) -> Result<(), String> {
    let doc = sample.kind.document();
    let valid = doc.is_valid(&sample.value);
    if valid != doc.inspect(&sample.value).is_ok() {
        return Err(format!(
            "{}: is_valid and inspect disagree on {}",
            sample.kind, sample.value
        ));
    }
    match sample.mutation.expected_valid() {
        Some(expected) if expected != valid => Err(format!(
            "{}: {} ({:?}) expected valid={expected}, got {valid}",
            sample.kind, sample.value, sample.mutation
        )),
        Some(_) | None => Ok(()),
    }
}

/// Verifies that a value with the right digit count survives
/// format → unformat. Unmutated values must also match the display pattern;
/// mutated ones may have lost a prefix or category digit the pattern pins.
pub fn check_round_trip(sample: &Sample) -> Result<(), String> {
    let doc = sample.kind.document();
    let digits = digits_of(&sample.value);
    let formatted = doc.format(&sample.value);
    if digits.len() != doc.digit_count() {
        return match formatted {
            None => Ok(()),
            Some(f) => Err(format!(
                "{}: {} has {} digits but formatted to {f}",
                sample.kind,
                sample.value,
                digits.len()
            )),
        };
    }
    let formatted = formatted
        .ok_or_else(|| format!("{}: {} could not be formatted", sample.kind, sample.value))?;
    if sample.mutation == Mutation::None && !doc.is_formatted(&formatted) {
        return Err(format!(
            "{}: {formatted} does not match the display pattern",
            sample.kind
        ));
    }
    let unformatted = doc
        .unformat(&formatted)
        .ok_or_else(|| format!("{}: {formatted} could not be unformatted", sample.kind))?;
    if digits_of(&unformatted) != digits {
        return Err(format!(
            "{}: round trip changed digits: {} -> {unformatted}",
            sample.kind, sample.value
        ));
    }
    Ok(())
}
