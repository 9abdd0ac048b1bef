//! Check-digit primitives shared by the document modules.
//!
//! Every Brazilian document in this crate reduces to the same handful of
//! steps: multiply digits by a weight table, sum, and map the remainder of a
//! modulus onto a single check digit. The mapping rules that recur across
//! many documents live here; one-off rules stay in the module that uses them.
//!
//! Digits are handled as `u8` values in `0..=9`, never as ASCII bytes.
//!
//! # Remainder rules
//!
//! - [`mod11`]: `r = sum % 11`; `r < 2` gives 0, otherwise `11 - r`. This is
//!   the common "eleven minus remainder, ten or eleven become zero" rule.
//! - [`mod11_remainder`]: the remainder itself, with 10 mapped to 0.
//! - [`mod10`]: `r = sum % 10`; `r == 0` gives 0, otherwise `10 - r`.

use rand::{Rng, RngCore};

/// Extracts the decimal digits of `value` as numeric values.
///
/// Every character that is not an ASCII digit is discarded.
///
/// # Examples
///
/// ```
/// use brdocs_core::check_digits::digits_of;
///
/// assert_eq!(digits_of("12.3-4"), vec![1, 2, 3, 4]);
/// assert!(digits_of("abc").is_empty());
/// ```
pub fn digits_of(value: &str) -> Vec<u8> {
    value
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Renders numeric digits back into a string of ASCII digits.
pub fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d % 10)).collect()
}

/// Interprets `digits` as a base-10 integer.
///
/// Used by the few state rules that branch on numeric ranges of the body.
pub fn to_number(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d))
}

/// Sum of `digits[i] * weights[i]` over the shorter of the two slices.
pub fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum()
}

/// Eleven minus the remainder of `sum / 11`, with 10 and 11 mapped to 0.
///
/// # Examples
///
/// ```
/// use brdocs_core::check_digits::mod11;
///
/// assert_eq!(mod11(22), 0); // remainder 0
/// assert_eq!(mod11(23), 0); // remainder 1
/// assert_eq!(mod11(24), 9); // remainder 2
/// ```
pub fn mod11(sum: u32) -> u8 {
    let r = sum % 11;
    if r < 2 { 0 } else { (11 - r) as u8 }
}

/// The remainder of `sum / 11`, with 10 mapped to 0.
pub fn mod11_remainder(sum: u32) -> u8 {
    let r = sum % 11;
    if r == 10 { 0 } else { r as u8 }
}

/// Ten minus the remainder of `sum / 10`, with 10 mapped to 0.
pub fn mod10(sum: u32) -> u8 {
    let r = sum % 10;
    if r == 0 { 0 } else { (10 - r) as u8 }
}

/// Returns `true` if `digits` is non-empty and every digit is the same.
pub fn is_repeated(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

/// Draws `count` uniformly distributed digits from `rng`.
///
/// The source is whatever the caller passes in; nothing here is suitable for
/// issuing real identifiers.
pub fn random_digits(rng: &mut dyn RngCore, count: usize) -> Vec<u8> {
    (0..count).map(|_| rng.gen_range(0u8..10)).collect()
}

/// Picks one element of `choices` uniformly at random, or `0` when the slice
/// is empty.
pub fn pick(rng: &mut dyn RngCore, choices: &[u8]) -> u8 {
    if choices.is_empty() {
        return 0;
    }
    let idx = rng.gen_range(0..choices.len());
    choices.get(idx).copied().unwrap_or(0)
}
