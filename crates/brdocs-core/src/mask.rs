//! Mask-based formatting of digit strings.
//!
//! A mask is a template such as `999.999.999-99`. Every ASCII digit in the
//! mask is a placeholder that receives one input digit; every other character
//! (including letters such as the `P` in the São Paulo rural mask) is copied
//! verbatim.

use regex::Regex;

/// Returns only the ASCII digits of `value`, in order.
///
/// # Examples
///
/// ```
/// use brdocs_core::mask::unformat;
///
/// assert_eq!(unformat("681.113.352-02"), "68111335202");
/// assert_eq!(unformat("no digits"), "");
/// ```
pub fn unformat(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Number of placeholder positions in `mask`.
pub fn placeholder_count(mask: &str) -> usize {
    mask.bytes().filter(u8::is_ascii_digit).count()
}

/// Returns `true` if the digits of `value` exactly fill the placeholders of
/// `mask`.
pub fn can_be_formatted(value: &str, mask: &str) -> bool {
    value.bytes().filter(u8::is_ascii_digit).count() == placeholder_count(mask)
}

/// Substitutes the digits of `digits` into the placeholders of `mask`.
///
/// Non-digit characters in `digits` are ignored. When fewer digits are
/// supplied than the mask has placeholders, the input is right-padded with
/// `'0'`; surplus digits are dropped.
///
/// # Examples
///
/// ```
/// use brdocs_core::mask::format;
///
/// assert_eq!(format("999.999.999-99", "68111335202"), "681.113.352-02");
/// // Short input is padded on the right.
/// assert_eq!(format("99.999", "123"), "12.300");
/// ```
pub fn format(mask: &str, digits: &str) -> String {
    let mut source = digits.chars().filter(char::is_ascii_digit);
    mask.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                source.next().unwrap_or('0')
            } else {
                c
            }
        })
        .collect()
}

/// Returns `true` if `value` matches the punctuated `pattern` of a document.
///
/// A missing pattern matches nothing.
pub fn is_formatted(value: &str, pattern: Option<&Regex>) -> bool {
    pattern.is_some_and(|re| re.is_match(value))
}

/// Compiles a document pattern literal, or `None` if it is malformed.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|err| tracing::error!(pattern, %err, "invalid document pattern"))
        .ok()
}
