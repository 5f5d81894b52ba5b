// crates/core/src/validate.rs
use std::sync::OnceLock;

use regex::Regex;

fn integer_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").unwrap())
}

/// Lexical check that `text` is an optionally signed decimal integer.
///
/// The whole string must match: no surrounding whitespace, no decimal
/// point, no `+` sign, and the empty string fails. The digit class is
/// ASCII so the validator never accepts text that `i32` parsing would
/// refuse outright.
#[must_use]
pub fn is_valid_integer(text: &str) -> bool {
    integer_pattern().is_match(text)
}

/// Best-effort parse for the min/max fields; unparsable text becomes 0.
///
/// Kept separate from [`is_valid_integer`] on purpose: the caller
/// re-renders with fallback values while the user is mid-edit. Digit runs
/// outside the `i32` range also land on the fallback.
#[must_use]
pub fn parse_bound(text: &str) -> i32 {
    parse_or(text, 0)
}

/// Best-effort parse for the count field; unparsable text becomes 1.
#[must_use]
pub fn parse_count(text: &str) -> i32 {
    parse_or(text, 1)
}

fn parse_or(text: &str, fallback: i32) -> i32 {
    text.parse().unwrap_or(fallback)
}
