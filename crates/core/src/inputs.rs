// crates/core/src/inputs.rs
use serde::Serialize;

use crate::validate::{is_valid_integer, parse_bound, parse_count};

/// The three free-form text fields exactly as the caller holds them,
/// mutated on every keystroke and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub min_text: String,
    pub max_text: String,
    pub count_text: String,
}

impl RawInputs {
    #[must_use]
    pub fn new(
        min_text: impl Into<String>,
        max_text: impl Into<String>,
        count_text: impl Into<String>,
    ) -> Self {
        Self {
            min_text: min_text.into(),
            max_text: max_text.into(),
            count_text: count_text.into(),
        }
    }

    /// Derive the numeric view of the fields.
    ///
    /// Recomputed on every evaluation; nothing is cached between edits.
    /// Unparsable bounds fall back to 0, an unparsable count to 1, while
    /// `all_valid` records whether every field passed the lexical check.
    #[must_use]
    pub fn parse(&self) -> ParsedInputs {
        ParsedInputs {
            min_value: parse_bound(&self.min_text),
            max_value: parse_bound(&self.max_text),
            count: parse_count(&self.count_text),
            all_valid: is_valid_integer(&self.min_text)
                && is_valid_integer(&self.max_text)
                && is_valid_integer(&self.count_text),
        }
    }
}

/// Numeric snapshot of [`RawInputs`] plus the combined validity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedInputs {
    pub min_value: i32,
    pub max_value: i32,
    pub count: i32,
    pub all_valid: bool,
}
