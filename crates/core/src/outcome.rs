// crates/core/src/outcome.rs
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Prefix attached to a successful generation when rendered as text.
pub const RESULT_LABEL: &str = "随机结果：";

/// Fixed message shown for any rejected input combination.
pub const INVALID_INPUT_MESSAGE: &str = "请检查输入错误！";

/// Why a generation request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("one of the inputs is not a well-formed integer")]
    MalformedInput,

    #[error("minimum exceeds maximum")]
    InvertedRange,

    #[error("count must be positive")]
    NonPositiveCount,

    #[error("count exceeds the distinct values available in the range")]
    NotEnoughDistinctValues,
}

/// Result of one generation request.
///
/// The legacy form signalled these cases through reserved display strings
/// (empty result, fixed error message, labelled number list). The variants
/// keep them distinguishable for callers while [`fmt::Display`] still
/// produces the exact legacy surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// No meaningful maximum was ever entered. Renders as an empty string.
    Unset,

    /// The inputs failed a validity or feasibility rule.
    Rejected(RejectReason),

    /// Values drawn from the requested range, in order of acceptance.
    Generated(Vec<i32>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Rejected(_) => f.write_str(INVALID_INPUT_MESSAGE),
            Self::Generated(numbers) => {
                f.write_str(RESULT_LABEL)?;
                for (i, n) in numbers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{n}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_legacy_surfaces() {
        assert_eq!(Outcome::Unset.to_string(), "");
        assert_eq!(
            Outcome::Rejected(RejectReason::InvertedRange).to_string(),
            INVALID_INPUT_MESSAGE
        );
        assert_eq!(Outcome::Generated(vec![4]).to_string(), "随机结果：4");
        assert_eq!(
            Outcome::Generated(vec![1, 2, 3]).to_string(),
            "随机结果：1, 2, 3"
        );
    }

    #[test]
    fn every_reject_reason_renders_the_same_fixed_message() {
        let reasons = [
            RejectReason::MalformedInput,
            RejectReason::InvertedRange,
            RejectReason::NonPositiveCount,
            RejectReason::NotEnoughDistinctValues,
        ];
        for reason in reasons {
            assert_eq!(Outcome::Rejected(reason).to_string(), INVALID_INPUT_MESSAGE);
        }
    }
}
