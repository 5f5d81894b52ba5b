// crates/core/src/feasibility.rs
use crate::outcome::RejectReason;

/// Number of distinct integers in the inclusive range `[min, max]`.
///
/// Computed in `i64` so the span of the whole `i32` domain cannot
/// overflow.
#[must_use]
pub fn range_span(min_value: i32, max_value: i32) -> i64 {
    i64::from(max_value) - i64::from(min_value) + 1
}

/// Evaluate the feasibility rules in order and name the first violation.
///
/// # Errors
/// Returns the [`RejectReason`] of the first rule that fails: malformed
/// raw input, inverted range, non-positive count, or a non-repetitive
/// request for more values than the range holds.
pub fn check(
    min_value: i32,
    max_value: i32,
    count: i32,
    all_valid: bool,
    non_repetitive: bool,
) -> Result<(), RejectReason> {
    if !all_valid {
        return Err(RejectReason::MalformedInput);
    }
    if min_value > max_value {
        return Err(RejectReason::InvertedRange);
    }
    if count <= 0 {
        return Err(RejectReason::NonPositiveCount);
    }
    if non_repetitive && i64::from(count) > range_span(min_value, max_value) {
        return Err(RejectReason::NotEnoughDistinctValues);
    }
    Ok(())
}

/// Whether generation may be triggered for these inputs at all.
///
/// Pure and side-effect free; callers consult it to enable or disable the
/// trigger before ever reaching the generator.
#[must_use]
pub fn can_generate(
    min_value: i32,
    max_value: i32,
    count: i32,
    all_valid: bool,
    non_repetitive: bool,
) -> bool {
    check(min_value, max_value, count, all_valid, non_repetitive).is_ok()
}
