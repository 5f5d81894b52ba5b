// crates/core/src/generate.rs
use rand::Rng;
use rand::seq::index;

use crate::feasibility;
use crate::outcome::Outcome;

/// Draw `count` integers from `[min_value, max_value]` with the thread
/// RNG. See [`generate_with`] for the rules.
#[must_use]
pub fn generate(
    min_value: i32,
    max_value: i32,
    count: i32,
    all_valid: bool,
    non_repetitive: bool,
) -> Outcome {
    generate_with(
        &mut rand::thread_rng(),
        min_value,
        max_value,
        count,
        all_valid,
        non_repetitive,
    )
}

/// Draw `count` integers from `[min_value, max_value]` with a caller
/// supplied RNG.
///
/// A zero maximum yields [`Outcome::Unset`] before anything else is
/// looked at. The check is positional, not semantic: the blank max field
/// parses to 0, and "never entered" cannot be told apart from a
/// deliberately chosen upper bound of 0 here, surprising as that is.
///
/// Any other invalid combination becomes [`Outcome::Rejected`], including
/// a non-repetitive request for more values than the range holds, which
/// therefore terminates instead of resampling forever. Invalid input
/// never panics.
#[must_use]
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: i32,
    max_value: i32,
    count: i32,
    all_valid: bool,
    non_repetitive: bool,
) -> Outcome {
    if max_value == 0 {
        return Outcome::Unset;
    }
    if let Err(reason) =
        feasibility::check(min_value, max_value, count, all_valid, non_repetitive)
    {
        return Outcome::Rejected(reason);
    }

    let count = count as usize; // count > 0 after the check above
    let numbers = if non_repetitive {
        sample_distinct(rng, min_value, max_value, count)
    } else {
        (0..count)
            .map(|_| rng.gen_range(min_value..=max_value))
            .collect()
    };
    Outcome::Generated(numbers)
}

/// Prefix of a random permutation of the range, offset back onto
/// `[min_value, max_value]`. Bounded work and O(count) memory even for
/// the widest feasible request.
fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: i32,
    max_value: i32,
    count: usize,
) -> Vec<i32> {
    let span = feasibility::range_span(min_value, max_value) as usize;
    index::sample(rng, span, count)
        .into_iter()
        .map(|offset| (i64::from(min_value) + offset as i64) as i32)
        .collect()
}
