// src/app.rs
use rand::SeedableRng;
use rand::rngs::StdRng;
use random_challenge_core::{feasibility, generate, generate_with};

use crate::config::Config;
use crate::error::Result;
use crate::presentation;

/// Run one generation request and render it for display.
///
/// The feasibility gate plays the role the disabled trigger button does
/// in the form: an infeasible request never reaches the generator and
/// reports its named reason instead. The zero-max quirk passes the gate
/// and comes back as an empty result.
pub fn run(config: &Config) -> Result<String> {
    let parsed = config.inputs.parse();
    feasibility::check(
        parsed.min_value,
        parsed.max_value,
        parsed.count,
        parsed.all_valid,
        config.non_repetitive,
    )?;

    let outcome = match config.seed {
        Some(seed) => generate_with(
            &mut StdRng::seed_from_u64(seed),
            parsed.min_value,
            parsed.max_value,
            parsed.count,
            parsed.all_valid,
            config.non_repetitive,
        ),
        None => generate(
            parsed.min_value,
            parsed.max_value,
            parsed.count,
            parsed.all_valid,
            config.non_repetitive,
        ),
    };
    presentation::render(&outcome, config.format)
}
