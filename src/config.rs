// src/config.rs
use random_challenge_core::RawInputs;

use crate::args::Args;
use crate::options::OutputFormat;

/// Resolved runtime configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: RawInputs,
    pub non_repetitive: bool,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            inputs: RawInputs::new(args.min_text, args.max_text, args.count_text),
            non_repetitive: args.non_repetitive,
            seed: args.seed,
            format: args.format,
        }
    }
}
