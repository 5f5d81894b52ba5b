use clap::Parser;

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
///
/// The three inputs are raw text, not numbers: soft parsing and lexical
/// validation happen in the core, so a half-typed value like `-` behaves
/// the same way it does in the original form. Defaults mirror the form's
/// initial field state.
#[derive(Parser, Debug)]
#[command(
    name = "random_challenge",
    version = crate::VERSION,
    about = "範囲指定の整数乱数生成ツール"
)]
pub struct Args {
    /// Upper bound of the range (blank means unset)
    #[arg(long = "max", default_value = "", allow_hyphen_values = true, help_heading = "Inputs")]
    pub max_text: String,

    /// Lower bound of the range
    #[arg(long = "min", default_value = "1", allow_hyphen_values = true, help_heading = "Inputs")]
    pub min_text: String,

    /// How many values to draw
    #[arg(long = "count", default_value = "1", allow_hyphen_values = true, help_heading = "Inputs")]
    pub count_text: String,

    /// Require all drawn values to be pairwise distinct
    #[arg(long, help_heading = "Generation")]
    pub non_repetitive: bool,

    /// Seed the RNG for reproducible draws
    #[arg(long, help_heading = "Generation")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,
}
