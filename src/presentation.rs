// src/presentation.rs
use random_challenge_core::Outcome;

use crate::error::Result;
use crate::options::OutputFormat;

/// Render an outcome for display.
///
/// `text` is the legacy surface the form showed verbatim; `json` exposes
/// the variant structure for scripting.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}
