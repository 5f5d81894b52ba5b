// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod feasibility;
pub mod generate;
pub mod inputs;
pub mod outcome;
pub mod validate;

pub use feasibility::can_generate;
pub use generate::{generate, generate_with};
pub use inputs::{ParsedInputs, RawInputs};
pub use outcome::{INVALID_INPUT_MESSAGE, Outcome, RESULT_LABEL, RejectReason};
pub use validate::{is_valid_integer, parse_bound, parse_count};
