// src/error.rs
use random_challenge_core::RejectReason;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot generate: {0}")]
    Infeasible(#[from] RejectReason),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
