//! Error types for set generation, scoring and export

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArmourError>;

#[derive(Error, Debug)]
pub enum ArmourError {
    /// Weights must be finite, non-negative and not both zero
    #[error("Invalid score weights: poison={poison}, plague={plague}")]
    InvalidWeight { poison: f64, plague: f64 },

    #[error("Candidate has no weighted total (scoring pass not run): {0}")]
    Unscored(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
