use crate::Time;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    /// The problem cannot be set up: missing function, zero steps, or an
    /// initial state that cannot be synthesized.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("dimension mismatch at step {step}: {quantity} has length {found}, state has {expected}")]
    DimensionMismatch {
        quantity: &'static str,
        expected: usize,
        found: usize,
        step: usize,
    },

    #[error("non-finite state at step {step} (t = {time})")]
    NonFinite { step: usize, time: Time },

    #[error("invalid solve options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolveError>;
