//! Progress bookkeeping errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when progress data is addressed or restored incorrectly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Energy key index outside `0..3`.
    #[error("energy key index {index} is out of range (keys: {count})")]
    InvalidKeyIndex { index: usize, count: usize },

    /// Level number outside `1..=4`, e.g. from a hand-edited save file.
    #[error("level {0} does not exist")]
    InvalidLevel(i64),
}

impl GameError for ProgressError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidKeyIndex { .. } => "PROGRESS_INVALID_KEY_INDEX",
            Self::InvalidLevel(_) => "PROGRESS_INVALID_LEVEL",
        }
    }
}
