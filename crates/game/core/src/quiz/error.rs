use crate::error::{ErrorSeverity, GameError};

/// Contract violations when driving a quiz session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// An answer arrived while no session is running.
    #[error("quiz is not in progress")]
    NotInProgress,

    /// Option index outside the question's options.
    #[error("option {selected} is out of range (options: {count})")]
    InvalidOption { selected: usize, count: usize },
}

impl GameError for QuizError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInProgress => "QUIZ_NOT_IN_PROGRESS",
            Self::InvalidOption { .. } => "QUIZ_INVALID_OPTION",
        }
    }
}
