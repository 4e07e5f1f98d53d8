//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the state machine, repositories and the core rules so
//! clients can bubble them up with consistent context. Puzzle rejections and
//! missing saves never show up here: they are reported as events.
use game_core::{ErrorSeverity, GameError, GameState, ProgressError, QuizError};
use state_machine::StateMachineError;
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    StateMachine(#[from] StateMachineError<GameState>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("no progress repository was configured")]
    MissingRepository,

    #[error("orchestrator has not been started")]
    NotStarted,
}

impl RuntimeError {
    /// Severity of the underlying failure.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StateMachine(_) | Self::NotStarted => ErrorSeverity::Internal,
            Self::Repository(_) => ErrorSeverity::Recoverable,
            Self::Progress(err) => err.severity(),
            Self::Quiz(err) => err.severity(),
            Self::MissingRepository => ErrorSeverity::Fatal,
        }
    }
}
