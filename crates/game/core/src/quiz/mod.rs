//! Level 4 quiz: question bank and session engine.
mod bank;
mod engine;
mod error;

pub use bank::{QUESTION_BANK, QuizQuestion};
pub use engine::{AnswerOutcome, QuizEngine, QuizPhase, QuizResult};
pub use error::QuizError;
