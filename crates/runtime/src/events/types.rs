//! Event types for different topics.

use game_core::{GameState, Level, PowerTier, PuzzleKind, QuizQuestion, QuizResult};
use serde::{Deserialize, Serialize};

/// Tone of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    Error,
    Info,
}

/// Progression through screens and levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowEvent {
    StateChanged {
        from: GameState,
        to: GameState,
    },

    LoadingProgress {
        percent: u32,
        caption: String,
    },

    /// An asset could not be loaded; the loading gate stays shut until a
    /// retry succeeds.
    AssetFailed {
        path: String,
        reason: String,
    },

    Instructions {
        text: String,
    },

    Feedback {
        message: String,
        kind: FeedbackKind,
    },

    /// The last feedback message timed out.
    FeedbackHidden,

    EndingCredits {
        title: String,
        subtitle: String,
        character: String,
    },

    ProgressSaved {
        level: Level,
    },

    /// Continue was requested but nothing usable was stored.
    SaveMissing,
}

/// Puzzle interactions and their results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    PanelOpened { puzzle: PuzzleKind },

    PanelClosed,

    CableConnected { connected: usize },

    CableRejected,

    PowerMeter { watts: u32, tier: PowerTier },

    Bill { amount: f64, within_target: bool },

    KeyCollected { index: usize, collected: usize },

    DoorOpened,

    DoorLocked { missing: usize },

    LevelCompleted { level: Level },
}

/// Quiz session progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuizEvent {
    Question {
        index: usize,
        total: usize,
        prompt: String,
        options: Vec<String>,
    },

    Answered {
        correct: bool,
        correct_option: usize,
    },

    Finished {
        score: usize,
        total: usize,
        percent: u32,
        passed: bool,
    },
}

impl QuizEvent {
    pub fn question(index: usize, total: usize, question: &QuizQuestion) -> Self {
        Self::Question {
            index,
            total,
            prompt: question.prompt.to_string(),
            options: question.options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn finished(result: &QuizResult) -> Self {
        Self::Finished {
            score: result.score,
            total: result.total,
            percent: result.percent,
            passed: result.passed,
        }
    }
}
