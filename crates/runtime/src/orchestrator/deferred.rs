//! Tasks that run after a delay on the frame clock.

use game_core::Level;

use super::context::{GameContext, Stage};
use crate::api::Overlay;
use crate::events::{FlowEvent, PuzzleEvent, QuizEvent};
use crate::triggers::Triggers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Deferred {
    /// The opening cutscene has played out.
    FinishCutscene,
    /// Close the puzzle panel and raise the level's completion trigger.
    CompleteLevel(Level),
    /// Start the quiz once the door has swung open.
    StartQuiz,
    /// Show the quiz question the engine is waiting on.
    PresentQuestion,
    HideFeedback,
}

impl GameContext {
    pub(crate) fn run_deferred(&mut self, task: Deferred) {
        tracing::trace!(?task, "deferred task due");
        match task {
            Deferred::FinishCutscene => self.triggers.insert(Triggers::CUTSCENE_FINISHED),
            Deferred::CompleteLevel(level) => {
                self.close_overlay();
                self.triggers.insert(Triggers::level_completed(level));
                self.emit(PuzzleEvent::LevelCompleted { level });
                tracing::info!(%level, "level completed");
            }
            Deferred::StartQuiz => self.start_quiz(),
            Deferred::PresentQuestion => self.present_question(),
            Deferred::HideFeedback => {
                self.feedback_timer = None;
                self.emit(FlowEvent::FeedbackHidden);
            }
        }
    }

    fn start_quiz(&mut self) {
        let Stage::Vault { quiz, .. } = &mut self.stage else {
            return;
        };
        quiz.start(&mut self.rng);
        tracing::info!("quiz started");
        self.present_question();
    }

    fn present_question(&mut self) {
        let Stage::Vault {
            quiz,
            awaiting_question,
            ..
        } = &mut self.stage
        else {
            return;
        };
        *awaiting_question = false;
        let (index, total) = quiz.progress();
        let Some(event) = quiz
            .current_question()
            .map(|question| QuizEvent::question(index, total, question))
        else {
            return;
        };

        if self.overlay != Some(Overlay::Quiz) {
            self.open_overlay(Overlay::Quiz);
        }
        self.emit(event);
    }
}
