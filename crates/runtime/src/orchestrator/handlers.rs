//! Input dispatch for the active screen and puzzle.
//!
//! Handlers only forward to the validators in `game-core` and turn their
//! outcomes into cues, feedback, events and deferred tasks.

use game_core::{
    Appliance, BillingOutcome, CableComponent, CableOutcome, DoorOutcome, GameProgress, GameState,
    Level, PuzzleKind, SimAppliance, messages,
};

use super::context::{GameContext, Stage};
use super::deferred::Deferred;
use crate::api::{Overlay, SoundCue, UiTarget};
use crate::events::{FeedbackKind, FlowEvent, PuzzleEvent, QuizEvent};
use crate::triggers::Triggers;

impl GameContext {
    pub(crate) fn handle_click(&mut self, state: GameState, target: UiTarget) {
        tracing::debug!(%state, ?target, "click");
        match (state, target) {
            (GameState::Loading, UiTarget::RetryAssets) => self.retry_assets(),

            (GameState::MainMenu, UiTarget::StartGame) => self.new_game(),
            (GameState::MainMenu, UiTarget::ContinueGame) => {
                self.continue_game();
            }
            (GameState::MainMenu, UiTarget::Settings) => {
                self.cue(SoundCue::Click);
                self.open_overlay(Overlay::Settings);
            }
            (GameState::MainMenu, UiTarget::About) => {
                self.cue(SoundCue::Click);
                self.open_overlay(Overlay::About);
            }
            (_, UiTarget::CloseModal) => {
                if matches!(self.overlay, Some(Overlay::Settings | Overlay::About)) {
                    self.cue(SoundCue::Click);
                    self.close_overlay();
                }
            }
            (_, UiTarget::MusicVolume(percent)) => {
                self.volumes.0 = percent.min(100);
                self.apply_volumes();
            }
            (_, UiTarget::SfxVolume(percent)) => {
                self.volumes.1 = percent.min(100);
                self.apply_volumes();
            }

            (_, UiTarget::LevelScene) => self.interact(state),
            (_, UiTarget::PuzzleCancel) => self.cancel_overlay(),
            (_, UiTarget::SaveGame) if state.level().is_some() => self.save_requested(),

            (GameState::Level1, UiTarget::Cable(component)) => self.connect_cable(component),
            (GameState::Level2, UiTarget::Appliance(appliance)) => {
                self.toggle_appliance(appliance)
            }
            (GameState::Level3, UiTarget::Simulator(appliance)) => {
                self.toggle_simulator(appliance)
            }
            (GameState::Level3, UiTarget::SimulatorHours { appliance, raw }) => {
                self.set_simulator_hours(appliance, &raw)
            }
            (GameState::Level4, UiTarget::Door) => self.try_door(),
            (GameState::Level4, UiTarget::QuizOption(option)) => self.answer_quiz(option),

            (state, target) => tracing::debug!(%state, ?target, "click ignored"),
        }
    }

    /// `KeyE` / `Enter` or a click on the level scene.
    pub(crate) fn interact(&mut self, state: GameState) {
        match state {
            GameState::OpeningCutscene => self.triggers.insert(Triggers::CUTSCENE_FINISHED),
            GameState::Level1 | GameState::Level2 | GameState::Level3 => {
                if self.overlay.is_some() || self.stage.is_solved() {
                    return;
                }
                let Some(level) = state.level() else {
                    return;
                };
                let kind = PuzzleKind::for_level(level);
                self.open_overlay(Overlay::Puzzle(kind));
                if let Some(hint) = messages::panel_hint(kind) {
                    self.feedback(hint, FeedbackKind::Info);
                }
                self.publish_puzzle_readout();
            }
            GameState::Level4 => self.try_door(),
            _ => {}
        }
    }

    /// `Escape` or the cancel button: closes a puzzle panel or a menu modal.
    /// The quiz cannot be dismissed.
    pub(crate) fn cancel_overlay(&mut self) {
        match self.overlay {
            Some(Overlay::Puzzle(_) | Overlay::Settings | Overlay::About) => {
                self.cue(SoundCue::Click);
                self.close_overlay();
            }
            Some(Overlay::Quiz) | None => {}
        }
    }

    pub(crate) fn retry_assets(&mut self) {
        if self.assets.is_complete() {
            return;
        }
        tracing::info!(outstanding = self.assets.outstanding().len(), "retrying assets");
        self.load_assets();
    }

    pub(crate) fn new_game(&mut self) {
        self.cue(SoundCue::Click);
        self.progress = GameProgress::new();
        self.resume_level = None;
        self.triggers.insert(Triggers::START_GAME_CLICKED);
    }

    /// Restores saved progress and starts at the saved level.
    ///
    /// Returns false, with feedback, when there is nothing usable to restore.
    pub(crate) fn continue_game(&mut self) -> bool {
        self.cue(SoundCue::Click);
        match self.load_progress() {
            Some(progress) => {
                let level = progress.current_level();
                tracing::info!(%level, keys = progress.collected_keys(), "continuing saved game");
                self.progress = progress;
                self.resume_level = Some(level);
                self.triggers.insert(Triggers::START_GAME_CLICKED);
                true
            }
            None => {
                self.emit(FlowEvent::SaveMissing);
                self.feedback(messages::NO_SAVE_FOUND, FeedbackKind::Error);
                false
            }
        }
    }

    /// Puts the active level back to how it was on entry. Levels 1–3 also
    /// hand back their energy key.
    pub(crate) fn restart_level(&mut self, level: Level) {
        self.scheduler.invalidate();
        self.clear_feedback();
        self.triggers.remove(Triggers::level_completed(level));
        if let Some(index) = level.key_index()
            && let Err(error) = self.progress.clear_key(index)
        {
            tracing::warn!(%level, %error, "energy key not cleared");
        }
        self.reset_stage(level);
        tracing::info!(%level, "level restarted");
    }

    fn save_requested(&mut self) {
        self.cue(SoundCue::Click);
        match self.save_progress() {
            Ok(true) => self.feedback(messages::GAME_SAVED, FeedbackKind::Success),
            Ok(false) => tracing::debug!("save requested without a repository"),
            Err(error) => {
                tracing::warn!(%error, "save failed");
                self.feedback(messages::SAVE_FAILED, FeedbackKind::Error);
            }
        }
    }

    /// Meter or bill readout for the panel that was just opened.
    fn publish_puzzle_readout(&mut self) {
        match &self.stage {
            Stage::Efficiency(puzzle) => self.emit(PuzzleEvent::PowerMeter {
                watts: puzzle.current_consumption(),
                tier: puzzle.tier(),
            }),
            Stage::Billing(puzzle) => self.emit(PuzzleEvent::Bill {
                amount: puzzle.bill(),
                within_target: puzzle.within_target(),
            }),
            _ => {}
        }
    }

    fn puzzle_open(&self, kind: PuzzleKind) -> bool {
        let open = self.overlay == Some(Overlay::Puzzle(kind));
        if !open {
            tracing::debug!(%kind, "puzzle input while panel closed");
        }
        open
    }

    /// Success path shared by the three key puzzles.
    fn solve_puzzle(&mut self, level: Level, message: &str) {
        self.cue(SoundCue::Success);
        self.feedback(message, FeedbackKind::Success);
        self.collect_key(level);
        let delay = self.config.puzzle_complete_delay;
        self.schedule(delay, Deferred::CompleteLevel(level));
    }

    fn connect_cable(&mut self, component: CableComponent) {
        if !self.puzzle_open(PuzzleKind::Cable) {
            return;
        }
        let outcome = match &mut self.stage {
            Stage::Cable(puzzle) => puzzle.attempt(component),
            _ => return,
        };

        match outcome {
            CableOutcome::Connected { connected } => {
                self.cue(SoundCue::Electric);
                self.emit(PuzzleEvent::CableConnected { connected });
            }
            CableOutcome::Solved => {
                self.cue(SoundCue::Electric);
                self.emit(PuzzleEvent::CableConnected {
                    connected: game_core::GameConfig::CABLE_SEQUENCE_LEN,
                });
                self.solve_puzzle(Level::One, messages::CABLE_SOLVED);
            }
            CableOutcome::Rejected => {
                self.cue(SoundCue::Error);
                self.feedback(messages::CABLE_REJECTED, FeedbackKind::Error);
                self.emit(PuzzleEvent::CableRejected);
            }
            CableOutcome::AlreadySolved => {}
        }
    }

    fn toggle_appliance(&mut self, appliance: Appliance) {
        if !self.puzzle_open(PuzzleKind::Efficiency) {
            return;
        }
        let outcome = match &mut self.stage {
            Stage::Efficiency(puzzle) => puzzle.toggle(appliance),
            _ => return,
        };
        if outcome.status == game_core::PuzzleStatus::AlreadySolved {
            return;
        }

        self.cue(SoundCue::Click);
        self.progress.set_power_meter(outcome.consumption);
        self.emit(PuzzleEvent::PowerMeter {
            watts: outcome.consumption,
            tier: outcome.tier,
        });
        if outcome.status.is_solved_now() {
            self.solve_puzzle(Level::Two, messages::EFFICIENCY_SOLVED);
        }
    }

    fn toggle_simulator(&mut self, appliance: SimAppliance) {
        if !self.puzzle_open(PuzzleKind::Simulator) {
            return;
        }
        let outcome = match &mut self.stage {
            Stage::Billing(puzzle) => puzzle.toggle(appliance),
            _ => return,
        };
        self.cue(SoundCue::Click);
        self.report_bill(outcome);
    }

    fn set_simulator_hours(&mut self, appliance: SimAppliance, raw: &str) {
        if !self.puzzle_open(PuzzleKind::Simulator) {
            return;
        }
        let outcome = match &mut self.stage {
            Stage::Billing(puzzle) => puzzle.set_hours_input(appliance, raw),
            _ => return,
        };
        self.report_bill(outcome);
    }

    fn report_bill(&mut self, outcome: BillingOutcome) {
        if outcome.status == game_core::PuzzleStatus::AlreadySolved {
            return;
        }
        self.emit(PuzzleEvent::Bill {
            amount: outcome.bill,
            within_target: outcome.within_target,
        });
        if outcome.status.is_solved_now() {
            self.solve_puzzle(Level::Three, messages::BILLING_SOLVED);
        }
    }

    fn try_door(&mut self) {
        let keys = self.progress.energy_keys();
        let outcome = match &mut self.stage {
            Stage::Vault { door, .. } => door.try_open(&keys),
            _ => return,
        };

        match outcome {
            DoorOutcome::Opened => {
                self.cue(SoundCue::DoorOpen);
                self.feedback(messages::DOOR_OPENED, FeedbackKind::Success);
                self.emit(PuzzleEvent::DoorOpened);
                let delay = self.config.door_to_quiz_delay;
                self.schedule(delay, Deferred::StartQuiz);
            }
            DoorOutcome::Locked { missing } => {
                self.cue(SoundCue::Error);
                self.feedback(messages::DOOR_LOCKED, FeedbackKind::Error);
                self.emit(PuzzleEvent::DoorLocked { missing });
            }
            DoorOutcome::AlreadyOpen => {}
        }
    }

    fn answer_quiz(&mut self, option: usize) {
        if self.overlay != Some(Overlay::Quiz) {
            return;
        }
        let Stage::Vault {
            quiz,
            awaiting_question,
            ..
        } = &mut self.stage
        else {
            return;
        };
        if *awaiting_question {
            tracing::debug!(option, "answer ignored while next question is pending");
            return;
        }
        let outcome = match quiz.answer(option, &mut self.rng) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(option, %error, "quiz answer rejected");
                return;
            }
        };
        *awaiting_question = true;

        self.cue(if outcome.correct {
            SoundCue::Success
        } else {
            SoundCue::Error
        });
        self.emit(QuizEvent::Answered {
            correct: outcome.correct,
            correct_option: outcome.correct_option,
        });

        match outcome.finished {
            None => {
                if outcome.correct {
                    self.feedback(messages::ANSWER_CORRECT, FeedbackKind::Success);
                } else {
                    self.feedback(messages::ANSWER_WRONG, FeedbackKind::Error);
                }
                let delay = self.config.quiz_answer_delay;
                self.schedule(delay, Deferred::PresentQuestion);
            }
            Some(result) => {
                tracing::info!(
                    score = result.score,
                    total = result.total,
                    passed = result.passed,
                    "quiz finished"
                );
                self.emit(QuizEvent::finished(&result));
                self.close_overlay();
                let kind = if result.passed {
                    FeedbackKind::Success
                } else {
                    FeedbackKind::Error
                };
                self.feedback(
                    messages::quiz_finished(result.score, result.total, result.percent, result.passed),
                    kind,
                );
                // a failed run has already been reshuffled by the engine
                let next = if result.passed {
                    Deferred::CompleteLevel(Level::Four)
                } else {
                    Deferred::PresentQuestion
                };
                let delay = self.config.quiz_finish_delay;
                self.schedule(delay, next);
            }
        }
    }
}
