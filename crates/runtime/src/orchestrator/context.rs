//! Mutable world handed to state callbacks and transition predicates.

use std::sync::Arc;
use std::time::Duration;

use game_core::{
    BillingPuzzle, CablePuzzle, EfficiencyPuzzle, FinalDoor, GameConfig, GameProgress, Level,
    QuizEngine,
};

use super::RuntimeConfig;
use super::deferred::Deferred;
use crate::api::{AssetLoader, AudioCues, Overlay, Scene, SoundCue};
use crate::assets::AssetTracker;
use crate::events::{Event, EventBus, FeedbackKind, FlowEvent, PuzzleEvent};
use crate::repository::{ProgressRepository, RepositoryError};
use crate::rng::GameRng;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::triggers::Triggers;

/// Puzzle-local state of the active level.
///
/// Built when a level is entered and dropped when it is left, so nothing
/// leaks between levels except the energy keys in [`GameProgress`].
pub(crate) enum Stage {
    Idle,
    Cable(CablePuzzle),
    Efficiency(EfficiencyPuzzle),
    Billing(BillingPuzzle),
    Vault {
        door: FinalDoor,
        quiz: QuizEngine,
        /// An answer was given and the next question is not shown yet.
        awaiting_question: bool,
    },
}

impl Stage {
    pub(crate) fn for_level(level: Level, config: &GameConfig) -> Self {
        match level {
            Level::One => Self::Cable(CablePuzzle::new()),
            Level::Two => Self::Efficiency(EfficiencyPuzzle::new(config)),
            Level::Three => Self::Billing(BillingPuzzle::new(config)),
            Level::Four => Self::Vault {
                door: FinalDoor::new(),
                quiz: QuizEngine::with_pass_percent(config.quiz_pass_percent),
                awaiting_question: false,
            },
        }
    }

    pub(crate) fn is_solved(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Cable(puzzle) => puzzle.is_solved(),
            Self::Efficiency(puzzle) => puzzle.is_solved(),
            Self::Billing(puzzle) => puzzle.is_solved(),
            Self::Vault { door, .. } => door.is_open(),
        }
    }
}

pub(crate) struct GameContext {
    pub(crate) config: RuntimeConfig,
    pub(crate) progress: GameProgress,
    pub(crate) triggers: Triggers,
    /// Level a continued game resumes at; `None` starts from Level 1.
    pub(crate) resume_level: Option<Level>,
    pub(crate) stage: Stage,
    pub(crate) overlay: Option<Overlay>,
    pub(crate) scheduler: Scheduler<Deferred>,
    pub(crate) assets: AssetTracker,
    pub(crate) rng: GameRng,
    pub(crate) bus: EventBus,
    pub(crate) scene: Box<dyn Scene>,
    pub(crate) audio: Box<dyn AudioCues>,
    pub(crate) loader: Box<dyn AssetLoader>,
    pub(crate) repository: Option<Arc<dyn ProgressRepository>>,
    pub(crate) feedback_timer: Option<TimerHandle>,
    /// Music and SFX volume in percent.
    pub(crate) volumes: (u8, u8),
}

impl GameContext {
    pub(crate) fn emit(&self, event: impl Into<Event>) {
        self.bus.publish(event);
    }

    /// Plays a cue. Audio is best-effort: failures are logged and dropped.
    pub(crate) fn cue(&mut self, cue: SoundCue) {
        if let Err(error) = self.audio.play(cue) {
            tracing::debug!(%cue, %error, "sound cue dropped");
        }
    }

    pub(crate) fn apply_volumes(&mut self) {
        let (music, sfx) = self.volumes;
        let result = self
            .audio
            .set_volumes(f32::from(music) / 100.0, f32::from(sfx) / 100.0);
        if let Err(error) = result {
            tracing::debug!(music, sfx, %error, "volume change dropped");
        }
    }

    pub(crate) fn schedule(&mut self, delay: Duration, task: Deferred) -> TimerHandle {
        tracing::trace!(?task, ?delay, "scheduled");
        self.scheduler.schedule(delay, task)
    }

    /// Shows a feedback message, replacing the current one, and hides it after
    /// the configured duration.
    pub(crate) fn feedback(&mut self, message: impl Into<String>, kind: FeedbackKind) {
        let message = message.into();
        tracing::debug!(?kind, %message, "feedback");

        if let Some(previous) = self.feedback_timer.take() {
            self.scheduler.cancel(previous);
        }
        self.emit(FlowEvent::Feedback { message, kind });
        let delay = self.config.feedback_duration;
        self.feedback_timer = Some(self.schedule(delay, Deferred::HideFeedback));
    }

    /// Drops visible feedback right away, e.g. when its screen goes away.
    pub(crate) fn clear_feedback(&mut self) {
        if let Some(handle) = self.feedback_timer.take()
            && self.scheduler.cancel(handle)
        {
            self.emit(FlowEvent::FeedbackHidden);
        }
    }

    pub(crate) fn instructions(&mut self, text: &str) {
        self.scene.show_instructions(text);
        self.emit(FlowEvent::Instructions {
            text: text.to_string(),
        });
    }

    pub(crate) fn open_overlay(&mut self, overlay: Overlay) {
        self.scene.show_overlay(overlay);
        self.overlay = Some(overlay);
        if let Overlay::Puzzle(puzzle) = overlay {
            self.emit(PuzzleEvent::PanelOpened { puzzle });
        }
    }

    pub(crate) fn close_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            self.scene.hide_overlay();
            if matches!(overlay, Overlay::Puzzle(_)) {
                self.emit(PuzzleEvent::PanelClosed);
            }
        }
    }

    /// Grants the energy key of `level`, if it has one and it is new.
    pub(crate) fn collect_key(&mut self, level: Level) {
        let Some(index) = level.key_index() else {
            return;
        };
        match self.progress.collect_key(index) {
            Ok(true) => {
                self.cue(SoundCue::KeyCollect);
                self.emit(PuzzleEvent::KeyCollected {
                    index,
                    collected: self.progress.collected_keys(),
                });
                tracing::info!(%level, index, "energy key collected");
                self.autosave();
            }
            Ok(false) => {}
            Err(error) => tracing::warn!(%level, %error, "energy key not granted"),
        }
    }

    /// Writes progress to the repository.
    ///
    /// Returns `Ok(false)` when no repository is configured.
    pub(crate) fn save_progress(&mut self) -> Result<bool, RepositoryError> {
        let Some(repository) = &self.repository else {
            return Ok(false);
        };
        repository.save(&self.progress.to_save_record())?;
        self.emit(FlowEvent::ProgressSaved {
            level: self.progress.current_level(),
        });
        Ok(true)
    }

    /// Saves when persistence is enabled. Failures are logged, never raised.
    pub(crate) fn autosave(&mut self) {
        if !self.config.enable_persistence {
            return;
        }
        if let Err(error) = self.save_progress() {
            tracing::warn!(%error, "autosave failed");
        }
    }

    /// Reads saved progress. Anything missing or unreadable is `None`.
    pub(crate) fn load_progress(&self) -> Option<GameProgress> {
        let repository = self.repository.as_ref()?;
        if !repository.exists() {
            tracing::debug!("no saved progress");
            return None;
        }
        let record = match repository.load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!("no saved progress");
                return None;
            }
            Err(error) => {
                tracing::warn!(%error, "saved progress unreadable, treating as no save");
                return None;
            }
        };
        match GameProgress::from_save_record(&record) {
            Ok(progress) => Some(progress),
            Err(error) => {
                tracing::warn!(%error, "saved progress invalid, treating as no save");
                None
            }
        }
    }
}
