//! High-level game orchestrator.
//!
//! The orchestrator owns the progression state machine and the context its
//! callbacks mutate, and exposes a builder-based API for clients to drive the
//! game one frame at a time.

mod context;
mod deferred;
mod flow;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use game_core::{GameConfig, GameProgress, GameState, QuizQuestion, SaveRecord};
use state_machine::StateChange;
use tokio::sync::broadcast;

use self::context::{GameContext, Stage};
use self::flow::GameMachine;
use crate::api::{
    AssetLoader, AudioCues, InputEvent, KeyAction, NullScene, Overlay, PreloadedAssets, Result,
    RuntimeError, Scene, SilentAudio, UiTarget,
};
use crate::assets::{ASSET_MANIFEST, AssetTracker};
use crate::events::{Event, EventBus, FlowEvent, Topic};
use crate::repository::ProgressRepository;
use crate::rng::GameRng;
use crate::scheduler::Scheduler;
use crate::triggers::Triggers;

/// Runtime configuration shared across the orchestrator and its services.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub event_buffer_size: usize,
    /// Save automatically on level entry and key collection.
    pub enable_persistence: bool,
    /// Success feedback → puzzle panel closes and the level completes.
    pub puzzle_complete_delay: Duration,
    /// Door opens → quiz starts.
    pub door_to_quiz_delay: Duration,
    /// Quiz answer → next question.
    pub quiz_answer_delay: Duration,
    /// Last quiz answer → level completes or the quiz restarts.
    pub quiz_finish_delay: Duration,
    pub cutscene_duration: Duration,
    pub feedback_duration: Duration,
    /// Percent, `0..=100`.
    pub music_volume: u8,
    /// Percent, `0..=100`.
    pub sfx_volume: u8,
    /// Fixed seed for quiz shuffles; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            event_buffer_size: 100,
            enable_persistence: false,
            puzzle_complete_delay: Duration::from_millis(2000),
            door_to_quiz_delay: Duration::from_millis(2000),
            quiz_answer_delay: Duration::from_millis(2000),
            quiz_finish_delay: Duration::from_millis(3000),
            cutscene_duration: Duration::from_millis(8000),
            feedback_duration: Duration::from_millis(3000),
            music_volume: 70,
            sfx_volume: 80,
            rng_seed: None,
        }
    }
}

/// Drives Energy Quest from `Loading` to the ending.
///
/// Single-threaded and frame-driven: call [`tick`](Self::tick) once per frame
/// and [`handle_input`](Self::handle_input) for each input event between
/// frames. Nothing blocks; delays are deferred tasks on the frame clock.
pub struct Orchestrator {
    machine: GameMachine,
    ctx: GameContext,
    started: bool,
}

impl Orchestrator {
    /// Create a new orchestrator builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Enters `Loading` and requests every asset of the manifest.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.ctx.apply_volumes();
        self.machine.start(&mut self.ctx)?;
        self.started = true;
        tracing::info!(state = %self.machine.current(), "orchestrator started");
        Ok(())
    }

    /// Advances the frame clock by `dt`, runs deferred tasks that came due,
    /// then updates the state machine once.
    ///
    /// Returns the transition taken this frame, if any.
    pub fn tick(&mut self, dt: Duration) -> Result<Option<StateChange<GameState>>> {
        self.ensure_started()?;

        self.ctx.scheduler.advance(dt);
        while let Some(task) = self.ctx.scheduler.pop_due() {
            self.ctx.run_deferred(task);
        }

        let change = self.machine.update(&mut self.ctx)?;
        if let Some(change) = change {
            self.announce(change);
        }
        Ok(change)
    }

    /// Dispatches one input event to the active screen or puzzle.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<()> {
        self.ensure_started()?;
        let state = self.machine.current();

        match event {
            InputEvent::KeyDown(code) => match KeyAction::from_code(&code) {
                Some(KeyAction::Interact) => self.ctx.interact(state),
                Some(KeyAction::Cancel) => self.ctx.cancel_overlay(),
                Some(KeyAction::Restart) if state == GameState::Loading => {
                    self.ctx.retry_assets()
                }
                Some(KeyAction::Restart) => {
                    self.restart_level()?;
                }
                None => tracing::trace!(%code, "unbound key"),
            },
            InputEvent::Click(UiTarget::MainMenu) => {
                self.return_to_main_menu()?;
            }
            InputEvent::Click(target) => self.ctx.handle_click(state, target),
        }
        Ok(())
    }

    /// Leaves the current level (or the ending) for the main menu.
    ///
    /// This is an explicit jump outside the predicate graph. Pending deferred
    /// tasks of the level are dropped. Returns false where there is no menu to
    /// return to yet.
    pub fn return_to_main_menu(&mut self) -> Result<bool> {
        self.ensure_started()?;
        let state = self.machine.current();
        if state.level().is_none() && state != GameState::EndingCutscene {
            return Ok(false);
        }

        self.ctx.autosave();
        let change = self.machine.change_state(GameState::MainMenu, &mut self.ctx)?;
        self.announce(change);
        Ok(true)
    }

    /// Restarts the puzzle of the current level.
    ///
    /// Levels 1–3 lose their energy key and get a fresh puzzle; their pending
    /// completion is cancelled. Returns false outside those levels.
    pub fn restart_level(&mut self) -> Result<bool> {
        self.ensure_started()?;
        match self.machine.current().level() {
            Some(level) if level.key_index().is_some() => {
                self.ctx.restart_level(level);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Starts over from Level 1 with no keys. Only valid on the main menu.
    pub fn new_game(&mut self) -> bool {
        if self.machine.current() != GameState::MainMenu {
            return false;
        }
        self.ctx.new_game();
        true
    }

    /// Resumes saved progress at its level. Only valid on the main menu.
    ///
    /// Returns false when not on the main menu or when there is no usable
    /// save; the player is told in the latter case.
    pub fn continue_game(&mut self) -> bool {
        if self.machine.current() != GameState::MainMenu {
            return false;
        }
        self.ctx.continue_game()
    }

    /// Writes the current progress to the progress repository.
    ///
    /// Fails with [`RuntimeError::MissingRepository`] when none is configured.
    pub fn save(&mut self) -> Result<()> {
        if self.ctx.repository.is_none() {
            return Err(RuntimeError::MissingRepository);
        }
        self.ctx.save_progress()?;
        Ok(())
    }

    /// Reads the stored save record without applying it.
    ///
    /// `Ok(None)` means the repository holds no save. Like [`save`](Self::save),
    /// fails with [`RuntimeError::MissingRepository`] when none is configured.
    pub fn load(&self) -> Result<Option<SaveRecord>> {
        let repository = self
            .ctx
            .repository
            .as_ref()
            .ok_or(RuntimeError::MissingRepository)?;
        Ok(repository.load()?)
    }

    pub fn current_state(&self) -> GameState {
        self.machine.current()
    }

    pub fn progress(&self) -> &GameProgress {
        &self.ctx.progress
    }

    pub fn triggers(&self) -> Triggers {
        self.ctx.triggers
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.ctx.overlay
    }

    pub fn assets(&self) -> &AssetTracker {
        &self.ctx.assets
    }

    /// Quiz question awaiting an answer, if the quiz is running.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match &self.ctx.stage {
            Stage::Vault { quiz, .. } => quiz.current_question(),
            _ => None,
        }
    }

    /// Time elapsed on the frame clock.
    pub fn clock(&self) -> Duration {
        self.ctx.scheduler.now()
    }

    pub fn is_finished(&self) -> bool {
        self.machine.current().is_terminal()
    }

    /// Subscribe to one topic of game events
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.ctx.bus.subscribe(topic)
    }

    /// Cloneable handle to the event bus
    pub fn event_bus(&self) -> EventBus {
        self.ctx.bus.clone()
    }

    fn ensure_started(&self) -> Result<()> {
        if self.started {
            Ok(())
        } else {
            Err(RuntimeError::NotStarted)
        }
    }

    fn announce(&self, change: StateChange<GameState>) {
        tracing::info!(from = %change.from, to = %change.to, "state changed");
        self.ctx.emit(FlowEvent::StateChanged {
            from: change.from,
            to: change.to,
        });
    }
}

/// Builder for [`Orchestrator`] with flexible configuration.
///
/// Every collaborator is optional: missing ones fall back to a scene that
/// draws nothing, silent audio and assets that are already present.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    scene: Option<Box<dyn Scene>>,
    audio: Option<Box<dyn AudioCues>>,
    loader: Option<Box<dyn AssetLoader>>,
    repository: Option<Arc<dyn ProgressRepository>>,
    manifest: Option<Vec<String>>,
    event_bus: Option<EventBus>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            scene: None,
            audio: None,
            loader: None,
            repository: None,
            manifest: None,
            event_bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scene(mut self, scene: impl Scene + 'static) -> Self {
        self.scene = Some(Box::new(scene));
        self
    }

    pub fn audio(mut self, audio: impl AudioCues + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    pub fn asset_loader(mut self, loader: impl AssetLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    pub fn repository(mut self, repository: Arc<dyn ProgressRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replace the asset manifest (defaults to the ten game models).
    pub fn manifest<I, S>(mut self, manifest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manifest = Some(manifest.into_iter().map(Into::into).collect());
        self
    }

    /// Publish on an existing bus instead of a fresh one.
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Build the orchestrator. Call [`Orchestrator::start`] to enter `Loading`.
    pub fn build(self) -> Result<Orchestrator> {
        if self.config.enable_persistence && self.repository.is_none() {
            return Err(RuntimeError::MissingRepository);
        }

        let bus = self
            .event_bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));
        let assets = match self.manifest {
            Some(manifest) => AssetTracker::new(manifest),
            None => AssetTracker::new(ASSET_MANIFEST),
        };

        let ctx = GameContext {
            progress: GameProgress::new(),
            triggers: Triggers::empty(),
            resume_level: None,
            stage: Stage::Idle,
            overlay: None,
            scheduler: Scheduler::new(),
            assets,
            rng: GameRng::new(self.config.rng_seed),
            bus,
            scene: self.scene.unwrap_or_else(|| Box::new(NullScene)),
            audio: self.audio.unwrap_or_else(|| Box::new(SilentAudio)),
            loader: self.loader.unwrap_or_else(|| Box::new(PreloadedAssets)),
            repository: self.repository,
            feedback_timer: None,
            volumes: (
                self.config.music_volume.min(100),
                self.config.sfx_volume.min(100),
            ),
            config: self.config,
        };

        Ok(Orchestrator {
            machine: flow::build_machine(),
            ctx,
            started: false,
        })
    }
}
