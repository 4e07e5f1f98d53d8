//! Runtime orchestration for Energy Quest.
//!
//! This crate wires the pure rules of `game-core` into a frame-driven game:
//! a progression state machine, deferred timers, collaborator traits for the
//! scene, audio and assets, a topic-based event bus and save persistence.
//! Consumers build an [`Orchestrator`], call [`Orchestrator::tick`] once per
//! frame and feed it [`InputEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`orchestrator`] hosts the orchestrator, its builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`repository`] persists the save record
//! - [`assets`], [`scheduler`] and [`triggers`] hold the runtime bookkeeping
pub mod api;
pub mod assets;
pub mod events;
pub mod orchestrator;
pub mod repository;
pub mod rng;
pub mod scheduler;
pub mod triggers;

pub use api::{
    AssetError, AssetLoader, AudioCues, AudioError, InputEvent, KeyAction, NullScene, Overlay,
    PreloadedAssets, Result, RuntimeError, Scene, ScreenId, SilentAudio, SoundCue, UiTarget,
};
pub use assets::{ASSET_MANIFEST, AssetStatus, AssetTracker};
pub use events::{Event, EventBus, FeedbackKind, FlowEvent, PuzzleEvent, QuizEvent, Topic};
pub use orchestrator::{Orchestrator, RuntimeBuilder, RuntimeConfig};
pub use repository::{
    FileProgressRepository, InMemoryProgressRepo, ProgressRepository, RepositoryError,
};
pub use rng::GameRng;
pub use scheduler::{Scheduler, TimerHandle};
pub use triggers::Triggers;
