//! Deterministic progression rules for Energy Quest.
//!
//! `game-core` defines the canonical rules of the game (puzzle validators,
//! quiz engine, progress data) as pure APIs with no rendering, audio or I/O.
//! The runtime crate drives these types from its state machine and forwards
//! their outcomes to external collaborators.
//!
//! Modules are organized by responsibility:
//! - [`state`] holds the scene enumeration, levels and the player's progress
//! - [`puzzle`] hosts the four level validators
//! - [`quiz`] hosts the question bank and the quiz session engine
//! - [`shuffle`] provides Fisher–Yates over an injectable uniform RNG
//! - [`messages`] collects the player-facing text
pub mod config;
pub mod error;
pub mod messages;
pub mod puzzle;
pub mod quiz;
pub mod shuffle;
pub mod state;

pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use puzzle::{
    Appliance, ApplianceSet, ApplianceState, BillingOutcome, BillingPuzzle, CableComponent,
    CableOutcome, CablePuzzle, DoorOutcome, EfficiencyOutcome, EfficiencyPuzzle, FinalDoor,
    PowerTier, PuzzleKind, PuzzleStatus, SimAppliance, SimulatorAppliance, SimulatorApplianceSet,
};
pub use quiz::{AnswerOutcome, QuizEngine, QuizError, QuizPhase, QuizQuestion, QuizResult};
pub use shuffle::{PcgRng, RngOracle, fisher_yates, shuffled};
pub use state::{GameProgress, GameState, Level, ProgressError, SaveRecord};
