//! Level puzzles.
//!
//! Each validator is pure logic over puzzle-local state. A wrong move is a
//! normal outcome, never an error: the player is told what went wrong and
//! may try again. Granting the energy key and the audio/visual cues are the
//! orchestrator's job, driven by the outcome values returned here.
mod billing;
mod cable;
mod door;
mod efficiency;

pub use billing::{
    BillingOutcome, BillingPuzzle, SimAppliance, SimulatorAppliance, SimulatorApplianceSet,
    monthly_kwh, parse_hours,
};
pub use cable::{CORRECT_SEQUENCE, CableComponent, CableOutcome, CablePuzzle};
pub use door::{DoorOutcome, FinalDoor, can_open};
pub use efficiency::{Appliance, ApplianceSet, ApplianceState, EfficiencyOutcome, EfficiencyPuzzle, PowerTier};

use crate::state::Level;

/// Where a threshold puzzle stands after an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleStatus {
    /// Threshold not met yet.
    Pending,
    /// This interaction met the threshold.
    Solved,
    /// The puzzle was solved earlier; the interaction was ignored.
    AlreadySolved,
}

impl PuzzleStatus {
    pub const fn is_solved_now(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Which puzzle overlay a level opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PuzzleKind {
    Cable,
    Efficiency,
    Simulator,
    Door,
}

impl PuzzleKind {
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::One => Self::Cable,
            Level::Two => Self::Efficiency,
            Level::Three => Self::Simulator,
            Level::Four => Self::Door,
        }
    }
}
