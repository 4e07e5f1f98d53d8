//! Level 1: wire a series circuit in the right order.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Component the player can click in the circuit overlay.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CableComponent {
    #[strum(serialize = "battery+")]
    #[cfg_attr(feature = "serde", serde(rename = "battery+"))]
    BatteryPositive,
    #[strum(serialize = "switch")]
    #[cfg_attr(feature = "serde", serde(rename = "switch"))]
    Switch,
    #[strum(serialize = "lamp")]
    #[cfg_attr(feature = "serde", serde(rename = "lamp"))]
    Lamp,
    #[strum(serialize = "battery-")]
    #[cfg_attr(feature = "serde", serde(rename = "battery-"))]
    BatteryNegative,
}

/// The only accepted wiring order.
pub const CORRECT_SEQUENCE: [CableComponent; GameConfig::CABLE_SEQUENCE_LEN] = [
    CableComponent::BatteryPositive,
    CableComponent::Switch,
    CableComponent::Lamp,
    CableComponent::BatteryNegative,
];

/// Result of clicking one component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CableOutcome {
    /// Right component; `connected` components are now wired.
    Connected { connected: usize },
    /// Last component wired; the circuit is closed.
    Solved,
    /// Wrong component; the whole sequence was cleared.
    Rejected,
    /// The circuit was closed earlier; the click was ignored.
    AlreadySolved,
}

/// Online prefix matcher against [`CORRECT_SEQUENCE`].
///
/// Invariant: `sequence` is always a prefix of the correct order. Any
/// deviation clears it entirely rather than dropping the bad entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CablePuzzle {
    sequence: ArrayVec<CableComponent, { GameConfig::CABLE_SEQUENCE_LEN }>,
    solved: bool,
}

impl CablePuzzle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Components wired so far, in order.
    pub fn sequence(&self) -> &[CableComponent] {
        &self.sequence
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Feeds one click into the matcher.
    pub fn attempt(&mut self, component: CableComponent) -> CableOutcome {
        if self.solved {
            return CableOutcome::AlreadySolved;
        }

        let expected = CORRECT_SEQUENCE[self.sequence.len()];
        if component != expected {
            self.sequence.clear();
            return CableOutcome::Rejected;
        }

        self.sequence.push(component);
        if self.sequence.is_full() {
            self.sequence.clear();
            self.solved = true;
            CableOutcome::Solved
        } else {
            CableOutcome::Connected {
                connected: self.sequence.len(),
            }
        }
    }

    /// Clears the wiring and the solved flag.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.solved = false;
    }
}
