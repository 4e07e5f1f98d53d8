//! Level 4: the secret door that only opens with every energy key.

use crate::config::GameConfig;

/// True only when every energy key is held. Order of collection is irrelevant.
pub fn can_open(keys: &[bool; GameConfig::ENERGY_KEY_COUNT]) -> bool {
    keys.iter().all(|&held| held)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorOutcome {
    Opened,
    AlreadyOpen,
    /// `missing` keys are still needed; the door stays shut.
    Locked { missing: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalDoor {
    opened: bool,
}

impl FinalDoor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn try_open(&mut self, keys: &[bool; GameConfig::ENERGY_KEY_COUNT]) -> DoorOutcome {
        if self.opened {
            return DoorOutcome::AlreadyOpen;
        }
        if can_open(keys) {
            self.opened = true;
            DoorOutcome::Opened
        } else {
            DoorOutcome::Locked {
                missing: keys.iter().filter(|&&held| !held).count(),
            }
        }
    }
}
