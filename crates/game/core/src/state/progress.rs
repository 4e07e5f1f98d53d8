use crate::config::GameConfig;
use crate::state::{Level, ProgressError, SaveRecord};

/// Achievements of one play session.
///
/// Owned by the orchestrator. Energy keys are only ever cleared by a level
/// restart or a new game; everything else about a level (cable sequence,
/// appliance toggles, slider values) lives in the puzzle objects and is
/// discarded when the level is left.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameProgress {
    energy_keys: [bool; GameConfig::ENERGY_KEY_COUNT],
    current_level: Level,
    power_meter: u32,
}

impl GameProgress {
    /// Fresh progress: no keys, level 1, initial power meter reading.
    pub fn new() -> Self {
        Self {
            energy_keys: [false; GameConfig::ENERGY_KEY_COUNT],
            current_level: Level::One,
            power_meter: GameConfig::INITIAL_POWER_METER,
        }
    }

    pub fn energy_keys(&self) -> [bool; GameConfig::ENERGY_KEY_COUNT] {
        self.energy_keys
    }

    pub fn has_key(&self, index: usize) -> bool {
        self.energy_keys.get(index).copied().unwrap_or(false)
    }

    pub fn collected_keys(&self) -> usize {
        self.energy_keys.iter().filter(|&&key| key).count()
    }

    pub fn all_keys_collected(&self) -> bool {
        self.energy_keys.iter().all(|&key| key)
    }

    /// Marks key `index` as collected.
    ///
    /// Returns `true` if the key was not held before.
    pub fn collect_key(&mut self, index: usize) -> Result<bool, ProgressError> {
        let slot = self.key_slot(index)?;
        let newly = !*slot;
        *slot = true;
        Ok(newly)
    }

    /// Forgets key `index`. Used when a level is restarted.
    pub fn clear_key(&mut self, index: usize) -> Result<(), ProgressError> {
        *self.key_slot(index)? = false;
        Ok(())
    }

    pub fn current_level(&self) -> Level {
        self.current_level
    }

    pub fn set_current_level(&mut self, level: Level) {
        self.current_level = level;
    }

    /// Last power meter reading in watts.
    pub fn power_meter(&self) -> u32 {
        self.power_meter
    }

    pub fn set_power_meter(&mut self, watts: u32) {
        self.power_meter = watts;
    }

    /// Flattens progress into the persisted shape.
    pub fn to_save_record(&self) -> SaveRecord {
        SaveRecord {
            energy_keys: self.energy_keys,
            current_level: self.current_level.number() as i64,
            power_meter: self.power_meter,
        }
    }

    /// Restores progress from a save, rejecting impossible levels.
    pub fn from_save_record(record: &SaveRecord) -> Result<Self, ProgressError> {
        let current_level = Level::from_number(record.current_level)
            .ok_or(ProgressError::InvalidLevel(record.current_level))?;
        Ok(Self {
            energy_keys: record.energy_keys,
            current_level,
            power_meter: record.power_meter,
        })
    }

    fn key_slot(&mut self, index: usize) -> Result<&mut bool, ProgressError> {
        self.energy_keys
            .get_mut(index)
            .ok_or(ProgressError::InvalidKeyIndex {
                index,
                count: GameConfig::ENERGY_KEY_COUNT,
            })
    }
}

impl Default for GameProgress {
    fn default() -> Self {
        Self::new()
    }
}
