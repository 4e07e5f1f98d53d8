use crate::config::GameConfig;

/// Flat save blob written by the persistence collaborator.
///
/// The field names match the save of the web build
/// (`energyKeys`, `currentLevel`, `powerMeter`). There is no version field;
/// anything that does not parse is treated as "no save".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SaveRecord {
    pub energy_keys: [bool; GameConfig::ENERGY_KEY_COUNT],
    pub current_level: i64,
    pub power_meter: u32,
}
