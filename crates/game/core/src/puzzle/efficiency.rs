//! Level 2: keep the kitchen's power draw within budget.

use crate::config::GameConfig;
use crate::puzzle::PuzzleStatus;

/// Kitchen appliance with a fixed rated wattage.
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Appliance {
    Light,
    Fridge,
    Fan,
    RiceCooker,
}

impl Appliance {
    /// Rated consumption in watts.
    pub const fn wattage(self) -> u32 {
        match self {
            Self::Light => 20,
            Self::Fridge => 150,
            Self::Fan => 50,
            Self::RiceCooker => 800,
        }
    }

    /// Label shown on the appliance button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Lampu",
            Self::Fridge => "Kulkas",
            Self::Fan => "Kipas",
            Self::RiceCooker => "Rice Cooker",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Power-meter band. Display only; the pass condition is the efficiency limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PowerTier {
    Efficient,
    Medium,
    Wasteful,
}

impl PowerTier {
    /// Bands: `<= efficiency limit`, `<= medium limit`, above.
    pub fn classify(watts: u32, config: &GameConfig) -> Self {
        if watts <= config.efficiency_limit_watts {
            Self::Efficient
        } else if watts <= config.medium_limit_watts {
            Self::Medium
        } else {
            Self::Wasteful
        }
    }

    /// Meter caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Efficient => "Efisien",
            Self::Medium => "Sedang",
            Self::Wasteful => "Boros",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApplianceState {
    pub on: bool,
    pub wattage: u32,
}

/// The four kitchen appliances and their switches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplianceSet {
    appliances: [ApplianceState; <Appliance as strum::EnumCount>::COUNT],
}

impl ApplianceSet {
    /// Kitchen as the player finds it: light and fridge running (170 W).
    pub fn new() -> Self {
        Self::all_off()
            .with(Appliance::Light, true)
            .with(Appliance::Fridge, true)
    }

    pub fn all_off() -> Self {
        use strum::IntoEnumIterator;

        let mut appliances = [ApplianceState {
            on: false,
            wattage: 0,
        }; <Appliance as strum::EnumCount>::COUNT];
        for appliance in Appliance::iter() {
            appliances[appliance.slot()].wattage = appliance.wattage();
        }
        Self { appliances }
    }

    /// Builder-style switch setting.
    #[must_use]
    pub fn with(mut self, appliance: Appliance, on: bool) -> Self {
        self.appliances[appliance.slot()].on = on;
        self
    }

    pub fn get(&self, appliance: Appliance) -> ApplianceState {
        self.appliances[appliance.slot()]
    }

    pub fn is_on(&self, appliance: Appliance) -> bool {
        self.get(appliance).on
    }

    /// Flips the switch and returns the new position.
    pub fn toggle(&mut self, appliance: Appliance) -> bool {
        let state = &mut self.appliances[appliance.slot()];
        state.on = !state.on;
        state.on
    }

    /// Sum of the wattage of every running appliance.
    pub fn current_consumption(&self) -> u32 {
        self.appliances
            .iter()
            .filter(|state| state.on)
            .map(|state| state.wattage)
            .sum()
    }
}

impl Default for ApplianceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Meter reading after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EfficiencyOutcome {
    pub consumption: u32,
    pub tier: PowerTier,
    pub status: PuzzleStatus,
}

/// Passes as soon as total consumption is within the efficiency limit.
///
/// The check runs after every toggle; there is no debounce, so the toggle
/// that crosses the line completes the puzzle.
#[derive(Clone, Debug)]
pub struct EfficiencyPuzzle {
    appliances: ApplianceSet,
    config: GameConfig,
    solved: bool,
}

impl EfficiencyPuzzle {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_appliances(ApplianceSet::new(), config)
    }

    pub fn with_appliances(appliances: ApplianceSet, config: &GameConfig) -> Self {
        Self {
            appliances,
            config: config.clone(),
            solved: false,
        }
    }

    pub fn appliances(&self) -> &ApplianceSet {
        &self.appliances
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn current_consumption(&self) -> u32 {
        self.appliances.current_consumption()
    }

    pub fn tier(&self) -> PowerTier {
        PowerTier::classify(self.current_consumption(), &self.config)
    }

    /// Flips one appliance and re-checks the pass condition.
    pub fn toggle(&mut self, appliance: Appliance) -> EfficiencyOutcome {
        if self.solved {
            return self.outcome(PuzzleStatus::AlreadySolved);
        }

        self.appliances.toggle(appliance);
        if self.tier() == PowerTier::Efficient {
            self.solved = true;
            self.outcome(PuzzleStatus::Solved)
        } else {
            self.outcome(PuzzleStatus::Pending)
        }
    }

    fn outcome(&self, status: PuzzleStatus) -> EfficiencyOutcome {
        EfficiencyOutcome {
            consumption: self.current_consumption(),
            tier: self.tier(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn kitchen_starts_at_medium_draw() {
        let puzzle = EfficiencyPuzzle::new(&config());
        assert_eq!(puzzle.current_consumption(), 170);
        assert_eq!(puzzle.tier(), PowerTier::Medium);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn tiers_follow_boundaries() {
        let cfg = config();
        assert_eq!(PowerTier::classify(0, &cfg), PowerTier::Efficient);
        assert_eq!(PowerTier::classify(100, &cfg), PowerTier::Efficient);
        assert_eq!(PowerTier::classify(101, &cfg), PowerTier::Medium);
        assert_eq!(PowerTier::classify(200, &cfg), PowerTier::Medium);
        assert_eq!(PowerTier::classify(201, &cfg), PowerTier::Wasteful);
        assert_eq!(PowerTier::Wasteful.label(), "Boros");
    }

    #[test]
    fn default_limit_is_100_watts() {
        let cfg = config();
        assert_eq!(cfg.efficiency_limit_watts, 100);
        assert_eq!(PowerTier::classify(100, &cfg), PowerTier::Efficient);
        assert_eq!(PowerTier::classify(101, &cfg), PowerTier::Medium);

        // light + fan (70 W) is the richest passing kitchen; adding the
        // fridge (220 W) is not.
        let set = ApplianceSet::all_off()
            .with(Appliance::Light, true)
            .with(Appliance::Fan, true);
        let mut puzzle = EfficiencyPuzzle::with_appliances(set, &cfg);
        assert_eq!(puzzle.toggle(Appliance::Fridge).status, PuzzleStatus::Pending);
        let outcome = puzzle.toggle(Appliance::Fridge);
        assert_eq!(outcome.consumption, 70);
        assert_eq!(outcome.status, PuzzleStatus::Solved);
    }

    #[test]
    fn exactly_at_limit_passes() {
        // 20 + 50 = 70 → lower the limit to hit the edge exactly.
        let mut cfg = config();
        cfg.efficiency_limit_watts = 70;
        let set = ApplianceSet::all_off().with(Appliance::Light, true);
        let mut puzzle = EfficiencyPuzzle::with_appliances(set, &cfg);
        let outcome = puzzle.toggle(Appliance::Fan);
        assert_eq!(outcome.consumption, 70);
        assert_eq!(outcome.status, PuzzleStatus::Solved);
    }

    #[test]
    fn one_watt_over_limit_fails() {
        let mut cfg = config();
        cfg.efficiency_limit_watts = 69;
        let set = ApplianceSet::all_off().with(Appliance::Light, true);
        let mut puzzle = EfficiencyPuzzle::with_appliances(set, &cfg);
        assert_eq!(puzzle.toggle(Appliance::Fan).status, PuzzleStatus::Pending);
    }

    #[test]
    fn light_and_fan_pass() {
        let set = ApplianceSet::all_off().with(Appliance::Light, true);
        let mut puzzle = EfficiencyPuzzle::with_appliances(set, &config());
        let outcome = puzzle.toggle(Appliance::Fan);
        assert_eq!(outcome.consumption, 70);
        assert_eq!(outcome.tier, PowerTier::Efficient);
        assert!(outcome.status.is_solved_now());
    }

    #[test]
    fn light_and_fridge_do_not_pass() {
        let set = ApplianceSet::all_off().with(Appliance::Light, true);
        let mut puzzle = EfficiencyPuzzle::with_appliances(set, &config());
        let outcome = puzzle.toggle(Appliance::Fridge);
        assert_eq!(outcome.consumption, 170);
        assert_eq!(outcome.status, PuzzleStatus::Pending);
    }

    #[test]
    fn switching_fridge_off_from_start_solves() {
        let mut puzzle = EfficiencyPuzzle::new(&config());
        let outcome = puzzle.toggle(Appliance::Fridge);
        assert_eq!(outcome.consumption, 20);
        assert_eq!(outcome.status, PuzzleStatus::Solved);

        let again = puzzle.toggle(Appliance::RiceCooker);
        assert_eq!(again.status, PuzzleStatus::AlreadySolved);
        assert_eq!(again.consumption, 20);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("riceCooker".parse::<Appliance>().unwrap(), Appliance::RiceCooker);
        assert_eq!("ricecooker".parse::<Appliance>().unwrap(), Appliance::RiceCooker);
        assert_eq!(Appliance::RiceCooker.as_ref(), "riceCooker");
    }
}
