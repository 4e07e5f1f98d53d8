//! Level 3: plan a month of appliance usage under a bill target.

use crate::config::GameConfig;
use crate::puzzle::PuzzleStatus;

/// Appliance in the billing simulator.
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
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SimAppliance {
    Light,
    Ac,
    Tv,
    Fridge,
    Computer,
}

impl SimAppliance {
    /// Rated consumption in watts.
    pub const fn wattage(self) -> u32 {
        match self {
            Self::Light => 20,
            Self::Ac => 1000,
            Self::Tv => 100,
            Self::Fridge => 150,
            Self::Computer => 200,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Lampu",
            Self::Ac => "AC",
            Self::Tv => "TV",
            Self::Fridge => "Kulkas",
            Self::Computer => "Komputer",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatorAppliance {
    pub on: bool,
    pub wattage: u32,
    /// Always within `0..=24`.
    pub hours_per_day: u32,
}

/// Monthly energy of one appliance in kWh.
pub fn monthly_kwh(wattage: u32, hours_per_day: u32, days_per_month: u32) -> f64 {
    f64::from(wattage) * f64::from(hours_per_day) / 1000.0 * f64::from(days_per_month)
}

/// Reads an hours field the way the browser form did: the leading integer of
/// the text, `0` when there is none, clamped to `0..=24`.
pub fn parse_hours(raw: &str) -> u32 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(byte - b'0'));
    }

    if !seen_digit || negative {
        return 0;
    }
    value.min(GameConfig::MAX_HOURS_PER_DAY)
}

/// The five simulator appliances with their switches and daily hours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorApplianceSet {
    appliances: [SimulatorAppliance; <SimAppliance as strum::EnumCount>::COUNT],
}

impl SimulatorApplianceSet {
    /// Fridge running all day, everything else off.
    pub fn new() -> Self {
        let mut set = Self::all_off();
        set.set_on(SimAppliance::Fridge, true);
        set.set_hours(SimAppliance::Fridge, GameConfig::MAX_HOURS_PER_DAY);
        set
    }

    pub fn all_off() -> Self {
        use strum::IntoEnumIterator;

        let mut appliances = [SimulatorAppliance {
            on: false,
            wattage: 0,
            hours_per_day: 0,
        }; <SimAppliance as strum::EnumCount>::COUNT];
        for appliance in SimAppliance::iter() {
            appliances[appliance.slot()].wattage = appliance.wattage();
        }
        Self { appliances }
    }

    pub fn get(&self, appliance: SimAppliance) -> SimulatorAppliance {
        self.appliances[appliance.slot()]
    }

    pub fn set_on(&mut self, appliance: SimAppliance, on: bool) {
        self.appliances[appliance.slot()].on = on;
    }

    /// Flips the switch and returns the new position.
    pub fn toggle(&mut self, appliance: SimAppliance) -> bool {
        let state = &mut self.appliances[appliance.slot()];
        state.on = !state.on;
        state.on
    }

    /// Sets daily hours, clamped to `0..=24`. Returns the stored value.
    pub fn set_hours(&mut self, appliance: SimAppliance, hours: u32) -> u32 {
        let hours = hours.min(GameConfig::MAX_HOURS_PER_DAY);
        self.appliances[appliance.slot()].hours_per_day = hours;
        hours
    }

    /// Monthly kWh of every running appliance.
    pub fn monthly_energy(&self, days_per_month: u32) -> f64 {
        self.appliances
            .iter()
            .filter(|state| state.on)
            .map(|state| monthly_kwh(state.wattage, state.hours_per_day, days_per_month))
            .sum()
    }
}

impl Default for SimulatorApplianceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Projected bill after an interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BillingOutcome {
    /// Monthly bill in rupiah.
    pub bill: f64,
    pub within_target: bool,
    pub status: PuzzleStatus,
}

/// Passes once the projected monthly bill is at or under the target.
///
/// The bill is recomputed after every toggle or hours change. The default
/// setup (fridge only) is already under target, so nothing is checked until
/// the player touches a control.
#[derive(Clone, Debug)]
pub struct BillingPuzzle {
    appliances: SimulatorApplianceSet,
    config: GameConfig,
    solved: bool,
}

impl BillingPuzzle {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_appliances(SimulatorApplianceSet::new(), config)
    }

    pub fn with_appliances(appliances: SimulatorApplianceSet, config: &GameConfig) -> Self {
        Self {
            appliances,
            config: config.clone(),
            solved: false,
        }
    }

    pub fn appliances(&self) -> &SimulatorApplianceSet {
        &self.appliances
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Current projected monthly bill in rupiah.
    pub fn bill(&self) -> f64 {
        self.appliances.monthly_energy(self.config.days_per_month) * self.config.tariff_per_kwh
    }

    pub fn within_target(&self) -> bool {
        self.bill() <= self.config.bill_target
    }

    pub fn toggle(&mut self, appliance: SimAppliance) -> BillingOutcome {
        if self.solved {
            return self.outcome(PuzzleStatus::AlreadySolved);
        }
        self.appliances.toggle(appliance);
        self.check()
    }

    pub fn set_hours(&mut self, appliance: SimAppliance, hours: u32) -> BillingOutcome {
        if self.solved {
            return self.outcome(PuzzleStatus::AlreadySolved);
        }
        self.appliances.set_hours(appliance, hours);
        self.check()
    }

    /// Applies raw text from the hours field (see [`parse_hours`]).
    pub fn set_hours_input(&mut self, appliance: SimAppliance, raw: &str) -> BillingOutcome {
        self.set_hours(appliance, parse_hours(raw))
    }

    fn check(&mut self) -> BillingOutcome {
        if self.within_target() {
            self.solved = true;
            self.outcome(PuzzleStatus::Solved)
        } else {
            self.outcome(PuzzleStatus::Pending)
        }
    }

    fn outcome(&self, status: PuzzleStatus) -> BillingOutcome {
        BillingOutcome {
            bill: self.bill(),
            within_target: self.within_target(),
            status,
        }
    }
}
