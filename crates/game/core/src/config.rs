/// Game rule constants and tunable thresholds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Highest total wattage that still counts as efficient (Level 2 pass line).
    pub efficiency_limit_watts: u32,
    /// Highest total wattage shown as "medium" on the power meter.
    pub medium_limit_watts: u32,
    /// Electricity price per kWh in rupiah.
    pub tariff_per_kwh: f64,
    /// Days used to project daily usage into a monthly bill.
    pub days_per_month: u32,
    /// Highest monthly bill that passes Level 3.
    pub bill_target: f64,
    /// Minimum quiz percentage that passes Level 4.
    pub quiz_pass_percent: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Number of energy keys (one per puzzle level).
    pub const ENERGY_KEY_COUNT: usize = 3;
    /// Length of the cable circuit.
    pub const CABLE_SEQUENCE_LEN: usize = 4;
    /// Options per quiz question.
    pub const QUIZ_OPTION_COUNT: usize = 4;
    /// Upper bound of the hours-per-day slider.
    pub const MAX_HOURS_PER_DAY: u32 = 24;
    /// Power meter reading before Level 2 is first entered.
    pub const INITIAL_POWER_METER: u32 = 30;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EFFICIENCY_LIMIT_WATTS: u32 = 100;
    pub const DEFAULT_MEDIUM_LIMIT_WATTS: u32 = 200;
    pub const DEFAULT_TARIFF_PER_KWH: f64 = 1500.0;
    pub const DEFAULT_DAYS_PER_MONTH: u32 = 30;
    pub const DEFAULT_BILL_TARGET: f64 = 300_000.0;
    pub const DEFAULT_QUIZ_PASS_PERCENT: u32 = 70;

    pub fn new() -> Self {
        Self {
            efficiency_limit_watts: Self::DEFAULT_EFFICIENCY_LIMIT_WATTS,
            medium_limit_watts: Self::DEFAULT_MEDIUM_LIMIT_WATTS,
            tariff_per_kwh: Self::DEFAULT_TARIFF_PER_KWH,
            days_per_month: Self::DEFAULT_DAYS_PER_MONTH,
            bill_target: Self::DEFAULT_BILL_TARGET,
            quiz_pass_percent: Self::DEFAULT_QUIZ_PASS_PERCENT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
