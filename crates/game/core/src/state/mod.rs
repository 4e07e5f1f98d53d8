//! Where the player is and what they have achieved.
//!
//! [`GameState`] is the single source of truth for the active scene. The
//! player's achievements live in [`GameProgress`], which outlives individual
//! levels and is the only data persisted between sessions (as a
//! [`SaveRecord`]).
mod error;
mod progress;
mod save;

pub use error::ProgressError;
pub use progress::GameProgress;
pub use save::SaveRecord;

/// Scene of the game. Exactly one is active at any time.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GameState {
    Loading,
    OpeningCutscene,
    MainMenu,
    #[strum(serialize = "level_1")]
    #[cfg_attr(feature = "serde", serde(rename = "level_1"))]
    Level1,
    #[strum(serialize = "level_2")]
    #[cfg_attr(feature = "serde", serde(rename = "level_2"))]
    Level2,
    #[strum(serialize = "level_3")]
    #[cfg_attr(feature = "serde", serde(rename = "level_3"))]
    Level3,
    #[strum(serialize = "level_4")]
    #[cfg_attr(feature = "serde", serde(rename = "level_4"))]
    Level4,
    EndingCutscene,
}

impl GameState {
    /// The level this state plays, if it is a level.
    pub const fn level(self) -> Option<Level> {
        match self {
            Self::Level1 => Some(Level::One),
            Self::Level2 => Some(Level::Two),
            Self::Level3 => Some(Level::Three),
            Self::Level4 => Some(Level::Four),
            _ => None,
        }
    }

    /// Terminal states have no outgoing predicate transition.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::EndingCutscene)
    }
}

/// One of the four playable rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Living room: cable circuit.
    One,
    /// Kitchen: appliance efficiency.
    Two,
    /// Laboratory: billing simulator.
    Three,
    /// Basement: final door and quiz.
    Four,
}

impl Level {
    /// 1-based level number.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    pub const fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Scene that plays this level.
    pub const fn state(self) -> GameState {
        match self {
            Self::One => GameState::Level1,
            Self::Two => GameState::Level2,
            Self::Three => GameState::Level3,
            Self::Four => GameState::Level4,
        }
    }

    /// Energy key awarded by this level's puzzle. Level 4 awards none.
    pub const fn key_index(self) -> Option<usize> {
        match self {
            Self::One => Some(0),
            Self::Two => Some(1),
            Self::Three => Some(2),
            Self::Four => None,
        }
    }
}

impl core::fmt::Display for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "level {}", self.number())
    }
}
