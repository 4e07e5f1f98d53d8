//! One-shot transition triggers.
//!
//! Each trigger is raised by an event (assets done, cutscene over, a puzzle
//! solved), read by exactly one transition predicate, and lowered again both
//! when that transition leaves its state and when the state is re-entered.
//! A level therefore can never be "already complete" the moment it starts.
use bitflags::bitflags;
use game_core::{GameState, Level};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Triggers: u8 {
        const ASSETS_LOADED = 1 << 0;
        const CUTSCENE_FINISHED = 1 << 1;
        const START_GAME_CLICKED = 1 << 2;
        const LEVEL_1_COMPLETED = 1 << 3;
        const LEVEL_2_COMPLETED = 1 << 4;
        const LEVEL_3_COMPLETED = 1 << 5;
        const LEVEL_4_COMPLETED = 1 << 6;
    }
}

impl Triggers {
    pub const fn level_completed(level: Level) -> Self {
        match level {
            Level::One => Self::LEVEL_1_COMPLETED,
            Level::Two => Self::LEVEL_2_COMPLETED,
            Level::Three => Self::LEVEL_3_COMPLETED,
            Level::Four => Self::LEVEL_4_COMPLETED,
        }
    }

    /// The trigger raised while `state` is active and consumed by its
    /// outgoing transition.
    pub const fn owned_by(state: GameState) -> Self {
        match state {
            GameState::Loading => Self::ASSETS_LOADED,
            GameState::OpeningCutscene => Self::CUTSCENE_FINISHED,
            GameState::MainMenu => Self::START_GAME_CLICKED,
            GameState::Level1 => Self::LEVEL_1_COMPLETED,
            GameState::Level2 => Self::LEVEL_2_COMPLETED,
            GameState::Level3 => Self::LEVEL_3_COMPLETED,
            GameState::Level4 => Self::LEVEL_4_COMPLETED,
            GameState::EndingCutscene => Self::empty(),
        }
    }
}
