//! Discrete input events delivered by the frontend.
//!
//! The orchestrator never reads device state. A frontend translates clicks
//! and key presses into [`InputEvent`]s and hands them over one at a time.
use game_core::{Appliance, CableComponent, SimAppliance};

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Click(UiTarget),
    /// Key code in DOM `KeyboardEvent.code` form, e.g. `KeyE`, `Escape`.
    KeyDown(String),
}

/// Named click targets.
#[derive(Clone, Debug, PartialEq)]
pub enum UiTarget {
    // main menu
    StartGame,
    ContinueGame,
    Settings,
    About,
    CloseModal,
    /// Slider value in percent.
    MusicVolume(u8),
    /// Slider value in percent.
    SfxVolume(u8),

    // loading screen
    RetryAssets,

    // in level
    /// The 3D view itself; opens the level's puzzle.
    LevelScene,
    PuzzleCancel,
    SaveGame,
    MainMenu,
    Cable(CableComponent),
    Appliance(Appliance),
    Simulator(SimAppliance),
    /// Raw text of an hours field.
    SimulatorHours {
        appliance: SimAppliance,
        raw: String,
    },
    Door,
    QuizOption(usize),
}

/// What a key press means to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// `KeyE` / `Enter`: same as clicking the level scene.
    Interact,
    /// `Escape`: close the open puzzle panel.
    Cancel,
    /// `KeyR`: restart the current level.
    Restart,
}

impl KeyAction {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyE" | "Enter" => Some(Self::Interact),
            "Escape" => Some(Self::Cancel),
            "KeyR" => Some(Self::Restart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes_map_to_actions() {
        assert_eq!(KeyAction::from_code("KeyE"), Some(KeyAction::Interact));
        assert_eq!(KeyAction::from_code("Enter"), Some(KeyAction::Interact));
        assert_eq!(KeyAction::from_code("Escape"), Some(KeyAction::Cancel));
        assert_eq!(KeyAction::from_code("KeyR"), Some(KeyAction::Restart));
        assert_eq!(KeyAction::from_code("KeyW"), None);
        assert_eq!(KeyAction::from_code("keye"), None);
    }
}
