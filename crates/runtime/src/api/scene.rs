//! Rendering collaborator.
//!
//! The orchestrator only says *what* should be visible. Cameras, models and
//! lighting belong to whoever implements [`Scene`].
use game_core::PuzzleKind;

/// Full-screen views the game switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ScreenId {
    LoadingScreen,
    /// Shared by the opening and ending cutscenes.
    OpeningCutscene,
    MainMenu,
    /// The 3D level view.
    GameCanvasContainer,
}

/// Panels drawn over the current screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlay {
    Puzzle(PuzzleKind),
    Quiz,
    Settings,
    About,
}

pub trait Scene: Send {
    fn show_screen(&mut self, screen: ScreenId);

    fn show_overlay(&mut self, overlay: Overlay);

    fn hide_overlay(&mut self);

    fn show_instructions(&mut self, text: &str);
}

/// Scene that draws nothing. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullScene;

impl Scene for NullScene {
    fn show_screen(&mut self, _screen: ScreenId) {}

    fn show_overlay(&mut self, _overlay: Overlay) {}

    fn hide_overlay(&mut self) {}

    fn show_instructions(&mut self, _text: &str) {}
}
