//! Collaborators backed by the terminal and the local filesystem.
use std::path::PathBuf;

use runtime::{AssetError, AssetLoader, AudioCues, AudioError, Overlay, Scene, ScreenId, SoundCue};

/// Prints screen changes and instructions to stdout.
#[derive(Debug, Default)]
pub struct TerminalScene {
    screen: Option<ScreenId>,
}

impl Scene for TerminalScene {
    fn show_screen(&mut self, screen: ScreenId) {
        if self.screen == Some(screen) {
            return;
        }
        self.screen = Some(screen);
        let title = match screen {
            ScreenId::LoadingScreen => "Memuat",
            ScreenId::OpeningCutscene => "Cutscene",
            ScreenId::MainMenu => "Energy Quest",
            ScreenId::GameCanvasContainer => "Permainan",
        };
        println!("\n=== {title} ===");
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        let label = match overlay {
            Overlay::Puzzle(kind) => kind.to_string(),
            Overlay::Quiz => "quiz".to_string(),
            Overlay::Settings => "settings".to_string(),
            Overlay::About => "about".to_string(),
        };
        println!("[panel: {label}]");
    }

    fn hide_overlay(&mut self) {
        println!("[panel closed]");
    }

    fn show_instructions(&mut self, text: &str) {
        println!("> {text}");
    }
}

/// No speakers in a terminal; cues are logged.
#[derive(Debug, Default)]
pub struct LoggedAudio {
    sfx: f32,
}

impl AudioCues for LoggedAudio {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        tracing::debug!(%cue, volume = self.sfx, "sound cue");
        Ok(())
    }

    fn set_volumes(&mut self, music: f32, sfx: f32) -> Result<(), AudioError> {
        self.sfx = sfx;
        tracing::info!(music, sfx, "volumes set");
        Ok(())
    }
}

/// Checks that every manifest entry exists under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for DirectoryAssets {
    fn load(&mut self, path: &str) -> Result<(), AssetError> {
        let full = self.root.join(path);
        match std::fs::metadata(&full) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(AssetError::Rejected {
                path: path.to_string(),
                reason: "not a file".to_string(),
            }),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(full))
            }
            Err(source) => Err(AssetError::Io { path: full, source }),
        }
    }
}
