//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration required to bootstrap the orchestrator and the terminal.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub enable_persistence: bool,
    pub session_id: Option<String>,
    pub save_data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    /// Directory the `3D/...` manifest entries are resolved against.
    /// Without one, every asset counts as preloaded.
    pub asset_dir: Option<PathBuf>,
    pub fps: u32,
    pub music_volume: Option<u8>,
    pub sfx_volume: Option<u8>,
    pub rng_seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enable_persistence: true,
            session_id: None,
            save_data_dir: None,
            log_dir: None,
            asset_dir: None,
            fps: 30,
            music_volume: None,
            sfx_volume: None,
            rng_seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ENABLE_PERSISTENCE` - Autosave progress (default: true)
    /// - `GAME_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `ENERGY_QUEST_SAVE_DIR` - Directory for the save file (default: platform-specific)
    /// - `ENERGY_QUEST_LOG_DIR` - Directory for session logs (default: platform-specific)
    /// - `ENERGY_QUEST_ASSET_DIR` - Root of the 3D assets (default: none, assets preloaded)
    /// - `ENERGY_QUEST_FPS` - Frames per second of the game loop (default: 30)
    /// - `ENERGY_QUEST_SEED` - Fixed quiz shuffle seed (default: entropy)
    /// - `MUSIC_VOLUME` / `SFX_VOLUME` - Volumes in percent (default: 70 / 80)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enable) = read_env_bool("ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        config.session_id = env::var("GAME_SESSION_ID").ok();
        config.save_data_dir = env::var("ENERGY_QUEST_SAVE_DIR").ok().map(PathBuf::from);
        config.log_dir = env::var("ENERGY_QUEST_LOG_DIR").ok().map(PathBuf::from);
        config.asset_dir = env::var("ENERGY_QUEST_ASSET_DIR").ok().map(PathBuf::from);

        if let Some(fps) = read_env::<u32>("ENERGY_QUEST_FPS") {
            config.fps = fps.clamp(1, 240);
        }
        config.rng_seed = read_env::<u64>("ENERGY_QUEST_SEED");
        config.music_volume = read_env::<u8>("MUSIC_VOLUME").map(|v| v.min(100));
        config.sfx_volume = read_env::<u8>("SFX_VOLUME").map(|v| v.min(100));

        config
    }

    /// Wall-clock length of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Orchestrator configuration derived from these settings.
    pub fn runtime_config(&self) -> runtime::RuntimeConfig {
        let mut config = runtime::RuntimeConfig {
            enable_persistence: self.enable_persistence,
            rng_seed: self.rng_seed,
            ..runtime::RuntimeConfig::default()
        };
        if let Some(volume) = self.music_volume {
            config.music_volume = volume;
        }
        if let Some(volume) = self.sfx_volume {
            config.sfx_volume = volume;
        }
        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
