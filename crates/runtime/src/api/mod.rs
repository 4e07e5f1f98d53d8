//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! the collaborator traits the orchestrator talks to (scene, audio, assets),
//! the input events it accepts, and the unified error type.

pub mod assets;
pub mod audio;
pub mod errors;
pub mod input;
pub mod scene;

pub use assets::{AssetError, AssetLoader, PreloadedAssets};
pub use audio::{AudioCues, AudioError, SilentAudio, SoundCue};
pub use errors::{Result, RuntimeError};
pub use input::{InputEvent, KeyAction, UiTarget};
pub use scene::{NullScene, Overlay, Scene, ScreenId};
