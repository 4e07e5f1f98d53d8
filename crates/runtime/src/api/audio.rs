//! Audio collaborator.
//!
//! Cues are fire-and-forget. The orchestrator logs a failed cue at debug
//! level and carries on; audio never interrupts play.
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SoundCue {
    Click,
    Success,
    Error,
    Electric,
    KeyCollect,
    DoorOpen,
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to play {cue}: {reason}")]
    Playback { cue: SoundCue, reason: String },
}

pub trait AudioCues: Send {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;

    /// Volumes are fractions in `0.0..=1.0`.
    fn set_volumes(&mut self, music: f32, sfx: f32) -> Result<(), AudioError>;
}

/// Audio sink that accepts every cue and plays nothing.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioCues for SilentAudio {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }

    fn set_volumes(&mut self, _music: f32, _sfx: f32) -> Result<(), AudioError> {
        Ok(())
    }
}
