//! Fire-and-forget audio notifications.

use crate::error::AudioError;

/// Ambient volume when a run starts.
pub const AMBIENT_START: f32 = 0.4;
/// Ambient volume after the compartment door opens.
pub const AMBIENT_ESCAPE: f32 = 0.15;
/// Ambient volume after the call to the unknown sender.
pub const AMBIENT_OFF_THE_MAP: f32 = 0.1;
/// Ambient volume after passing the station gate.
pub const AMBIENT_WALKTHROUGH: f32 = 0.12;

/// A short sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// A command was submitted.
    Click,
    /// Something unlocked.
    Unlock,
}

impl AudioCue {
    /// Stable name of the cue.
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Unlock => "unlock",
        }
    }
}

/// A sink for sound effects and background volume changes.
///
/// Errors are reported to the engine, which discards them.
pub trait Audio {
    /// Play a cue without waiting for it to finish.
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), AudioError>;

    /// Change the background music volume (0.0 to 1.0).
    fn set_ambient_volume(&mut self, level: f32) -> Result<(), AudioError>;
}

/// An audio sink that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl Audio for SilentAudio {
    fn play_cue(&mut self, _cue: AudioCue) -> Result<(), AudioError> {
        Ok(())
    }

    fn set_ambient_volume(&mut self, _level: f32) -> Result<(), AudioError> {
        Ok(())
    }
}
