//! Configuration for a story session.

use crate::audio::AMBIENT_START;
use crate::narrator::NarratorConfig;

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// How the narrator should reveal text.
    pub narrator: NarratorConfig,
    /// Suppress all audio notifications.
    pub muted: bool,
    /// Background volume when a run starts (0.0 to 1.0).
    pub ambient_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            narrator: NarratorConfig::default(),
            muted: false,
            ambient_volume: AMBIENT_START,
        }
    }
}

impl GameConfig {
    /// Set the narrator configuration.
    pub fn with_narrator(mut self, narrator: NarratorConfig) -> Self {
        self.narrator = narrator;
        self
    }

    /// Mute or unmute audio.
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Set the starting background volume (clamped to 0.0-1.0).
    pub fn with_ambient_volume(mut self, level: f32) -> Self {
        self.ambient_volume = level.clamp(0.0, 1.0);
        self
    }
}
