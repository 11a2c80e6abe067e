//! Per-command context handed to chapter handlers.

use nz_core::{Clue, GameState, Scene};
use tracing::{debug, trace};

use crate::audio::{Audio, AudioCue};
use crate::error::EngineResult;
use crate::narrator::{LineStyle, Narrator};

/// Mutable context passed to each handler while one command runs.
pub(crate) struct Turn<'a> {
    pub state: &'a mut GameState,
    narrator: &'a mut dyn Narrator,
    audio: Option<&'a mut dyn Audio>,
}

impl<'a> Turn<'a> {
    /// `audio` is `None` when sound is muted.
    pub fn new(
        state: &'a mut GameState,
        narrator: &'a mut dyn Narrator,
        audio: Option<&'a mut dyn Audio>,
    ) -> Self {
        Self {
            state,
            narrator,
            audio,
        }
    }

    pub fn say(&mut self, line: &str) {
        self.narrator.emit(line, LineStyle::Animated);
    }

    pub fn say_all(&mut self, lines: &[&str]) {
        for line in lines {
            self.say(line);
        }
    }

    pub fn say_instant(&mut self, line: &str) {
        self.narrator.emit(line, LineStyle::Instant);
    }

    pub fn clear_screen(&mut self) {
        self.narrator.clear();
    }

    /// Play a cue; failures are logged and dropped.
    pub fn cue(&mut self, cue: AudioCue) {
        if let Some(audio) = self.audio.as_deref_mut() {
            debug!(cue = cue.name(), "audio cue");
            if let Err(e) = audio.play_cue(cue) {
                debug!(cue = cue.name(), error = %e, "audio cue failed");
            }
        }
    }

    /// Change the background volume; failures are logged and dropped.
    pub fn ambient(&mut self, level: f32) {
        if let Some(audio) = self.audio.as_deref_mut() {
            debug!(level, "ambient volume");
            if let Err(e) = audio.set_ambient_volume(level) {
                debug!(level, error = %e, "ambient volume change failed");
            }
        }
    }

    /// Record a clue. Returns `true` if it was new.
    pub fn record_clue(&mut self, clue: Clue) -> bool {
        let new = self.state.clues.insert(clue);
        if new {
            trace!(clue = clue.text(), "clue recorded");
        }
        new
    }

    pub fn move_to(&mut self, scene: Scene) -> EngineResult<()> {
        self.state.move_to(scene)?;
        Ok(())
    }
}
