//! Narrator and audio sinks for a real terminal.

use std::io::{self, Write};
use std::thread;

use colored::Colorize;
use nz_engine::{Audio, AudioCue, AudioError, LineStyle, Narrator, NarratorConfig};
use tracing::{debug, warn};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Colour a story line by what it announces.
pub fn paint(line: &str) -> String {
    if line.starts_with("> ") {
        line.cyan().to_string()
    } else if line.starts_with("🏅") {
        line.yellow().bold().to_string()
    } else if line.starts_with("Ending unlocked") {
        line.green().bold().to_string()
    } else if line.starts_with("Chapter ") {
        line.magenta().bold().to_string()
    } else {
        line.to_string()
    }
}

/// Writes story text to a terminal, typing out animated lines.
pub struct TerminalNarrator<W: Write> {
    out: W,
    config: NarratorConfig,
}

impl<W: Write> TerminalNarrator<W> {
    pub fn new(out: W, config: NarratorConfig) -> Self {
        Self { out, config }
    }

    fn write_line(&mut self, line: &str, style: LineStyle) -> io::Result<()> {
        let painted = paint(line);
        match (style, self.config.typing_delay()) {
            (LineStyle::Animated, Some(delay)) => {
                for ch in painted.chars() {
                    write!(self.out, "{ch}")?;
                    self.out.flush()?;
                    thread::sleep(delay);
                }
                writeln!(self.out)?;
            }
            _ => writeln!(self.out, "{painted}")?,
        }
        self.out.flush()
    }
}

impl<W: Write> Narrator for TerminalNarrator<W> {
    fn emit(&mut self, line: &str, style: LineStyle) {
        if let Err(e) = self.write_line(line, style) {
            warn!(error = %e, "failed to write story text");
        }
    }

    fn clear(&mut self) {
        let result = write!(self.out, "{CLEAR_SCREEN}").and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to clear the screen");
        }
    }
}

/// Rings the terminal bell when something unlocks.
pub struct TerminalAudio<W: Write> {
    out: W,
    bell: bool,
}

impl<W: Write> TerminalAudio<W> {
    pub fn new(out: W, bell: bool) -> Self {
        Self { out, bell }
    }
}

impl<W: Write> Audio for TerminalAudio<W> {
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), AudioError> {
        debug!(cue = cue.name(), bell = self.bell, "cue");
        if self.bell && cue == AudioCue::Unlock {
            write!(self.out, "\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn set_ambient_volume(&mut self, level: f32) -> Result<(), AudioError> {
        debug!(level, "ambient volume");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> NarratorConfig {
        NarratorConfig::new().with_instant(true)
    }

    #[test]
    fn writes_one_line_per_emit() {
        let mut narrator = TerminalNarrator::new(Vec::new(), instant());
        narrator.emit("first", LineStyle::Animated);
        narrator.emit("second", LineStyle::Instant);

        let text = String::from_utf8(narrator.out).unwrap();
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn typed_lines_end_up_complete() {
        let config = NarratorConfig::new().with_char_delay(std::time::Duration::from_micros(1));
        let mut narrator = TerminalNarrator::new(Vec::new(), config);
        narrator.emit("The train is moving.", LineStyle::Animated);

        let text = String::from_utf8(narrator.out).unwrap();
        assert_eq!(text, "The train is moving.\n");
    }

    #[test]
    fn clear_wipes_the_screen() {
        let mut narrator = TerminalNarrator::new(Vec::new(), instant());
        narrator.clear();
        assert_eq!(narrator.out, CLEAR_SCREEN.as_bytes());
    }

    #[test]
    fn bell_only_on_unlock() {
        let mut audio = TerminalAudio::new(Vec::new(), true);
        audio.play_cue(AudioCue::Click).unwrap();
        audio.play_cue(AudioCue::Unlock).unwrap();
        audio.set_ambient_volume(0.4).unwrap();
        assert_eq!(audio.out, b"\x07");

        let mut audio = TerminalAudio::new(Vec::new(), false);
        audio.play_cue(AudioCue::Unlock).unwrap();
        assert!(audio.out.is_empty());
    }

    #[test]
    fn plain_lines_are_not_painted() {
        assert_eq!(paint("You are alone."), "You are alone.");
    }
}
