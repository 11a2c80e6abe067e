//! Interactive play on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use colored::Colorize;
use nz_engine::{GameConfig, NarratorConfig, Session};
use tracing::{debug, error};

use crate::terminal::{TerminalAudio, TerminalNarrator};

/// Words that leave the loop instead of reaching the story.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

pub fn run(instant: bool, delay_ms: u64, mute: bool, volume: f32) -> Result<(), String> {
    let narrator_config = NarratorConfig::new()
        .with_instant(instant)
        .with_char_delay(Duration::from_millis(delay_ms));
    let config = GameConfig::default()
        .with_narrator(narrator_config)
        .with_muted(mute)
        .with_ambient_volume(volume);

    let narrator = TerminalNarrator::new(io::stdout(), config.narrator);
    let audio = TerminalAudio::new(io::stdout(), !mute);
    let mut session = Session::with_config(narrator, audio, config);
    let config = session.config();
    debug!(
        muted = config.muted,
        volume = config.ambient_volume,
        instant = config.narrator.instant,
        "session configured"
    );

    session.start();
    println!("  {}\n", "Type 'quit' to leave the train.".dimmed());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{} ", "»".bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if QUIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w)) {
            break;
        }

        if let Err(e) = session.process(input) {
            error!(error = %e, input, "command failed");
            println!("{}\n", e.to_string().yellow());
        }
    }

    Ok(())
}
