//! Replay a script of commands.

use std::fs;
use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use nz_core::{GameState, Scene};
use nz_engine::{GameConfig, NarratorConfig, Session, SilentAudio, Transcript};
use tracing::info;

use crate::terminal::paint;

/// The commands in a script: one per line, blank lines and `#` comments skipped.
pub fn script_commands(source: &str) -> Vec<(usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

pub fn run(
    script: &Path,
    state_json: bool,
    report: bool,
    expect_scene: Option<&str>,
) -> Result<(), String> {
    let source = fs::read_to_string(script)
        .map_err(|e| format!("failed to read {}: {e}", script.display()))?;
    let expected = expect_scene
        .map(Scene::parse)
        .transpose()
        .map_err(|e| e.to_string())?;

    let config = GameConfig::default()
        .with_narrator(NarratorConfig::new().with_instant(true))
        .with_muted(true);
    let mut session = Session::with_config(Transcript::new(), SilentAudio, config);

    session.start();
    let commands = script_commands(&source);
    info!(script = %script.display(), commands = commands.len(), "replaying script");

    for (line_no, command) in commands {
        session
            .process(command)
            .map_err(|e| format!("line {line_no}: {e}"))?;
    }

    let (state, transcript, _) = session.into_parts();
    for line in transcript.lines() {
        println!("{}", paint(&line.text));
    }

    if report {
        println!();
        println!("{}", report_table(&state));
    }

    if state_json {
        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| format!("failed to serialize state: {e}"))?;
        println!("{json}");
    }

    if let Some(expected) = expected {
        check_scene(&state, expected)?;
    }

    Ok(())
}

/// Fail unless the run ended in `expected`.
fn check_scene(state: &GameState, expected: Scene) -> Result<(), String> {
    if state.scene() == expected {
        Ok(())
    } else {
        Err(format!(
            "expected to end at {expected}, but the run ended at {}",
            state.scene()
        ))
    }
}

fn join<T: ToString>(entries: impl IntoIterator<Item = T>) -> String {
    let joined: Vec<String> = entries.into_iter().map(|e| e.to_string()).collect();
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined.join("\n")
    }
}

fn report_table(state: &GameState) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ledger", "Entries"]);

    table.add_row(vec![
        "Chapter".to_string(),
        format!("{} ({})", state.chapter(), state.scene()),
    ]);
    table.add_row(vec!["Inventory".to_string(), join(&state.inventory)]);
    table.add_row(vec![
        "Clues".to_string(),
        join(state.clues.iter().map(|c| c.text())),
    ]);
    table.add_row(vec!["Achievements".to_string(), join(&state.achievements)]);
    table.add_row(vec!["Endings".to_string(), join(&state.endings)]);
    table.add_row(vec![
        "Finished".to_string(),
        if state.is_over() { "yes" } else { "no" }.to_string(),
    ]);
    table
}
