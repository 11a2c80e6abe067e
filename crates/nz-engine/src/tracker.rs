//! Achievement and ending bookkeeping, and the end-of-run summary.

use nz_core::GameState;
use nz_core::story::RESTART_HINT;
use nz_core::{Achievement, Ending};
use tracing::info;

use crate::turn::Turn;

/// Unlock an achievement, announcing it only the first time.
pub(crate) fn unlock_achievement(turn: &mut Turn<'_>, achievement: Achievement) -> bool {
    if !turn.state.achievements.insert(achievement) {
        return false;
    }
    info!(achievement = achievement.name(), "achievement unlocked");
    turn.say_instant(&format!("🏅 Achievement unlocked: {achievement}"));
    true
}

/// Record an ending in the ledger. Returns `true` if it was new.
pub(crate) fn record_ending(turn: &mut Turn<'_>, ending: Ending) -> bool {
    let new = turn.state.endings.insert(ending);
    if new {
        info!(
            ending = ending.name(),
            terminal = ending.is_terminal(),
            "ending reached"
        );
    }
    new
}

/// End the run and print the summary.
pub(crate) fn finish_run(turn: &mut Turn<'_>) {
    turn.state.game_over.set();
    let mut lines = summary_lines(turn.state);
    let last = lines.pop();
    for line in &lines {
        turn.say(line);
    }
    if let Some(line) = last {
        turn.say_instant(&line);
    }
}

/// The end-of-run summary, one entry per line.
pub fn summary_lines(state: &GameState) -> Vec<String> {
    let mut lines = vec![String::new(), "Summary:".to_string()];

    if state.achievements.is_empty() {
        lines.push("No achievements earned this run.".to_string());
    } else {
        lines.push("Achievements earned this run:".to_string());
        lines.extend(state.achievements.iter().map(|a| format!("- {a}")));
    }

    if !state.endings.is_empty() {
        lines.push("Endings unlocked so far:".to_string());
        lines.extend(state.endings.iter().map(|e| format!("- {e}")));
    }

    lines.push(RESTART_HINT.to_string());
    lines
}
