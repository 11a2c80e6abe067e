//! The mutable record of a single run.

use serde::Serialize;
use tracing::trace;

use crate::catalog::{Achievement, Clue, Ending, Item};
use crate::error::{StoryError, StoryResult};
use crate::ledger::{Latch, Ledger};
use crate::scene::{Chapter, Scene};

/// Progress flags for the compartment chapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompartmentFlags {
    /// The phone has been picked up.
    pub phone_taken: Latch,
    /// The coded phone message has been read.
    pub saw_encoded_message: Latch,
    /// The coded message has been solved.
    pub decoded_message: Latch,
    /// The compartment door has been opened.
    pub door_unlocked: Latch,
}

/// Progress flags for the station chapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StationFlags {
    /// The frozen clock ticked once.
    pub clock_awakened: Latch,
    /// The poster's symbols settled into a phrase.
    pub symbols_stabilized: Latch,
    /// The map board became legible.
    pub map_revealed: Latch,
    /// The ticket machine woke up.
    pub machine_awake: Latch,
    /// The ticket has been taken from the machine.
    pub ticket_taken: Latch,
    /// The gate accepted the ticket.
    pub gate_opened: Latch,
}

/// Everything that changes while a story is played.
///
/// Ledgers and latches can only grow, and the chapter and scene are
/// only changed through [`GameState::enter_chapter`] and
/// [`GameState::move_to`], which keep the scene inside the chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    chapter: Chapter,
    scene: Scene,
    /// Carried items, in pickup order.
    pub inventory: Ledger<Item>,
    /// Discovered clues, in discovery order.
    pub clues: Ledger<Clue>,
    /// Unlocked achievements.
    pub achievements: Ledger<Achievement>,
    /// Reached endings, terminal or not.
    pub endings: Ledger<Ending>,
    /// Chapter 1 progress.
    pub compartment: CompartmentFlags,
    /// Chapter 2 progress.
    pub station: StationFlags,
    /// Set once a terminal ending has been reached.
    pub game_over: Latch,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh run, standing in the middle of the compartment.
    pub fn new() -> Self {
        let chapter = Chapter::Compartment;
        Self {
            chapter,
            scene: chapter.entry_scene(),
            inventory: Ledger::new(),
            clues: Ledger::new(),
            achievements: Ledger::new(),
            endings: Ledger::new(),
            compartment: CompartmentFlags::default(),
            station: StationFlags::default(),
            game_over: Latch::default(),
        }
    }

    /// The chapter being played.
    pub fn chapter(&self) -> Chapter {
        self.chapter
    }

    /// Where the player currently stands.
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Whether the run has ended.
    pub fn is_over(&self) -> bool {
        self.game_over.is_set()
    }

    /// Whether the player carries `item`.
    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Whether `clue` has been recorded.
    pub fn has_clue(&self, clue: Clue) -> bool {
        self.clues.contains(&clue)
    }

    /// Move to another scene of the current chapter.
    pub fn move_to(&mut self, scene: Scene) -> StoryResult<()> {
        if scene.chapter() != self.chapter {
            return Err(StoryError::SceneOutsideChapter {
                scene,
                chapter: self.chapter,
            });
        }
        trace!(from = %self.scene, to = %scene, "scene change");
        self.scene = scene;
        Ok(())
    }

    /// Advance to a later chapter and stand at its entry scene.
    ///
    /// Re-entering the current chapter also resets the scene to its entry.
    pub fn enter_chapter(&mut self, chapter: Chapter) -> StoryResult<()> {
        if chapter < self.chapter {
            return Err(StoryError::ChapterRegression {
                from: self.chapter,
                to: chapter,
            });
        }
        self.chapter = chapter;
        self.scene = chapter.entry_scene();
        Ok(())
    }
}
