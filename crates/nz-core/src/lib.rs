//! Story model for Nachtzug.
//!
//! Defines the chapters and scenes of the story, the items, clues,
//! achievements and endings a run can collect, and the [`GameState`]
//! record the engine mutates. Story text lives in [`story`] as plain
//! constants.

/// Items, clues, achievements, and endings.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Append-only ledgers and one-way latches.
pub mod ledger;
/// Chapters and scenes.
pub mod scene;
/// The per-run game state.
pub mod state;
/// Static story text and puzzle constants.
pub mod story;

/// Re-export catalog types.
pub use catalog::{Achievement, Clue, Ending, Item};
/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export ledger types.
pub use ledger::{Latch, Ledger};
/// Re-export chapter and scene types.
pub use scene::{Chapter, Scene};
/// Re-export state types.
pub use state::{CompartmentFlags, GameState, StationFlags};
