//! Story engine for Nachtzug.
//!
//! Turns raw player input into story progress: a verb-table command
//! parser, per-chapter handlers gated by pure puzzle checks, an
//! achievement and ending tracker, and a [`Session`] that ties them to a
//! [`Narrator`] and an [`Audio`] sink supplied by the caller.

/// Audio notification contract.
pub mod audio;
/// Session configuration.
pub mod config;
/// Error types for the story engine.
pub mod error;
/// Puzzle prerequisites.
pub mod gates;
/// Narrator contract and the in-memory transcript.
pub mod narrator;
/// Command parsing.
pub mod parser;
/// Story session management.
pub mod session;
/// Achievement and ending bookkeeping.
pub mod tracker;

mod chapters;
mod turn;

pub use audio::{Audio, AudioCue, SilentAudio};
pub use config::GameConfig;
pub use error::{AudioError, EngineError, EngineResult};
pub use narrator::{LineStyle, NarratedLine, Narrator, NarratorConfig, Transcript};
pub use parser::{Command, EasterEgg, parse_command};
pub use session::Session;
pub use tracker::summary_lines;
