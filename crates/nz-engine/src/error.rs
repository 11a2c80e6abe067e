//! Error types for the story engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can escape a command.
///
/// Player mistakes are narrated, not returned; an `Err` here means a
/// handler tried to break a story invariant.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A state transition was rejected by the story model.
    #[error("story invariant violated: {0}")]
    Story(#[from] nz_core::StoryError),
}

/// Failures reported by an audio sink.
///
/// The engine logs and discards these.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No output device is available.
    #[error("audio output unavailable: {0}")]
    Unavailable(String),

    /// Writing to the output failed.
    #[error("audio output failed: {0}")]
    Io(#[from] std::io::Error),
}
