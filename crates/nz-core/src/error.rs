//! Errors for story state transitions.

use crate::scene::{Chapter, Scene};

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors raised when a state transition would break a story invariant.
///
/// Player input never produces these; they guard against handler bugs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryError {
    /// A scene was requested that belongs to a different chapter.
    #[error("scene \"{scene}\" is not part of chapter {chapter}")]
    SceneOutsideChapter {
        /// The rejected scene.
        scene: Scene,
        /// The chapter currently being played.
        chapter: Chapter,
    },

    /// A transition tried to move the story back to an earlier chapter.
    #[error("cannot return from chapter {from} to chapter {to}")]
    ChapterRegression {
        /// The chapter currently being played.
        from: Chapter,
        /// The requested chapter.
        to: Chapter,
    },

    /// A scene key did not name any known scene.
    #[error("unknown scene: \"{0}\"")]
    UnknownScene(String),
}
