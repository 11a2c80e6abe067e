//! The narrator contract and an in-memory transcript.

mod config;

pub use config::{DEFAULT_CHAR_DELAY, NarratorConfig};

/// How a line should be revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// The line may be typed out gradually.
    #[default]
    Animated,
    /// The line appears at once.
    Instant,
}

/// Receives story text in order.
///
/// Implementations may animate `Animated` lines but must keep line order
/// and eventually show every line in full. The engine never waits on them.
pub trait Narrator {
    /// Append one line of output.
    fn emit(&mut self, line: &str, style: LineStyle);

    /// Wipe the visible text, e.g. between chapters.
    fn clear(&mut self) {}
}

/// A line captured by a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarratedLine {
    /// The text of the line.
    pub text: String,
    /// How it was requested to appear.
    pub style: LineStyle,
}

/// A narrator that records every line in memory.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<NarratedLine>,
    clears: usize,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line emitted so far.
    pub fn lines(&self) -> &[NarratedLine] {
        &self.lines
    }

    /// The text of every line emitted so far.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }

    /// How many lines contain `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.text.contains(needle)).count()
    }

    /// How many times the narrator was asked to clear the screen.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Remove and return all recorded lines.
    pub fn take(&mut self) -> Vec<NarratedLine> {
        std::mem::take(&mut self.lines)
    }
}

impl Narrator for Transcript {
    fn emit(&mut self, line: &str, style: LineStyle) {
        self.lines.push(NarratedLine {
            text: line.to_string(),
            style,
        });
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
