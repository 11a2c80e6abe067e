//! Narrator configuration.

use std::time::Duration;

/// Typing speed of the complete game: one character every 15 ms.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(15);

/// Configuration for narrators that reveal text over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Pause between characters of an animated line.
    pub char_delay: Duration,
    /// Show every line at once, ignoring the delay.
    pub instant: bool,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            char_delay: DEFAULT_CHAR_DELAY,
            instant: false,
        }
    }
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pause between characters.
    pub fn with_char_delay(mut self, delay: Duration) -> Self {
        self.char_delay = delay;
        self
    }

    /// Turn animation off or on.
    pub fn with_instant(mut self, instant: bool) -> Self {
        self.instant = instant;
        self
    }

    /// The delay to apply to animated lines, if any.
    pub fn typing_delay(&self) -> Option<Duration> {
        if self.instant || self.char_delay.is_zero() {
            None
        } else {
            Some(self.char_delay)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NarratorConfig::new();
        assert_eq!(config.char_delay, Duration::from_millis(15));
        assert!(!config.instant);
        assert_eq!(config.typing_delay(), Some(DEFAULT_CHAR_DELAY));
    }

    #[test]
    fn builder_pattern() {
        let config = NarratorConfig::new()
            .with_char_delay(Duration::from_millis(40))
            .with_instant(true);
        assert_eq!(config.char_delay, Duration::from_millis(40));
        assert_eq!(config.typing_delay(), None);
    }

    #[test]
    fn zero_delay_means_no_animation() {
        let config = NarratorConfig::new().with_char_delay(Duration::ZERO);
        assert_eq!(config.typing_delay(), None);
    }
}
