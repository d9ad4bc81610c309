//! Engine configuration.
//!
//! `EngineConfig` holds the pacing and scoring knobs of a session:
//! - How long a matched pair stays on screen before it resolves
//! - How long a mismatched pair stays face-up before flipping back
//! - The pause between the last match and the completion screen
//! - Points awarded per pair, and whether audio cues are emitted
//!
//! Delays are UX pacing, not correctness: a screen-reader user needs time to
//! hear both cards before they change.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay before a matched pair resolves.
pub const DEFAULT_MATCH_DELAY_MS: u64 = 1000;
/// Default delay before a mismatched pair flips back.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 2000;
/// Default pause between the final match and completion.
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 1000;
/// Default points per matched pair.
pub const DEFAULT_POINTS_PER_MATCH: u32 = 10;

/// Pacing and scoring configuration.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_pairs::core::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_mismatch_delay(Duration::from_millis(3000))
///     .muted();
///
/// assert_eq!(config.mismatch_delay(), Duration::from_millis(3000));
/// assert!(!config.sound_enabled);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Milliseconds before a matched pair is marked matched.
    pub match_delay_ms: u64,

    /// Milliseconds before a mismatched pair flips back.
    pub mismatch_delay_ms: u64,

    /// Milliseconds between the final match and the completion phase.
    pub completion_delay_ms: u64,

    /// Score awarded for each matched pair.
    pub points_per_match: u32,

    /// Whether announcements carry audio cues.
    pub sound_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_delay_ms: DEFAULT_MATCH_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
            points_per_match: DEFAULT_POINTS_PER_MATCH,
            sound_enabled: true,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default pacing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every delay set to zero.
    ///
    /// Pending resolutions still exist, but fire on the next `advance`.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            match_delay_ms: 0,
            mismatch_delay_ms: 0,
            completion_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Set the match resolution delay.
    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay_ms = duration_to_ms(delay);
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = duration_to_ms(delay);
        self
    }

    /// Set the completion delay.
    #[must_use]
    pub fn with_completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay_ms = duration_to_ms(delay);
        self
    }

    /// Set the points awarded per pair.
    #[must_use]
    pub fn with_points_per_match(mut self, points: u32) -> Self {
        self.points_per_match = points;
        self
    }

    /// Disable audio cues.
    #[must_use]
    pub fn muted(mut self) -> Self {
        self.sound_enabled = false;
        self
    }

    /// Delay before a matched pair resolves.
    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Delay before a mismatched pair flips back.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Delay between the final match and completion.
    #[must_use]
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }
}

fn duration_to_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.match_delay(), Duration::from_millis(1000));
        assert_eq!(config.mismatch_delay(), Duration::from_millis(2000));
        assert_eq!(config.completion_delay(), Duration::from_millis(1000));
        assert_eq!(config.points_per_match, 10);
        assert!(config.sound_enabled);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_match_delay(Duration::from_millis(250))
            .with_completion_delay(Duration::from_secs(2))
            .with_points_per_match(5)
            .muted();

        assert_eq!(config.match_delay_ms, 250);
        assert_eq!(config.completion_delay_ms, 2000);
        assert_eq!(config.points_per_match, 5);
        assert!(!config.sound_enabled);
    }

    #[test]
    fn test_instant_keeps_scoring() {
        let config = EngineConfig::instant();
        assert_eq!(config.match_delay(), Duration::ZERO);
        assert_eq!(config.mismatch_delay(), Duration::ZERO);
        assert_eq!(config.points_per_match, DEFAULT_POINTS_PER_MATCH);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "mismatch_delay_ms": 3500 }"#).unwrap();
        assert_eq!(config.mismatch_delay_ms, 3500);
        assert_eq!(config.match_delay_ms, DEFAULT_MATCH_DELAY_MS);
        assert!(config.sound_enabled);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().muted();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
