//! Match configuration options.

use crate::error::ConfigError;

/// Smallest accepted bust threshold.
pub const MIN_BUST_THRESHOLD: u32 = 21;

/// Round wins needed to take the series.
pub const SERIES_TARGET: u32 = 5;

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default().with_bust_threshold(31);
/// assert_eq!(options.bust_threshold, 31);
/// assert_eq!(options.series_target, 5);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Totals above this value bust. Must be greater than 20.
    pub bust_threshold: u32,
    /// Round wins needed to win the series.
    pub series_target: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            bust_threshold: MIN_BUST_THRESHOLD,
            series_target: SERIES_TARGET,
        }
    }
}

impl GameOptions {
    /// Sets the bust threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_bust_threshold(25);
    /// assert_eq!(options.bust_threshold, 25);
    /// ```
    #[must_use]
    pub const fn with_bust_threshold(mut self, threshold: u32) -> Self {
        self.bust_threshold = threshold;
        self
    }

    /// Sets the number of round wins needed to win the series.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_series_target(3);
    /// assert_eq!(options.series_target, 3);
    /// ```
    #[must_use]
    pub const fn with_series_target(mut self, target: u32) -> Self {
        self.series_target = target;
        self
    }

    /// Checks that the options describe a playable match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThresholdTooLow`] if the bust threshold is 20 or
    /// less, or [`ConfigError::ZeroSeriesTarget`] if the series target is 0.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.bust_threshold < MIN_BUST_THRESHOLD {
            return Err(ConfigError::ThresholdTooLow {
                threshold: self.bust_threshold,
            });
        }
        if self.series_target == 0 {
            return Err(ConfigError::ZeroSeriesTarget);
        }
        Ok(())
    }

    /// Parses a bust threshold typed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] if the input is not a whole
    /// number, or [`ConfigError::ThresholdTooLow`] if it is 20 or less.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{ConfigError, GameOptions};
    ///
    /// assert_eq!(GameOptions::parse_bust_threshold(" 30\n"), Ok(30));
    /// assert_eq!(
    ///     GameOptions::parse_bust_threshold("20"),
    ///     Err(ConfigError::ThresholdTooLow { threshold: 20 })
    /// );
    /// assert_eq!(
    ///     GameOptions::parse_bust_threshold("many"),
    ///     Err(ConfigError::InvalidNumber)
    /// );
    /// ```
    pub fn parse_bust_threshold(input: &str) -> Result<u32, ConfigError> {
        let threshold: u32 = input
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber)?;
        if threshold < MIN_BUST_THRESHOLD {
            return Err(ConfigError::ThresholdTooLow { threshold });
        }
        Ok(threshold)
    }
}
