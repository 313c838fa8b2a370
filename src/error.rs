//! Error types for game operations.

use thiserror::Error;

/// Errors in the match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The bust threshold must be greater than 20.
    #[error("bust threshold {threshold} is too low, it must be greater than 20")]
    ThresholdTooLow {
        /// The rejected threshold.
        threshold: u32,
    },
    /// The input is not a whole number.
    #[error("not a valid number")]
    InvalidNumber,
    /// The series target must be at least one round.
    #[error("series target must be at least 1")]
    ZeroSeriesTarget,
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out mid-round. The round has been aborted.
    #[error("the deck ran out, round aborted")]
    DeckExhausted,
}

/// Errors that can occur when starting or settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A participant already reached the series target.
    #[error("the series is already decided")]
    SeriesOver,
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// The deck ran out mid-round. The round has been aborted.
    #[error("the deck ran out, round aborted")]
    DeckExhausted,
}

impl From<ActionError> for RoundError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::InvalidState => Self::InvalidState,
            ActionError::DeckExhausted => Self::DeckExhausted,
        }
    }
}

/// Error returned when a hit/stay answer is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected \"h\", \"hit\", \"s\" or \"stay\"")]
pub struct ParseDecisionError;

/// Error returned when a play-again answer is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected \"y\", \"yes\", \"n\" or \"no\"")]
pub struct ParseContinueError;
