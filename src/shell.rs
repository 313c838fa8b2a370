//! The boundary between the engine and whatever presents it to a user.
//!
//! The engine never reads input or prints. A [`Shell`] collects decisions and
//! renders notifications; [`Match::run`](crate::Match::run) drives it.

use core::str::FromStr;

use crate::card::Card;
use crate::error::{ParseContinueError, ParseDecisionError};
use crate::game::TableView;
use crate::participant::Role;
use crate::result::{RoundResult, SeriesScore};

/// The player's choice on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Stop drawing for this round.
    Stay,
}

impl FromStr for Decision {
    type Err = ParseDecisionError;

    /// Accepts "h", "hit", "s" or "stay" in any case, ignoring surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("stay") {
            Ok(Self::Stay)
        } else {
            Err(ParseDecisionError)
        }
    }
}

/// Parses a play-again answer.
///
/// # Errors
///
/// Returns [`ParseContinueError`] unless the input is "y", "yes", "n" or "no"
/// (any case).
///
/// # Example
///
/// ```
/// use twentyone::parse_continue;
///
/// assert_eq!(parse_continue("Y"), Ok(true));
/// assert_eq!(parse_continue(" no "), Ok(false));
/// assert!(parse_continue("maybe").is_err());
/// ```
pub fn parse_continue(input: &str) -> Result<bool, ParseContinueError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("n") || input.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(ParseContinueError)
    }
}

/// Presentation collaborator driven by [`Match::run`](crate::Match::run).
///
/// Request methods must only return once they hold a valid answer;
/// re-prompting on bad input is the shell's job.
pub trait Shell {
    /// Asks the player whether to hit or stay.
    fn request_player_decision(&mut self, table: &TableView<'_>) -> Decision;

    /// Asks whether to play another round.
    fn request_continue(&mut self) -> bool;

    /// Shows the table. Called after the deal, after each player hit that
    /// does not bust, and before each dealer decision.
    fn render_round_state(&mut self, table: &TableView<'_>);

    /// Announces that `role` drew `card`.
    fn render_hit(&mut self, _role: Role, _card: &Card) {}

    /// Shows the settled round.
    fn render_round_outcome(&mut self, result: &RoundResult);

    /// Shows the series score at the start of each iteration.
    fn render_series_score(&mut self, score: SeriesScore);

    /// Announces the series winner.
    fn render_series_winner(&mut self, winner: Role);
}
