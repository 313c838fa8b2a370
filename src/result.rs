//! Round and series result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::participant::Role;

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Equal totals, nobody scores.
    Tie,
}

impl RoundOutcome {
    /// Returns the side that scores the round, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::PlayerWins => Some(Role::Player),
            Self::DealerWins => Some(Role::Dealer),
            Self::Tie => None,
        }
    }
}

/// The final state of one hand, as needed to settle a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSummary {
    /// The hand total.
    pub total: u32,
    /// Whether the hand busted.
    pub bust: bool,
}

/// Decides a round from the two final hands.
///
/// A player bust loses regardless of the dealer's hand; otherwise a dealer
/// bust loses, and otherwise the higher total wins.
///
/// # Example
///
/// ```
/// use twentyone::{HandSummary, RoundOutcome, resolve_outcome};
///
/// let player = HandSummary { total: 24, bust: true };
/// let dealer = HandSummary { total: 25, bust: true };
/// assert_eq!(resolve_outcome(player, dealer), RoundOutcome::DealerWins);
/// ```
#[must_use]
pub const fn resolve_outcome(player: HandSummary, dealer: HandSummary) -> RoundOutcome {
    if player.bust {
        RoundOutcome::DealerWins
    } else if dealer.bust || player.total > dealer.total {
        RoundOutcome::PlayerWins
    } else if dealer.total > player.total {
        RoundOutcome::DealerWins
    } else {
        RoundOutcome::Tie
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number within the match, starting at 1.
    pub round: u32,
    /// Who took the round.
    pub outcome: RoundOutcome,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The player's final hand.
    pub player: HandSummary,
    /// The dealer's final hand.
    pub dealer: HandSummary,
    /// Series score after this round.
    pub score: SeriesScore,
}

/// Round wins for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesScore {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the dealer.
    pub dealer: u32,
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    /// A side reached the series target.
    Winner(Role),
    /// The shell declined another round before the series was decided.
    Quit,
}
