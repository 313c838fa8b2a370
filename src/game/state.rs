//! Round state and the table view handed to shells.

use crate::card::Card;
use crate::result::SeriesScore;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// No round in progress. The next round can be started.
    Idle,
    /// Dealing the initial cards.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Play is over and the round can be settled with a showdown.
    Resolved,
}

/// What a shell may show of the table at a given moment.
///
/// While the player is still deciding, only the dealer's first card is
/// visible and the dealer total is withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Current round state.
    pub state: RoundState,
    /// Round number within the match, starting at 1.
    pub round: u32,
    /// The bust threshold in play.
    pub bust_threshold: u32,
    /// The player's cards.
    pub player_cards: &'a [Card],
    /// The player's total.
    pub player_total: u32,
    /// The dealer's visible cards.
    pub dealer_cards: &'a [Card],
    /// The dealer's total, `None` while the hole card is hidden.
    pub dealer_total: Option<u32>,
    /// Whether the dealer holds cards not included in `dealer_cards`.
    pub dealer_hole_hidden: bool,
    /// Series score so far.
    pub score: SeriesScore,
}
