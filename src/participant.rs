//! The player and the dealer.

use core::fmt;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player. Decisions come from the shell.
    Player,
    /// The automated dealer. Decisions follow [`dealer_stays`].
    Dealer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        })
    }
}

/// Returns whether the dealer stops drawing with `hand`.
///
/// The dealer stays once its total reaches the bust threshold.
#[must_use]
pub fn dealer_stays(hand: &Hand, bust_threshold: u32) -> bool {
    hand.total(bust_threshold) >= bust_threshold
}

/// One side of the table: a hand for the current round and a series score
/// that persists across rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    hand: Hand,
    score: u32,
}

impl Participant {
    /// Creates a participant with an empty hand and zero score.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Creates the player.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(Role::Player)
    }

    /// Creates the dealer.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Role::Dealer)
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the number of rounds won in the current match.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Deals one card from `deck` into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, DealError> {
        let card = deck.deal()?;
        debug!("{} receives {card}", self.role);
        self.hand.add_card(card);
        Ok(card)
    }

    /// Calculates the hand total.
    #[must_use]
    pub fn total(&self, bust_threshold: u32) -> u32 {
        self.hand.total(bust_threshold)
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub fn is_bust(&self, bust_threshold: u32) -> bool {
        self.hand.is_bust(bust_threshold)
    }

    /// Returns whether this participant stops drawing under the dealer policy.
    #[must_use]
    pub fn stays(&self, bust_threshold: u32) -> bool {
        dealer_stays(&self.hand, bust_threshold)
    }

    /// Empties the hand. The score is kept.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    pub(crate) const fn award_round(&mut self) {
        self.score += 1;
    }
}
