//! A single 52-card deck, built fresh and shuffled for every round.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered deck of cards. Cards are dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds all 52 distinct cards and shuffles them uniformly.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// Useful for replaying a known game. The cards are not checked for
    /// duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_cards([
    ///     Card::new(Suit::Hearts, Rank::Ace),
    ///     Card::new(Suit::Clubs, Rank::Two),
    /// ]);
    /// assert_eq!(deck.deal().unwrap().rank, Rank::Ace);
    /// assert_eq!(deck.len(), 1);
    /// ```
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if the deck is empty. A deck is never
    /// refilled; callers must build a new one.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::Exhausted)
    }

    /// Returns the remaining cards in dealing order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
