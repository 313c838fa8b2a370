//! Hands and the hand-total rule.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Distance from the bust threshold at which one Ace drops from 11 to 1.
pub const SOFT_ACE_MARGIN: u32 = 4;

/// Computes the total of `cards` for a game played to `bust_threshold`.
///
/// Every card counts its face value, Aces 11. If the hand holds an Ace and
/// the raw sum exceeds `bust_threshold - 4`, 10 is subtracted once. Only a
/// single Ace is ever counted as 1, however many the hand holds, and the
/// reduction applies before the hand has actually busted.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Rank, Suit};
/// use twentyone::hand::evaluate_cards;
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::King),
/// ];
/// // 21 > 17, so the Ace counts as 1.
/// assert_eq!(evaluate_cards(&cards, 21), 11);
/// ```
#[must_use]
pub fn evaluate_cards(cards: &[Card], bust_threshold: u32) -> u32 {
    let raw: u32 = cards.iter().map(Card::value).sum();
    let has_ace = cards.iter().any(Card::is_ace);

    if has_ace && raw > bust_threshold.saturating_sub(SOFT_ACE_MARGIN) {
        raw - 10
    } else {
        raw
    }
}

/// The cards held by one participant during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the one the dealer shows face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the total of the hand. See [`evaluate_cards`].
    #[must_use]
    pub fn total(&self, bust_threshold: u32) -> u32 {
        evaluate_cards(&self.cards, bust_threshold)
    }

    /// Returns whether the total exceeds the bust threshold.
    #[must_use]
    pub fn is_bust(&self, bust_threshold: u32) -> bool {
        self.total(bust_threshold) > bust_threshold
    }

    /// Returns whether the hand holds at least one Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
