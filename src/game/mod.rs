//! Match engine and round state management.

use log::{debug, error};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, ConfigError, DealError};
use crate::options::GameOptions;
use crate::participant::{Participant, Role};
use crate::result::SeriesScore;

mod dealer;
mod round;
mod series;
pub mod state;

pub use state::{RoundState, TableView};

/// A best-of series between the player and the dealer.
///
/// The match owns both participants, the options, and the random number
/// generator that shuffles a fresh [`Deck`] for every round. Rounds can be
/// driven one step at a time ([`start_round`](Self::start_round),
/// [`hit`](Self::hit), [`stay`](Self::stay),
/// [`dealer_play`](Self::dealer_play), [`showdown`](Self::showdown)) or end
/// to end through a [`Shell`](crate::Shell) with [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct Match {
    options: GameOptions,
    player: Participant,
    dealer: Participant,
    /// Deck for the round in progress. Dropped when the round ends.
    deck: Option<Deck>,
    state: RoundState,
    round: u32,
    rng: ChaCha8Rng,
}

impl Match {
    /// Creates a new match with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{GameOptions, Match, RoundState};
    ///
    /// let game = Match::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), RoundState::Idle);
    /// assert!(Match::new(GameOptions::default().with_bust_threshold(20), 42).is_err());
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        Ok(Self {
            options,
            player: Participant::player(),
            dealer: Participant::dealer(),
            deck: None,
            state: RoundState::Idle,
            round: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the bust threshold.
    #[must_use]
    pub const fn bust_threshold(&self) -> u32 {
        self.options.bust_threshold
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the number of cards left in the current round's deck, or 0
    /// when no round is in progress.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.as_ref().map_or(0, Deck::len)
    }

    /// Returns the series score.
    #[must_use]
    pub const fn scores(&self) -> SeriesScore {
        SeriesScore {
            player: self.player.score(),
            dealer: self.dealer.score(),
        }
    }

    /// Returns the side that has reached the series target, if any.
    #[must_use]
    pub const fn series_winner(&self) -> Option<Role> {
        if self.player.score() >= self.options.series_target {
            Some(Role::Player)
        } else if self.dealer.score() >= self.options.series_target {
            Some(Role::Dealer)
        } else {
            None
        }
    }

    /// Returns what a shell may show of the table right now.
    #[must_use]
    pub fn table(&self) -> TableView<'_> {
        let threshold = self.options.bust_threshold;
        let dealer_cards = self.dealer.hand().cards();
        let hide_hole = self.state == RoundState::PlayerTurn && dealer_cards.len() > 1;

        TableView {
            state: self.state,
            round: self.round,
            bust_threshold: threshold,
            player_cards: self.player.hand().cards(),
            player_total: self.player.total(threshold),
            dealer_cards: if hide_hole {
                &dealer_cards[..1]
            } else {
                dealer_cards
            },
            dealer_total: (!hide_hole).then(|| self.dealer.total(threshold)),
            dealer_hole_hidden: hide_hole,
            score: self.scores(),
        }
    }

    /// Deals the next card of the round's deck to `role`. Aborts the round if
    /// the deck is empty.
    fn draw_for(&mut self, role: Role) -> Result<Card, ActionError> {
        let deck = self.deck.as_mut().ok_or(ActionError::InvalidState)?;
        let participant = match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        };

        match participant.hit(deck) {
            Ok(card) => Ok(card),
            Err(DealError::Exhausted) => {
                self.abort_round();
                Err(ActionError::DeckExhausted)
            }
        }
    }

    /// Empties both hands between rounds.
    fn reset_hands(&mut self) {
        self.player.reset_hand();
        self.dealer.reset_hand();
    }

    fn set_state(&mut self, state: RoundState) {
        debug!("round {}: {:?} -> {:?}", self.round, self.state, state);
        self.state = state;
    }

    /// Abandons the round in progress after the deck ran out. No score
    /// changes.
    fn abort_round(&mut self) {
        error!(
            "round {} aborted: deck exhausted in {:?}",
            self.round, self.state
        );
        self.deck = None;
        self.state = RoundState::Idle;
    }
}
