use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, RoundError};
use crate::participant::Role;

use super::{Match, RoundState};

impl Match {
    /// Starts a round with a freshly built and shuffled deck, dealing two
    /// cards each to the player and the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is already decided, a round is in
    /// progress, or the deck runs out while dealing.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        self.check_can_start()?;
        let deck = Deck::build(&mut self.rng);
        self.start_round_with_deck(deck)
    }

    /// Starts a round that deals from `deck` instead of a shuffled one.
    ///
    /// Cards are dealt alternately from the front: player, dealer, player,
    /// dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is already decided, a round is in
    /// progress, or `deck` runs out while dealing.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), RoundError> {
        self.check_can_start()?;

        self.round += 1;
        self.reset_hands();
        self.deck = Some(deck);
        self.set_state(RoundState::Dealing);

        for _ in 0..2 {
            self.draw_for(Role::Player)?;
            self.draw_for(Role::Dealer)?;
        }

        self.set_state(RoundState::PlayerTurn);
        Ok(())
    }

    fn check_can_start(&self) -> Result<(), RoundError> {
        if self.series_winner().is_some() {
            return Err(RoundError::SeriesOver);
        }
        if self.state != RoundState::Idle {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    /// Deals one card to the player.
    ///
    /// If the player busts, the dealer's turn is skipped and the round moves
    /// straight to [`RoundState::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or
    /// [`ActionError::DeckExhausted`] if the deck ran out, in which case the
    /// round has been aborted.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw_for(Role::Player)?;

        if self.player.is_bust(self.options.bust_threshold) {
            self.set_state(RoundState::Resolved);
        }

        Ok(card)
    }

    /// Ends the player's turn and hands over to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.set_state(RoundState::DealerTurn);
        Ok(())
    }
}
