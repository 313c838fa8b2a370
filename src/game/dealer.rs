extern crate alloc;

use alloc::vec::Vec;

use log::info;

use crate::card::Card;
use crate::error::{ActionError, RoundError};
use crate::participant::Role;
use crate::result::{HandSummary, RoundOutcome, RoundResult, resolve_outcome};

use super::{Match, RoundState};

impl Match {
    /// Takes one dealer decision.
    ///
    /// The dealer stays once its total reaches the bust threshold and hits
    /// otherwise. Returns the card drawn, or `None` once the dealer has
    /// stayed or busted, at which point the round is
    /// [`RoundState::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or
    /// [`ActionError::DeckExhausted`] if the deck ran out, in which case the
    /// round has been aborted.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let threshold = self.options.bust_threshold;

        if self.player.is_bust(threshold)
            || self.dealer.stays(threshold)
            || self.dealer.is_bust(threshold)
        {
            self.set_state(RoundState::Resolved);
            return Ok(None);
        }

        let card = self.draw_for(Role::Dealer)?;

        if self.dealer.is_bust(threshold) {
            self.set_state(RoundState::Resolved);
        }

        Ok(Some(card))
    }

    /// Dealer plays their hand out under the fixed policy.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or
    /// [`ActionError::DeckExhausted`] if the deck ran out.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.state == RoundState::DealerTurn {
            if let Some(card) = self.dealer_step()? {
                drawn_cards.push(card);
            }
        }

        Ok(drawn_cards)
    }

    /// Settles a resolved round.
    ///
    /// Awards the round to the winner, discards the deck, and returns the
    /// match to [`RoundState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the resolved state.
    pub fn showdown(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != RoundState::Resolved {
            return Err(RoundError::InvalidState);
        }

        let threshold = self.options.bust_threshold;
        let player = HandSummary {
            total: self.player.total(threshold),
            bust: self.player.is_bust(threshold),
        };
        let dealer = HandSummary {
            total: self.dealer.total(threshold),
            bust: self.dealer.is_bust(threshold),
        };

        let outcome = resolve_outcome(player, dealer);
        match outcome {
            RoundOutcome::PlayerWins => self.player.award_round(),
            RoundOutcome::DealerWins => self.dealer.award_round(),
            RoundOutcome::Tie => {}
        }

        let score = self.scores();
        info!(
            "round {}: {:?} (player {}, dealer {}), series {}-{}",
            self.round, outcome, player.total, dealer.total, score.player, score.dealer
        );

        self.deck = None;
        self.set_state(RoundState::Idle);

        Ok(RoundResult {
            round: self.round,
            outcome,
            player_cards: self.player.hand().cards().to_vec(),
            dealer_cards: self.dealer.hand().cards().to_vec(),
            player,
            dealer,
            score,
        })
    }
}
