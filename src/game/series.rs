use log::info;

use crate::error::RoundError;
use crate::participant::Role;
use crate::result::{MatchEnd, RoundResult};
use crate::shell::{Decision, Shell};

use super::{Match, RoundState};

impl Match {
    /// Plays one round end to end, asking `shell` for the player's decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be started or the deck runs out.
    pub fn play_round<S: Shell + ?Sized>(
        &mut self,
        shell: &mut S,
    ) -> Result<RoundResult, RoundError> {
        self.start_round()?;
        shell.render_round_state(&self.table());

        while self.state == RoundState::PlayerTurn {
            match shell.request_player_decision(&self.table()) {
                Decision::Stay => self.stay()?,
                Decision::Hit => {
                    let card = self.hit()?;
                    shell.render_hit(Role::Player, &card);
                    if self.state == RoundState::PlayerTurn {
                        shell.render_round_state(&self.table());
                    }
                }
            }
        }

        while self.state == RoundState::DealerTurn {
            shell.render_round_state(&self.table());
            if let Some(card) = self.dealer_step()? {
                shell.render_hit(Role::Dealer, &card);
            }
        }

        self.showdown()
    }

    /// Plays rounds until a side reaches the series target or the shell
    /// declines to continue.
    ///
    /// Each iteration clears both hands, reports the score, and checks for a
    /// series winner before dealing.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deck runs
    /// out mid-round.
    pub fn run<S: Shell + ?Sized>(&mut self, shell: &mut S) -> Result<MatchEnd, RoundError> {
        if self.state != RoundState::Idle {
            return Err(RoundError::InvalidState);
        }

        loop {
            self.reset_hands();
            shell.render_series_score(self.scores());

            if let Some(winner) = self.series_winner() {
                info!("{winner} wins the series after {} rounds", self.round);
                shell.render_series_winner(winner);
                return Ok(MatchEnd::Winner(winner));
            }

            let result = self.play_round(shell)?;
            shell.render_round_outcome(&result);

            if !shell.request_continue() {
                info!("match ended by the shell after {} rounds", self.round);
                return Ok(MatchEnd::Quit);
            }
        }
    }
}
