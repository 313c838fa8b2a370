//! Match integration tests.

use std::collections::VecDeque;

use twentyone::{
    ActionError, Card, ConfigError, Decision, Deck, GameOptions, HandSummary, Match, MatchEnd,
    Rank, Role, RoundError, RoundOutcome, RoundResult, RoundState, SeriesScore, Shell, Suit,
    TableView, parse_continue, resolve_outcome,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Deck dealt in the order given: player, dealer, player, dealer, then hits.
fn deck_of(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.iter().copied())
}

fn new_match(threshold: u32) -> Match {
    Match::new(GameOptions::default().with_bust_threshold(threshold), 42).unwrap()
}

fn player_bust_deck() -> Deck {
    deck_of(&[
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Six),   // dealer up
        card(Suit::Hearts, Rank::Nine), // player
        card(Suit::Clubs, Rank::Ten),   // dealer hole
        card(Suit::Spades, Rank::Five), // player hit
    ])
}

#[derive(Default)]
struct ScriptedShell {
    decisions: VecDeque<Decision>,
    continues: VecDeque<bool>,
    always_continue: bool,
    tables: usize,
    hits: Vec<(Role, Card)>,
    outcomes: Vec<RoundResult>,
    scores: Vec<SeriesScore>,
    winners: Vec<Role>,
    continue_requests: usize,
}

impl Shell for ScriptedShell {
    fn request_player_decision(&mut self, table: &TableView<'_>) -> Decision {
        assert_eq!(table.state, RoundState::PlayerTurn);
        assert!(table.dealer_hole_hidden);
        self.decisions.pop_front().unwrap_or(Decision::Stay)
    }

    fn request_continue(&mut self) -> bool {
        self.continue_requests += 1;
        self.continues.pop_front().unwrap_or(self.always_continue)
    }

    fn render_round_state(&mut self, _table: &TableView<'_>) {
        self.tables += 1;
    }

    fn render_hit(&mut self, role: Role, card: &Card) {
        self.hits.push((role, *card));
    }

    fn render_round_outcome(&mut self, result: &RoundResult) {
        self.outcomes.push(result.clone());
    }

    fn render_series_score(&mut self, score: SeriesScore) {
        self.scores.push(score);
    }

    fn render_series_winner(&mut self, winner: Role) {
        self.winners.push(winner);
    }
}

#[test]
fn options_validation() {
    assert_eq!(
        Match::new(GameOptions::default().with_bust_threshold(20), 1).unwrap_err(),
        ConfigError::ThresholdTooLow { threshold: 20 }
    );
    assert_eq!(
        Match::new(GameOptions::default().with_series_target(0), 1).unwrap_err(),
        ConfigError::ZeroSeriesTarget
    );

    let game = new_match(21);
    assert_eq!(game.bust_threshold(), 21);
    assert_eq!(game.options().series_target, 5);
    assert_eq!(game.scores(), SeriesScore::default());
    assert_eq!(game.series_winner(), None);
}

#[test]
fn parse_shell_answers() {
    assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("HIT".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!(" s ".parse::<Decision>(), Ok(Decision::Stay));
    assert_eq!("Stay".parse::<Decision>(), Ok(Decision::Stay));
    assert!("x".parse::<Decision>().is_err());
    assert!("".parse::<Decision>().is_err());
    assert!("hits".parse::<Decision>().is_err());

    assert_eq!(parse_continue("yes"), Ok(true));
    assert_eq!(parse_continue("N"), Ok(false));
    assert!(parse_continue("").is_err());

    assert_eq!(GameOptions::parse_bust_threshold("21"), Ok(21));
    assert_eq!(
        GameOptions::parse_bust_threshold("-5"),
        Err(ConfigError::InvalidNumber)
    );
}

#[test]
fn outcome_resolution_covers_every_case() {
    for player_bust in [false, true] {
        for dealer_bust in [false, true] {
            for player_total in 15..=26 {
                for dealer_total in 15..=26 {
                    let outcome = resolve_outcome(
                        HandSummary {
                            total: player_total,
                            bust: player_bust,
                        },
                        HandSummary {
                            total: dealer_total,
                            bust: dealer_bust,
                        },
                    );

                    let expected = if player_bust {
                        RoundOutcome::DealerWins
                    } else if dealer_bust || player_total > dealer_total {
                        RoundOutcome::PlayerWins
                    } else if dealer_total > player_total {
                        RoundOutcome::DealerWins
                    } else {
                        RoundOutcome::Tie
                    };
                    assert_eq!(outcome, expected);
                }
            }
        }
    }
}

#[test]
fn player_bust_beats_a_worse_dealer_bust() {
    let outcome = resolve_outcome(
        HandSummary {
            total: 22,
            bust: true,
        },
        HandSummary {
            total: 30,
            bust: true,
        },
    );
    assert_eq!(outcome, RoundOutcome::DealerWins);
    assert_eq!(outcome.winner(), Some(Role::Dealer));
    assert_eq!(RoundOutcome::Tie.winner(), None);
}

#[test]
fn start_round_deals_two_cards_each_from_a_fresh_deck() {
    let mut game = new_match(21);
    game.start_round().unwrap();

    assert_eq!(game.state(), RoundState::PlayerTurn);
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.player().hand().len(), 2);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 48);

    game.hit().unwrap();
    assert_eq!(game.cards_remaining(), 47);
}

#[test]
fn same_seed_deals_same_cards() {
    let mut first = new_match(21);
    let mut second = new_match(21);
    first.start_round().unwrap();
    second.start_round().unwrap();

    assert_eq!(first.player().hand(), second.player().hand());
    assert_eq!(first.dealer().hand(), second.dealer().hand());
}

#[test]
fn deals_alternate_between_player_and_dealer() {
    let mut game = new_match(21);
    game.start_round_with_deck(player_bust_deck()).unwrap();

    assert_eq!(
        game.player().hand().cards(),
        [card(Suit::Hearts, Rank::Ten), card(Suit::Hearts, Rank::Nine)]
    );
    assert_eq!(
        game.dealer().hand().cards(),
        [card(Suit::Clubs, Rank::Six), card(Suit::Clubs, Rank::Ten)]
    );
}

#[test]
fn table_hides_dealer_hole_card_on_player_turn() {
    let mut game = new_match(21);
    game.start_round_with_deck(player_bust_deck()).unwrap();

    let table = game.table();
    assert!(table.dealer_hole_hidden);
    assert_eq!(table.dealer_cards, [card(Suit::Clubs, Rank::Six)]);
    assert_eq!(table.dealer_total, None);
    assert_eq!(table.player_total, 19);

    game.stay().unwrap();
    let table = game.table();
    assert!(!table.dealer_hole_hidden);
    assert_eq!(table.dealer_cards.len(), 2);
    assert_eq!(table.dealer_total, Some(16));
}

#[test]
fn player_stays_and_dealer_draws_to_threshold() {
    let mut game = new_match(21);
    game.start_round_with_deck(deck_of(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Six),     // dealer up
        card(Suit::Hearts, Rank::Seven),  // player
        card(Suit::Clubs, Rank::Ten),     // dealer hole
        card(Suit::Diamonds, Rank::Five), // dealer draw
        card(Suit::Spades, Rank::Two),    // left in deck
    ]))
    .unwrap();

    game.stay().unwrap();
    assert_eq!(game.state(), RoundState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, [card(Suit::Diamonds, Rank::Five)]);
    assert_eq!(game.state(), RoundState::Resolved);
    assert_eq!(game.cards_remaining(), 1);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert_eq!(result.player.total, 17);
    assert_eq!(result.dealer.total, 21);
    assert!(!result.dealer.bust);
    assert_eq!(result.dealer_cards.len(), 3);
    assert_eq!(result.score, SeriesScore { player: 0, dealer: 1 });
    assert_eq!(game.state(), RoundState::Idle);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = new_match(21);
    game.start_round_with_deck(player_bust_deck()).unwrap();

    let hit = game.hit().unwrap();
    assert_eq!(hit, card(Suit::Spades, Rank::Five));
    assert_eq!(game.state(), RoundState::Resolved);
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert!(result.player.bust);
    assert_eq!(result.player.total, 24);
    assert_eq!(result.dealer_cards.len(), 2);
    assert_eq!(game.scores().dealer, 1);
}

#[test]
fn dealer_bust_gives_player_the_round() {
    let mut game = new_match(21);
    game.start_round_with_deck(deck_of(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Six),    // dealer up
        card(Suit::Hearts, Rank::Eight), // player
        card(Suit::Clubs, Rank::Ten),    // dealer hole
        card(Suit::Spades, Rank::King),  // dealer draw
        card(Suit::Spades, Rank::Two),   // left in deck
    ]))
    .unwrap();

    game.stay().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.cards_remaining(), 1);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
    assert!(result.dealer.bust);
    assert_eq!(result.dealer.total, 26);
    assert_eq!(game.scores(), SeriesScore { player: 1, dealer: 0 });
}

#[test]
fn equal_totals_tie_without_scoring() {
    let mut game = new_match(21);
    game.start_round_with_deck(deck_of(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Ten),    // dealer up
        card(Suit::Hearts, Rank::Five),  // player
        card(Suit::Clubs, Rank::Nine),   // dealer hole
        card(Suit::Hearts, Rank::Six),   // player hit
        card(Suit::Diamonds, Rank::Two), // dealer draw
    ]))
    .unwrap();

    game.hit().unwrap();
    assert_eq!(game.state(), RoundState::PlayerTurn);
    game.stay().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, [card(Suit::Diamonds, Rank::Two)]);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Tie);
    assert_eq!(result.player.total, 21);
    assert_eq!(result.dealer.total, 21);
    assert_eq!(game.scores(), SeriesScore::default());
}

#[test]
fn dealer_soft_ace_keeps_drawing() {
    // Ace + Seven is reduced to 8 at threshold 21, so the dealer draws.
    let mut game = new_match(21);
    game.start_round_with_deck(deck_of(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Ace),     // dealer up
        card(Suit::Hearts, Rank::Nine),   // player
        card(Suit::Clubs, Rank::Seven),   // dealer hole
        card(Suit::Diamonds, Rank::King), // dealer draw, 28 - 10 = 18
        card(Suit::Spades, Rank::Three),  // dealer draw, 31 - 10 = 21
    ]))
    .unwrap();

    game.stay().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);

    let result = game.showdown().unwrap();
    assert_eq!(result.dealer.total, 21);
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
}

#[test]
fn dealer_step_reports_each_draw() {
    let mut game = new_match(21);
    game.start_round_with_deck(deck_of(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Diamonds, Rank::King),
        card(Suit::Spades, Rank::Two),
    ]))
    .unwrap();

    assert_eq!(game.dealer_step().unwrap_err(), ActionError::InvalidState);
    game.stay().unwrap();

    assert_eq!(
        game.dealer_step().unwrap(),
        Some(card(Suit::Diamonds, Rank::Four))
    );
    assert_eq!(
        game.dealer_step().unwrap(),
        Some(card(Suit::Diamonds, Rank::King))
    );
    assert_eq!(game.state(), RoundState::DealerTurn);
    assert_eq!(
        game.dealer_step().unwrap(),
        Some(card(Suit::Spades, Rank::Two))
    );
    assert_eq!(game.state(), RoundState::DealerTurn);
    assert_eq!(game.dealer_step().unwrap(), None);
    assert_eq!(game.state(), RoundState::Resolved);
}

#[test]
fn actions_check_round_state() {
    let mut game = new_match(21);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stay().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), RoundError::InvalidState);

    game.start_round().unwrap();
    assert_eq!(game.start_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), RoundError::InvalidState);

    game.stay().unwrap();
    assert_eq!(game.stay().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn exhausted_deck_aborts_the_round() {
    let mut game = new_match(500);
    game.start_round_with_deck(deck_of(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Three),
    ]))
    .unwrap();

    game.stay().unwrap();
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(game.state(), RoundState::Idle);
    assert_eq!(game.scores(), SeriesScore::default());
    assert_eq!(game.showdown().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn short_deck_fails_the_deal() {
    let mut game = new_match(21);
    let err = game
        .start_round_with_deck(deck_of(&[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Hearts, Rank::Nine),
        ]))
        .unwrap_err();

    assert_eq!(err, RoundError::DeckExhausted);
    assert_eq!(game.state(), RoundState::Idle);

    game.start_round().unwrap();
    assert_eq!(game.player().hand().len(), 2);
}

#[test]
fn series_stops_at_target() {
    let mut game = new_match(21);

    for round in 1..=5 {
        assert_eq!(game.series_winner(), None);
        game.start_round_with_deck(player_bust_deck()).unwrap();
        game.hit().unwrap();
        let result = game.showdown().unwrap();
        assert_eq!(result.round, round);
        assert_eq!(result.score.dealer, round);
    }

    assert_eq!(game.series_winner(), Some(Role::Dealer));
    assert_eq!(game.start_round().unwrap_err(), RoundError::SeriesOver);
    assert_eq!(
        game.start_round_with_deck(player_bust_deck()).unwrap_err(),
        RoundError::SeriesOver
    );
    assert_eq!(game.scores(), SeriesScore { player: 0, dealer: 5 });
}

#[test]
fn run_plays_until_a_side_reaches_the_target() {
    let mut game = new_match(21);
    let mut shell = ScriptedShell {
        always_continue: true,
        ..ScriptedShell::default()
    };

    let end = game.run(&mut shell).unwrap();
    let MatchEnd::Winner(winner) = end else {
        panic!("expected a series winner, got {end:?}");
    };

    let score = game.scores();
    let (winner_score, loser_score) = match winner {
        Role::Player => (score.player, score.dealer),
        Role::Dealer => (score.dealer, score.player),
    };
    assert_eq!(winner_score, 5);
    assert!(loser_score < 5);

    let rounds = shell.outcomes.len();
    assert_eq!(rounds as u32, game.round_number());
    assert_eq!(shell.continue_requests, rounds);
    assert_eq!(shell.scores.len(), rounds + 1);
    assert_eq!(shell.scores.last(), Some(&score));
    assert_eq!(shell.winners, [winner]);

    let ties = shell
        .outcomes
        .iter()
        .filter(|result| result.outcome == RoundOutcome::Tie)
        .count() as u32;
    assert_eq!(score.player + score.dealer + ties, game.round_number());

    // Each iteration starts with empty hands.
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
}

#[test]
fn run_stops_when_shell_declines() {
    let mut game = new_match(21);
    let mut shell = ScriptedShell {
        decisions: VecDeque::from([Decision::Hit]),
        continues: VecDeque::from([false]),
        ..ScriptedShell::default()
    };

    assert_eq!(game.run(&mut shell).unwrap(), MatchEnd::Quit);
    assert_eq!(game.round_number(), 1);
    assert_eq!(shell.outcomes.len(), 1);
    assert_eq!(shell.continue_requests, 1);
    assert!(shell.winners.is_empty());
    assert_eq!(shell.hits.first().map(|(role, _)| *role), Some(Role::Player));
}

#[test]
fn run_reports_existing_winner_without_playing() {
    let mut game = Match::new(GameOptions::default().with_series_target(1), 9).unwrap();
    game.start_round_with_deck(player_bust_deck()).unwrap();
    game.hit().unwrap();
    game.showdown().unwrap();

    let mut shell = ScriptedShell::default();
    assert_eq!(game.run(&mut shell).unwrap(), MatchEnd::Winner(Role::Dealer));
    assert!(shell.outcomes.is_empty());
    assert_eq!(shell.tables, 0);
    assert_eq!(shell.scores, [SeriesScore { player: 0, dealer: 1 }]);
}
