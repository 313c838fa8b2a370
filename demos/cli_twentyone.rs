//! CLI twenty-one example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Card, Decision, GameOptions, Match, MatchEnd, Role, RoundOutcome, RoundResult, SeriesScore,
    Shell, Suit, TableView, parse_continue,
};

struct Terminal;

impl Shell for Terminal {
    fn request_player_decision(&mut self, _table: &TableView<'_>) -> Decision {
        loop {
            let Some(input) = prompt_line("=> Would you like to hit or stay? ") else {
                return Decision::Stay;
            };
            if let Ok(decision) = input.parse::<Decision>() {
                return decision;
            }
        }
    }

    fn request_continue(&mut self) -> bool {
        loop {
            let Some(input) = prompt_line("Play again? (y/n) ") else {
                return false;
            };
            if let Ok(answer) = parse_continue(&input) {
                return answer;
            }
        }
    }

    fn render_round_state(&mut self, table: &TableView<'_>) {
        println!();
        if table.dealer_hole_hidden {
            let up = table.dealer_cards.first().map_or_else(String::new, format_card);
            println!("Dealer has {up} and ?");
        } else {
            println!(
                "Dealer's cards are {} for a total of {}",
                format_cards(table.dealer_cards),
                table.dealer_total.unwrap_or_default()
            );
        }
        println!(
            "Player's cards are {} for a total of {}",
            format_cards(table.player_cards),
            table.player_total
        );
    }

    fn render_hit(&mut self, role: Role, card: &Card) {
        println!("{role} hits! ({})", format_card(card));
    }

    fn render_round_outcome(&mut self, result: &RoundResult) {
        println!();
        println!(
            "Player's cards are {} for a total of {}",
            format_cards(&result.player_cards),
            result.player.total
        );
        println!(
            "Dealer's cards are {} for a total of {}",
            format_cards(&result.dealer_cards),
            result.dealer.total
        );
        if result.player.bust {
            println!("Player busted");
        } else if result.dealer.bust {
            println!("Dealer busted");
        }
        match result.outcome {
            RoundOutcome::PlayerWins => println!("Player wins!"),
            RoundOutcome::DealerWins => println!("Dealer wins!"),
            RoundOutcome::Tie => println!("It's a tie"),
        }
    }

    fn render_series_score(&mut self, score: SeriesScore) {
        // Clear the screen between rounds.
        print!("\u{1b}[2J\u{1b}[H");
        println!("Player: {} Dealer: {}", score.player, score.dealer);
    }

    fn render_series_winner(&mut self, winner: Role) {
        println!("{winner} wins series");
    }
}

fn main() {
    env_logger::init();

    let threshold = loop {
        let Some(input) = prompt_line("What would you like to play to? ") else {
            return;
        };
        match GameOptions::parse_bust_threshold(&input) {
            Ok(threshold) => break threshold,
            Err(_) => println!("Please enter a number greater than 20"),
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_bust_threshold(threshold);

    let mut game = match Match::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return;
        }
    };

    match game.run(&mut Terminal) {
        Ok(MatchEnd::Winner(_) | MatchEnd::Quit) => println!("Thank you for playing. Goodbye!"),
        Err(err) => eprintln!("Game aborted: {err}"),
    }
}

/// Reads one line of input. Returns `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    format!("\u{1b}[{color_code}m{card}\u{1b}[0m")
}
