//! A twenty-one card game engine with optional `no_std` support.
//!
//! The crate provides a [`Match`] type that runs a best-of series between a
//! player and an automated dealer, played to a configurable bust threshold.
//! Reading input and printing are left to a [`Shell`] implementation.
//!
//! # Example
//!
//! ```
//! use twentyone::{GameOptions, Match, RoundState};
//!
//! let mut game = Match::new(GameOptions::default().with_bust_threshold(25), 42).unwrap();
//! game.start_round().unwrap();
//! game.stay().unwrap();
//! game.dealer_play().unwrap();
//! assert_eq!(game.state(), RoundState::Resolved);
//!
//! let result = game.showdown().unwrap();
//! assert_eq!(result.round, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shell;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, ConfigError, DealError, ParseContinueError, ParseDecisionError, RoundError,
};
pub use game::{Match, RoundState, TableView};
pub use hand::Hand;
pub use options::{GameOptions, MIN_BUST_THRESHOLD, SERIES_TARGET};
pub use participant::{Participant, Role, dealer_stays};
pub use result::{HandSummary, MatchEnd, RoundOutcome, RoundResult, SeriesScore, resolve_outcome};
pub use shell::{Decision, Shell, parse_continue};
