//! A rules engine for the card game War with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow:
//! deck construction, seeded shuffling, the alternate deal, round
//! resolution, and the war escalation that breaks ties. It exposes pure
//! data to its caller and owns no presentation state, so any UI layer can
//! render the [`RoundOutcome`] it reports.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let snapshot = game.start_game().unwrap();
//! assert_eq!(snapshot.player_deck_size + snapshot.opponent_deck_size, 52);
//!
//! let outcome = game.play_round().unwrap();
//! assert_eq!(outcome.player_deck_size + outcome.opponent_deck_size, 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod outcome;

// Re-export main types
pub use card::{Card, DECK_SIZE, Matchup, Rank, Suit};
pub use deck::Deck;
pub use error::{RoundError, StartError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use outcome::{GameSnapshot, RoundOutcome, WarPlay, Winner};
