//! CLI War example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{Card, Game, GameOptions, Matchup, Rank, Suit, Winner};

fn main() {
    println!("War CLI example (press Enter to play a round, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    let snapshot = match game.start_game() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            println!("Start error: {err}");
            return;
        }
    };
    println!(
        "Dealt {} cards to you, {} to the opponent.",
        snapshot.player_deck_size, snapshot.opponent_deck_size
    );

    loop {
        if prompt_line("> ").as_str() == "q" {
            println!("Goodbye.");
            break;
        }

        let outcome = match game.play_round() {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        };

        println!(
            "You play {}, opponent plays {}.",
            card_name(outcome.player_card),
            card_name(outcome.opponent_card)
        );

        match outcome.result {
            Matchup::Win => println!("You won this one!"),
            Matchup::Lose => println!("You lost this one!"),
            Matchup::Tie => {
                println!("Tie! War!");
                for play in &outcome.war_plays {
                    println!(
                        "  Face-up: your {} vs opponent's {}",
                        card_name(play.player_card),
                        card_name(play.opponent_card)
                    );
                }
                match outcome.taken_by {
                    Winner::Player => println!("You take the war pot!"),
                    Winner::Opponent => println!("The opponent takes the war pot."),
                }
            }
        }

        println!(
            "Decks: you {}, opponent {}.",
            outcome.player_deck_size, outcome.opponent_deck_size
        );

        if let Some(winner) = outcome.terminal {
            match winner {
                Winner::Player => println!("You Won!"),
                Winner::Opponent => println!("You Lost!"),
            }
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn card_name(card: Card) -> String {
    let rank = match card.rank {
        Rank::Two => "Two",
        Rank::Three => "Three",
        Rank::Four => "Four",
        Rank::Five => "Five",
        Rank::Six => "Six",
        Rank::Seven => "Seven",
        Rank::Eight => "Eight",
        Rank::Nine => "Nine",
        Rank::Ten => "Ten",
        Rank::Jack => "Jack",
        Rank::Queen => "Queen",
        Rank::King => "King",
        Rank::Ace => "Ace",
    };
    let suit = match card.suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Spades => "Spades",
        Suit::Clubs => "Clubs",
    };
    format!("{rank} of {suit}")
}
