//! Round outcome types reported to the presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Matchup};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The user's side.
    Player,
    /// The opposing side.
    Opponent,
}

impl Winner {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// The face-up pair revealed at one war escalation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarPlay {
    /// The player's face-up card.
    pub player_card: Card,
    /// The opponent's face-up card.
    pub opponent_card: Card,
}

/// Result of a single round, including any war escalation it triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The card the player led with.
    pub player_card: Card,
    /// The card the opponent led with.
    pub opponent_card: Card,
    /// Outcome of the opening battle, from the player's perspective.
    pub result: Matchup,
    /// Face-up pairs revealed during war escalation, one per level.
    ///
    /// Empty unless the opening battle tied.
    pub war_plays: Vec<WarPlay>,
    /// The side that collected every card put in play this round.
    pub taken_by: Winner,
    /// The winner of the game, if this round ended it.
    pub terminal: Option<Winner>,
    /// Cards remaining in the player's deck after the round.
    pub player_deck_size: usize,
    /// Cards remaining in the opponent's deck after the round.
    pub opponent_deck_size: usize,
}

/// Deck sizes reported when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Cards in the player's deck.
    pub player_deck_size: usize,
    /// Cards in the opponent's deck.
    pub opponent_deck_size: usize,
}
