//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::StartError;
use crate::options::GameOptions;
use crate::outcome::{GameSnapshot, Winner};

mod round;
pub mod state;

pub use state::GameState;

/// A War game engine that owns the two decks and the round flow.
///
/// The engine is single-threaded and synchronous: every operation runs to
/// completion before returning, and each game owns its decks and random
/// source exclusively. Use [`GameOptions`] to configure the war stake and
/// the deal order.
#[derive(Debug, Clone)]
pub struct Game {
    /// The user's deck.
    pub player_deck: Deck,
    /// The opposing deck.
    pub opponent_deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: GameState,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed.
    ///
    /// The seed fully determines the shuffle, so a game replayed with the
    /// same seed and the same round triggers produces identical outcomes.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let snapshot = game.start_game().unwrap();
    /// assert_eq!(snapshot.player_deck_size, 26);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            player_deck: Deck::new(),
            opponent_deck: Deck::new(),
            options,
            state: GameState::Idle,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a new game: builds a full deck, shuffles it once, and deals
    /// it out alternately.
    ///
    /// The first drawn card goes to the side named by
    /// [`GameOptions::first_deal`], the second to the other side, and so on;
    /// the relative order inside each dealt deck equals the draw order, so
    /// one shuffle determines the whole game. Valid when no game is in
    /// progress, including after a finished game.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is already in progress.
    pub fn start_game(&mut self) -> Result<GameSnapshot, StartError> {
        if self.state == GameState::InProgress {
            return Err(StartError::InvalidState);
        }

        let mut stock = Deck::full();
        stock.shuffle(&mut self.rng);

        self.player_deck = Deck::new();
        self.opponent_deck = Deck::new();

        let mut receiver = self.options.first_deal;
        while let Some(card) = stock.draw_top() {
            self.deck_mut(receiver).append_bottom(card);
            receiver = receiver.other();
        }
        debug_assert_eq!(
            self.player_deck.len() + self.opponent_deck.len(),
            DECK_SIZE
        );

        self.state = GameState::InProgress;
        Ok(self.snapshot())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current deck sizes.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player_deck_size: self.player_deck.len(),
            opponent_deck_size: self.opponent_deck.len(),
        }
    }

    /// Returns the number of cards in the player's deck.
    #[must_use]
    pub fn player_cards_remaining(&self) -> usize {
        self.player_deck.len()
    }

    /// Returns the number of cards in the opponent's deck.
    #[must_use]
    pub fn opponent_cards_remaining(&self) -> usize {
        self.opponent_deck.len()
    }

    /// Returns the deck belonging to the given side.
    pub(crate) fn deck_mut(&mut self, side: Winner) -> &mut Deck {
        match side {
            Winner::Player => &mut self.player_deck,
            Winner::Opponent => &mut self.opponent_deck,
        }
    }
}
