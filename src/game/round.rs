//! Round resolution and war escalation.

use alloc::vec::Vec;

use crate::card::{Card, Matchup};
use crate::error::RoundError;
use crate::outcome::{RoundOutcome, WarPlay, Winner};

use super::{Game, GameState};

impl Game {
    /// Plays one round: draw a card from each deck, battle them, and award
    /// every card put in play to the round's winner.
    ///
    /// A tied opening battle escalates into a war: each side commits up to
    /// `war_stake` cards per level, face-down except the last, and the
    /// face-up battle decides the accumulated pool, tying into another
    /// level. The winner's cards are appended to the bottom of their deck,
    /// winner's card first. After the cards are awarded, the terminal check
    /// runs: if either deck is empty the game moves to
    /// [`GameState::Resolved`] and the outcome names the winner.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] unless a game is in progress,
    /// leaving the decks untouched. [`RoundError::EmptyDeck`] is reported if
    /// an internal draw ever finds an empty deck; the engine's size checks
    /// make that unreachable.
    pub fn play_round(&mut self) -> Result<RoundOutcome, RoundError> {
        if self.state != GameState::InProgress {
            return Err(RoundError::InvalidState);
        }

        let player_card = self.player_deck.draw_top().ok_or(RoundError::EmptyDeck)?;
        let opponent_card = self.opponent_deck.draw_top().ok_or(RoundError::EmptyDeck)?;
        let result = player_card.battle(opponent_card);

        let mut war_plays = Vec::new();
        let taken_by = match result {
            Matchup::Win => {
                self.award(Winner::Player, &[player_card, opponent_card]);
                Winner::Player
            }
            Matchup::Lose => {
                self.award(Winner::Opponent, &[opponent_card, player_card]);
                Winner::Opponent
            }
            Matchup::Tie => self.resolve_war(player_card, opponent_card, &mut war_plays)?,
        };

        let terminal = self.check_terminal();

        Ok(RoundOutcome {
            player_card,
            opponent_card,
            result,
            war_plays,
            taken_by,
            terminal,
            player_deck_size: self.player_deck.len(),
            opponent_deck_size: self.opponent_deck.len(),
        })
    }

    /// Resolves a war over the two tied cards.
    ///
    /// Runs one escalation level per iteration instead of recursing, so the
    /// call stack stays flat and the bound is explicit: every level moves at
    /// least one card per side out of the decks into the pool, so a war over
    /// at most 52 cards runs at most 52 levels.
    ///
    /// Each level both sides commit `min(player_len, opponent_len,
    /// war_stake)` cards: all but the last face-down, the last face-up. The
    /// face-up battle decides the whole accumulated pool. A side left with
    /// no cards at the top of a level cannot fight on and forfeits the pool
    /// to the other side.
    fn resolve_war(
        &mut self,
        player_card: Card,
        opponent_card: Card,
        plays: &mut Vec<WarPlay>,
    ) -> Result<Winner, RoundError> {
        let mut pool = alloc::vec![player_card, opponent_card];
        let cap = usize::from(self.options.war_stake).max(1);

        loop {
            let stake = self
                .player_deck
                .len()
                .min(self.opponent_deck.len())
                .min(cap);

            if stake == 0 {
                // One side (or both) is out of cards and forfeits. When both
                // are empty the player takes it, matching the endgame check
                // order below.
                let winner = if self.opponent_deck.is_empty() {
                    Winner::Player
                } else {
                    Winner::Opponent
                };
                self.award(winner, &pool);
                return Ok(winner);
            }

            for _ in 1..stake {
                pool.push(self.player_deck.draw_top().ok_or(RoundError::EmptyDeck)?);
                pool.push(self.opponent_deck.draw_top().ok_or(RoundError::EmptyDeck)?);
            }
            let opponent_up = self.opponent_deck.draw_top().ok_or(RoundError::EmptyDeck)?;
            let player_up = self.player_deck.draw_top().ok_or(RoundError::EmptyDeck)?;
            pool.push(opponent_up);
            pool.push(player_up);
            plays.push(WarPlay {
                player_card: player_up,
                opponent_card: opponent_up,
            });

            match player_up.battle(opponent_up) {
                Matchup::Win => {
                    self.award(Winner::Player, &pool);
                    return Ok(Winner::Player);
                }
                Matchup::Lose => {
                    self.award(Winner::Opponent, &pool);
                    return Ok(Winner::Opponent);
                }
                Matchup::Tie => {}
            }
        }
    }

    /// Appends the cards to the bottom of the winner's deck in order.
    fn award(&mut self, winner: Winner, cards: &[Card]) {
        let deck = self.deck_mut(winner);
        for &card in cards {
            deck.append_bottom(card);
        }
    }

    /// Moves the game to `Resolved` if either deck is empty.
    ///
    /// The opponent's deck is examined first, so the player is the winner
    /// if both decks were somehow drained by the same war.
    fn check_terminal(&mut self) -> Option<Winner> {
        if self.opponent_deck.is_empty() {
            self.state = GameState::Resolved;
            Some(Winner::Player)
        } else if self.player_deck.is_empty() {
            self.state = GameState::Resolved;
            Some(Winner::Opponent)
        } else {
            None
        }
    }
}
