//! Card types and the battle comparison primitive.

use core::cmp::Ordering;

/// Card rank.
///
/// Declaration order is battle order: `Two` is the weakest rank and `Ace`
/// the strongest. The derived [`Ord`] gives the total order used for every
/// battle comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace (high).
    Ace,
}

impl Rank {
    /// All ranks in ascending battle order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];
}

/// Card suit.
///
/// Suits identify cards but never participate in battle comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Battles this card against an opponent's card.
    ///
    /// Only ranks are compared; suits are ignored. The result is from this
    /// card's perspective: [`Matchup::Win`] iff this card's rank strictly
    /// exceeds the opponent's.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Matchup, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Hearts);
    /// let king = Card::new(Rank::King, Suit::Spades);
    /// assert_eq!(ace.battle(king), Matchup::Win);
    /// assert_eq!(king.battle(king), Matchup::Tie);
    /// ```
    #[must_use]
    pub fn battle(self, opponent: Self) -> Matchup {
        match self.rank.cmp(&opponent.rank) {
            Ordering::Greater => Matchup::Win,
            Ordering::Less => Matchup::Lose,
            Ordering::Equal => Matchup::Tie,
        }
    }
}

/// Outcome of a single battle, from the acting card's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matchup {
    /// The acting card outranks the opponent's.
    Win,
    /// The opponent's card outranks the acting card.
    Lose,
    /// Both cards have the same rank.
    Tie,
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
