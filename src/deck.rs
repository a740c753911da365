//! Ordered deck with FIFO draw and bottom append.

use alloc::collections::VecDeque;

use rand::Rng;

use crate::card::{Card, Rank, Suit};

/// An ordered sequence of cards.
///
/// Cards are drawn from the top (front) and returned to the bottom (back),
/// which is all the game of War ever needs. The engine, not the deck,
/// guarantees that no card is ever duplicated across the decks of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards in top-to-bottom order.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a full 52-card deck in canonical order.
    ///
    /// The order is rank-major, suit-minor: Two of Hearts, Two of Diamonds,
    /// Two of Spades, Two of Clubs, Three of Hearts, and so on up to the
    /// Ace of Clubs. Seeded shuffles are reproducible against this order.
    #[must_use]
    pub fn full() -> Self {
        let mut cards = VecDeque::with_capacity(Rank::ALL.len() * Suit::ALL.len());
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Shuffles the deck in place with the Fisher-Yates algorithm.
    ///
    /// For each index `i` from the top downward, position `i` is swapped
    /// with a uniformly chosen position in `i..len`, so every permutation
    /// is equally likely given a uniform source. The random source is
    /// injected, which makes shuffles reproducible with a seeded generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = self.cards.make_contiguous();
        let len = cards.len();
        for i in 0..len.saturating_sub(1) {
            let r = rng.random_range(i..len);
            cards.swap(i, r);
        }
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` if the deck is empty; callers are expected to check
    /// [`len`](Self::len) first.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Adds a card to the bottom of the deck.
    pub fn append_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards in top-to-bottom order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
