//! Shoe management: construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A shoe of one or more shuffled 52-card decks.
///
/// The deck owns its random source, seeded once at construction and never
/// reseeded. Drawing from an exhausted shoe rebuilds and reshuffles it, so
/// callers never observe an empty deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards remaining in the shoe. Draws come from the back.
    pub cards: Vec<Card>,
    /// Number of 52-card decks in the shoe.
    shoe: usize,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shoe of `shoe` decks, seeded from the system clock.
    ///
    /// A `shoe` below 1 is clamped up to 1.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new(shoe: usize) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::with_seed(shoe, seed)
    }

    /// Creates a shoe of `shoe` decks with the given seed.
    ///
    /// Deterministic: two decks built with the same shoe count and seed yield
    /// the same sequence of draws.
    ///
    /// # Example
    ///
    /// ```
    /// use mockjack::Deck;
    ///
    /// let mut deck = Deck::with_seed(1, 42);
    /// assert_eq!(deck.cards_remaining(), 52);
    /// let _ = deck.draw();
    /// assert_eq!(deck.cards_remaining(), 51);
    /// ```
    #[must_use]
    pub fn with_seed(shoe: usize, seed: u64) -> Self {
        let shoe = shoe.max(1);
        let mut deck = Self {
            cards: Vec::with_capacity(shoe * DECK_SIZE),
            shoe,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn shoe(&self) -> usize {
        self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Rebuilds the full shoe in place and reshuffles it.
    fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                for _ in 0..self.shoe {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
        self.shuffle();
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws a card from the shoe.
    ///
    /// If the shoe is empty, it is rebuilt and reshuffled before the draw.
    #[expect(
        clippy::missing_panics_doc,
        reason = "reset() leaves at least one full deck in the shoe"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.reset();
        }
        self.cards
            .pop()
            .expect("shoe was rebuilt above and cannot be empty")
    }
}
