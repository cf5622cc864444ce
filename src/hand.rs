//! Hand representation and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Scores a set of cards.
///
/// Returns `(best, is_soft)`. `best` counts every ace as 11, then demotes
/// aces to 1 one at a time while the total exceeds 21; it may still exceed 21
/// (a bust) once no soft ace remains. `is_soft` is derived from the hard
/// total (every ace as 1): the hand is soft when it holds at least one ace
/// and that ace could still count as 11 without busting.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut best: u8 = 0;
    let mut hard: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
            best = best.saturating_add(11);
        } else {
            best = best.saturating_add(card.rank.value());
        }
        hard = hard.saturating_add(card.rank.value());
    }

    let mut soft_aces = aces;
    while best > 21 && soft_aces > 0 {
        best -= 10;
        soft_aces -= 1;
    }

    let is_soft = aces > 0 && hard.saturating_add(10) <= 21;
    (best, is_soft)
}

/// An ordered sequence of cards.
///
/// Order reflects draw order and has no rules significance beyond scoring.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Empties the hand in place, keeping its capacity.
    ///
    /// No-op when the hand is already empty.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the blackjack value of the hand.
    ///
    /// Returns `(best, is_soft)`. Aces count as 11 where possible without
    /// busting, otherwise as 1. `best` can exceed 21 when the hand is a bust;
    /// callers must check `best > 21` themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use mockjack::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Six));
    /// assert_eq!(hand.value(), (17, true));
    /// ```
    #[must_use]
    pub fn value(&self) -> (u8, bool) {
        evaluate_cards(&self.cards)
    }

    /// Returns the best value of the hand.
    #[must_use]
    pub fn best_value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }
}

impl fmt::Display for Hand {
    /// Renders the cards space-joined, or `<empty>` for an empty hand.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
