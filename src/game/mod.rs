//! Game engine and round state management.

extern crate alloc;

use alloc::string::String;

use crate::deck::Deck;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack round engine.
///
/// The game owns the shoe, the player's hand, and the dealer's hand, and
/// moves them through the deal / player-turn / dealer-turn / round-over
/// lifecycle. All fields are public read state for a presentation layer;
/// mutate the game only through [`deal`](Self::deal),
/// [`player_hit`](Self::player_hit), and [`player_stand`](Self::player_stand).
///
/// Illegal transitions (e.g. hitting outside the player's turn) are silent
/// no-ops rather than errors; check [`state`](Self::state) before acting to
/// give user-visible feedback.
#[derive(Debug, Clone)]
pub struct Game {
    /// The shoe cards are drawn from.
    pub deck: Deck,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Current round state.
    pub state: GameState,
    /// Human-readable round result. Empty except in
    /// [`GameState::RoundOver`].
    pub result: String,
}

impl Game {
    /// Creates a new game with a shoe of `shoe` decks, seeded from the
    /// system clock.
    ///
    /// A `shoe` below 1 is clamped up to 1.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new(shoe: usize) -> Self {
        Self::from_deck(Deck::new(shoe))
    }

    /// Creates a new game with the given shoe count and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use mockjack::{Game, GameState};
    ///
    /// let mut game = Game::with_seed(1, 42);
    /// assert_eq!(game.state, GameState::WaitingDeal);
    /// game.deal();
    /// assert_eq!(game.player.len(), 2);
    /// ```
    #[must_use]
    pub fn with_seed(shoe: usize, seed: u64) -> Self {
        Self::from_deck(Deck::with_seed(shoe, seed))
    }

    fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::WaitingDeal,
            result: String::new(),
        }
    }
}
