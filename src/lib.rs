//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that drives a shoe and two hands
//! through the deal / player-turn / dealer-turn / round-over lifecycle, plus
//! the [`Deck`] and [`Hand`] building blocks it is made of. Rendering and
//! input are left to the caller: a presentation layer invokes
//! [`Game::deal`], [`Game::player_hit`], and [`Game::player_stand`] and reads
//! the public fields back for display.
//!
//! # Example
//!
//! ```
//! use mockjack::{Game, GameState};
//!
//! let mut game = Game::with_seed(1, 42);
//! game.deal();
//! while game.state == GameState::PlayerTurn && game.player.value().0 < 17 {
//!     game.player_hit();
//! }
//! game.player_stand();
//! assert_eq!(game.state, GameState::RoundOver);
//! assert!(!game.result.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod game;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use game::{Game, GameState};
pub use hand::Hand;
