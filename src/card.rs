//! Card, suit, and rank types.

use core::fmt;

/// Card suit.
///
/// Suits are cosmetic: they affect display only, never scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in a fixed order used when building a shoe.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the Unicode glyph for the suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Clubs => "\u{2663}",
            Self::Diamonds => "\u{2666}",
            Self::Hearts => "\u{2665}",
            Self::Spades => "\u{2660}",
        }
    }
}

/// Card rank, Ace through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace. Scores 1 or 11.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack. Scores 10.
    Jack = 11,
    /// Queen. Scores 10.
    Queen = 12,
    /// King. Scores 10.
    King = 13,
}

impl Rank {
    /// All thirteen ranks, in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
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
    ];

    /// Returns the hard scoring value of the rank.
    ///
    /// Aces count as 1 here; [`Hand::value`](crate::Hand::value) decides when
    /// an ace is promoted to 11. Face cards count as 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }

    /// Returns the display symbol for the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Example
    ///
    /// ```
    /// use mockjack::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spades, Rank::Ace);
    /// assert_eq!(card.to_string(), "A\u{2660}");
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    /// Renders the card as rank symbol plus suit glyph, e.g. `A♠`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.glyph())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
