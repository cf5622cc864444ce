//! Round state types.

/// Round state.
///
/// A round moves `PlayerTurn` → `DealerTurn` → `RoundOver`; the next deal
/// starts back at `PlayerTurn`. `WaitingDeal` is only observed before the
/// first deal of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the first deal.
    #[default]
    WaitingDeal,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result is available.
    RoundOver,
}
