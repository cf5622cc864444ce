//! Dealer play and round resolution.

extern crate alloc;

use alloc::format;

use super::{Game, GameState};

impl Game {
    /// Plays out the dealer's hand.
    ///
    /// The dealer draws until reaching a hard 17 or better: below 17 the
    /// dealer always draws, and on a soft 17 the dealer draws as well.
    pub(super) fn dealer_play(&mut self) {
        loop {
            let (value, is_soft) = self.dealer.value();
            if value < 17 || (value == 17 && is_soft) {
                self.dealer.add_card(self.deck.draw());
            } else {
                break;
            }
        }
    }

    /// Resolves the round and formats the result message.
    ///
    /// Priority: player bust loses, then dealer bust wins for the player,
    /// then the higher value wins, and equal values push.
    pub(super) fn finish_round(&mut self) {
        self.state = GameState::RoundOver;
        let (player_value, _) = self.player.value();
        let (dealer_value, _) = self.dealer.value();

        self.result = if player_value > 21 {
            format!("Player busts ({player_value}). Dealer wins.")
        } else if dealer_value > 21 {
            format!("Dealer busts ({dealer_value}). Player wins!")
        } else if player_value > dealer_value {
            format!("Player wins! ({player_value} vs {dealer_value})")
        } else if player_value < dealer_value {
            format!("Dealer wins. ({dealer_value} vs {player_value})")
        } else {
            format!("Push. ({player_value} vs {dealer_value})")
        };
    }
}
