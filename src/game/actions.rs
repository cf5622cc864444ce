//! User-triggered round actions.

use super::{Game, GameState};

impl Game {
    /// Deals a new round.
    ///
    /// Valid from any state, including mid-round: both hands and the result
    /// are cleared, two cards each are drawn (player, dealer, player,
    /// dealer), and the state becomes [`GameState::PlayerTurn`]. If either
    /// hand is worth exactly 21 off the deal, the round resolves immediately.
    pub fn deal(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.result.clear();
        self.state = GameState::PlayerTurn;

        self.player.add_card(self.deck.draw());
        self.dealer.add_card(self.deck.draw());
        self.player.add_card(self.deck.draw());
        self.dealer.add_card(self.deck.draw());

        let (player_value, _) = self.player.value();
        let (dealer_value, _) = self.dealer.value();
        if player_value == 21 || dealer_value == 21 {
            self.finish_round();
        }
    }

    /// Player action: hit (draw a card).
    ///
    /// Silently ignored unless the state is [`GameState::PlayerTurn`]. If the
    /// drawn card busts the hand, the round resolves.
    pub fn player_hit(&mut self) {
        if self.state != GameState::PlayerTurn {
            return;
        }

        self.player.add_card(self.deck.draw());
        let (player_value, _) = self.player.value();
        if player_value > 21 {
            self.finish_round();
        }
    }

    /// Player action: stand (keep the current hand).
    ///
    /// Silently ignored unless the state is [`GameState::PlayerTurn`]. Moves
    /// to [`GameState::DealerTurn`], plays out the dealer's hand, and
    /// resolves the round.
    pub fn player_stand(&mut self) {
        if self.state != GameState::PlayerTurn {
            return;
        }

        self.state = GameState::DealerTurn;
        self.dealer_play();
        self.finish_round();
    }
}
