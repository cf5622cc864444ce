//! CLI blackjack demo.
//!
//! A minimal stand-in for a graphical presentation layer: it calls the three
//! engine actions in response to input and reads the public game state back
//! for display.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use mockjack::{Game, GameState};

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let mut game = Game::new(1);

    loop {
        print_table(&game);

        let command = match game.state {
            GameState::PlayerTurn => prompt_line("Action (h)it / (s)tand / (q)uit: "),
            _ => prompt_line("Press enter to deal (q to quit): "),
        };

        match command.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            "h" | "hit" if game.state == GameState::PlayerTurn => game.player_hit(),
            "s" | "stand" if game.state == GameState::PlayerTurn => game.player_stand(),
            _ if game.state != GameState::PlayerTurn => game.deal(),
            _ => println!("Unknown action."),
        }

        if game.state == GameState::RoundOver {
            print_table(&game);
            println!("{}", game.result);
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!();
    if game.state == GameState::PlayerTurn {
        // Hide the dealer hole card until the player has acted.
        let up_card = game
            .dealer
            .cards()
            .first()
            .map_or_else(|| String::from("<empty>"), ToString::to_string);
        println!("Dealer: {up_card} ??");
    } else {
        let (value, is_soft) = game.dealer.value();
        println!(
            "Dealer: {} ({}{})",
            game.dealer,
            if is_soft { "soft " } else { "" },
            value
        );
    }

    let (value, is_soft) = game.player.value();
    println!(
        "Player: {} ({}{})",
        game.player,
        if is_soft { "soft " } else { "" },
        value
    );
}
