//! Terminal blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Game, GameOptions, GameState, Hand, Tally, Transition};

fn main() {
    println!("Blackjack demo (h = hit, s = stand, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        game.play();

        while game.state() == GameState::Playing {
            print_table(&game, true);

            match prompt_line("Action: ").as_str() {
                "h" | "hit" => {
                    report(game.hit());
                }
                "s" | "stand" => {
                    report(game.stand());
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&game, false);

        if prompt_line("Play again? (y/n): ") != "y" {
            println!("Goodbye.");
            return;
        }

        game.init();
        game.clear_hands();
    }
}

fn report(record: Option<Transition>) {
    let Some(record) = record else {
        return;
    };

    let text = match record.current {
        GameState::Win => Some(colorize("You win!", "32")),
        GameState::Blackjack => Some(colorize("Blackjack! You win!", "32")),
        GameState::Lose => Some(colorize("You lost!", "31")),
        GameState::Init | GameState::Playing => None,
    };

    if let (Some(text), Some(tally)) = (text, record.tally) {
        println!("\n{text}  {}", format_tally(tally));
    }
}

fn format_tally(tally: Tally) -> String {
    format!("WIN: {},  LOSE: {}", tally.wins, tally.losses)
}

fn print_table(game: &Game, hide_dealer: bool) {
    let dealer = game.get_dealer_hand();
    if hide_dealer {
        println!("\nDealer: {}", format_hidden(&dealer));
    } else {
        println!(
            "\nDealer: {} (value {})",
            format_hand(&dealer),
            dealer.value()
        );
    }

    let player = game.get_player_hand();
    println!(
        "You:    {} (value {})\n",
        format_hand(&player),
        player.value()
    );
}

fn format_hidden(dealer: &Hand) -> String {
    let mut parts = Vec::new();
    if let Some(card) = dealer.cards().first() {
        parts.push(card.to_string());
    }
    for _ in 1..dealer.len() {
        parts.push("??".to_string());
    }
    if parts.is_empty() {
        return "(no cards)".to_string();
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
