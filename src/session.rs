//! The interactive game loop.
//!
//! [`run`] drives a [`Game`] through a [`Console`], printing the same prompts
//! and messages for every game: who plays first, the table before each move,
//! the player's numbered hand, the computer's move, captures with the running
//! score, and the final score.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::console::Console;
use crate::error::{ActionError, SessionError};
use crate::game::{Game, Side};
use crate::result::{Play, SessionEnd};
use crate::score::Score;

/// Input that ends the game immediately.
pub const EXIT_COMMAND: &str = "exit";

/// Plays `game` to the end through `console`.
///
/// Typing [`EXIT_COMMAND`] at a card prompt, or running out of input, ends the
/// game without the final sweep or score. "Game Over" is printed either way.
///
/// # Errors
///
/// Returns an error if the engine rejects a move the loop itself chose. Bad
/// user input never causes an error; the player is asked again.
pub fn run<C: Console + ?Sized>(
    game: &mut Game,
    console: &mut C,
) -> Result<SessionEnd, SessionError> {
    console.write_line("Indigo Card Game");

    let Some(first) = ask_first_player(console) else {
        return Ok(leave(game, console));
    };

    let table = game.start(first)?;
    console.write_line(&format!(
        "Initial cards on the table: {}",
        join_cards(&table)
    ));
    console.write_line("");

    loop {
        show_table(game, console);

        if game.is_exhausted() {
            break;
        }

        let play = match game.turn() {
            Side::Player => match player_move(game, console)? {
                Some(play) => play,
                None => return Ok(leave(game, console)),
            },
            Side::Computer => computer_move(game, console)?,
        };

        if play.is_capture() {
            console.write_line(&format!("{} wins cards", play.side.name()));
            show_score(&game.score(false), console);
        }
        console.write_line("");
    }

    let score = game.finish()?;
    show_score(&score, console);
    console.write_line("Game Over");

    Ok(SessionEnd::Finished(score))
}

fn leave<C: Console + ?Sized>(game: &mut Game, console: &mut C) -> SessionEnd {
    log::debug!("player left the game");
    game.exit();
    console.write_line("Game Over");
    SessionEnd::Exited
}

fn ask_first_player<C: Console + ?Sized>(console: &mut C) -> Option<Side> {
    loop {
        console.write_line("Play first?");
        match console.read_line()?.as_str() {
            "yes" => return Some(Side::Player),
            "no" => return Some(Side::Computer),
            _ => {}
        }
    }
}

fn show_table<C: Console + ?Sized>(game: &Game, console: &mut C) {
    match game.top_card() {
        None => console.write_line("No cards on the table"),
        Some(top) => console.write_line(&format!(
            "{} cards on the table, and the top card is {top}",
            game.table().len()
        )),
    }
}

/// Asks for a card until a valid one is chosen.
///
/// Returns `None` when the player leaves.
fn player_move<C: Console + ?Sized>(
    game: &mut Game,
    console: &mut C,
) -> Result<Option<Play>, ActionError> {
    console.write_line(&format!("Cards in hand: {}", game.hand(Side::Player)));

    loop {
        console.write_line(&format!(
            "Choose a card to play (1-{}):",
            game.hand(Side::Player).len()
        ));

        let Some(input) = console.read_line() else {
            return Ok(None);
        };
        if input == EXIT_COMMAND {
            return Ok(None);
        }

        let Ok(position) = input.parse::<usize>() else {
            log::debug!("ignoring non-numeric selection {input:?}");
            continue;
        };

        match game.play_player_card(position) {
            Ok(play) => return Ok(Some(play)),
            Err(ActionError::InvalidSelection { .. }) => {}
            Err(err) => return Err(err),
        }
    }
}

fn computer_move<C: Console + ?Sized>(
    game: &mut Game,
    console: &mut C,
) -> Result<Play, ActionError> {
    if game.options.reveal_computer_hand {
        console.write_line(&join_cards(game.hand(Side::Computer).cards()));
    }

    let play = game.play_computer_turn()?;
    console.write_line(&format!("Computer plays {}", play.card));
    Ok(play)
}

fn show_score<C: Console + ?Sized>(score: &Score, console: &mut C) {
    console.write_line(&format!(
        "Score: Player {} - Computer {}",
        score.player, score.computer
    ));
    console.write_line(&format!(
        "Cards: Player {} - Computer {}",
        score.player_cards, score.computer_cards
    ));
}

/// Formats cards separated by single spaces, e.g. `9♠ 10♥ A♦`.
#[must_use]
pub fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format!("{card}"))
        .collect::<Vec<_>>()
        .join(" ")
}
