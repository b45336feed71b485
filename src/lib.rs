//! An Indigo card game engine with optional `no_std` support.
//!
//! Indigo is a two-player game between a human and the computer. Each side
//! holds up to six cards and plays one per turn onto a shared table pile. A
//! card that matches the top card by rank or suit captures the whole pile.
//! Tens, face cards and aces score a point each, and whoever captures more
//! cards earns three bonus points at the end.
//!
//! The crate provides a [`Game`] type that owns the deck, hands and piles and
//! enforces the turn order, a [`strategy`] for the computer, and a
//! [`session`] loop that plays a full game through any [`Console`].
//!
//! # Example
//!
//! ```
//! use indigo::console::ScriptedConsole;
//! use indigo::{Game, GameOptions, SessionEnd};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut console = ScriptedConsole::new(["no", "exit"]);
//! let end = indigo::session::run(&mut game, &mut console).unwrap();
//! assert_eq!(end, SessionEnd::Exited);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod score;
pub mod session;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::Console;
pub use deck::Deck;
pub use error::{ActionError, DrawError, FinishError, SessionError, StartError};
pub use game::{Game, GameState, INITIAL_TABLE_CARDS, Side};
pub use hand::{HAND_SIZE, Hand};
pub use options::GameOptions;
pub use result::{Play, SessionEnd};
pub use score::Score;
