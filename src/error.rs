//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Fewer cards remain than were requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game has already started.
    #[error("invalid game state for starting")]
    InvalidState,
    /// The deck cannot cover the initial deal.
    #[error("not enough cards for the initial deal")]
    NotEnoughCards,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game is not in play.
    #[error("invalid game state for this action")]
    InvalidState,
    /// It is the other side's turn.
    #[error("not this side's turn")]
    NotYourTurn,
    /// The chosen position does not name a card in hand.
    #[error("position {position} is not between 1 and {hand_size}")]
    InvalidSelection {
        /// The 1-based position that was asked for.
        position: usize,
        /// Number of cards in hand.
        hand_size: usize,
    },
    /// The side to move holds no cards.
    #[error("no cards in hand")]
    EmptyHand,
}

/// Errors that can occur when finishing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// The game is not in play.
    #[error("invalid game state for finishing")]
    InvalidState,
    /// Cards remain in the deck or in a hand.
    #[error("cards remain to be played")]
    CardsRemaining,
}

/// Errors that abort an interactive session.
///
/// These indicate an engine misuse rather than bad input; invalid input is
/// handled by prompting again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The opening deal failed.
    #[error("could not start the game: {0}")]
    Start(#[from] StartError),
    /// A move was rejected.
    #[error("could not play a card: {0}")]
    Action(#[from] ActionError),
    /// The final sweep failed.
    #[error("could not finish the game: {0}")]
    Finish(#[from] FinishError),
}
