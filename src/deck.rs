//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};
use crate::error::DrawError;

/// Cards not yet dealt, drawn from the front.
///
/// A deck only ever shrinks; there is no reshuffle during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck of 52 cards in a uniformly random order.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(Card::full_deck());
        cards.shuffle(rng);
        log::debug!("shuffled a fresh deck of {} cards", cards.len());
        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// The caller is responsible for keeping the cards unique.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the first `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if fewer than `count` cards
    /// remain. The deck is left untouched in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count > self.cards.len() {
            return Err(DrawError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Returns the cards still in the deck, next card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
