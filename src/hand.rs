//! Hands held by the player and the computer.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Number of cards a hand is dealt and refilled to.
pub const HAND_SIZE: usize = 6;

/// Cards held by one side, addressed by 1-based position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds cards to the end of the hand.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at a 1-based position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        position.checked_sub(1).and_then(|index| self.cards.get(index))
    }

    /// Removes and returns the card at a 1-based position.
    pub fn take(&mut self, position: usize) -> Option<Card> {
        let index = position.checked_sub(1)?;
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Removes `card` from the hand, returning it if it was held.
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        let index = self.cards.iter().position(|held| held == card)?;
        Some(self.cards.remove(index))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Formats the hand as numbered choices, e.g. `1)9♠ 2)A♥`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}){card}", index + 1)?;
        }
        Ok(())
    }
}
