use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, StartError};
use crate::hand::HAND_SIZE;
use crate::result::Play;
use crate::rules;
use crate::strategy;

use super::{Game, GameState, INITIAL_TABLE_CARDS, Side};

impl Game {
    fn ensure_turn(&self, side: Side) -> Result<(), ActionError> {
        if self.state != GameState::InPlay {
            return Err(ActionError::InvalidState);
        }

        if self.turn != side {
            return Err(ActionError::NotYourTurn);
        }

        if self.hand(side).is_empty() {
            return Err(ActionError::EmptyHand);
        }

        Ok(())
    }

    /// Records who plays first and deals the opening cards.
    ///
    /// Four cards go to the table, then six to the player and six to the
    /// computer. Returns the initial table.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started or the deck cannot
    /// cover the opening deal.
    pub fn start(&mut self, first: Side) -> Result<Vec<Card>, StartError> {
        if self.state != GameState::AwaitingFirstPlayerChoice {
            return Err(StartError::InvalidState);
        }

        if self.deck.len() < INITIAL_TABLE_CARDS + 2 * HAND_SIZE {
            return Err(StartError::NotEnoughCards);
        }

        let table = self
            .deck
            .draw(INITIAL_TABLE_CARDS)
            .map_err(|_| StartError::NotEnoughCards)?;
        let player = self
            .deck
            .draw(HAND_SIZE)
            .map_err(|_| StartError::NotEnoughCards)?;
        let computer = self
            .deck
            .draw(HAND_SIZE)
            .map_err(|_| StartError::NotEnoughCards)?;

        self.table.extend_from_slice(&table);
        self.player_hand.add_cards(player);
        self.computer_hand.add_cards(computer);
        self.first = Some(first);
        self.turn = first;
        self.state = GameState::InPlay;

        log::debug!(
            "{} plays first; {} cards left after the deal",
            first.name(),
            self.deck.len()
        );

        Ok(table)
    }

    /// Player action: play the card at a 1-based position in hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play, it is the computer's
    /// turn, the player holds no cards, or `position` does not name a card.
    /// An invalid selection leaves the game untouched.
    pub fn play_player_card(&mut self, position: usize) -> Result<Play, ActionError> {
        self.ensure_turn(Side::Player)?;

        let hand_size = self.player_hand.len();
        let card = self
            .player_hand
            .take(position)
            .ok_or(ActionError::InvalidSelection {
                position,
                hand_size,
            })?;

        Ok(self.resolve(Side::Player, card))
    }

    /// Computer action: choose a card with [`strategy::choose_card`] and
    /// play it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play, it is the player's turn,
    /// or the computer holds no cards.
    pub fn play_computer_turn(&mut self) -> Result<Play, ActionError> {
        self.ensure_turn(Side::Computer)?;

        let top = self.table.last().copied();
        let card = strategy::choose_card(&mut self.computer_hand, top.as_ref(), &mut self.rng)
            .ok_or(ActionError::EmptyHand)?;

        Ok(self.resolve(Side::Computer, card))
    }

    /// Settles a card that has left `side`'s hand.
    fn resolve(&mut self, side: Side, card: Card) -> Play {
        let captured = if rules::captures(&card, &self.table) {
            let mut taken = core::mem::take(&mut self.table);
            taken.push(card);
            let count = taken.len();
            self.won_mut(side).extend(taken);
            self.last_winner = Some(side);
            log::debug!("{} captures {count} cards with {card}", side.name());
            Some(count)
        } else {
            self.table.push(card);
            None
        };

        let refilled = if self.hand(side).is_empty() {
            self.refill(side)
        } else {
            0
        };

        // A side with nothing left to play sits out while the other finishes.
        let next = side.opponent();
        self.turn = if self.hand(next).is_empty() && !self.hand(side).is_empty() {
            side
        } else {
            next
        };

        Play {
            side,
            card,
            captured,
            refilled,
        }
    }
}
