//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::GameOptions;
use crate::score::{self, Score};

mod actions;
mod finish;
pub mod state;

pub use state::{GameState, Side};

/// Number of cards dealt face up to the table at the start.
pub const INITIAL_TABLE_CARDS: usize = 4;

/// An Indigo game between the player and the computer.
///
/// The game owns the deck, the table pile, both hands and both won piles,
/// and the random number generator used for the shuffle and for the
/// computer's choices. It performs no I/O; see [`crate::session`] for the
/// interactive loop.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards not yet dealt.
    deck: Deck,
    /// Face-up cards, top card last.
    table: Vec<Card>,
    player_hand: Hand,
    computer_hand: Hand,
    player_won: Vec<Card>,
    computer_won: Vec<Card>,
    /// Current game state.
    state: GameState,
    /// Who played first, once chosen.
    first: Option<Side>,
    /// Whose move it is.
    turn: Side,
    /// Who captured the table most recently.
    last_winner: Option<Side>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, GameOptions, DECK_SIZE};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);
        Self::assemble(options, deck, rng)
    }

    /// Creates a game that deals from `deck` as given.
    ///
    /// `seed` only drives the computer's random choices.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Self {
        Self::assemble(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn assemble(options: GameOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            deck,
            table: Vec::new(),
            player_hand: Hand::new(),
            computer_hand: Hand::new(),
            player_won: Vec::new(),
            computer_won: Vec::new(),
            state: GameState::AwaitingFirstPlayerChoice,
            first: None,
            turn: Side::Player,
            last_winner: None,
            rng,
        }
    }

    /// Refills an emptied hand to [`HAND_SIZE`].
    ///
    /// When the deck runs short the hand takes whatever is left, possibly
    /// nothing. Returns the number of cards drawn.
    fn refill(&mut self, side: Side) -> usize {
        let cards = match self.deck.draw(HAND_SIZE) {
            Ok(cards) => cards,
            Err(DrawError::InsufficientCards { remaining, .. }) => {
                log::debug!("{} refills with the last {remaining} cards", side.name());
                self.deck.draw(remaining).unwrap_or_default()
            }
        };
        let drawn = cards.len();
        self.hand_mut(side).add_cards(cards);
        drawn
    }

    const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Computer => &mut self.computer_hand,
        }
    }

    const fn won_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Player => &mut self.player_won,
            Side::Computer => &mut self.computer_won,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the side whose move it is.
    #[must_use]
    pub const fn turn(&self) -> Side {
        self.turn
    }

    /// Returns who played first, once chosen.
    #[must_use]
    pub const fn first_player(&self) -> Option<Side> {
        self.first
    }

    /// Returns who captured the table most recently.
    #[must_use]
    pub const fn last_winner(&self) -> Option<Side> {
        self.last_winner
    }

    /// Returns the table pile, top card last.
    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    /// Returns the top card of the table.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.table.last()
    }

    /// Returns a side's hand.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    /// Returns the cards a side has captured.
    #[must_use]
    pub fn won(&self, side: Side) -> &[Card] {
        match side {
            Side::Player => &self.player_won,
            Side::Computer => &self.computer_won,
        }
    }

    /// Returns the undealt cards, next card first.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards across every pile, hand and the deck.
    ///
    /// This stays at the size of the starting deck for the whole game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.table.len()
            + self.player_hand.len()
            + self.computer_hand.len()
            + self.player_won.len()
            + self.computer_won.len()
    }

    /// Returns whether the deck and both hands are empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.player_hand.is_empty() && self.computer_hand.is_empty()
    }

    /// Scores the won piles.
    ///
    /// With `endgame` set the most-cards bonus is included. Before the first
    /// player is chosen, ties favour the computer.
    #[must_use]
    pub fn score(&self, endgame: bool) -> Score {
        score::tally(
            &self.player_won,
            &self.computer_won,
            self.first.unwrap_or(Side::Computer),
            endgame,
        )
    }
}
