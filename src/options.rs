//! Game presentation options.
//!
//! The rules themselves are fixed; these options only change what an
//! interactive session shows.

/// Configuration options for an Indigo game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use indigo::GameOptions;
///
/// let options = GameOptions::default().with_reveal_computer_hand(false);
/// assert!(!options.reveal_computer_hand);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the computer's hand is printed before each of its moves.
    pub reveal_computer_hand: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            reveal_computer_hand: true,
        }
    }
}

impl GameOptions {
    /// Sets whether the computer's hand is printed before each of its moves.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_computer_hand(false);
    /// assert_eq!(options.reveal_computer_hand, false);
    /// ```
    #[must_use]
    pub const fn with_reveal_computer_hand(mut self, reveal: bool) -> Self {
        self.reveal_computer_hand = reveal;
        self
    }
}
