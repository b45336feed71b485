//! Outcome types for plays and sessions.

use crate::card::Card;
use crate::game::Side;
use crate::score::Score;

/// Result of a single card being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// The side that played.
    pub side: Side,
    /// The card that was played.
    pub card: Card,
    /// Number of cards captured (table plus the played card), if the play won
    /// the table.
    pub captured: Option<usize>,
    /// Number of cards drawn to refill the mover's hand afterwards.
    pub refilled: usize,
}

impl Play {
    /// Returns whether the play captured the table.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every card was played; carries the final score including the bonus.
    Finished(Score),
    /// The player left early, or input ran out.
    Exited,
}
