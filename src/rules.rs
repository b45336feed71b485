//! Trick rules.

use crate::card::Card;

/// Returns whether `played` beats `top`: the two cards share a rank or a suit.
///
/// The rule is the same for both sides. Callers always pass the card just
/// played first and the current top of the table second.
#[must_use]
pub fn beats(played: &Card, top: &Card) -> bool {
    played.rank == top.rank || played.suit == top.suit
}

/// Returns whether playing `played` onto `table` captures the pile.
///
/// An empty table can never be captured.
#[must_use]
pub fn captures(played: &Card, table: &[Card]) -> bool {
    table.last().is_some_and(|top| beats(played, top))
}
