//! Scoring of won piles.

use crate::card::Card;
use crate::game::Side;

/// Bonus awarded at the end of the game for capturing the most cards.
pub const MOST_CARDS_BONUS: u32 = 3;

/// Points and captured card counts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// The player's points.
    pub player: u32,
    /// The computer's points.
    pub computer: u32,
    /// Number of cards the player has captured.
    pub player_cards: usize,
    /// Number of cards the computer has captured.
    pub computer_cards: usize,
}

/// Sums the point values of `cards`.
#[must_use]
pub fn pile_points(cards: &[Card]) -> u32 {
    cards.iter().map(Card::score).sum()
}

/// Scores both won piles.
///
/// With `endgame` set, [`MOST_CARDS_BONUS`] goes to the side holding strictly
/// more cards, or to `first` when the counts are equal.
#[must_use]
pub fn tally(player_won: &[Card], computer_won: &[Card], first: Side, endgame: bool) -> Score {
    let mut score = Score {
        player: pile_points(player_won),
        computer: pile_points(computer_won),
        player_cards: player_won.len(),
        computer_cards: computer_won.len(),
    };

    if endgame {
        let bonus_to = match score.player_cards.cmp(&score.computer_cards) {
            core::cmp::Ordering::Greater => Side::Player,
            core::cmp::Ordering::Less => Side::Computer,
            core::cmp::Ordering::Equal => first,
        };
        match bonus_to {
            Side::Player => score.player += MOST_CARDS_BONUS,
            Side::Computer => score.computer += MOST_CARDS_BONUS,
        }
    }

    score
}
