use crate::error::FinishError;
use crate::score::Score;

use super::{Game, GameState, Side};

impl Game {
    /// Ends a game in which every card has been played.
    ///
    /// Cards left on the table go to whoever captured last, or to the side
    /// that played first if nobody captured anything. Returns the final
    /// score including the most-cards bonus.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play or cards remain in the
    /// deck or a hand.
    pub fn finish(&mut self) -> Result<Score, FinishError> {
        if self.state != GameState::InPlay {
            return Err(FinishError::InvalidState);
        }

        if !self.is_exhausted() {
            return Err(FinishError::CardsRemaining);
        }

        if !self.table.is_empty() {
            let sweeper = self
                .last_winner
                .or(self.first)
                .unwrap_or(Side::Computer);
            let swept = core::mem::take(&mut self.table);
            log::debug!("{} sweeps the last {} cards", sweeper.name(), swept.len());
            self.won_mut(sweeper).extend(swept);
        }

        self.state = GameState::Terminal;

        let score = self.score(true);
        log::debug!("final score {score:?}");
        Ok(score)
    }

    /// Ends the game at once, without sweeping the table or scoring.
    pub const fn exit(&mut self) {
        self.state = GameState::Terminal;
    }
}
