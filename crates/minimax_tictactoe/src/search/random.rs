//! Uniformly random move selection.

use super::{Choice, MaxPly, Strategy};
use crate::board::Board;
use crate::error::GameError;
use crate::types::Player;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, instrument};

/// Picks any open cell with equal probability. Choices are unscored.
#[derive(Debug, Clone)]
pub struct RandomMove<R = ThreadRng> {
    rng: R,
}

impl RandomMove<ThreadRng> {
    /// Creates a strategy backed by the thread-local RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomMove<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomMove<R> {
    /// Creates a strategy backed by `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomMove<R> {
    #[instrument(skip(self, board), fields(move_count = board.move_count()))]
    fn choose(
        &mut self,
        board: &Board,
        _player: Player,
        _max_ply: MaxPly,
    ) -> Result<Choice, GameError> {
        if board.is_game_over() {
            return Err(GameError::GameOver);
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(GameError::NoLegalMove);
        }
        let pick = self.rng.random_range(0..moves.len());
        let index = moves.iter().nth(pick).ok_or(GameError::NoLegalMove)?;
        debug!(index, "Random move");
        Ok(Choice::new(index, 0))
    }
}
