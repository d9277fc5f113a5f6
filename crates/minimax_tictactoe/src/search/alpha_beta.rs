//! Minimax with alpha-beta pruning, in flat and depth-aware flavours.

use super::{Choice, INFINITY, MaxPly, Scoring, SearchContext, Strategy};
use crate::board::Board;
use crate::error::GameError;
use crate::types::Player;
use tracing::{debug, instrument};

/// Alpha-beta search.
///
/// The maximizer only records a move that strictly raises alpha and the
/// minimizer one that strictly lowers beta, so among equal scores the first
/// move evaluated (lowest index) wins. If nothing beats the inherited
/// bound, the first candidate is kept so a move is always produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBeta {
    scoring: Scoring,
}

impl AlphaBeta {
    /// Alpha-beta with flat `+10` / `-10` / `0` scoring.
    pub fn pruning() -> Self {
        Self {
            scoring: Scoring::Flat,
        }
    }

    /// Alpha-beta with depth-aware scoring: prefers the fastest win and the
    /// slowest loss.
    pub fn advanced() -> Self {
        Self {
            scoring: Scoring::DepthAware,
        }
    }

    /// Returns the terminal scoring in use.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::pruning()
    }
}

impl Strategy for AlphaBeta {
    #[instrument(skip(self, board), fields(scoring = ?self.scoring, move_count = board.move_count()))]
    fn choose(
        &mut self,
        board: &Board,
        player: Player,
        max_ply: MaxPly,
    ) -> Result<Choice, GameError> {
        if board.is_game_over() {
            return Err(GameError::GameOver);
        }

        let ctx = SearchContext::new(player, max_ply, self.scoring);
        let choice = best_move(&ctx, board, -INFINITY, INFINITY, 1)?;
        debug!(
            index = choice.index,
            score = choice.score,
            nodes = ctx.nodes.get(),
            "Alpha-beta chose move"
        );
        Ok(choice)
    }
}

fn value(
    ctx: &SearchContext,
    board: &Board,
    alpha: i32,
    beta: i32,
    ply: u32,
) -> Result<i32, GameError> {
    if let Some(score) = ctx.terminal(board, ply) {
        return Ok(score);
    }
    Ok(best_move(ctx, board, alpha, beta, ply + 1)?.score)
}

fn best_move(
    ctx: &SearchContext,
    board: &Board,
    mut alpha: i32,
    mut beta: i32,
    ply: u32,
) -> Result<Choice, GameError> {
    let maximizing = board.turn() == ctx.player;
    let mut best_index = None;

    for index in board.available_moves() {
        let child = SearchContext::child(board, index)?;
        let score = value(ctx, &child, alpha, beta, ply)?;

        if maximizing {
            if score > alpha {
                alpha = score;
                best_index = Some(index);
            }
        } else if score < beta {
            beta = score;
            best_index = Some(index);
        }
        if best_index.is_none() {
            best_index = Some(index);
        }

        if alpha >= beta {
            break;
        }
    }

    let index = best_index.ok_or(GameError::NoLegalMove)?;
    Ok(Choice::new(index, if maximizing { alpha } else { beta }))
}
