//! Exhaustive (optionally depth-limited) minimax.

use super::{Choice, MaxPly, Scoring, SearchContext, Strategy};
use crate::board::Board;
use crate::error::GameError;
use crate::types::Player;
use tracing::{debug, instrument};

/// Plain minimax with flat `+10` / `-10` / `0` scoring.
///
/// Among equally scored moves the one evaluated last (highest index) wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Strategy for Minimax {
    #[instrument(skip(self, board), fields(move_count = board.move_count()))]
    fn choose(
        &mut self,
        board: &Board,
        player: Player,
        max_ply: MaxPly,
    ) -> Result<Choice, GameError> {
        if board.is_game_over() {
            return Err(GameError::GameOver);
        }

        let ctx = SearchContext::new(player, max_ply, Scoring::Flat);
        let choice = best_move(&ctx, board, 1)?;
        debug!(
            index = choice.index,
            score = choice.score,
            nodes = ctx.nodes.get(),
            "Minimax chose move"
        );
        Ok(choice)
    }
}

fn value(ctx: &SearchContext, board: &Board, ply: u32) -> Result<i32, GameError> {
    if let Some(score) = ctx.terminal(board, ply) {
        return Ok(score);
    }
    Ok(best_move(ctx, board, ply + 1)?.score)
}

fn best_move(ctx: &SearchContext, board: &Board, ply: u32) -> Result<Choice, GameError> {
    let maximizing = board.turn() == ctx.player;
    let mut best: Option<Choice> = None;

    for index in board.available_moves() {
        let child = SearchContext::child(board, index)?;
        let score = value(ctx, &child, ply)?;

        let keep = match best {
            None => true,
            Some(b) if maximizing => score >= b.score,
            Some(b) => score <= b.score,
        };
        if keep {
            best = Some(Choice::new(index, score));
        }
    }

    best.ok_or(GameError::NoLegalMove)
}
