//! Entry points that pick a move for whoever is to play and commit it.
//!
//! Each function optimises for `board.turn()`, not for a fixed side, and
//! plays exactly one move on `board` before returning. A depth limit of
//! `None` searches to the end of the game.

use crate::board::Board;
use crate::error::GameError;
use crate::search::{AlphaBeta, Choice, MaxPly, Minimax, RandomMove, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Plays a uniformly random open cell.
///
/// # Errors
///
/// Returns [`GameError::GameOver`] if the game has already ended.
#[instrument(skip(board))]
pub fn random(board: &mut Board) -> Result<Choice, GameError> {
    play_with(board, RandomMove::new(), MaxPly::UNBOUNDED)
}

/// Plays the move chosen by plain minimax.
///
/// # Errors
///
/// Returns [`GameError::InvalidMaxPly`] for a limit of zero and
/// [`GameError::GameOver`] if the game has already ended.
#[instrument(skip(board))]
pub fn minimax(board: &mut Board, max_ply: Option<u32>) -> Result<Choice, GameError> {
    let max_ply = MaxPly::try_from(max_ply)?;
    play_with(board, Minimax, max_ply)
}

/// Plays the move chosen by alpha-beta pruning.
///
/// # Errors
///
/// Returns [`GameError::InvalidMaxPly`] for a limit of zero and
/// [`GameError::GameOver`] if the game has already ended.
#[instrument(skip(board))]
pub fn alpha_beta_pruning(board: &mut Board, max_ply: Option<u32>) -> Result<Choice, GameError> {
    let max_ply = MaxPly::try_from(max_ply)?;
    play_with(board, AlphaBeta::pruning(), max_ply)
}

/// Plays the move chosen by alpha-beta pruning with depth-aware scoring.
///
/// # Errors
///
/// Returns [`GameError::InvalidMaxPly`] for a limit of zero and
/// [`GameError::GameOver`] if the game has already ended.
#[instrument(skip(board))]
pub fn alpha_beta_advanced(board: &mut Board, max_ply: Option<u32>) -> Result<Choice, GameError> {
    let max_ply = MaxPly::try_from(max_ply)?;
    play_with(board, AlphaBeta::advanced(), max_ply)
}

/// Lets `strategy` choose a move for the player to move and commits it.
///
/// # Errors
///
/// Propagates the strategy's errors. Returns [`GameError::NoLegalMove`] if
/// the chosen cell turns out to be taken.
pub fn play_with(
    board: &mut Board,
    mut strategy: impl Strategy,
    max_ply: MaxPly,
) -> Result<Choice, GameError> {
    let player = board.turn();
    let choice = strategy.choose(board, player, max_ply)?;
    if !board.play(choice.index)? {
        return Err(GameError::NoLegalMove);
    }
    info!(%player, index = choice.index, score = choice.score, "Move played");
    Ok(choice)
}

/// The available move-selection algorithms.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Algorithm {
    /// Uniformly random open cell.
    Random,
    /// Exhaustive minimax.
    Minimax,
    /// Alpha-beta pruning with flat scoring.
    AlphaBetaPruning,
    /// Alpha-beta pruning preferring fast wins and slow losses.
    #[default]
    AlphaBetaAdvanced,
}

impl Algorithm {
    /// Plays one move on `board` with this algorithm.
    ///
    /// `max_ply` is ignored by [`Algorithm::Random`].
    ///
    /// # Errors
    ///
    /// See the matching free function.
    pub fn play(self, board: &mut Board, max_ply: Option<u32>) -> Result<Choice, GameError> {
        match self {
            Algorithm::Random => random(board),
            Algorithm::Minimax => minimax(board, max_ply),
            Algorithm::AlphaBetaPruning => alpha_beta_pruning(board, max_ply),
            Algorithm::AlphaBetaAdvanced => alpha_beta_advanced(board, max_ply),
        }
    }

    /// Checks whether this algorithm searches the game tree.
    pub fn is_search(self) -> bool {
        !matches!(self, Algorithm::Random)
    }
}
