//! Move-selection strategies.
//!
//! Every strategy is a pure function of `(board, player, max_ply)`: it
//! explores copies of the board and returns the [`Choice`] it would play,
//! leaving the caller's board untouched. Committing the move is left to the
//! caller (see [`crate::algorithms`]).
//!
//! Tie-breaks differ between the searches. [`Minimax`] keeps the *last* of
//! equally scored moves (`>=` / `<=`), while [`AlphaBeta`] keeps the *first*
//! strict improvement (`>` / `<`). Both behaviors are observable in move
//! selection and are kept as they are, although the asymmetry is probably
//! an accident of history rather than a deliberate choice.

mod alpha_beta;
mod minimax;
mod random;

pub use alpha_beta::AlphaBeta;
pub use minimax::Minimax;
pub use random::RandomMove;

use crate::board::Board;
use crate::error::GameError;
use crate::types::{Outcome, Player};
use std::cell::Cell;
use std::num::NonZeroU32;

/// Score of a won position before any depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Sentinel bound for alpha-beta windows.
pub(crate) const INFINITY: i32 = i32::MAX;

/// A selected move and the score the strategy assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Choice {
    /// Board index of the move (0-8).
    pub index: usize,
    /// Score of the move from the optimised player's point of view.
    pub score: i32,
}

/// Maximum search depth in plies.
///
/// A limit is always at least one ply, so a search can never be asked to
/// stop before looking at a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaxPly(Option<NonZeroU32>);

impl MaxPly {
    /// Search until the game ends.
    pub const UNBOUNDED: Self = Self(None);

    /// Creates a depth limit of `max_ply` plies.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMaxPly`] if `max_ply` is zero.
    pub fn limited(max_ply: u32) -> Result<Self, GameError> {
        NonZeroU32::new(max_ply)
            .map(|n| Self(Some(n)))
            .ok_or(GameError::InvalidMaxPly { max_ply })
    }

    /// Returns the limit, or `None` when unbounded.
    pub fn get(self) -> Option<u32> {
        self.0.map(NonZeroU32::get)
    }

    fn reached(self, ply: u32) -> bool {
        self.get() == Some(ply)
    }
}

impl TryFrom<Option<u32>> for MaxPly {
    type Error = GameError;

    fn try_from(max_ply: Option<u32>) -> Result<Self, Self::Error> {
        max_ply.map_or(Ok(Self::UNBOUNDED), Self::limited)
    }
}

/// A way of picking one move for `player` on `board`.
pub trait Strategy {
    /// Chooses a move without modifying `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if `board` is already finished.
    fn choose(&mut self, board: &Board, player: Player, max_ply: MaxPly)
    -> Result<Choice, GameError>;
}

/// How terminal positions are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scoring {
    /// `+10` / `-10` / `0`, regardless of how deep the result lies.
    Flat,
    /// `10 - ply` for a win and `-(10 - ply)` for a loss, so that faster
    /// wins and slower losses are preferred.
    DepthAware,
}

impl Scoring {
    /// Scores `board` for `player` at `ply` (counted from 1 at the root's
    /// own move onwards).
    pub fn score(self, board: &Board, player: Player, ply: u32) -> i32 {
        let reward = match self {
            Scoring::Flat => WIN_SCORE,
            Scoring::DepthAware => WIN_SCORE - ply as i32,
        };
        match board.winner() {
            Ok(Outcome::Winner(winner)) if winner == player => reward,
            Ok(Outcome::Winner(_)) => -reward,
            Ok(Outcome::Draw) | Err(_) => 0,
        }
    }
}

/// Per-call search parameters, threaded through the recursion.
#[derive(Debug)]
struct SearchContext {
    player: Player,
    max_ply: MaxPly,
    scoring: Scoring,
    nodes: Cell<u64>,
}

impl SearchContext {
    fn new(player: Player, max_ply: MaxPly, scoring: Scoring) -> Self {
        Self {
            player,
            max_ply,
            scoring,
            nodes: Cell::new(0),
        }
    }

    /// Returns the terminal score if the search stops at this node.
    fn terminal(&self, board: &Board, ply: u32) -> Option<i32> {
        self.nodes.set(self.nodes.get() + 1);
        (self.max_ply.reached(ply) || board.is_game_over())
            .then(|| self.scoring.score(board, self.player, ply + 1))
    }

    /// Copies `board` and plays `index` on the copy.
    fn child(board: &Board, index: usize) -> Result<Board, GameError> {
        let mut child = board.deep_copy();
        if !child.play(index)? {
            return Err(GameError::NoLegalMove);
        }
        Ok(child)
    }
}
