//! The tic-tac-toe board: cell storage, turn order and win/draw detection.

use crate::error::GameError;
use crate::types::{BOARD_WIDTH, CELL_COUNT, Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Set of open board indices (0-8).
///
/// Iterates in ascending index order. The searches rely on this order for
/// their tie-breaks, so it is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSet {
    bits: u16,
}

impl MoveSet {
    const FULL: u16 = (1 << CELL_COUNT) - 1;

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Creates a set containing every index on the board.
    pub fn full() -> Self {
        Self { bits: Self::FULL }
    }

    /// Checks whether `index` is in the set.
    pub fn contains(&self, index: usize) -> bool {
        index < CELL_COUNT && self.bits & (1 << index) != 0
    }

    /// Number of indices in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates over the indices in ascending order.
    pub fn iter(&self) -> MoveSetIter {
        MoveSetIter { bits: self.bits }
    }

    fn remove(&mut self, index: usize) {
        self.bits &= !(1 << index);
    }
}

impl IntoIterator for MoveSet {
    type Item = usize;
    type IntoIter = MoveSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &MoveSet {
    type Item = usize;
    type IntoIter = MoveSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`MoveSet`].
#[derive(Debug, Clone)]
pub struct MoveSetIter {
    bits: u16,
}

impl Iterator for MoveSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for MoveSetIter {}

/// 3x3 tic-tac-toe board.
///
/// Moves are addressed by linear index, with `x = index % 3` and
/// `y = index / 3`. Cloning produces a fully independent board, which is
/// what the searches use to explore hypothetical futures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells stored as `grid[y][x]`.
    grid: [[Cell; BOARD_WIDTH]; BOARD_WIDTH],
    /// Player to move next.
    turn: Player,
    /// Winner, meaningful only once the game is over. `None` means draw.
    winner: Option<Player>,
    /// Indices not yet played.
    available: MoveSet,
    /// Number of accepted moves.
    move_count: usize,
    /// Set once the game is won or drawn; cleared only by `reset`.
    game_over: bool,
}

impl Board {
    /// Creates a new blank board with X to move.
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Blank; BOARD_WIDTH]; BOARD_WIDTH],
            turn: Player::X,
            winner: None,
            available: MoveSet::full(),
            move_count: 0,
            game_over: false,
        }
    }

    /// Restarts the game on this board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Places the current player's mark at `index`.
    ///
    /// Returns `Ok(false)` without changing anything if the cell is already
    /// taken. Indices outside 0-8 are rejected the same way; callers are
    /// expected to range-check human input before getting here.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has already ended.
    #[instrument(level = "trace", skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, index: usize) -> Result<bool, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }

        if index >= CELL_COUNT {
            trace!(index, "Index off the board");
            return Ok(false);
        }

        let (x, y) = (index % BOARD_WIDTH, index / BOARD_WIDTH);
        if !self.grid[y][x].is_blank() {
            return Ok(false);
        }

        let mark = Cell::Occupied(self.turn);
        self.grid[y][x] = mark;
        self.move_count += 1;
        self.available.remove(index);

        if self.move_count == CELL_COUNT {
            self.winner = None;
            self.game_over = true;
        }

        // A line completed on the last move overrides the draw above.
        let last = BOARD_WIDTH - 1;
        let won = self.line_is(mark, |i| (i, y))
            || self.line_is(mark, |i| (x, i))
            || (x == y && self.line_is(mark, |i| (i, i)))
            || (last - x == y && self.line_is(mark, |i| (i, last - i)));
        if won {
            self.winner = Some(self.turn);
            self.game_over = true;
        }

        self.turn = self.turn.opponent();
        Ok(true)
    }

    fn line_is(&self, mark: Cell, coord: impl Fn(usize) -> (usize, usize)) -> bool {
        (0..BOARD_WIDTH).all(|i| {
            let (x, y) = coord(i);
            self.grid[y][x] == mark
        })
    }

    /// Checks if the game is over (won or drawn).
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the number of moves played so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the outcome of a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameInProgress`] if the game is still going.
    pub fn winner(&self) -> Result<Outcome, GameError> {
        if !self.game_over {
            return Err(GameError::GameInProgress);
        }
        Ok(match self.winner {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw,
        })
    }

    /// Returns the open indices.
    pub fn available_moves(&self) -> MoveSet {
        self.available
    }

    /// Returns the cell at `index`, or `None` if it is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        (index < CELL_COUNT).then(|| self.grid[index / BOARD_WIDTH][index % BOARD_WIDTH])
    }

    /// Returns a copy of the grid, indexed `[y][x]`.
    pub fn to_array(&self) -> [[Cell; BOARD_WIDTH]; BOARD_WIDTH] {
        self.grid
    }

    /// Returns an independent copy of this board.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.grid.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            if y != BOARD_WIDTH - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
