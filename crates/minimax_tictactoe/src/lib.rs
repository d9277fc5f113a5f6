//! Tic-tac-toe engine with exhaustive game-tree search.
//!
//! # Architecture
//!
//! - **Board**: cell storage, turn order, win/draw detection
//! - **Search**: random, minimax, alpha-beta and depth-aware alpha-beta
//!   strategies, each a pure function of the board
//! - **Algorithms**: entry points that pick a move for the player to move
//!   and commit it to the board
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Outcome, algorithms};
//!
//! # fn example() -> Result<(), minimax_tictactoe::GameError> {
//! let mut board = Board::new();
//! while !board.is_game_over() {
//!     algorithms::alpha_beta_pruning(&mut board, None)?;
//! }
//! assert_eq!(board.winner()?, Outcome::Draw);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod algorithms;
mod board;
mod error;
pub mod search;
mod types;

// Crate-level exports - Board
pub use board::{Board, MoveSet, MoveSetIter};

// Crate-level exports - Errors
pub use error::{ErrorKind, GameError};

// Crate-level exports - Domain types
pub use types::{BOARD_WIDTH, CELL_COUNT, Cell, Outcome, Player};

// Crate-level exports - Search
pub use algorithms::Algorithm;
pub use search::{AlphaBeta, Choice, MaxPly, Minimax, RandomMove, Scoring, Strategy};
