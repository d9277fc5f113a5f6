//! Error types for board operations and searches.

/// Broad category of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// The operation is not allowed in the board's current state.
    IllegalState,
    /// An argument was out of its accepted range.
    InvalidArgument,
}

/// Error that can occur when playing on a board or searching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The game is already over, no moves can be played.
    #[display("Game is already over. No moves can be played.")]
    GameOver,

    /// The winner was requested before the game ended.
    #[display("Game is not over yet")]
    GameInProgress,

    /// A search found no playable move on an unfinished board.
    #[display("Search produced no legal move")]
    NoLegalMove,

    /// A depth limit below one ply was requested.
    #[display("Maximum depth must be greater than 0, got {}", max_ply)]
    InvalidMaxPly {
        /// The rejected limit.
        max_ply: u32,
    },
}

impl GameError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::GameOver | GameError::GameInProgress | GameError::NoLegalMove => {
                ErrorKind::IllegalState
            }
            GameError::InvalidMaxPly { .. } => ErrorKind::InvalidArgument,
        }
    }
}

impl std::error::Error for GameError {}
