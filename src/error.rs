//! Error type shared by the board, command history and controller

use crate::board::{Color, Pos};

/// Errors raised when a game action cannot be carried out
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The destination is occupied or flanks no opposing disk
    #[error("illegal move at {0}")]
    IllegalMove(Pos),

    #[error("position out of bounds: ({row}, {col})")]
    OutOfBounds { row: i32, col: i32 },

    #[error("{} has no valid move", .0.name())]
    NoValidMove(Color),

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    AiThinking,

    #[error("command was already executed")]
    AlreadyExecuted,

    #[error("command was never executed")]
    NotExecuted,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}
