//! Computer opponents
//!
//! Contains:
//! - [`Utility`]: board evaluation under a selectable [`Heuristic`]
//! - [`MinimaxStrategy`]: plain fixed-depth minimax
//! - [`AlphaBetaStrategy`]: minimax with alpha-beta pruning
//! - [`RandomStrategy`]: uniformly random valid move
//! - [`Difficulty`]: preset strategy choices for the menu
//!
//! All searches share one convention: scores are Black minus White, so Black
//! maximizes and White minimizes.

pub mod alphabeta;
pub mod difficulty;
pub mod minimax;
pub mod random;
pub mod utility;

pub use alphabeta::AlphaBetaStrategy;
pub use difficulty::{Difficulty, StrategyKind};
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;
pub use utility::{evaluate, Heuristic, Utility, WIN_SCORE};

use crate::board::{Board, Color, Pos};
use crate::command::Command;

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no valid move
    pub best_move: Option<Pos>,
    /// Utility of the best line (Black minus White)
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Nodes visited
    pub nodes: u64,
}

impl SearchResult {
    pub fn no_move(score: i32) -> Self {
        Self {
            best_move: None,
            score,
            depth: 0,
            nodes: 0,
        }
    }
}

/// A way of picking a move for the side to move
pub trait Strategy: Send {
    /// Search the position and report the chosen move with statistics
    fn search(&mut self, board: &Board, color: Color) -> SearchResult;

    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Pos> {
        self.search(board, color).best_move
    }
}

/// Whether `score` should replace `best` for the side `color`.
/// Strict comparison keeps the earliest move on ties.
#[inline]
pub(crate) fn improves(color: Color, score: i32, best: i32) -> bool {
    match color {
        Color::White => score < best,
        _ => score > best,
    }
}

/// Worst possible score for the side `color`, used to seed a search
#[inline]
pub(crate) fn worst_for(color: Color) -> i32 {
    match color {
        Color::White => i32::MAX,
        _ => i32::MIN,
    }
}

/// Side to move after `mover` has played on `board`: the opponent, unless it
/// must pass.
#[inline]
pub(crate) fn next_to_move(board: &Board, mover: Color) -> Color {
    let opponent = mover.opponent();
    if board.has_valid_move(opponent) {
        opponent
    } else {
        mover
    }
}

/// Play `pos` for `color` on the search board. The returned command undoes it.
#[inline]
pub(crate) fn play(board: &mut Board, color: Color, pos: Pos) -> Command {
    let mut command = Command::new(color, pos);
    // Moves come from `valid_moves`, so execution cannot fail
    let executed = command.execute(board);
    debug_assert!(executed.is_ok(), "search tried an invalid move {pos}");
    command
}

#[inline]
pub(crate) fn take_back(board: &mut Board, mut command: Command) {
    let undone = command.undo(board);
    debug_assert!(undone.is_ok());
}
