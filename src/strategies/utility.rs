//! Board evaluation for the minimax search
//!
//! Every heuristic scores the board from Black's point of view: positive
//! values favour Black, negative values favour White. Finished games bypass
//! the heuristic and score [`WIN_SCORE`], `-WIN_SCORE` or 0, which dominates
//! any value an unfinished board can reach.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

/// Score of a finished game won by Black
pub const WIN_SCORE: i32 = 10_000;

const CORNER_WEIGHT: i32 = 50;
const C_SQUARE_PENALTY: i32 = 5;
const X_SQUARE_PENALTY: i32 = 20;

/// Selectable evaluation functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Disk count difference
    ScoreDiff,
    /// Corners owned
    Corners,
    /// Number of valid moves
    #[default]
    Mobility,
    /// Mobility plus corners
    MobilityCorners,
    /// Mobility minus C-squares
    MobilityCSquares,
    /// Mobility minus X-squares
    MobilityXSquares,
    /// Mobility, corners, C-squares and X-squares combined
    Complex,
}

impl Heuristic {
    pub const ALL: [Heuristic; 7] = [
        Heuristic::ScoreDiff,
        Heuristic::Corners,
        Heuristic::Mobility,
        Heuristic::MobilityCorners,
        Heuristic::MobilityCSquares,
        Heuristic::MobilityXSquares,
        Heuristic::Complex,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Heuristic::ScoreDiff => "Score difference",
            Heuristic::Corners => "Corners",
            Heuristic::Mobility => "Mobility",
            Heuristic::MobilityCorners => "Mobility + corners",
            Heuristic::MobilityCSquares => "Mobility - C-squares",
            Heuristic::MobilityXSquares => "Mobility - X-squares",
            Heuristic::Complex => "Weighted combination",
        }
    }
}

/// Utility of one board under a chosen heuristic
#[derive(Debug, Clone, Copy)]
pub struct Utility<'a> {
    board: &'a Board,
}

impl<'a> Utility<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Evaluate the board. Black minus White.
    #[must_use]
    pub fn value(&self, heuristic: Heuristic) -> i32 {
        if self.board.game_ended {
            return self.game_ended();
        }

        let term: fn(&Board, Color) -> i32 = match heuristic {
            Heuristic::ScoreDiff => Self::disks,
            Heuristic::Corners => Self::corners,
            Heuristic::Mobility => Self::mobility,
            Heuristic::MobilityCorners => Self::mobility_corners,
            Heuristic::MobilityCSquares => Self::mobility_c_squares,
            Heuristic::MobilityXSquares => Self::mobility_x_squares,
            Heuristic::Complex => Self::complex,
        };

        term(self.board, Color::Black) - term(self.board, Color::White)
    }

    /// Terminal score: Black win, White win or draw
    #[must_use]
    pub fn game_ended(&self) -> i32 {
        match self.board.winner {
            Color::Black => WIN_SCORE,
            Color::White => -WIN_SCORE,
            Color::None => 0,
        }
    }

    fn disks(board: &Board, color: Color) -> i32 {
        board.score(color) as i32
    }

    fn corners(board: &Board, color: Color) -> i32 {
        board.corners_owned(color)
    }

    fn mobility(board: &Board, color: Color) -> i32 {
        board.valid_moves(color).count() as i32
    }

    fn mobility_corners(board: &Board, color: Color) -> i32 {
        Self::mobility(board, color) + CORNER_WEIGHT * board.corners_owned(color)
    }

    fn mobility_c_squares(board: &Board, color: Color) -> i32 {
        Self::mobility(board, color) - C_SQUARE_PENALTY * board.c_squares_owned(color)
    }

    fn mobility_x_squares(board: &Board, color: Color) -> i32 {
        Self::mobility(board, color) - X_SQUARE_PENALTY * board.x_squares_owned(color)
    }

    fn complex(board: &Board, color: Color) -> i32 {
        Self::mobility(board, color) - C_SQUARE_PENALTY * board.c_squares_owned(color)
            - X_SQUARE_PENALTY * board.x_squares_owned(color)
            + CORNER_WEIGHT * board.corners_owned(color)
    }
}

/// Shorthand for `Utility::new(board).value(heuristic)`
#[inline]
#[must_use]
pub fn evaluate(board: &Board, heuristic: Heuristic) -> i32 {
    Utility::new(board).value(heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    /// Black holds a1 and b2, White holds h8 and g8; the middle keeps both sides mobile.
    fn positional_board() -> Board {
        let mut board = Board::new();
        board.set_disk(Pos::new(0, 0), Color::Black);
        board.set_disk(Pos::new(1, 1), Color::Black);
        board.set_disk(Pos::new(7, 7), Color::White);
        board.set_disk(Pos::new(7, 6), Color::White);
        board.refresh();
        board
    }

    #[test]
    fn test_initial_board_is_balanced() {
        let board = Board::new();
        for heuristic in Heuristic::ALL {
            assert_eq!(evaluate(&board, heuristic), 0, "{heuristic:?}");
        }
    }

    #[test]
    fn test_score_diff() {
        let mut board = Board::new();
        board.set_disk(Pos::new(0, 0), Color::Black);
        board.refresh();
        assert_eq!(evaluate(&board, Heuristic::ScoreDiff), 1);
    }

    #[test]
    fn test_positional_terms() {
        let board = positional_board();
        let mobility = board.valid_moves(Color::Black).count() as i32
            - board.valid_moves(Color::White).count() as i32;

        assert_eq!(evaluate(&board, Heuristic::Corners), 0);
        assert_eq!(evaluate(&board, Heuristic::Mobility), mobility);
        assert_eq!(evaluate(&board, Heuristic::MobilityCorners), mobility);
        // White's g8 is a C-square
        assert_eq!(evaluate(&board, Heuristic::MobilityCSquares), mobility + 5);
        // Black's b2 is an X-square
        assert_eq!(evaluate(&board, Heuristic::MobilityXSquares), mobility - 20);
        assert_eq!(evaluate(&board, Heuristic::Complex), mobility + 5 - 20);
    }

    #[test]
    fn test_corner_weight() {
        let mut board = Board::new();
        board.set_disk(Pos::new(0, 7), Color::Black);
        board.refresh();
        let mobility = evaluate(&board, Heuristic::Mobility);

        assert_eq!(evaluate(&board, Heuristic::Corners), 1);
        assert_eq!(evaluate(&board, Heuristic::MobilityCorners), mobility + 50);
        assert_eq!(evaluate(&board, Heuristic::Complex), mobility + 50);
    }

    #[test]
    fn test_game_ended_dominates() {
        let black_wins = Board::from_bitboards(0b111, 0);
        assert!(black_wins.game_ended);
        for heuristic in Heuristic::ALL {
            assert_eq!(evaluate(&black_wins, heuristic), WIN_SCORE);
        }

        let white_wins = Board::from_bitboards(0, 0b11);
        assert_eq!(evaluate(&white_wins, Heuristic::Complex), -WIN_SCORE);

        let draw = Board::from_bitboards(1, 1 << 63);
        assert_eq!(Utility::new(&draw).value(Heuristic::ScoreDiff), 0);
    }
}
