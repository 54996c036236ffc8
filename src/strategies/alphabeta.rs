//! Minimax with alpha-beta pruning
//!
//! Returns the same root score and move as [`MinimaxStrategy`](super::MinimaxStrategy)
//! for the same heuristic and depth while visiting fewer nodes. Moves are
//! ordered corners first, X-squares last, which is where cutoffs pay off most
//! on an Othello board. Ties at the root still go to the lowest square index so
//! both searches agree on the chosen move.
//!
//! # Example
//!
//! ```
//! use othello::{Board, Color};
//! use othello::strategies::{AlphaBetaStrategy, Heuristic, Strategy};
//!
//! let mut searcher = AlphaBetaStrategy::new(Heuristic::Complex, 4);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Color::Black);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Color, Pos, CORNERS, X_SQUARES};

use super::{evaluate, improves, next_to_move, play, take_back, worst_for, Heuristic};
use super::{SearchResult, Strategy};

/// Alpha-beta searcher with corner-first move ordering
#[derive(Debug, Clone)]
pub struct AlphaBetaStrategy {
    heuristic: Heuristic,
    depth: u8,
    nodes: u64,
    cutoffs: u64,
}

impl AlphaBetaStrategy {
    pub fn new(heuristic: Heuristic, depth: u8) -> Self {
        Self {
            heuristic,
            depth: depth.max(1),
            nodes: 0,
            cutoffs: 0,
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Beta/alpha cutoffs taken during the last search
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    fn alphabeta(
        &mut self,
        board: &mut Board,
        to_move: Color,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.game_ended {
            return evaluate(board, self.heuristic);
        }

        if !board.has_valid_move(to_move) {
            return self.alphabeta(board, to_move.opponent(), depth - 1, alpha, beta);
        }

        let mut best = worst_for(to_move);
        for pos in ordered_moves(board, to_move) {
            let command = play(board, to_move, pos);
            let next = next_to_move(board, to_move);
            let score = self.alphabeta(board, next, depth - 1, alpha, beta);
            take_back(board, command);

            if improves(to_move, score, best) {
                best = score;
            }

            if to_move == Color::White {
                beta = beta.min(best);
            } else {
                alpha = alpha.max(best);
            }
            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        best
    }
}

impl Strategy for AlphaBetaStrategy {
    fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;

        let moves = board.valid_moves(color);
        if moves.is_empty() || board.game_ended {
            return SearchResult::no_move(evaluate(board, self.heuristic));
        }

        let mut work_board = board.clone();
        let mut best_move: Option<Pos> = None;
        let mut best_score = worst_for(color);
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;

        // Root keeps index order: a bound equal to the best never replaces it
        for pos in moves.iter_ones() {
            let command = play(&mut work_board, color, pos);
            let next = next_to_move(&work_board, color);
            let score = self.alphabeta(&mut work_board, next, self.depth - 1, alpha, beta);
            take_back(&mut work_board, command);

            if best_move.is_none() || improves(color, score, best_score) {
                best_score = score;
                best_move = Some(pos);
            }

            if color == Color::White {
                beta = beta.min(best_score);
            } else {
                alpha = alpha.max(best_score);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth: self.depth,
            nodes: self.nodes,
        }
    }
}

/// Valid moves for `color`, corners first and X-squares last
fn ordered_moves(board: &Board, color: Color) -> Vec<Pos> {
    let mut moves: Vec<Pos> = board.valid_moves(color).iter_ones().collect();
    moves.sort_by_key(|&pos| {
        if CORNERS.get(pos) {
            0
        } else if X_SQUARES.get(pos) {
            2
        } else {
            1
        }
    });
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::strategies::MinimaxStrategy;

    fn play_line(moves: &[(Color, u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(color, row, col) in moves {
            Command::new(color, Pos::new(row, col))
                .execute(&mut board)
                .unwrap();
        }
        board
    }

    fn sample_positions() -> Vec<(Board, Color)> {
        vec![
            (Board::new(), Color::Black),
            (play_line(&[(Color::Black, 3, 5)]), Color::White),
            (
                play_line(&[
                    (Color::Black, 3, 5),
                    (Color::White, 2, 5),
                    (Color::Black, 2, 4),
                ]),
                Color::White,
            ),
        ]
    }

    #[test]
    fn test_matches_minimax() {
        for heuristic in Heuristic::ALL {
            for (board, color) in sample_positions() {
                let mut minimax = MinimaxStrategy::new(heuristic, 3);
                let mut alphabeta = AlphaBetaStrategy::new(heuristic, 3);

                let expected = minimax.search(&board, color);
                let actual = alphabeta.search(&board, color);

                assert_eq!(actual.score, expected.score, "{heuristic:?}");
                assert_eq!(actual.best_move, expected.best_move, "{heuristic:?}");
                assert!(actual.nodes <= expected.nodes);
            }
        }
    }

    #[test]
    fn test_prunes_at_depth() {
        let board = Board::new();
        let mut minimax = MinimaxStrategy::new(Heuristic::Mobility, 4);
        let mut alphabeta = AlphaBetaStrategy::new(Heuristic::Mobility, 4);

        let full = minimax.search(&board, Color::Black).nodes;
        let pruned = alphabeta.search(&board, Color::Black).nodes;
        assert!(pruned < full, "pruned={pruned} full={full}");
        assert!(alphabeta.cutoffs() > 0);
    }

    #[test]
    fn test_takes_available_corner() {
        // White can take a1 by flanking along the top edge
        let mut board = Board::new();
        board.set_disk(Pos::new(0, 1), Color::Black);
        board.set_disk(Pos::new(0, 2), Color::White);
        board.refresh();
        assert!(board.is_valid_move(Pos::new(0, 0), Color::White));

        let mut searcher = AlphaBetaStrategy::new(Heuristic::MobilityCorners, 2);
        assert_eq!(searcher.choose_move(&board, Color::White), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_ordered_moves_puts_corners_first() {
        let mut board = Board::new();
        board.set_disk(Pos::new(0, 1), Color::Black);
        board.set_disk(Pos::new(0, 2), Color::White);
        board.refresh();

        let moves = ordered_moves(&board, Color::White);
        assert_eq!(moves[0], Pos::new(0, 0));
    }
}
