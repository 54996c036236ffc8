//! Fixed-depth minimax search
//!
//! Black maximizes and White minimizes the [`Utility`](super::Utility) value.
//! A side without a valid move passes; the pass still costs one ply so the
//! recursion is bounded by the depth alone.

use crate::board::{Board, Color};

use super::{evaluate, improves, next_to_move, play, take_back, worst_for, Heuristic};
use super::{SearchResult, Strategy};

/// Plain minimax over the full game tree up to `depth` plies
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    heuristic: Heuristic,
    depth: u8,
    nodes: u64,
}

impl MinimaxStrategy {
    pub fn new(heuristic: Heuristic, depth: u8) -> Self {
        Self {
            heuristic,
            depth: depth.max(1),
            nodes: 0,
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    fn minimax(&mut self, board: &mut Board, to_move: Color, depth: u8) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.game_ended {
            return evaluate(board, self.heuristic);
        }

        let moves = board.valid_moves(to_move);
        if moves.is_empty() {
            return self.minimax(board, to_move.opponent(), depth - 1);
        }

        let mut best = worst_for(to_move);
        for pos in moves.iter_ones() {
            let command = play(board, to_move, pos);
            let next = next_to_move(board, to_move);
            let score = self.minimax(board, next, depth - 1);
            take_back(board, command);

            if improves(to_move, score, best) {
                best = score;
            }
        }

        best
    }
}

impl Strategy for MinimaxStrategy {
    fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;

        let moves = board.valid_moves(color);
        if moves.is_empty() || board.game_ended {
            return SearchResult::no_move(evaluate(board, self.heuristic));
        }

        let mut work_board = board.clone();
        let mut best_move = None;
        let mut best_score = worst_for(color);

        for pos in moves.iter_ones() {
            let command = play(&mut work_board, color, pos);
            let next = next_to_move(&work_board, color);
            let score = self.minimax(&mut work_board, next, self.depth - 1);
            take_back(&mut work_board, command);

            if best_move.is_none() || improves(color, score, best_score) {
                best_score = score;
                best_move = Some(pos);
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
