use rand::seq::IteratorRandom;

use crate::board::{Board, Color, Pos};

use super::{evaluate, Heuristic, SearchResult, Strategy};

/// Plays a uniformly random valid move
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        let mut rng = rand::thread_rng();
        let best_move: Option<Pos> = board.valid_moves(color).iter_ones().choose(&mut rng);

        SearchResult {
            best_move,
            score: evaluate(board, Heuristic::ScoreDiff),
            depth: 0,
            nodes: 1,
        }
    }
}
