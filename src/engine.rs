//! Main AI engine wrapping the configured strategy
//!
//! The engine answers "which move should this side play?" and reports how the
//! answer was obtained:
//!
//! 1. **No move**: the side must pass
//! 2. **Forced**: exactly one valid move, returned without searching
//! 3. **Search**: the configured [`StrategyKind`] (random, minimax or alpha-beta)
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Color, Difficulty};
//!
//! let mut engine = AIEngine::new(Difficulty::Hard);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Color::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Color, Pos};
use crate::strategies::{evaluate, Difficulty, Heuristic, SearchResult, Strategy, StrategyKind};

/// Type of search that produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Only one valid move existed
    Forced,
    /// Random strategy
    Random,
    /// Plain minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

/// Result of a move search with detailed statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Utility of the best line, Black minus White
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn forced(pos: Option<Pos>, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score,
            search_type: SearchType::Forced,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Computer player
///
/// Holds a [`StrategyKind`] and instantiates the matching [`Strategy`].
/// Cheap to construct, so the controller builds a fresh one per AI turn
/// and moves it to a worker thread.
pub struct AIEngine {
    kind: StrategyKind,
    strategy: Box<dyn Strategy>,
}

impl AIEngine {
    /// Engine for one of the menu presets
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_strategy(difficulty.strategy())
    }

    /// Engine with an explicit algorithm, heuristic and depth
    #[must_use]
    pub fn with_strategy(kind: StrategyKind) -> Self {
        Self {
            kind,
            strategy: kind.build(),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Get the best move for the given position, `None` when `color` must pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Color) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();
        let moves = board.valid_moves(color);
        let heuristic = self.kind.heuristic().unwrap_or(Heuristic::ScoreDiff);

        if moves.count() <= 1 {
            let only = moves.iter_ones().next();
            let result = MoveResult::forced(only, evaluate(board, heuristic), elapsed_ms(start));
            log::debug!("{} has {} valid move(s), no search", color.name(), moves.count());
            return result;
        }

        let search_type = match self.kind {
            StrategyKind::Random => SearchType::Random,
            StrategyKind::Minimax { .. } => SearchType::Minimax,
            StrategyKind::AlphaBeta { .. } => SearchType::AlphaBeta,
        };
        let result = self.strategy.search(board, color);
        let result = MoveResult::from_search(result, search_type, elapsed_ms(start));

        log::debug!(
            "{:?} for {}: {:?} score={} nodes={} in {}ms",
            result.search_type,
            color.name(),
            result.best_move,
            result.score,
            result.nodes,
            result.time_ms
        );
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new(Difficulty::Hard);
        assert_eq!(engine.kind(), Difficulty::Hard.strategy());
    }

    #[test]
    fn test_engine_opening_move_is_valid() {
        let board = Board::new();
        for difficulty in Difficulty::ALL {
            let mut engine = AIEngine::new(difficulty);
            let pos = engine.get_move(&board, Color::Black).unwrap();
            assert!(board.is_valid_move(pos, Color::Black), "{difficulty:?}");
        }
    }

    #[test]
    fn test_engine_forced_move() {
        let black = 1u64 << 1;
        let white = u64::MAX ^ 1 ^ black;
        let board = Board::from_bitboards(black, white);

        let mut engine = AIEngine::new(Difficulty::Hard);
        let result = engine.get_move_with_stats(&board, Color::White);
        assert_eq!(result.search_type, SearchType::Forced);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_engine_pass() {
        let black = 1u64 << 1;
        let white = u64::MAX ^ 1 ^ black;
        let board = Board::from_bitboards(black, white);

        let mut engine = AIEngine::default();
        assert_eq!(engine.get_move(&board, Color::Black), None);
    }

    #[test]
    fn test_search_type_follows_strategy() {
        let board = Board::new();
        let mut engine = AIEngine::with_strategy(StrategyKind::Minimax {
            heuristic: Heuristic::Corners,
            depth: 2,
        });
        let result = engine.get_move_with_stats(&board, Color::Black);
        assert_eq!(result.search_type, SearchType::Minimax);
        assert!(result.nodes > 1);

        let mut engine = AIEngine::new(Difficulty::Easy);
        let result = engine.get_move_with_stats(&board, Color::Black);
        assert_eq!(result.search_type, SearchType::Random);
    }
}
