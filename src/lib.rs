//! Othello (Reversi) with a minimax computer opponent
//!
//! A two-player Othello game on the standard 8x8 board:
//! - Disks flanked along any of the eight directions are flipped
//! - A player without a valid move passes
//! - The game ends when neither player can move; most disks wins
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards and valid-move sets
//! - [`command`]: Reversible moves and the undo/redo history
//! - [`strategies`]: Evaluation functions and minimax / alpha-beta search
//! - [`engine`]: AI engine wrapping the configured strategy
//! - [`controller`]: Turn handling between the GUI, the board and the AI
//! - [`config`]: Settings file
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Board, Color, Command, Difficulty};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new(Difficulty::Medium);
//!
//! if let Some(pos) = engine.get_move(&board, Color::Black) {
//!     Command::new(Color::Black, pos).execute(&mut board).unwrap();
//!     println!("AI plays {pos}");
//! }
//! ```
//!
//! # Evaluation
//!
//! Scores are always Black minus White. Finished games score ±10000 (0 for a
//! draw) so a decided game outweighs any heuristic value.

pub mod board;
pub mod command;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod strategies;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Pos, BOARD_SIZE};
pub use command::{Command, CommandHistory};
pub use config::Settings;
pub use controller::{Controller, GameMode, GameResult};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::GameError;
pub use strategies::{Difficulty, Heuristic, Utility};
