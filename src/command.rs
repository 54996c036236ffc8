//! Reversible moves and the move history
//!
//! A [`Command`] is one disk placement together with the disks it flipped.
//! It does not borrow the board: `execute` and `undo` take the board they act
//! on, so commands can live in a [`CommandHistory`] next to the board they
//! modify.
//!
//! # Example
//!
//! ```
//! use othello::{Board, Color, Command, Pos};
//!
//! let mut board = Board::new();
//! let mut command = Command::new(Color::Black, Pos::new(3, 5));
//!
//! command.execute(&mut board).unwrap();
//! assert_eq!(board.get_disk_color(Pos::new(3, 4)), Color::Black);
//!
//! command.undo(&mut board).unwrap();
//! assert_eq!(board.get_disk_color(Pos::new(3, 5)), Color::None);
//! assert_eq!(board.get_disk_color(Pos::new(3, 4)), Color::White);
//! ```

use crate::board::{Board, Color, Pos};
use crate::GameError;

/// A single move: who plays, where, and what it captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub color: Color,
    pub destination: Pos,
    /// Disks flipped by the last `execute`, empty before and after `undo`
    pub captures: Vec<Pos>,
    executed: bool,
}

impl Command {
    pub fn new(color: Color, destination: Pos) -> Self {
        Self {
            color,
            destination,
            captures: Vec::new(),
            executed: false,
        }
    }

    #[inline]
    pub fn is_executed(&self) -> bool {
        self.executed
    }

    /// Place the disk, flip every flanked opposing disk and record the flips.
    pub fn execute(&mut self, board: &mut Board) -> Result<(), GameError> {
        if self.executed {
            return Err(GameError::AlreadyExecuted);
        }
        if !board.is_valid_move(self.destination, self.color) {
            return Err(GameError::IllegalMove(self.destination));
        }

        let captures = board.captures_for(self.destination, self.color);
        board.set_disk(self.destination, self.color);
        for &pos in &captures {
            board.set_disk(pos, self.color);
        }
        board.refresh();

        self.captures = captures;
        self.executed = true;
        Ok(())
    }

    /// Empty the destination and give every recorded capture back to the opponent.
    pub fn undo(&mut self, board: &mut Board) -> Result<(), GameError> {
        if !self.executed {
            return Err(GameError::NotExecuted);
        }

        let previous = self.color.opponent();
        board.set_disk(self.destination, Color::None);
        for &pos in &self.captures {
            board.set_disk(pos, previous);
        }
        board.refresh();

        self.captures.clear();
        self.executed = false;
        Ok(())
    }
}

/// Undo/redo stacks of executed commands
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    done: Vec<Command>,
    undone: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command` on `board` and record it. Clears the redo stack.
    ///
    /// Nothing is recorded when the command fails.
    pub fn push(&mut self, board: &mut Board, mut command: Command) -> Result<&Command, GameError> {
        command.execute(board)?;
        self.undone.clear();
        self.done.push(command);
        Ok(&self.done[self.done.len() - 1])
    }

    /// Undo the most recent command, returning it
    pub fn undo(&mut self, board: &mut Board) -> Result<&Command, GameError> {
        let mut command = self.done.pop().ok_or(GameError::NothingToUndo)?;
        if let Err(err) = command.undo(board) {
            self.done.push(command);
            return Err(err);
        }
        self.undone.push(command);
        Ok(&self.undone[self.undone.len() - 1])
    }

    /// Re-execute the most recently undone command, returning it
    pub fn redo(&mut self, board: &mut Board) -> Result<&Command, GameError> {
        let mut command = self.undone.pop().ok_or(GameError::NothingToRedo)?;
        if let Err(err) = command.execute(board) {
            self.undone.push(command);
            return Err(err);
        }
        self.done.push(command);
        Ok(&self.done[self.done.len() - 1])
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of executed commands
    #[inline]
    pub fn len(&self) -> usize {
        self.done.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    pub fn last(&self) -> Option<&Command> {
        self.done.last()
    }

    /// Next command `redo` would replay
    pub fn peek_redo(&self) -> Option<&Command> {
        self.undone.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.done.iter()
    }

    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}
