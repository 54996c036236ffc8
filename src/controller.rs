//! Game controller: ties GUI input to board mutation
//!
//! The controller owns the [`Board`] and the [`CommandHistory`]. Every move,
//! human or computer, goes through [`CommandHistory::push`], so undo and redo
//! replay exactly the disks that were flipped.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Color, Pos};
use crate::command::{Command, CommandHistory};
use crate::config::{ModeSetting, Settings};
use crate::engine::{AIEngine, MoveResult};
use crate::strategies::{Difficulty, StrategyKind};
use crate::GameError;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Color::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Final outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `Color::None` for a draw
    pub winner: Color,
    pub black: u32,
    pub white: u32,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct Controller {
    pub board: Board,
    pub history: CommandHistory,
    pub mode: GameMode,
    pub current_turn: Color,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    /// Side that had to pass on the previous turn
    pub passed: Option<Color>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    strategy: StrategyKind,
}

impl Controller {
    /// Human plays Black against the given difficulty
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_mode(GameMode::default(), difficulty.strategy())
    }

    pub fn with_mode(mode: GameMode, strategy: StrategyKind) -> Self {
        Self {
            board: Board::new(),
            history: CommandHistory::new(),
            mode,
            current_turn: Color::Black,
            game_over: None,
            last_move: None,
            passed: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            strategy,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mode = match settings.mode {
            ModeSetting::Pve => GameMode::PvE {
                human_color: settings.human_color,
            },
            ModeSetting::Pvp => GameMode::PvP,
        };
        Self::with_mode(mode, settings.difficulty.strategy())
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_turn = Color::Black;
        self.game_over = None;
        self.last_move = None;
        self.passed = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        log::info!("new game: {:?}", self.mode);
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Change the computer opponent. Takes effect on the next AI turn.
    pub fn set_strategy(&mut self, strategy: StrategyKind) {
        log::info!("AI strategy set to {strategy:?}");
        self.strategy = strategy;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to play the human move at the given position
    pub fn try_move(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        self.execute_move(pos)
    }

    /// Execute a move for the side to move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let color = self.current_turn;
        let command = self
            .history
            .push(&mut self.board, Command::new(color, pos))?;
        log::info!(
            "{} plays {} flipping {}",
            color.name(),
            pos,
            command.captures.len()
        );

        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        self.advance_turn(color);
        Ok(())
    }

    /// Hand the turn on after `mover` played: opponent, pass, or game over
    fn advance_turn(&mut self, mover: Color) {
        self.passed = None;

        if self.board.game_ended {
            let result = GameResult {
                winner: self.board.winner,
                black: self.board.score(Color::Black),
                white: self.board.score(Color::White),
            };
            log::info!(
                "game over: {} ({}-{})",
                result.winner.name(),
                result.black,
                result.white
            );
            self.game_over = Some(result);
            self.current_turn = mover.opponent();
            return;
        }

        let opponent = mover.opponent();
        if self.board.has_valid_move(opponent) {
            self.current_turn = opponent;
        } else {
            log::info!("{} has no valid move and passes", opponent.name());
            self.passed = Some(opponent);
            self.message = Some(format!("{} has no valid move and passes", opponent.name()));
            self.current_turn = mover;
        }

        self.move_timer.start();
    }

    /// Run the engine for the side to move on this thread and play its move
    pub fn play_ai_move(&mut self) -> Result<MoveResult, GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }

        let start = Instant::now();
        let mut engine = AIEngine::with_strategy(self.strategy);
        let result = engine.get_move_with_stats(&self.board, self.current_turn);
        self.move_timer.set_ai_time(start.elapsed());
        self.last_ai_result = Some(result.clone());

        match result.best_move {
            Some(pos) => self.execute_move(pos)?,
            None => return Err(GameError::NoValidMove(self.current_turn)),
        }
        Ok(result)
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let color = self.current_turn;
        let strategy = self.strategy;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_strategy(strategy);
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::error!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(pos) => {
                    if let Err(err) = self.execute_move(pos) {
                        log::error!("AI move {pos} rejected: {err}");
                        self.message = Some(err.to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side to move using the configured strategy
    pub fn request_hint(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::with_strategy(self.strategy);
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move. In PvE, keeps undoing until the human is to move.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if !self.history.can_undo() {
            return Err(GameError::NothingToUndo);
        }

        loop {
            let undone = self.history.undo(&mut self.board)?;
            let color = undone.color;
            log::info!("undo {} at {}", color.name(), undone.destination);
            self.current_turn = color;

            let human_to_move = match self.mode {
                GameMode::PvE { human_color } => color == human_color,
                GameMode::PvP => true,
            };
            if human_to_move || !self.history.can_undo() {
                break;
            }
        }

        self.after_history_change();
        Ok(())
    }

    /// Replay the last undone move. In PvE, keeps replaying until the human is to move.
    pub fn redo(&mut self) -> Result<(), GameError> {
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if !self.history.can_redo() {
            return Err(GameError::NothingToRedo);
        }

        loop {
            let redone = self.history.redo(&mut self.board)?;
            let color = redone.color;
            log::info!("redo {} at {}", color.name(), redone.destination);
            self.last_move = Some(redone.destination);
            self.advance_turn(color);

            if self.game_over.is_some() || self.is_human_turn() || !self.history.can_redo() {
                break;
            }
        }

        self.suggested_move = None;
        Ok(())
    }

    fn after_history_change(&mut self) {
        self.game_over = None;
        self.passed = None;
        self.suggested_move = None;
        self.message = None;
        self.last_move = self.history.last().map(|c| c.destination);
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> Controller {
        Controller::with_mode(GameMode::PvP, Difficulty::Medium.strategy())
    }

    /// a1 empty, b1 black, everything else white
    fn one_move_board() -> Board {
        let black = 1u64 << 1;
        let white = u64::MAX ^ 1 ^ black;
        Board::from_bitboards(black, white)
    }

    #[test]
    fn test_initial_state() {
        let controller = Controller::new(Difficulty::Easy);
        assert_eq!(controller.current_turn, Color::Black);
        assert!(controller.is_human_turn());
        assert!(controller.game_over.is_none());
        assert!(controller.history.is_empty());
    }

    #[test]
    fn test_move_switches_turn() {
        let mut controller = pvp();
        controller.try_move(Pos::new(3, 5)).unwrap();

        assert_eq!(controller.board.get_disk_color(Pos::new(3, 4)), Color::Black);
        assert_eq!(controller.current_turn, Color::White);
        assert_eq!(controller.last_move, Some(Pos::new(3, 5)));
        assert_eq!(controller.history.len(), 1);
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut controller = pvp();
        assert_eq!(
            controller.try_move(Pos::new(0, 0)),
            Err(GameError::IllegalMove(Pos::new(0, 0)))
        );
        assert_eq!(controller.current_turn, Color::Black);
        assert!(controller.history.is_empty());
    }

    #[test]
    fn test_not_human_turn_in_pve() {
        let mut controller = Controller::with_mode(
            GameMode::PvE {
                human_color: Color::White,
            },
            Difficulty::Easy.strategy(),
        );
        assert!(controller.is_ai_turn());
        assert_eq!(controller.try_move(Pos::new(3, 5)), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_last_move_ends_game() {
        let mut controller = pvp();
        controller.board = one_move_board();
        controller.current_turn = Color::White;

        controller.try_move(Pos::new(0, 0)).unwrap();
        let result = controller.game_over.unwrap();
        assert_eq!(result.winner, Color::White);
        assert_eq!(result.white, 64);
        assert_eq!(result.black, 0);
        assert_eq!(controller.try_move(Pos::new(0, 0)), Err(GameError::GameOver));
    }

    #[test]
    fn test_pass_keeps_turn() {
        // a1 and h8 empty. White plays a1; Black still cannot move, so White
        // moves again at h8.
        let black = 1u64 << 1 | 1u64 << 62;
        let white = u64::MAX ^ 1 ^ (1u64 << 63) ^ black;
        let mut controller = pvp();
        controller.board = Board::from_bitboards(black, white);
        controller.current_turn = Color::White;
        assert!(!controller.board.has_valid_move(Color::Black));

        controller.try_move(Pos::new(0, 0)).unwrap();
        assert_eq!(controller.passed, Some(Color::Black));
        assert_eq!(controller.current_turn, Color::White);
        assert!(controller.game_over.is_none());
        assert!(controller.message.is_some());
    }

    #[test]
    fn test_undo_redo_pvp() {
        let mut controller = pvp();
        let start = controller.board.clone();
        controller.try_move(Pos::new(3, 5)).unwrap();
        controller.try_move(Pos::new(2, 5)).unwrap();

        controller.undo().unwrap();
        assert_eq!(controller.current_turn, Color::White);
        assert_eq!(controller.last_move, Some(Pos::new(3, 5)));

        controller.undo().unwrap();
        assert_eq!(controller.board, start);
        assert_eq!(controller.current_turn, Color::Black);
        assert_eq!(controller.last_move, None);
        assert_eq!(controller.undo(), Err(GameError::NothingToUndo));

        controller.redo().unwrap();
        assert_eq!(controller.current_turn, Color::White);
        assert_eq!(controller.board.get_disk_color(Pos::new(3, 4)), Color::Black);
    }

    #[test]
    fn test_undo_in_pve_returns_to_human() {
        let mut controller = Controller::new(Difficulty::Medium);
        controller.try_move(Pos::new(3, 5)).unwrap();
        assert!(controller.is_ai_turn());
        controller.play_ai_move().unwrap();
        assert!(controller.is_human_turn());
        assert_eq!(controller.history.len(), 2);

        controller.undo().unwrap();
        assert_eq!(controller.history.len(), 0);
        assert_eq!(controller.board, Board::new());
        assert!(controller.is_human_turn());

        controller.redo().unwrap();
        assert_eq!(controller.history.len(), 2);
        assert!(controller.is_human_turn());
    }

    #[test]
    fn test_undo_after_game_over_reopens_game() {
        let mut controller = pvp();
        controller.board = one_move_board();
        controller.current_turn = Color::White;
        controller.try_move(Pos::new(0, 0)).unwrap();
        assert!(controller.game_over.is_some());

        controller.undo().unwrap();
        assert!(controller.game_over.is_none());
        assert_eq!(controller.current_turn, Color::White);
        assert_eq!(controller.board, one_move_board());
    }

    #[test]
    fn test_ai_plays_full_game() {
        let mut controller =
            Controller::with_mode(GameMode::PvP, Difficulty::Easy.strategy());
        let mut moves = 0;
        while controller.game_over.is_none() {
            controller.play_ai_move().unwrap();
            moves += 1;
            assert!(moves <= 60);
        }

        let result = controller.game_over.unwrap();
        assert_eq!(result.black, controller.board.score(Color::Black));
        assert_eq!(controller.history.len(), moves);
    }

    #[test]
    fn test_worker_thread_result_is_applied() {
        let mut controller = Controller::with_mode(
            GameMode::PvE {
                human_color: Color::White,
            },
            Difficulty::Hard.strategy(),
        );
        controller.start_ai_thinking();
        assert!(controller.is_ai_thinking());
        assert_eq!(controller.undo(), Err(GameError::AiThinking));

        let deadline = Instant::now() + Duration::from_secs(30);
        while controller.is_ai_thinking() && Instant::now() < deadline {
            controller.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }

        assert!(!controller.is_ai_thinking());
        assert_eq!(controller.history.len(), 1);
        assert!(controller.is_human_turn());
        assert!(controller.last_ai_result.is_some());
    }

    #[test]
    fn test_hint_is_valid_move() {
        let mut controller = pvp();
        controller.request_hint();
        let hint = controller.suggested_move.unwrap();
        assert!(controller.board.is_valid_move(hint, Color::Black));
    }
}
