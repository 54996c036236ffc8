//! Board structure with valid-move tracking

use super::bitboard::Bitboard;
use super::{Color, Pos, BOARD_SIZE, CORNERS, C_SQUARES, DIRECTIONS, TOTAL_CELLS, X_SQUARES};

/// Game board with per-player valid-move sets.
///
/// The disk bitboards are always disjoint. `black_moves`, `white_moves`,
/// `game_ended` and `winner` are derived state and are brought up to date
/// by [`Board::refresh`], which every move path calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black disks bitboard
    pub black: Bitboard,
    /// White disks bitboard
    pub white: Bitboard,
    black_moves: Bitboard,
    white_moves: Bitboard,
    /// Set once neither player has a valid move
    pub game_ended: bool,
    /// Winner of a finished game, `Color::None` for a draw or a running game
    pub winner: Color,
}

impl Board {
    /// Standard opening position: d4/e5 black, e4/d5 white, Black to move
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set_disk(Pos::new(3, 3), Color::Black);
        board.set_disk(Pos::new(4, 4), Color::Black);
        board.set_disk(Pos::new(3, 4), Color::White);
        board.set_disk(Pos::new(4, 3), Color::White);
        board.refresh();
        board
    }

    /// Board with no disks at all. Mostly useful for building positions.
    pub fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            black_moves: Bitboard::new(),
            white_moves: Bitboard::new(),
            game_ended: false,
            winner: Color::None,
        }
    }

    /// Build a board from raw disk masks and refresh derived state
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "disk masks overlap");
        let mut board = Self::empty();
        board.black = Bitboard::from_bits(black);
        board.white = Bitboard::from_bits(white & !black);
        board.refresh();
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get disk color at position
    #[inline]
    pub fn get_disk_color(&self, pos: Pos) -> Color {
        if self.black.get(pos) {
            Color::Black
        } else if self.white.get(pos) {
            Color::White
        } else {
            Color::None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a single cell. `Color::None` empties it.
    ///
    /// Derived state is left untouched; call [`Board::refresh`] afterwards.
    #[inline]
    pub fn set_disk(&mut self, pos: Pos, color: Color) {
        self.black.clear(pos);
        self.white.clear(pos);
        match color {
            Color::Black => self.black.set(pos),
            Color::White => self.white.set(pos),
            Color::None => {}
        }
    }

    /// Get bitboard for a color (returns None for `Color::None`)
    #[inline]
    pub fn disks(&self, color: Color) -> Option<&Bitboard> {
        match color {
            Color::Black => Some(&self.black),
            Color::White => Some(&self.white),
            Color::None => None,
        }
    }

    /// Valid moves for a color as of the last refresh
    #[inline]
    pub fn valid_moves(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black_moves,
            Color::White => self.white_moves,
            Color::None => Bitboard::new(),
        }
    }

    #[inline]
    pub fn has_valid_move(&self, color: Color) -> bool {
        !self.valid_moves(color).is_empty()
    }

    #[inline]
    pub fn is_valid_move(&self, pos: Pos, color: Color) -> bool {
        self.valid_moves(color).get(pos)
    }

    /// Opposing disks that would flip if `color` played at `pos`.
    ///
    /// Returns an empty list for occupied cells and for moves that flank nothing.
    pub fn captures_for(&self, pos: Pos, color: Color) -> Vec<Pos> {
        let opponent = color.opponent();
        if color == Color::None || !self.is_empty(pos) {
            return Vec::new();
        }

        let mut captures = Vec::new();
        for (dr, dc) in DIRECTIONS {
            let mut line = Vec::new();
            let mut cursor = pos.offset(dr, dc);

            while let Some(p) = cursor {
                let disk = self.get_disk_color(p);
                if disk == opponent {
                    line.push(p);
                } else {
                    if disk == color {
                        captures.append(&mut line);
                    }
                    break;
                }
                cursor = p.offset(dr, dc);
            }
        }

        captures
    }

    /// Number of disks owned by a color
    #[inline]
    pub fn score(&self, color: Color) -> u32 {
        self.disks(color).map_or(0, |b| b.count())
    }

    #[inline]
    pub fn corners_owned(&self, color: Color) -> i32 {
        self.disks(color).map_or(0, |b| (*b & CORNERS).count() as i32)
    }

    #[inline]
    pub fn c_squares_owned(&self, color: Color) -> i32 {
        self.disks(color).map_or(0, |b| (*b & C_SQUARES).count() as i32)
    }

    #[inline]
    pub fn x_squares_owned(&self, color: Color) -> i32 {
        self.disks(color).map_or(0, |b| (*b & X_SQUARES).count() as i32)
    }

    /// Total disks on board
    #[inline]
    pub fn disk_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.disk_count()
    }

    /// Recompute valid moves for both players, the end-of-game flag and the winner
    pub fn refresh(&mut self) {
        self.black_moves = self.compute_valid_moves(Color::Black);
        self.white_moves = self.compute_valid_moves(Color::White);

        self.game_ended = self.black_moves.is_empty() && self.white_moves.is_empty();
        self.winner = if !self.game_ended {
            Color::None
        } else {
            match self.black.count().cmp(&self.white.count()) {
                std::cmp::Ordering::Greater => Color::Black,
                std::cmp::Ordering::Less => Color::White,
                std::cmp::Ordering::Equal => Color::None,
            }
        };
    }

    fn compute_valid_moves(&self, color: Color) -> Bitboard {
        let occupied = self.black | self.white;
        (!occupied)
            .iter_ones()
            .filter(|&pos| self.flanks_any(pos, color))
            .collect()
    }

    /// Cheaper than `captures_for` when only legality matters
    fn flanks_any(&self, pos: Pos, color: Color) -> bool {
        let opponent = color.opponent();
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let mut seen_opponent = false;
            let mut cursor = pos.offset(dr, dc);
            while let Some(p) = cursor {
                match self.get_disk_color(p) {
                    c if c == opponent => seen_opponent = true,
                    c if c == color => return seen_opponent,
                    _ => return false,
                }
                cursor = p.offset(dr, dc);
            }
            false
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
