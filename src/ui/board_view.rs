//! Board rendering for the Othello GUI

use crate::{Board, Color, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if it is a valid move
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Color,
        last_move: Option<Pos>,
        suggested_move: Option<Pos>,
        show_valid_moves: bool,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_disks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos, board.get_disk_color(pos));
        }

        let valid = board.valid_moves(current_turn);
        if show_valid_moves && interactive {
            for pos in valid.iter_ones() {
                painter.circle_filled(
                    self.cell_center(pos),
                    self.cell_size * VALID_MOVE_RADIUS_RATIO,
                    valid_move_dot(),
                );
            }
        }

        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos, current_turn);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = valid.get(board_pos);
                    if board.is_empty(board_pos) {
                        self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);
                    }

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 9x9 cell boundary lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.cell_size * BOARD_SIZE as f32;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_rect.min
                + Vec2::new(
                    BOARD_MARGIN + col as f32 * self.cell_size,
                    BOARD_MARGIN + row as f32 * self.cell_size,
                );
            painter.circle_filled(center, STAR_POINT_RADIUS, GRID_LINE);
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let letter = (b'a' + i as u8) as char;
            let along = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + half);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL_TEXT);

            let left = Pos2::new(self.board_rect.min.x + half, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, format!("{}", i + 1), font.clone(), LABEL_TEXT);
        }
    }

    fn draw_disks(&self, painter: &Painter, board: &Board) {
        for pos in board.black.iter_ones() {
            self.draw_disk(painter, pos, Color::Black);
        }
        for pos in board.white.iter_ones() {
            self.draw_disk(painter, pos, Color::White);
        }
    }

    /// Draw a single disk with a drop shadow
    fn draw_disk(&self, painter: &Painter, pos: Pos, color: Color) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match color {
            Color::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 70));
                painter.circle_filled(center, radius, BLACK_DISK);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISK_HIGHLIGHT,
                );
            }
            Color::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 50));
                painter.circle_filled(center, radius, WHITE_DISK);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_DISK_SHADOW));
            }
            Color::None => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos, disk: Color) {
        if disk == Color::None {
            return;
        }
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Color) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;

        let (fill, text) = match turn {
            Color::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 110), WHITE_DISK),
            Color::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 110), BLACK_DISK),
            Color::None => return,
        };

        painter.circle_filled(center, radius, fill);
        painter.rect_stroke(
            self.cell_rect(pos).shrink(2.0),
            CornerRadius::same(3),
            Stroke::new(2.0, WIN_HIGHLIGHT),
            StrokeKind::Inside,
        );
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(16.0), text);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Color, is_valid: bool) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Color::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 90),
                Color::White => Color32::from_rgba_unmultiplied(240, 240, 240, 90),
                Color::None => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        Pos::try_new(y.floor() as i32, x.floor() as i32).ok()
    }
}
