//! Board rendering for the Mystic Battle GUI

use egui::{Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Vec2};

use crate::eval::placement_delta;
use crate::{Board, Element, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Cells per side of the last board drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
            size: crate::DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Element,
        last_moves: &[Pos],
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.size = board.size();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row, col);
                self.draw_cell(&painter, pos, board.get(pos));
            }
        }

        for &pos in last_moves {
            self.draw_last_move_marker(&painter, pos);
        }

        // Hover preview and click
        let mut clicked_pos = None;

        if interactive {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                if board.is_empty_at(board_pos) {
                    let delta = placement_delta(board, board_pos, selected);
                    self.draw_hover_preview(&painter, board_pos, selected, delta);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                } else {
                    painter.rect_filled(
                        self.cell_rect(board_pos),
                        CornerRadius::same(TILE_ROUNDING),
                        hover_invalid(),
                    );
                }
            }
        }

        clicked_pos
    }

    /// Draw one cell: an element tile or an empty slot
    fn draw_cell(&self, painter: &Painter, pos: Pos, cell: Option<Element>) {
        let rect = self.cell_rect(pos);
        match cell {
            Some(element) => {
                painter.rect_filled(rect, CornerRadius::same(TILE_ROUNDING), element_color(element));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    element.name(),
                    FontId::proportional(self.label_size()),
                    element_text_color(element),
                );
            }
            None => {
                painter.rect_filled(rect, CornerRadius::same(TILE_ROUNDING), CELL_EMPTY);
            }
        }
    }

    /// Ghost tile for the selected element with the score change it causes
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, element: Element, delta: i32) {
        let rect = self.cell_rect(pos);
        let [r, g, b, _] = element_color(element).to_array();
        painter.rect_filled(
            rect,
            CornerRadius::same(TILE_ROUNDING),
            Color32::from_rgba_unmultiplied(r, g, b, 90),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{delta:+}"),
            FontId::proportional(self.label_size()),
            score_color(delta),
        );
    }

    /// Draw last move marker in the tile corner
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let center = rect.right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn label_size(&self) -> f32 {
        (self.cell_size * 0.18).clamp(10.0, 28.0)
    }

    /// Screen rectangle of a cell (inside the grid gap)
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size + CELL_GAP * 0.5,
                BOARD_MARGIN + pos.row as f32 * self.cell_size + CELL_GAP * 0.5,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size - CELL_GAP))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (col, row) = (x.floor() as usize, y.floor() as usize);
        (row < self.size && col < self.size).then(|| Pos::new(row, col))
    }
}
