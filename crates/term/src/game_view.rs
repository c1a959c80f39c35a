//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Screen position of the well's top-left inner cell
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered well in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Reuse one framebuffer across frames; it is only reallocated when the
    /// viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let origin = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, origin, x as i8, y as i8, *color),
                    None => self.draw_empty(fb, origin, x as i8, y as i8),
                }
            }
        }

        if !snap.game_over {
            if let Some(ghost) = snap.ghost() {
                let style = CellStyle {
                    fg: Rgb::from(ghost.color).darken(1, 2),
                    bg: WELL_BG,
                    bold: false,
                    dim: true,
                };
                self.draw_piece(fb, origin, &ghost, '░', style);
            }

            let style = CellStyle {
                fg: Rgb::from(snap.current.color),
                bg: WELL_BG,
                bold: true,
                dim: false,
            };
            self.draw_piece(fb, origin, &snap.current, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["GAME OVER", "R to restart"]);
        } else if snap.paused {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED", "P to resume"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        // Cells above the well (spawning pieces) are not drawn.
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = origin.x + x as u16 * self.cell_w;
        let py = origin.y + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, color: Color) {
        let style = CellStyle::plain(Rgb::from(color), WELL_BG);
        self.fill_board_cell(fb, origin, x, y, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        self.fill_board_cell(fb, origin, x, y, '·', style);
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, origin: Origin, piece: &Piece, ch: char, style: CellStyle) {
        for (x, y) in piece.cells() {
            self.fill_board_cell(fb, origin, x, y, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let next = &snap.next;
        let style = CellStyle::plain(Rgb::from(next.color), PANEL_BG);
        for (dx, dy) in next.matrix.occupied() {
            let px = panel_x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
        y = y.saturating_add(next.matrix.rows() as u16 * self.cell_h + 1);

        fb.put_str(panel_x, y, "GHOST", label);
        fb.put_str(panel_x + 6, y, if snap.ghost_enabled { "on" } else { "off" }, value);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centered lines of text over the well
fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: PANEL_BG,
        bold: true,
        dim: false,
    };
    let top = y + h.saturating_sub(lines.len() as u16) / 2;
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, top + i as u16, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row(y).unwrap().iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn frame_size_accounts_for_border() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
    }

    #[test]
    fn renders_panel_labels() {
        let snap = GameState::new(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        let out = text(&fb);
        for label in ["SCORE", "LEVEL", "LINES", "NEXT", "GHOST"] {
            assert!(out.contains(label), "missing {label}");
        }
    }

    #[test]
    fn renders_pause_and_game_over_overlays() {
        let mut snap = GameState::new(1).snapshot();
        snap.paused = true;
        let out = text(&GameView::default().render(&snap, Viewport::new(60, 24)));
        assert!(out.contains("PAUSED"));

        snap.paused = false;
        snap.game_over = true;
        let out = text(&GameView::default().render(&snap, Viewport::new(60, 24)));
        assert!(out.contains("GAME OVER"));
    }

    #[test]
    fn game_over_overlay_wins_over_pause() {
        let mut state = GameState::new(1);
        while !state.game_over() {
            state.hard_drop();
        }
        assert!(state.toggle_pause());
        let snap = state.snapshot();
        assert!(snap.paused && snap.game_over);

        let out = text(&GameView::default().render(&snap, Viewport::new(60, 24)));
        assert!(out.contains("GAME OVER"));
        assert!(out.contains("R to restart"));
        assert!(!out.contains("PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameState::new(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(3, 2));
        assert_eq!((fb.width(), fb.height()), (3, 2));
    }
}
