//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED_FG: Rgb = Rgb::new(170, 170, 180);

/// Draws the board frame, merged cells, the falling piece and a status line.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Frame size including the border, plus the status line underneath.
    pub fn required_size(&self) -> (u16, u16) {
        let (w, h) = self.frame_size();
        (w, h + 1)
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let empty = CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG).with_char(' ');
        let locked = CellStyle::new(LOCKED_FG, PLAYFIELD_BG).with_char('█');
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let cell = if snap.board[y as usize][x as usize] {
                    locked
                } else {
                    empty
                };
                self.draw_board_cell(fb, origin_x, origin_y, x, y, cell);
            }
        }

        if let Some(active) = snap.active {
            let cell = CellStyle::new(piece_color(active.kind), PLAYFIELD_BG)
                .bold()
                .with_char('█');
            for (x, y) in active.board_cells() {
                // Cells above the board are not drawn.
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_board_cell(fb, origin_x, origin_y, x as u16, y as u16, cell);
                }
            }
        }

        let status_y = origin_y.saturating_add(frame_h);
        let status = format!("Score: {}  Lines: {}", snap.score, snap.lines);
        fb.put_str(origin_x, status_y, &status, CellStyle::default());

        if snap.game_over {
            self.draw_overlay_text(fb, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.set(x, y, style.with_char('┌'));
        fb.set(right, y, style.with_char('┐'));
        fb.set(x, bottom, style.with_char('└'));
        fb.set(right, bottom, style.with_char('┘'));
        for cx in x + 1..right {
            fb.set(cx, y, style.with_char('─'));
            fb.set(cx, bottom, style.with_char('─'));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, style.with_char('│'));
            fb.set(right, cy, style.with_char('│'));
        }
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, x: u16, y: u16, cell: Cell) {
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y;
        fb.fill_rect(px, py, self.cell_w, 1, cell);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = origin_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let y = origin_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}
