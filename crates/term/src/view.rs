//! BoardView: maps a frame snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against the framebuffer.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_COLUMNS, BOARD_ROWS};

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

/// Renders the well, the score readout, and the game-over overlay.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer (the allocation-free hot path).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_COLUMNS as u16) * self.cell_w;
        let board_px_h = (BOARD_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let grid_style = CellStyle {
            fg: Rgb::new(0, 100, 0),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let border_style = CellStyle {
            fg: Rgb::new(144, 238, 144),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        // Falling and settled cells render alike.
        let block_style = CellStyle {
            fg: Rgb::new(173, 255, 173),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let text_style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border_style);

        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLUMNS {
                let cell = snap.grid[row][col];
                let (ch, style) = if cell.is_empty() {
                    ('·', grid_style)
                } else {
                    ('█', block_style)
                };
                self.fill_board_cell(fb, start_x, start_y, col as u16, row as u16, ch, style);
            }
        }

        // Score readout above the well.
        let mut score_line = [0u8; 24];
        let score_text = format_score(snap.score, &mut score_line);
        fb.put_str(start_x, start_y.saturating_sub(1), score_text, text_style);

        if snap.status.is_over() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", text_style);
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
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let x = start_x + 1 + col * self.cell_w;
        let y = start_y + 1 + row * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        let y = start_y + frame_h / 2;
        fb.put_str(x, y, text, style);
    }
}

/// Format "SCORE nnnn" into a stack buffer; avoids a heap string per frame.
fn format_score(score: u32, buf: &mut [u8; 24]) -> &str {
    use std::io::Write;
    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    let _ = write!(cursor, "SCORE {}", score);
    let len = cursor.position() as usize;
    // Only ASCII was written.
    std::str::from_utf8(&buf[..len]).unwrap_or("SCORE")
}
