//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, relative to the grid's top-left corner `(ox, oy)`:
//!
//! ```text
//! oy-1   r - Restart                q - Quit
//! oy     ┌───────┬───────┬───────┬───────┐
//!        │       │       │       │       │
//!        │   2   │       │  128  │       │
//!        │       │       │       │       │
//!        ├───────┼───────┼───────┼───────┤
//!        ...
//! oy+16  └───────┴───────┴───────┴───────┘
//! oy+17  Score:  1234              Game Over
//! ```

use crate::core::GameSnapshot;
use crate::fb::{decimal_len, CellStyle, FrameBuffer, Ink};
use crate::palette::ColorClass;
use crate::types::BOARD_SIZE;

const RESTART_HINT: &str = "r - Restart";
const QUIT_HINT: &str = "q - Quit";
const SCORE_LABEL: &str = "Score:";
const GAME_OVER: &str = "Game Over";
/// Score digits start this many columns after the grid's left edge.
const SCORE_VALUE_OFFSET: u16 = 8;
/// Smallest cell pitch that still holds one glyph inside the borders.
const MIN_CELL: u16 = 2;
/// Largest cell pitch. Far beyond any real terminal, and keeps layout math in `u16`.
const MAX_CELL: u16 = 256;

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

/// Where the layout sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Centered both ways
    Center,
    /// Grid corner at (1, 1), header on row 0
    TopLeft,
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Cell pitch in terminal columns, including one border column.
    cell_w: u16,
    /// Cell pitch in terminal rows, including one border row.
    cell_h: u16,
    anchor: Anchor,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x4 keeps cells roughly square and fits "65536".
        Self {
            cell_w: 8,
            cell_h: 4,
            anchor: Anchor::Center,
        }
    }
}

impl GameView {
    /// `cell_w` and `cell_h` are clamped to `2..=256`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(MIN_CELL, MAX_CELL),
            cell_h: cell_h.clamp(MIN_CELL, MAX_CELL),
            anchor: Anchor::Center,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Grid width in terminal columns, borders included.
    pub fn grid_width(&self) -> u16 {
        self.cell_w * BOARD_SIZE as u16 + 1
    }

    /// Grid height in terminal rows, borders included.
    pub fn grid_height(&self) -> u16 {
        self.cell_h * BOARD_SIZE as u16 + 1
    }

    /// Top-left corner of the grid for this viewport.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        match self.anchor {
            Anchor::TopLeft => (1, 1),
            Anchor::Center => {
                // Header above the grid and status line below it.
                let total_h = self.grid_height() + 2;
                let x = viewport.width.saturating_sub(self.grid_width()) / 2;
                let y = viewport.height.saturating_sub(total_h) / 2 + 1;
                (x, y)
            }
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (ox, oy) = self.origin(viewport);
        let right = ox + self.grid_width();

        let hint = CellStyle::new(Ink::Muted);
        if oy > 0 {
            fb.put_str(ox, oy - 1, RESTART_HINT, hint);
            fb.put_str(right.saturating_sub(QUIT_HINT.len() as u16), oy - 1, QUIT_HINT, hint);
        }

        self.draw_grid(fb, ox, oy, CellStyle::new(Ink::Default));

        for (r, row) in snap.board.iter().enumerate() {
            for (c, &exponent) in row.iter().enumerate() {
                self.draw_tile(fb, ox, oy, r as u16, c as u16, exponent);
            }
        }

        let status_y = oy + self.grid_height();
        let label = CellStyle::default();
        fb.put_str(ox, status_y, SCORE_LABEL, label);
        fb.put_u32(ox + SCORE_VALUE_OFFSET, status_y, snap.score, label);

        if snap.game_over {
            let x = right.saturating_sub(GAME_OVER.len() as u16);
            fb.put_str(x, status_y, GAME_OVER, CellStyle::new(Ink::Default).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, style: CellStyle) {
        let n = BOARD_SIZE as u16;

        for i in 0..=n {
            let y = oy + i * self.cell_h;
            for x in 0..self.grid_width() {
                if x % self.cell_w != 0 {
                    fb.put_char(ox + x, y, '─', style);
                }
            }
        }

        for j in 0..=n {
            let x = ox + j * self.cell_w;
            for y in 0..self.grid_height() {
                if y % self.cell_h != 0 {
                    fb.put_char(x, oy + y, '│', style);
                }
            }
        }

        for i in 0..=n {
            for j in 0..=n {
                let ch = junction(i, j, n);
                fb.put_char(ox + j * self.cell_w, oy + i * self.cell_h, ch, style);
            }
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, row: u16, col: u16, exponent: u8) {
        if exponent == 0 {
            return;
        }
        let value = 1u32 << exponent;
        let len = decimal_len(value);

        let y = oy + row * self.cell_h + self.cell_h / 2;
        let center_x = ox + col * self.cell_w + self.cell_w / 2;
        let x = (center_x + 1).saturating_sub((len + 1) / 2);

        let style = CellStyle::new(ColorClass::of(exponent).ink());
        fb.put_u32(x, y, value, style);
    }
}

/// Box-drawing glyph where grid line `i` (row) meets grid line `j` (column).
fn junction(i: u16, j: u16, n: u16) -> char {
    match (i, j) {
        (0, 0) => '┌',
        (0, j) if j == n => '┐',
        (i, 0) if i == n => '└',
        (i, j) if i == n && j == n => '┘',
        (0, _) => '┬',
        (i, _) if i == n => '┴',
        (_, 0) => '├',
        (_, j) if j == n => '┤',
        _ => '┼',
    }
}
