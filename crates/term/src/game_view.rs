//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, EMPTY};

/// Board background.
const BG_COLOR: Rgb = Rgb::hex(0xbbada0);

/// Tile text color.
const TEXT_COLOR: Rgb = Rgb::hex(0x776e65);

/// Overlay text color.
const OVERLAY_COLOR: Rgb = Rgb::new(78, 139, 202);

/// Tile colors indexed by log2 of the value (index 0 is the empty cell).
/// Values past 2048 reuse the last entry.
const TILE_COLORS: [u32; 12] = [
    0xcdc1b4, 0xeee4da, 0xede0c8, 0xf2b179, 0xf59563, 0xf67c5f, 0xf65e3b, 0xedcf72, 0xedcc61,
    0xedc850, 0xedc53f, 0xedc22e,
];

/// Background color for a cell value.
pub fn tile_color(value: Cell) -> Rgb {
    let idx = if value == EMPTY {
        0
    } else {
        value.trailing_zeros() as usize
    };
    Rgb::hex(TILE_COLORS[idx.min(TILE_COLORS.len() - 1)])
}

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

/// A lightweight terminal renderer for the 2048 board.
///
/// Each board cell is `cell_w` x `cell_h` terminal cells; the last column and
/// row of every cell are left as a gap so tiles read as separate blocks.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x4 leaves a 6x3 tile: room for five digits and a centred text row.
        Self {
            cell_w: 7,
            cell_h: 4,
        }
    }
}

/// Placement of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
        }
    }

    /// Width and height of the bordered board for an `n` x `n` grid.
    pub fn frame_size(&self, n: usize) -> (u16, u16) {
        let n = n as u16;
        (n * self.cell_w + 3, n * self.cell_h + 3)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into<const N: usize>(
        &self,
        snap: &GameSnapshot<N>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(N);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(BG_COLOR, BG_COLOR);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        self.draw_border(fb, frame, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let spawned = snap
                    .last_spawn
                    .map_or(false, |s| s.x == x && s.y == y);
                self.draw_tile(fb, frame, x as u16, y as u16, value, spawned);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        // Both overlays are drawn when the game is won and lost at once.
        let mut line = frame.y + frame.h / 2;
        if snap.status.is_won() {
            self.draw_overlay_text(fb, frame, line, "YOU WON!");
            line += 1;
        }
        if snap.status.is_lost() {
            self.draw_overlay_text(fb, frame, line, "GAME OVER!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<const N: usize>(&self, snap: &GameSnapshot<N>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;

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

    /// Top-left terminal position of board cell (x, y).
    fn tile_origin(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x + 2 + x * self.cell_w,
            frame.y + 2 + y * self.cell_h,
        )
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        value: Cell,
        spawned: bool,
    ) {
        let (px, py) = self.tile_origin(frame, x, y);
        let (tw, th) = (self.cell_w - 1, self.cell_h - 1);
        let color = tile_color(value);
        fb.fill_rect(px, py, tw, th, ' ', CellStyle::new(color, color));

        if value == EMPTY {
            return;
        }

        let mut text = CellStyle::new(TEXT_COLOR, color).bold();
        if spawned {
            text = text.dim();
        }
        let digits = decimal_width(value) as u16;
        let tx = px + tw.saturating_sub(digits) / 2;
        let ty = py + (th - 1) / 2;
        fb.put_u32(tx, ty, value, text);
    }

    fn draw_side_panel<const N: usize>(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<N>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.seed, value);
        y = y.saturating_add(2);

        for line in ["arrows move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(OVERLAY_COLOR, Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, y, text, style);
    }
}
