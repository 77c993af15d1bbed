//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer and maps
//! clicks back onto the board.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! Current Score: 3, Max Score: 5
//!
//! ┌─────────────────────┐  FOUND
//! │                     │  CAT
//! │  C    A    S    E   │  SEAT
//! │                     │
//! │  ...                │
//! └─────────────────────┘
//!
//! WORD: CA
//!
//! [EXIT]  [RESET]
//! ```

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, Position, Selection};

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

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.w && y - self.y < self.h
    }
}

/// Where everything lands on screen for one viewport and grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    /// Top-left of cell (0, 0).
    pub grid_x: u16,
    pub grid_y: u16,
    /// Distance between neighbouring cells, gutter included.
    pub pitch_w: u16,
    pub pitch_h: u16,
    pub status: Rect,
    pub frame: Rect,
    pub word: Rect,
    pub found: Rect,
    pub exit: Rect,
    pub reset: Rect,
}

impl Layout {
    /// Screen rectangle of one cell, gutter excluded.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.grid_x
                .saturating_add((pos.col as u16).saturating_mul(self.pitch_w)),
            self.grid_y
                .saturating_add((pos.row as u16).saturating_mul(self.pitch_h)),
            self.pitch_w - 1,
            self.pitch_h - 1,
        )
    }

    /// Grid cell under `(x, y)`. Gutters between cells hit nothing.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        if x < self.grid_x || y < self.grid_y {
            return None;
        }
        let dx = x - self.grid_x;
        let dy = y - self.grid_y;
        if dx % self.pitch_w == self.pitch_w - 1 || dy % self.pitch_h == self.pitch_h - 1 {
            return None;
        }
        let col = (dx / self.pitch_w) as usize;
        let row = (dy / self.pitch_h) as usize;
        (row < self.rows && col < self.cols).then(|| Position::new(row, col))
    }
}

/// Classify a click at screen `(x, y)`.
pub fn hit_test(layout: &Layout, x: u16, y: u16) -> Selection {
    if layout.exit.contains(x, y) {
        return Selection::Exit;
    }
    if layout.reset.contains(x, y) {
        return Selection::Reset;
    }
    match layout.cell_at(x, y) {
        Some(pos) => Selection::GridPick(pos),
        None => Selection::OutsideGrid,
    }
}

const EXIT_LABEL: &str = "[EXIT]";
const RESET_LABEL: &str = "[RESET]";
const FOUND_PANEL_W: u16 = 20;
const FOUND_GAP: u16 = 2;

const STATUS_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 40, 40), Rgb::BLACK).bold();
const LABEL_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const BUTTON_STYLE: CellStyle = CellStyle::new(Rgb::BLACK, Rgb::new(200, 200, 200)).bold();

/// Colors for each selection marker.
pub fn cell_style(state: CellState) -> CellStyle {
    let style = match state {
        CellState::Unselected => CellStyle::new(Rgb::BLACK, Rgb::WHITE),
        CellState::ActivePrior => CellStyle::new(Rgb::new(0, 128, 0), Rgb::new(193, 255, 193)),
        CellState::ActiveCurrent => CellStyle::new(Rgb::new(0, 0, 255), Rgb::new(176, 224, 230)),
    };
    style.bold()
}

/// A lightweight terminal renderer for the Boggle board.
pub struct GameView {
    /// Cell width in terminal columns, gutter included.
    cell_w: u16,
    /// Cell height in terminal rows, gutter included.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x2 leaves room for "Qu" and keeps cells roughly square.
        Self {
            cell_w: 5,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport, rows: usize, cols: usize) -> Layout {
        let frame_w = (cols as u16).saturating_mul(self.cell_w).saturating_add(3);
        let frame_h = (rows as u16).saturating_mul(self.cell_h).saturating_add(3);
        let total_w = frame_w.saturating_add(FOUND_GAP + FOUND_PANEL_W);
        let total_h = frame_h.saturating_add(6);

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let frame = Rect::new(start_x, start_y.saturating_add(2), frame_w, frame_h);
        let below = frame.y.saturating_add(frame.h);
        let buttons_y = below.saturating_add(3);
        let exit = Rect::new(frame.x, buttons_y, EXIT_LABEL.len() as u16, 1);

        Layout {
            rows,
            cols,
            grid_x: frame.x.saturating_add(2),
            grid_y: frame.y.saturating_add(2),
            pitch_w: self.cell_w,
            pitch_h: self.cell_h,
            status: Rect::new(start_x, start_y, total_w, 1),
            frame,
            word: Rect::new(frame.x, below.saturating_add(1), frame_w, 1),
            found: Rect::new(
                frame.x.saturating_add(frame_w).saturating_add(FOUND_GAP),
                frame.y,
                FOUND_PANEL_W,
                frame_h.saturating_add(2),
            ),
            exit,
            reset: Rect::new(
                exit.x.saturating_add(exit.w).saturating_add(2),
                buttons_y,
                RESET_LABEL.len() as u16,
                1,
            ),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// `cursor` highlights one cell for keyboard play. Returns the layout that
    /// was drawn so clicks can be classified against it.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        cursor: Option<Position>,
        fb: &mut FrameBuffer,
    ) -> Layout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::default()));

        let layout = self.layout(viewport, snap.rows, snap.cols);

        fb.put_str(layout.status.x, layout.status.y, &snap.status, STATUS_STYLE);

        let f = layout.frame;
        self.draw_border(fb, f.x, f.y, f.w, f.h, BORDER_STYLE);

        for cell in &snap.cells {
            let pos = Position::new(cell.row, cell.col);
            let mut style = cell_style(cell.state);
            if cursor == Some(pos) {
                style = style.underline();
            }
            let r = layout.cell_rect(pos);
            fb.fill_rect(r.x, r.y, r.w, r.h, ' ', style);

            let text = cell.letter.as_str();
            let text_w = text.chars().count() as u16;
            let tx = r.x.saturating_add(r.w.saturating_sub(text_w) / 2);
            let ty = r.y.saturating_add(r.h / 2);
            fb.put_str(tx, ty, text, style);
        }

        let x = fb.put_str(layout.word.x, layout.word.y, "WORD: ", LABEL_STYLE);
        fb.put_str(x, layout.word.y, &snap.current_word, VALUE_STYLE.bold());

        self.draw_found_panel(fb, snap, layout.found);

        fb.put_str(layout.exit.x, layout.exit.y, EXIT_LABEL, BUTTON_STYLE);
        fb.put_str(layout.reset.x, layout.reset.y, RESET_LABEL, BUTTON_STYLE);

        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        cursor: Option<Position>,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, cursor, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    /// Heading with a count, then the newest words that fit.
    fn draw_found_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel: Rect) {
        if panel.x >= fb.width() || panel.h == 0 {
            return;
        }
        let x = fb.put_str(panel.x, panel.y, "FOUND ", LABEL_STYLE);
        fb.put_u32(x, panel.y, snap.found_words.len() as u32, VALUE_STYLE.dim());

        let visible = (panel.h - 1) as usize;
        let skip = snap.found_words.len().saturating_sub(visible);
        for (i, word) in snap.found_words.iter().skip(skip).enumerate() {
            let y = panel.y.saturating_add(1 + i as u16);
            let clipped: String = word.chars().take(panel.w as usize).collect();
            fb.put_str(panel.x, y, &clipped, VALUE_STYLE);
        }
    }
}
