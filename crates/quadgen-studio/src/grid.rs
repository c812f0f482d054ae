//! Animated cell grid: one background quad per cell plus a cursor quad on top.

use quadgen_engine::coords::{ColorRgba, Rect, Vec2, Viewport};
use quadgen_engine::scene::{QuadBatch, ZIndex};

/// Gap between cells, in logical pixels.
const GUTTER: f32 = 2.0;

const CURSOR: ColorRgba = ColorRgba::new(0.9, 0.9, 0.9, 0.9);

#[derive(Debug, Copy, Clone)]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
}

impl GridLayout {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Pixel rect of cell `(col, row)`, gutter excluded.
    pub fn cell_rect(&self, viewport: Viewport, col: u32, row: u32) -> Rect {
        let cell = Vec2::new(
            viewport.width / self.cols as f32,
            viewport.height / self.rows as f32,
        );
        Rect::from_origin_size(
            Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
            cell,
        )
        .inset(GUTTER * 0.5)
    }

    /// Cell the cursor sits on at time `t` (row-major sweep, 12 cells per second).
    pub fn cursor_cell(&self, t: f32) -> (u32, u32) {
        let total = self.cols * self.rows;
        let step = ((t.max(0.0) * 12.0) as u32) % total;
        (step % self.cols, step / self.cols)
    }

    /// Pushes every cell and the cursor for time `t`.
    pub fn fill(&self, batch: &mut QuadBatch, viewport: Viewport, t: f32) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let color = cell_color(col, row, t);
                batch.push_pixel_rect(ZIndex::BACKGROUND, self.cell_rect(viewport, col, row), color, viewport);
            }
        }

        let (col, row) = self.cursor_cell(t);
        let cursor = self.cell_rect(viewport, col, row).inset(-GUTTER);
        batch.push_pixel_rect(ZIndex::OVERLAY, cursor, CURSOR, viewport);
    }
}

/// Slow diagonal wave; premultiplied with a constant alpha.
fn cell_color(col: u32, row: u32, t: f32) -> ColorRgba {
    let phase = (col + row) as f32 * 0.15 - t;
    let r = 0.5 + 0.5 * phase.sin();
    let g = 0.5 + 0.5 * (phase + 2.1).sin();
    let b = 0.5 + 0.5 * (phase + 4.2).sin();
    ColorRgba::premultiplied(r * 0.6, g * 0.6, b * 0.8, 1.0)
}
