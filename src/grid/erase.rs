//! Erase operations on the grid
//!
//! Erased cells take the caller's fill rendition (colors only, attributes
//! stripped by the caller). Erasing to end of line also truncates the row's
//! logical length and breaks its wrap continuation.

use crate::cell::Cell;
use crate::grid::{Grid, LineTail};
use crate::rendition::Rendition;

impl Grid {
    /// Erase the whole viewport (ED 2). Scrollback is untouched.
    pub fn clear_all(&mut self, fill: Rendition) {
        for row in 0..self.rows {
            self.blank_row(row, fill);
        }
    }

    /// Erase one full row (EL 2).
    pub fn clear_row(&mut self, row: usize, fill: Rendition) {
        self.blank_row(row, fill);
    }

    /// Erase from `col` to end of row inclusive (EL 0). The row's logical
    /// length shrinks to `col` and any wrap into the next row is broken.
    pub fn clear_line_right(&mut self, row: usize, col: usize, fill: Rendition) {
        if let Some(cells) = self.row_mut(row) {
            for cell in cells.iter_mut().skip(col) {
                *cell = Cell::blank(fill);
            }
        }
        if let Some(tail) = self.tail(row) {
            let len = tail.len(self.cols).min(col);
            self.set_tail(row, LineTail::Hard(len as u16));
        }
    }

    /// Erase from start of row through `col` inclusive (EL 1). Content to
    /// the right survives, so the logical length is unchanged.
    pub fn clear_line_left(&mut self, row: usize, col: usize, fill: Rendition) {
        let end = col.min(self.cols.saturating_sub(1));
        if let Some(cells) = self.row_mut(row) {
            for cell in cells.iter_mut().take(end + 1) {
                *cell = Cell::blank(fill);
            }
        }
    }

    /// Erase from the cursor to the end of the viewport (ED 0).
    pub fn clear_screen_below(&mut self, row: usize, col: usize, fill: Rendition) {
        self.clear_line_right(row, col, fill);
        for r in (row + 1)..self.rows {
            self.blank_row(r, fill);
        }
    }

    /// Erase from the top of the viewport through the cursor (ED 1).
    pub fn clear_screen_above(&mut self, row: usize, col: usize, fill: Rendition) {
        for r in 0..row {
            self.blank_row(r, fill);
        }
        self.clear_line_left(row, col, fill);
    }

    /// Blank `n` cells at the cursor without shifting (ECH).
    pub fn erase_chars(&mut self, row: usize, col: usize, n: usize, fill: Rendition) {
        if let Some(cells) = self.row_mut(row) {
            let end = (col + n).min(cells.len());
            for cell in &mut cells[col.min(end)..end] {
                *cell = Cell::blank(fill);
            }
        }
    }
}
