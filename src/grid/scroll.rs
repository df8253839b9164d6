//! Scrolling for the terminal grid
//!
//! Region scrolls move whole rows and blank the vacated ones with the
//! caller's fill rendition; cell data is never duplicated beyond the one
//! row-block move. A full-width scroll-up on a grid with scrollback feeds
//! the departing rows into history.

use crate::cell::Cell;
use crate::grid::{Grid, LineTail};
use crate::rendition::Rendition;

impl Grid {
    /// Scroll the whole viewport up by `n`, feeding the departing top rows
    /// into scrollback. Vacated bottom rows are blanked with `fill`.
    pub fn scroll_up(&mut self, n: usize, fill: Rendition) {
        let n = n.min(self.rows);
        if n == 0 {
            return;
        }

        for row in 0..n {
            self.push_history(row);
        }
        self.total_scrolled += n;

        self.shift_rows_up(n, 0, self.rows - 1);
        for row in (self.rows - n)..self.rows {
            self.blank_row(row, fill);
        }
    }

    /// Scroll `[top, bottom]` up by `n` without touching scrollback (used
    /// for margin scrolls and line deletion). Invalid bounds are clamped; a
    /// degenerate region is a no-op.
    pub fn scroll_region_up(&mut self, n: usize, top: usize, bottom: usize, fill: Rendition) {
        let bottom = bottom.min(self.rows.saturating_sub(1));
        if top > bottom || self.rows == 0 {
            return;
        }

        let region = bottom - top + 1;
        let n = n.min(region);
        if n == region {
            for row in top..=bottom {
                self.blank_row(row, fill);
            }
            return;
        }

        self.shift_rows_up(n, top, bottom);
        for row in (bottom + 1 - n)..=bottom {
            self.blank_row(row, fill);
        }
    }

    /// Scroll `[top, bottom]` down by `n`, blanking the vacated top rows.
    pub fn scroll_region_down(&mut self, n: usize, top: usize, bottom: usize, fill: Rendition) {
        let bottom = bottom.min(self.rows.saturating_sub(1));
        if top > bottom || self.rows == 0 {
            return;
        }

        let region = bottom - top + 1;
        let n = n.min(region);
        if n == region {
            for row in top..=bottom {
                self.blank_row(row, fill);
            }
            return;
        }

        for row in ((top + n)..=bottom).rev() {
            self.move_row(row - n, row);
        }
        for row in top..(top + n) {
            self.blank_row(row, fill);
        }
    }

    /// Drop all scrollback history (ED 3).
    pub fn clear_scrollback(&mut self) {
        self.scrollback_cells.clear();
        self.scrollback_tails.clear();
        self.scrollback_start = 0;
        self.scrollback_lines = 0;
    }

    fn shift_rows_up(&mut self, n: usize, top: usize, bottom: usize) {
        for row in (top + n)..=bottom {
            self.move_row(row, row - n);
        }
    }

    fn move_row(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        let cols = self.cols;
        let (s, d) = (src * cols, dst * cols);
        for col in 0..cols {
            self.cells[d + col] = self.cells[s + col].clone();
            self.cells[d + col].rend.set_dirty(true);
        }
        self.tails[dst] = self.tails[src];
    }

    pub(crate) fn blank_row(&mut self, row: usize, fill: Rendition) {
        if let Some(cells) = self.row_mut(row) {
            for cell in cells.iter_mut() {
                *cell = Cell::blank(fill);
            }
        }
        self.set_tail(row, LineTail::Hard(0));
    }
}
