//! Screen buffer storage
//!
//! A 2D grid of cells for the visible viewport plus a ring-buffer scrollback,
//! with a per-row tail sentinel recording whether the row ended naturally
//! (and at which logical length) or wrapped into the next row.
//!
//! Rows are addressed three ways: viewport row (`0..rows`), scrollback index
//! (`0..scrollback_len`, oldest first), and absolute line number (monotonic
//! since startup, stable across scrolling until the ring evicts the line).
//! All ring index arithmetic lives in this module.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

mod edit;
mod erase;
mod resize;
mod scroll;

/// Trailing sentinel of a row: logical length if the line ended naturally,
/// or a marker that text continued onto the next row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineTail {
    /// Line ended here; `0..len` holds content
    Hard(u16),
    /// Line wrapped into the following row
    Wrapped,
}

impl Default for LineTail {
    fn default() -> Self {
        LineTail::Hard(0)
    }
}

impl LineTail {
    pub fn is_wrapped(&self) -> bool {
        matches!(self, LineTail::Wrapped)
    }

    /// Logical content length, taking the full width for wrapped rows.
    pub fn len(&self, cols: usize) -> usize {
        match self {
            LineTail::Hard(l) => (*l as usize).min(cols),
            LineTail::Wrapped => cols,
        }
    }
}

/// The grid of one screen: viewport cells plus scrollback history.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of columns
    pub(crate) cols: usize,
    /// Number of viewport rows
    pub(crate) rows: usize,
    /// Viewport cells, row-major
    pub(crate) cells: Vec<Cell>,
    /// Per-viewport-row tail sentinel
    pub(crate) tails: Vec<LineTail>,
    /// Scrollback cells (ring of rows, row-major)
    pub(crate) scrollback_cells: Vec<Cell>,
    /// Per-ring-slot tail sentinel
    pub(crate) scrollback_tails: Vec<LineTail>,
    /// Ring index of the oldest scrollback line
    pub(crate) scrollback_start: usize,
    /// Number of valid scrollback lines
    pub(crate) scrollback_lines: usize,
    /// Scrollback capacity (`saveLines`)
    pub(crate) max_scrollback: usize,
    /// Lines ever pushed off the top; absolute line number of viewport row 0
    pub(crate) total_scrolled: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize, max_scrollback: usize) -> Self {
        Grid {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
            tails: vec![LineTail::default(); rows],
            scrollback_cells: Vec::new(),
            scrollback_tails: Vec::new(),
            scrollback_start: 0,
            scrollback_lines: 0,
            max_scrollback,
            total_scrolled: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < self.cols && row < self.rows {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if let Some(c) = self.get_mut(col, row) {
            *c = cell;
        }
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [Cell]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&mut self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Text of a viewport row up to its logical length, trailing spacer
    /// cells skipped.
    pub fn row_text(&self, row: usize) -> String {
        match (self.row(row), self.tail(row)) {
            (Some(cells), Some(tail)) => cells[..tail.len(self.cols)]
                .iter()
                .filter(|c| !c.is_trail())
                .map(|c| c.c)
                .collect(),
            _ => String::new(),
        }
    }

    pub fn tail(&self, row: usize) -> Option<LineTail> {
        self.tails.get(row).copied()
    }

    pub fn set_tail(&mut self, row: usize, tail: LineTail) {
        if let Some(t) = self.tails.get_mut(row) {
            *t = tail;
        }
    }

    /// Grow a row's logical length after a write at `col_end` (exclusive).
    /// Wrapped rows keep their sentinel.
    pub fn bump_line_len(&mut self, row: usize, col_end: usize) {
        if let Some(t) = self.tails.get_mut(row) {
            if let LineTail::Hard(l) = t {
                *l = (*l).max(col_end.min(self.cols) as u16);
            }
        }
    }

    pub fn scrollback_len(&self) -> usize {
        self.scrollback_lines
    }

    pub fn max_scrollback(&self) -> usize {
        self.max_scrollback
    }

    /// Absolute line number of viewport row 0.
    pub fn viewport_base(&self) -> usize {
        self.total_scrolled
    }

    /// Absolute line number of the oldest line still held anywhere.
    pub fn history_floor(&self) -> usize {
        self.total_scrolled - self.scrollback_lines
    }

    fn ring_slot(&self, index: usize) -> usize {
        debug_assert!(index < self.scrollback_lines);
        let store_rows = self.scrollback_tails.len();
        (self.scrollback_start + index) % store_rows
    }

    /// Scrollback line by history index (0 = oldest).
    pub fn scrollback_line(&self, index: usize) -> Option<&[Cell]> {
        if index < self.scrollback_lines {
            let start = self.ring_slot(index) * self.cols;
            Some(&self.scrollback_cells[start..start + self.cols])
        } else {
            None
        }
    }

    pub fn scrollback_tail(&self, index: usize) -> Option<LineTail> {
        if index < self.scrollback_lines {
            self.scrollback_tails.get(self.ring_slot(index)).copied()
        } else {
            None
        }
    }

    /// A line by absolute number, wherever it currently lives.
    pub fn abs_line(&self, abs: usize) -> Option<&[Cell]> {
        if abs >= self.total_scrolled {
            self.row(abs - self.total_scrolled)
        } else if abs >= self.history_floor() {
            self.scrollback_line(abs - self.history_floor())
        } else {
            None
        }
    }

    pub fn abs_line_mut(&mut self, abs: usize) -> Option<&mut [Cell]> {
        if abs >= self.total_scrolled {
            let row = abs - self.total_scrolled;
            self.row_mut(row)
        } else if abs >= self.history_floor() {
            let index = abs - self.history_floor();
            if index < self.scrollback_lines {
                let start = self.ring_slot(index) * self.cols;
                Some(&mut self.scrollback_cells[start..start + self.cols])
            } else {
                None
            }
        } else {
            None
        }
    }

    pub fn abs_tail(&self, abs: usize) -> Option<LineTail> {
        if abs >= self.total_scrolled {
            self.tail(abs - self.total_scrolled)
        } else if abs >= self.history_floor() {
            self.scrollback_tail(abs - self.history_floor())
        } else {
            None
        }
    }

    /// Absolute line number one past the last viewport row.
    pub fn abs_end(&self) -> usize {
        self.total_scrolled + self.rows
    }

    /// Push one viewport row into the scrollback ring, evicting the oldest
    /// line when the ring is full. Never fails; with zero capacity the row
    /// is simply discarded.
    pub(crate) fn push_history(&mut self, row: usize) {
        if self.max_scrollback == 0 {
            return;
        }
        let src = row * self.cols;
        let tail = self.tails[row];
        let store_rows = self.scrollback_tails.len();
        if self.scrollback_lines == store_rows && store_rows < self.max_scrollback {
            // Ring has never wrapped; grow the backing store
            self.scrollback_cells
                .extend_from_slice(&self.cells[src..src + self.cols]);
            self.scrollback_tails.push(tail);
            self.scrollback_lines += 1;
        } else if self.scrollback_lines < self.max_scrollback {
            // Reusing a slot vacated by a resize pull
            let slot = (self.scrollback_start + self.scrollback_lines) % store_rows;
            let dst = slot * self.cols;
            self.scrollback_cells[dst..dst + self.cols]
                .clone_from_slice(&self.cells[src..src + self.cols]);
            self.scrollback_tails[slot] = tail;
            self.scrollback_lines += 1;
        } else {
            // Full: overwrite the oldest line
            let slot = self.scrollback_start;
            let dst = slot * self.cols;
            self.scrollback_cells[dst..dst + self.cols]
                .clone_from_slice(&self.cells[src..src + self.cols]);
            self.scrollback_tails[slot] = tail;
            self.scrollback_start = (self.scrollback_start + 1) % self.max_scrollback;
        }
    }

    /// Pop the most recent scrollback line into a detached row buffer.
    pub(crate) fn pop_history(&mut self) -> Option<(Vec<Cell>, LineTail)> {
        if self.scrollback_lines == 0 {
            return None;
        }
        let slot = self.ring_slot(self.scrollback_lines - 1);
        let start = slot * self.cols;
        let cells = self.scrollback_cells[start..start + self.cols].to_vec();
        let tail = self.scrollback_tails[slot];
        self.scrollback_lines -= 1;
        Some((cells, tail))
    }
}

#[cfg(test)]
mod tests;
