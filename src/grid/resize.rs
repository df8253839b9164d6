//! Grid resizing
//!
//! No reflow: a column change is a per-row prefix copy, padding or
//! truncating on the right. Row changes trade rows with scrollback so the
//! cursor line stays on screen: shrinking pushes rows off the top into
//! history, growing pulls them back.

use crate::cell::Cell;
use crate::grid::{Grid, LineTail};

impl Grid {
    /// Resize to `cols` x `rows`. `cursor_row` is the viewport row the
    /// cursor occupies before the resize; the returned delta is how far it
    /// moved (negative when rows scrolled into history above it).
    ///
    /// `use_history` is false for the alternate screen, whose rows are
    /// discarded rather than saved.
    pub fn resize(
        &mut self,
        cols: usize,
        rows: usize,
        cursor_row: usize,
        use_history: bool,
    ) -> isize {
        if cols != self.cols {
            self.resize_cols(cols);
        }
        if rows == self.rows {
            return 0;
        }
        if rows < self.rows {
            self.shrink_rows(rows, cursor_row, use_history)
        } else {
            self.grow_rows(rows, use_history)
        }
    }

    fn resize_cols(&mut self, cols: usize) {
        let old = self.cols;
        self.cells = Self::copy_rows_resized(&self.cells, old, cols, self.rows);
        for tail in self.tails.iter_mut() {
            *tail = Self::clamp_tail(*tail, cols);
        }

        // Re-stride scrollback, normalizing the ring so the oldest line
        // lands in slot 0.
        if !self.scrollback_tails.is_empty() {
            let lines = self.scrollback_lines;
            let mut cells = Vec::with_capacity(lines * cols);
            let mut tails = Vec::with_capacity(lines);
            for index in 0..lines {
                let slot = self.ring_slot(index);
                let start = slot * old;
                let row = &self.scrollback_cells[start..start + old];
                cells.extend_from_slice(&Self::copy_rows_resized(row, old, cols, 1));
                tails.push(Self::clamp_tail(self.scrollback_tails[slot], cols));
            }
            self.scrollback_cells = cells;
            self.scrollback_tails = tails;
            self.scrollback_start = 0;
        }
        self.cols = cols;
    }

    fn copy_rows_resized(src: &[Cell], old_cols: usize, new_cols: usize, rows: usize) -> Vec<Cell> {
        let mut out = vec![Cell::default(); new_cols * rows];
        let keep = old_cols.min(new_cols);
        for row in 0..rows {
            let s = row * old_cols;
            let d = row * new_cols;
            out[d..d + keep].clone_from_slice(&src[s..s + keep]);
        }
        out
    }

    fn clamp_tail(tail: LineTail, cols: usize) -> LineTail {
        match tail {
            LineTail::Hard(len) => LineTail::Hard(len.min(cols as u16)),
            LineTail::Wrapped => LineTail::Wrapped,
        }
    }

    fn shrink_rows(&mut self, rows: usize, cursor_row: usize, use_history: bool) -> isize {
        let mut excess = self.rows - rows;

        // Drop blank rows below the cursor from the bottom first, so the
        // window can shrink without disturbing what's above.
        while excess > 0 {
            let last = self.rows - 1;
            if last <= cursor_row || self.tail(last) != Some(LineTail::Hard(0)) {
                break;
            }
            self.cells.truncate(last * self.cols);
            self.tails.truncate(last);
            self.rows = last;
            excess -= 1;
        }

        // Remaining excess scrolls off the top.
        let mut delta = 0isize;
        if excess > 0 {
            if use_history {
                for row in 0..excess {
                    self.push_history(row);
                }
            }
            self.total_scrolled += excess;
            self.cells.drain(..excess * self.cols);
            self.tails.drain(..excess);
            self.rows -= excess;
            delta -= excess as isize;
        }
        delta
    }

    fn grow_rows(&mut self, rows: usize, use_history: bool) -> isize {
        let mut delta = 0isize;
        // Pull lines back out of history to fill the top.
        while self.rows < rows && use_history {
            let Some((cells, tail)) = self.pop_history() else {
                break;
            };
            self.cells.splice(0..0, cells);
            self.tails.insert(0, tail);
            self.rows += 1;
            self.total_scrolled -= 1;
            delta += 1;
        }
        // Anything left is new blank space at the bottom.
        if self.rows < rows {
            let add = rows - self.rows;
            self.cells
                .extend(std::iter::repeat(Cell::default()).take(add * self.cols));
            self.tails
                .extend(std::iter::repeat(LineTail::default()).take(add));
            self.rows = rows;
        }
        delta
    }
}
