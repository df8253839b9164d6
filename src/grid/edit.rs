//! Line and character insertion/deletion
//!
//! Line edits are row-block moves bounded by the scroll region; character
//! edits shift within a single row. Nothing here touches scrollback.

use crate::cell::Cell;
use crate::grid::{Grid, LineTail};
use crate::rendition::Rendition;

impl Grid {
    /// Insert `n` blank lines at `row`, pushing rows down to `bottom` (IL).
    pub fn insert_lines(&mut self, n: usize, row: usize, bottom: usize, fill: Rendition) {
        self.scroll_region_down(n, row, bottom, fill);
    }

    /// Delete `n` lines at `row`, pulling rows up from `bottom` (DL).
    pub fn delete_lines(&mut self, n: usize, row: usize, bottom: usize, fill: Rendition) {
        self.scroll_region_up(n, row, bottom, fill);
    }

    /// Insert `n` blank cells at the cursor, shifting the rest of the row
    /// right; cells pushed past the margin are lost (ICH).
    pub fn insert_chars(&mut self, row: usize, col: usize, n: usize, fill: Rendition) {
        let cols = self.cols;
        if col >= cols {
            return;
        }
        let n = n.min(cols - col);
        if let Some(cells) = self.row_mut(row) {
            for dst in ((col + n)..cols).rev() {
                cells[dst] = cells[dst - n].clone();
                cells[dst].rend.set_dirty(true);
            }
            for cell in &mut cells[col..col + n] {
                *cell = Cell::blank(fill);
            }
        }
        if let Some(LineTail::Hard(len)) = self.tail(row) {
            if (len as usize) > col {
                let grown = ((len as usize) + n).min(cols);
                self.set_tail(row, LineTail::Hard(grown as u16));
            }
        }
    }

    /// Delete `n` cells at the cursor, shifting the rest of the row left and
    /// blanking the vacated cells at the margin (DCH).
    pub fn delete_chars(&mut self, row: usize, col: usize, n: usize, fill: Rendition) {
        let cols = self.cols;
        if col >= cols {
            return;
        }
        let n = n.min(cols - col);
        if let Some(cells) = self.row_mut(row) {
            for dst in col..(cols - n) {
                cells[dst] = cells[dst + n].clone();
                cells[dst].rend.set_dirty(true);
            }
            for cell in &mut cells[cols - n..] {
                *cell = Cell::blank(fill);
            }
        }
        if let Some(LineTail::Hard(len)) = self.tail(row) {
            if (len as usize) > col {
                let shrunk = (len as usize).saturating_sub(n).max(col);
                self.set_tail(row, LineTail::Hard(shrunk as u16));
            }
        }
    }
}
