//! Cursor position and the DECSC/DECRC snapshot.

use crate::charset::CharsetIndex;
use crate::rendition::Rendition;

/// Cursor position and visibility. Movement helpers clamp; the cursor can
/// never leave `[0, max]` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Row, 0-indexed within the visible viewport
    pub row: usize,
    /// Column, 0-indexed
    pub col: usize,
    /// DECTCEM visibility
    pub visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor {
            row: 0,
            col: 0,
            visible: true,
        }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self, n: usize) {
        self.row = self.row.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: usize, max_row: usize) {
        self.row = (self.row + n).min(max_row);
    }

    pub fn move_left(&mut self, n: usize) {
        self.col = self.col.saturating_sub(n);
    }

    pub fn move_right(&mut self, n: usize, max_col: usize) {
        self.col = (self.col + n).min(max_col);
    }

    pub fn goto(&mut self, col: usize, row: usize) {
        self.col = col;
        self.row = row;
    }

    /// Clamp into a (possibly shrunken) viewport.
    pub fn clamp(&mut self, cols: usize, rows: usize) {
        self.col = self.col.min(cols.saturating_sub(1));
        self.row = self.row.min(rows.saturating_sub(1));
    }
}

/// Everything DECSC saves and DECRC restores: position, rendition, the
/// active charset slot, origin mode, and the deferred-wrap flag.
#[derive(Debug, Clone, Copy)]
pub struct SavedCursor {
    pub cursor: Cursor,
    pub rendition: Rendition,
    pub active_charset: CharsetIndex,
    pub origin_mode: bool,
    pub pending_wrap: bool,
}
