//! Erase CSI sequences (ED, EL, ECH)

use tracing::debug;
use vte::Params;

use super::param_or;
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn handle_csi_erase(&mut self, action: char, params: &Params, _private: bool) {
        let mode = params
            .iter()
            .next()
            .and_then(|p| p.first())
            .copied()
            .unwrap_or(0);
        let fill = self.rendition.fill();
        let (row, col) = (self.cursor.row, self.cursor.col);
        let rows = self.rows();

        match (action, mode) {
            ('J', 0) => {
                self.drop_selection_on_rows(row, rows - 1);
                self.grid_mut().clear_screen_below(row, col, fill);
                self.mark_dirty_range(row, rows - 1);
            }
            ('J', 1) => {
                self.drop_selection_on_rows(0, row);
                self.grid_mut().clear_screen_above(row, col, fill);
                self.mark_dirty_range(0, row);
            }
            ('J', 2) => {
                self.drop_selection_on_rows(0, rows - 1);
                self.grid_mut().clear_all(fill);
                self.mark_all_dirty();
            }
            // xterm extension: erase saved lines
            ('J', 3) => {
                if let Some(sel) = &self.selection {
                    if sel.beg.line < self.grid().viewport_base() {
                        self.clear_selection();
                    }
                }
                self.grid_mut().clear_scrollback();
                self.scroll_view_down(usize::MAX);
                self.mark_all_dirty();
            }
            ('K', 0) => {
                self.invalidate_selection_on_row(row);
                self.grid_mut().clear_line_right(row, col, fill);
                self.mark_dirty(row);
            }
            ('K', 1) => {
                self.invalidate_selection_on_row(row);
                self.grid_mut().clear_line_left(row, col, fill);
                self.mark_dirty(row);
            }
            ('K', 2) => {
                self.invalidate_selection_on_row(row);
                self.grid_mut().clear_row(row, fill);
                self.mark_dirty(row);
            }
            ('X', _) => {
                let n = param_or(params, 1);
                self.invalidate_selection_on_row(row);
                self.grid_mut().erase_chars(row, col, n, fill);
                self.mark_dirty(row);
            }
            _ => debug!(%action, mode, "unsupported erase mode"),
        }
    }

    /// Clear the selection if it touches the given viewport row range.
    pub(crate) fn drop_selection_on_rows(&mut self, first: usize, last: usize) {
        let base = self.grid().viewport_base();
        if let Some(sel) = &self.selection {
            if sel.intersects_lines(base + first, base + last) {
                self.clear_selection();
            }
        }
    }
}
