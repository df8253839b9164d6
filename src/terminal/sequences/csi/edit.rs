//! Insert/delete CSI sequences (ICH, DCH, IL, DL)

use vte::Params;

use super::param_or;
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn handle_csi_edit(&mut self, action: char, params: &Params) {
        let n = param_or(params, 1);
        let fill = self.rendition.fill();
        let (row, col) = (self.cursor.row, self.cursor.col);

        match action {
            '@' => {
                self.invalidate_selection_on_row(row);
                self.grid_mut().insert_chars(row, col, n, fill);
                self.mark_dirty(row);
            }
            'P' => {
                self.invalidate_selection_on_row(row);
                self.grid_mut().delete_chars(row, col, n, fill);
                self.mark_dirty(row);
            }
            // IL/DL act only with the cursor inside the scroll region and
            // shift rows down to the region bottom
            'L' => {
                if row >= self.scroll_top && row <= self.scroll_bottom {
                    let bottom = self.scroll_bottom;
                    self.drop_selection_on_rows(row, bottom);
                    self.grid_mut().insert_lines(n, row, bottom, fill);
                    self.mark_dirty_range(row, bottom);
                }
            }
            'M' => {
                if row >= self.scroll_top && row <= self.scroll_bottom {
                    let bottom = self.scroll_bottom;
                    self.drop_selection_on_rows(row, bottom);
                    self.grid_mut().delete_lines(n, row, bottom, fill);
                    self.mark_dirty_range(row, bottom);
                }
            }
            _ => {}
        }
        self.pending_wrap = false;
    }
}
