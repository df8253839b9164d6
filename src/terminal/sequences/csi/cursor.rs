//! Cursor-motion CSI sequences

use vte::Params;

use super::{nth_param_or, param_or};
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn handle_csi_cursor(&mut self, action: char, params: &Params) {
        let cols = self.cols();
        let rows = self.rows();

        match action {
            // CUU
            'A' => {
                let n = param_or(params, 1);
                let floor = if self.cursor.row >= self.scroll_top {
                    self.scroll_top
                } else {
                    0
                };
                self.cursor.row = self.cursor.row.saturating_sub(n).max(floor);
                self.pending_wrap = false;
            }
            // CUD
            'B' => {
                let n = param_or(params, 1);
                let ceil = if self.cursor.row <= self.scroll_bottom {
                    self.scroll_bottom
                } else {
                    rows - 1
                };
                self.cursor.move_down(n, ceil);
                self.pending_wrap = false;
            }
            // CUF
            'C' => {
                let n = param_or(params, 1);
                self.cursor.move_right(n, cols.saturating_sub(1));
                self.pending_wrap = false;
            }
            // CUB
            'D' => {
                let n = param_or(params, 1);
                self.cursor.move_left(n);
                self.pending_wrap = false;
            }
            // CNL / CPL: vertical move plus carriage return
            'E' => {
                let n = param_or(params, 1);
                self.cursor.move_down(n, rows.saturating_sub(1));
                self.cursor.col = 0;
                self.pending_wrap = false;
            }
            'F' => {
                let n = param_or(params, 1);
                self.cursor.move_up(n);
                self.cursor.col = 0;
                self.pending_wrap = false;
            }
            // CHA / HPA
            'G' | '`' => {
                let col = param_or(params, 1) - 1;
                self.cursor.col = col.min(cols.saturating_sub(1));
                self.pending_wrap = false;
            }
            // VPA
            'd' => {
                let row = param_or(params, 1) - 1;
                self.goto(row, self.cursor.col);
            }
            // CUP / HVP
            'H' | 'f' => {
                let row = param_or(params, 1) - 1;
                let col = nth_param_or(params, 1, 1) - 1;
                self.goto(row, col);
            }
            // TBC
            'g' => {
                // Parameter 0 clears the stop under the cursor, 3 clears all
                let mode = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                match mode {
                    0 => self.clear_tab_stop(),
                    3 => self.clear_all_tab_stops(),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
