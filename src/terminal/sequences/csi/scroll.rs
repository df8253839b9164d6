//! Scroll CSI sequences (SU, SD, DECSTBM)

use vte::Params;

use super::{nth_param_or, param_or};
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn handle_csi_scroll(&mut self, action: char, params: &Params) {
        let n = param_or(params, 1);
        match action {
            'S' => self.scroll_up_region(n),
            'T' => self.scroll_down_region(n),
            _ => {}
        }
    }

    /// DECSTBM: set the scroll region and home the cursor.
    pub(crate) fn handle_decstbm(&mut self, params: &Params) {
        let rows = self.rows();
        let top = param_or(params, 1) - 1;
        let bottom = nth_param_or(params, 1, rows) - 1;
        self.set_scroll_region(top, bottom);
    }
}
