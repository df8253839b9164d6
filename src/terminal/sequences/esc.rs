//! Plain ESC sequences (no CSI/OSC introducer).

use tracing::debug;

use crate::cell::Cell;
use crate::charset::Charset;
use crate::grid::LineTail;
use crate::rendition::Rendition;
use crate::terminal::Terminal;

/// Answer to DECID (ESC Z) and primary DA: VT100 with advanced video option.
pub(crate) const DEVICE_ATTRIBUTES: &[u8] = b"\x1b[?1;2c";

impl Terminal {
    pub(crate) fn esc_dispatch_impl(&mut self, intermediates: &[u8], byte: u8) {
        match (intermediates.first(), byte) {
            (None, b'7') => self.save_cursor(),
            (None, b'8') => self.restore_cursor(),
            // IND: down one line, scrolling at the region bottom
            (None, b'D') => self.line_feed(),
            // NEL: like IND plus carriage return
            (None, b'E') => {
                self.line_feed();
                self.cursor.col = 0;
            }
            (None, b'H') => self.set_tab_stop(),
            (None, b'M') => self.reverse_index(),
            (None, b'Z') => self.response_buffer.extend_from_slice(DEVICE_ATTRIBUTES),
            (None, b'c') => self.reset(),
            (None, b'=') => self.modes.app_keypad = true,
            (None, b'>') => self.modes.app_keypad = false,
            // LS2 / LS3
            (None, b'n') => self.charsets.invoke(2),
            (None, b'o') => self.charsets.invoke(3),
            (Some(b'('), b) => self.charsets.designate(0, Charset::from_designator(b)),
            (Some(b')'), b) => self.charsets.designate(1, Charset::from_designator(b)),
            (Some(b'*'), b) => self.charsets.designate(2, Charset::from_designator(b)),
            (Some(b'+'), b) => self.charsets.designate(3, Charset::from_designator(b)),
            (Some(b'#'), b'8') => self.screen_alignment_test(),
            _ => debug!(?intermediates, byte, "unhandled ESC sequence"),
        }
    }

    /// DECALN: fill the screen with `E`, reset the margins, home the cursor.
    fn screen_alignment_test(&mut self) {
        self.clear_selection();
        let rows = self.rows();
        let cols = self.cols();
        for row in 0..rows {
            for col in 0..cols {
                self.grid_mut()
                    .set(col, row, Cell::new('E', Rendition::default()));
            }
            self.grid_mut().set_tail(row, LineTail::Hard(cols as u16));
        }
        self.scroll_top = 0;
        self.scroll_bottom = rows - 1;
        self.cursor.goto(0, 0);
        self.pending_wrap = false;
        self.mark_all_dirty();
    }
}
