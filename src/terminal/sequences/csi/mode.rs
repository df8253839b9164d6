//! Mode CSI sequences: SM/RM, DECSET/DECRST, and the DEC private-mode
//! save/restore/toggle forms (`CSI ? Ps s` / `r` / `t`).

use tracing::debug;
use vte::Params;

use crate::event::{TerminalEvent, WindowOp};
use crate::terminal::{MouseMode, Terminal};

impl Terminal {
    pub(crate) fn handle_csi_mode(&mut self, enable: bool, params: &Params, private: bool) {
        for param_slice in params {
            let param = param_slice.first().copied().unwrap_or(0);
            if private {
                self.set_private_mode(param, enable);
            } else {
                match param {
                    4 => self.modes.insert = enable,
                    20 => self.modes.linefeed_newline = enable,
                    _ => debug!(param, enable, "unsupported ANSI mode"),
                }
            }
        }
    }

    /// `CSI ? Ps s`: remember the current state of each listed mode.
    pub(crate) fn save_private_modes(&mut self, params: &Params) {
        for param_slice in params {
            let param = param_slice.first().copied().unwrap_or(0);
            if let Some(state) = self.private_mode_state(param) {
                self.saved_modes.insert(param, state);
            }
        }
    }

    /// `CSI ? Ps r`: put each listed mode back to its remembered state.
    pub(crate) fn restore_private_modes(&mut self, params: &Params) {
        for param_slice in params {
            let param = param_slice.first().copied().unwrap_or(0);
            if let Some(state) = self.saved_modes.get(&param).copied() {
                self.set_private_mode(param, state);
            }
        }
    }

    /// `CSI ? Ps t`: flip each listed mode.
    pub(crate) fn toggle_private_modes(&mut self, params: &Params) {
        for param_slice in params {
            let param = param_slice.first().copied().unwrap_or(0);
            if let Some(state) = self.private_mode_state(param) {
                self.set_private_mode(param, !state);
            }
        }
    }

    /// Current value of a DEC private mode, for save/toggle.
    fn private_mode_state(&self, param: u16) -> Option<bool> {
        match param {
            1 => Some(self.modes.app_cursor_keys),
            5 => Some(self.modes.reverse_video),
            6 => Some(self.modes.origin),
            7 => Some(self.modes.auto_wrap),
            9 => Some(self.modes.mouse == MouseMode::X10),
            25 => Some(self.cursor.visible),
            47 | 1047 | 1049 => Some(self.is_alternate_screen()),
            66 => Some(self.modes.app_keypad),
            67 => Some(self.modes.backspace_sends_del),
            1000 => Some(self.modes.mouse == MouseMode::X11),
            _ => None,
        }
    }

    pub(crate) fn set_private_mode(&mut self, param: u16, enable: bool) {
        match param {
            // DECCKM
            1 => {
                self.modes.app_cursor_keys = enable;
                self.events.push(TerminalEvent::ModeChanged {
                    mode: "app_cursor_keys",
                    enabled: enable,
                });
            }
            // DECCOLM: the column flip itself belongs to the windowing
            // collaborator; locally it clears the screen and homes
            3 => {
                let fill = self.rendition.fill();
                self.clear_selection();
                self.grid_mut().clear_all(fill);
                self.set_scroll_region(0, self.rows() - 1);
                self.mark_all_dirty();
                let cols = if enable { 132 } else { 80 };
                self.events
                    .push(TerminalEvent::WindowOp(WindowOp::SetColumns(cols)));
            }
            // DECSCNM
            5 => {
                if self.modes.reverse_video != enable {
                    self.modes.reverse_video = enable;
                    self.mark_all_dirty();
                    self.events.push(TerminalEvent::ModeChanged {
                        mode: "reverse_video",
                        enabled: enable,
                    });
                }
            }
            // DECOM: switching homes the cursor within the new origin
            6 => {
                self.modes.origin = enable;
                self.goto(0, 0);
            }
            // DECAWM
            7 => {
                self.modes.auto_wrap = enable;
                if !enable {
                    self.pending_wrap = false;
                }
            }
            // X10 mouse reporting
            9 => {
                self.modes.mouse = if enable { MouseMode::X10 } else { MouseMode::Off };
                self.events.push(TerminalEvent::ModeChanged {
                    mode: "mouse",
                    enabled: enable,
                });
            }
            // DECTCEM
            25 => {
                self.cursor.visible = enable;
                self.mark_dirty(self.cursor.row);
                self.events.push(TerminalEvent::ModeChanged {
                    mode: "cursor_visible",
                    enabled: enable,
                });
            }
            47 => self.switch_screen(enable, false),
            // DECNKM-style keypad toggle
            66 => self.modes.app_keypad = enable,
            // Backspace key sends DEL
            67 => self.modes.backspace_sends_del = enable,
            // X11 mouse reporting (press + release)
            1000 => {
                self.modes.mouse = if enable { MouseMode::X11 } else { MouseMode::Off };
                self.events.push(TerminalEvent::ModeChanged {
                    mode: "mouse",
                    enabled: enable,
                });
            }
            // Alternate screen, clearing it on exit
            1047 => {
                if enable {
                    self.switch_screen(true, false);
                } else {
                    if self.is_alternate_screen() {
                        let fill = self.rendition.fill();
                        self.grid_mut().clear_all(fill);
                    }
                    self.switch_screen(false, false);
                }
            }
            // Save/restore cursor without switching screens
            1048 => {
                if enable {
                    self.save_cursor();
                } else {
                    self.restore_cursor();
                }
            }
            // Save cursor + switch to a cleared alternate screen
            1049 => {
                if enable {
                    self.save_cursor();
                    self.switch_screen(true, true);
                    self.goto(0, 0);
                } else {
                    self.switch_screen(false, false);
                    self.restore_cursor();
                }
            }
            _ => debug!(param, enable, "unsupported DEC private mode"),
        }
    }
}
