//! Device status reports (DSR) and device attributes (DA)

use tracing::debug;
use vte::Params;

use crate::event::TerminalEvent;
use crate::terminal::sequences::esc::DEVICE_ATTRIBUTES;
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn handle_csi_report(&mut self, action: char, params: &Params) {
        let param = params
            .iter()
            .next()
            .and_then(|p| p.first())
            .copied()
            .unwrap_or(0);

        match action {
            'c' => {
                // Primary DA; only parameter 0 (or none) is meaningful
                if param == 0 {
                    self.response_buffer.extend_from_slice(DEVICE_ATTRIBUTES);
                }
            }
            'n' => match param {
                // Status report: always OK
                5 => self.response_buffer.extend_from_slice(b"\x1b[0n"),
                // CPR, relative to the origin when origin mode is on
                6 => {
                    let row = if self.modes.origin {
                        self.cursor.row.saturating_sub(self.scroll_top)
                    } else {
                        self.cursor.row
                    };
                    let report = format!("\x1b[{};{}R", row + 1, self.cursor.col + 1);
                    self.response_buffer.extend_from_slice(report.as_bytes());
                }
                // Display-name query, answered with the configured string
                7 => {
                    if !self.config.answerback.is_empty() {
                        let answerback = self.config.answerback.clone();
                        self.response_buffer.extend_from_slice(answerback.as_bytes());
                        self.response_buffer.push(b'\n');
                    }
                }
                // Set the title to the emulator version
                8 => {
                    let title = concat!("vt-term-core ", env!("CARGO_PKG_VERSION"));
                    self.events
                        .push(TerminalEvent::TitleChanged(title.to_string()));
                }
                // Printer status query; there is no printer to report on
                9 => {}
                _ => debug!(param, "unsupported DSR"),
            },
            _ => {}
        }
    }
}
