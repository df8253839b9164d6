//! Window manipulation (xterm CSI t)
//!
//! Everything except the character-size report needs window-system
//! knowledge this core doesn't have, so the requests are forwarded as
//! events.

use tracing::debug;
use vte::Params;

use crate::event::{TerminalEvent, WindowOp};
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn handle_csi_window(&mut self, params: &Params) {
        let mut iter = params.iter();
        let op = iter.next().and_then(|p| p.first()).copied().unwrap_or(0);
        let a = iter.next().and_then(|p| p.first()).copied().unwrap_or(0) as usize;
        let b = iter.next().and_then(|p| p.first()).copied().unwrap_or(0) as usize;

        let window_op = match op {
            1 => WindowOp::Deiconify,
            2 => WindowOp::Iconify,
            3 => WindowOp::Move {
                x: a as i32,
                y: b as i32,
            },
            4 => WindowOp::ResizePixels {
                width: b,
                height: a,
            },
            5 => WindowOp::Raise,
            6 => WindowOp::Lower,
            7 => WindowOp::Refresh,
            8 => WindowOp::ResizeChars { cols: b, rows: a },
            11 => WindowOp::ReportState,
            13 => WindowOp::ReportPosition,
            14 => WindowOp::ReportSizePixels,
            // The core knows its own character size
            18 => {
                let report = format!("\x1b[8;{};{}t", self.rows(), self.cols());
                self.response_buffer.extend_from_slice(report.as_bytes());
                return;
            }
            19 => WindowOp::ReportSizeChars,
            _ => {
                debug!(op, "unsupported window operation");
                return;
            }
        };
        self.events.push(TerminalEvent::WindowOp(window_op));
    }
}
