//! VTE Perform trait implementation for Terminal
//!
//! The bridge between the byte-stream parser and the terminal state; most
//! methods delegate to handlers in `sequences/`.

use tracing::trace;
use vte::{Params, Perform};

use crate::event::TerminalEvent;
use crate::terminal::Terminal;

impl Perform for Terminal {
    fn print(&mut self, c: char) {
        self.write_char(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\x0b' | b'\x0c' => self.write_char('\n'),
            b'\r' => self.write_char('\r'),
            b'\t' => self.write_char('\t'),
            b'\x08' => self.write_char('\x08'),
            // SO / SI: shift to G1 / G0
            b'\x0e' => self.charsets.invoke(1),
            b'\x0f' => self.charsets.invoke(0),
            // ENQ: answerback
            b'\x05' => {
                if !self.config.answerback.is_empty() {
                    let answerback = self.config.answerback.clone();
                    self.response_buffer.extend_from_slice(answerback.as_bytes());
                }
            }
            b'\x07' => self.events.push(TerminalEvent::BellRang),
            _ => trace!(byte, "ignored control byte"),
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        trace!(%action, "DCS ignored");
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        self.osc_dispatch_impl(params);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore {
            return;
        }
        self.csi_dispatch_impl(params, intermediates, action);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        if ignore {
            return;
        }
        self.esc_dispatch_impl(intermediates, byte);
    }
}
