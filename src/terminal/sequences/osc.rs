//! OSC (Operating System Command) sequences.
//!
//! Everything here is metadata for the windowing collaborator; nothing
//! touches the grid.

use tracing::debug;

use crate::event::TerminalEvent;
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn osc_dispatch_impl(&mut self, params: &[&[u8]]) {
        let Some(selector) = params.first() else {
            return;
        };
        let payload = osc_payload(&params[1..]);
        match *selector {
            b"0" => {
                self.events.push(TerminalEvent::TitleChanged(payload.clone()));
                self.events.push(TerminalEvent::IconNameChanged(payload));
            }
            b"1" => self.events.push(TerminalEvent::IconNameChanged(payload)),
            b"2" => self.events.push(TerminalEvent::TitleChanged(payload)),
            // Background pixmap spec, forwarded uninterpreted
            b"20" => self.events.push(TerminalEvent::PixmapChanged(payload)),
            // Icon pixmap path
            b"50" => self.events.push(TerminalEvent::IconPixmapChanged(payload)),
            // Private extension escape; the payload goes to the embedder
            b"777" => self.events.push(TerminalEvent::Extension(payload)),
            _ => debug!(
                selector = %String::from_utf8_lossy(selector),
                "unhandled OSC selector"
            ),
        }
    }
}

/// Re-join the parameter pieces after the selector; vte splits on `;` but
/// titles and pixmap specs may legitimately contain them.
fn osc_payload(params: &[&[u8]]) -> String {
    params
        .iter()
        .map(|p| String::from_utf8_lossy(p).into_owned())
        .collect::<Vec<_>>()
        .join(";")
}
