//! CSI (Control Sequence Introducer) sequence handling dispatcher

mod cursor;
mod edit;
mod erase;
mod mode;
mod report;
mod scroll;
mod style;
mod window;

use tracing::debug;
use vte::Params;

use crate::terminal::Terminal;

/// First parameter, or `default` when absent; a 0 parameter also means the
/// default for every sequence handled here.
pub(crate) fn param_or(params: &Params, default: usize) -> usize {
    let p = params
        .iter()
        .next()
        .and_then(|p| p.first())
        .copied()
        .unwrap_or(0) as usize;
    if p == 0 {
        default
    } else {
        p
    }
}

/// `n`-th parameter with the same 0-means-default rule.
pub(crate) fn nth_param_or(params: &Params, n: usize, default: usize) -> usize {
    let p = params
        .iter()
        .nth(n)
        .and_then(|p| p.first())
        .copied()
        .unwrap_or(0) as usize;
    if p == 0 {
        default
    } else {
        p
    }
}

impl Terminal {
    pub(in crate::terminal) fn csi_dispatch_impl(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        action: char,
    ) {
        let private = intermediates.contains(&b'?');

        match action {
            'A' | 'B' | 'C' | 'D' | 'E' | 'F' | 'G' | '`' | 'H' | 'f' | 'd' | 'g' => {
                self.handle_csi_cursor(action, params);
            }
            'J' | 'K' | 'X' => self.handle_csi_erase(action, params, private),
            '@' | 'L' | 'M' | 'P' => self.handle_csi_edit(action, params),
            'S' | 'T' => self.handle_csi_scroll(action, params),
            'r' => {
                if private {
                    self.restore_private_modes(params);
                } else {
                    self.handle_decstbm(params);
                }
            }
            'm' => self.handle_csi_style(params),
            'h' | 'l' => self.handle_csi_mode(action == 'h', params, private),
            's' => {
                if private {
                    self.save_private_modes(params);
                } else {
                    self.save_cursor();
                }
            }
            't' => {
                if private {
                    self.toggle_private_modes(params);
                } else {
                    self.handle_csi_window(params);
                }
            }
            'u' => self.restore_cursor(),
            'n' | 'c' => self.handle_csi_report(action, params),
            'p' => {
                // DECSTR soft reset
                if intermediates.contains(&b'!') {
                    self.reset();
                }
            }
            _ => debug!(%action, ?intermediates, "unsupported CSI action"),
        }
    }
}

#[cfg(test)]
mod tests;
