//! SGR (Select Graphic Rendition) handling

use tracing::debug;
use vte::Params;

use crate::color::Color;
use crate::terminal::Terminal;

impl Terminal {
    pub(crate) fn handle_csi_style(&mut self, params: &Params) {
        if params.is_empty() {
            self.rendition.reset_sgr();
            return;
        }
        for param_slice in params {
            let param = param_slice.first().copied().unwrap_or(0);
            match param {
                0 => self.rendition.reset_sgr(),
                1 => self.rendition.set_bold(true),
                4 => self.rendition.set_underline(true),
                5 => self.rendition.set_blink(true),
                7 => self.rendition.set_reverse(true),
                22 => self.rendition.set_bold(false),
                24 => self.rendition.set_underline(false),
                25 => self.rendition.set_blink(false),
                27 => self.rendition.set_reverse(false),
                30..=37 => {
                    self.rendition = self
                        .rendition
                        .with_fg(Color::from_ansi_index((param - 30) as u8));
                }
                39 => self.rendition = self.rendition.with_fg(Color::Default),
                40..=47 => {
                    self.rendition = self
                        .rendition
                        .with_bg(Color::from_ansi_index((param - 40) as u8));
                }
                49 => self.rendition = self.rendition.with_bg(Color::Default),
                _ => debug!(param, "unsupported SGR parameter"),
            }
        }
    }
}
