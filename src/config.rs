//! Construction-time configuration for a terminal instance.
//!
//! Parsing of config files and command-line options lives in the embedding
//! application; this struct is the already-resolved result.

use serde::Deserialize;

/// Delimiter set used by double-click word selection. Matches the classic
/// xterm/rxvt cut-chars default.
pub const DEFAULT_CUT_CHARS: &str = "\t \"&'()*,;<=>?@[\\]^`{|}";

/// Terminal configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scrollback capacity in lines (`saveLines`)
    pub scrollback_lines: usize,
    /// Characters treated as word delimiters by double-click selection
    pub cut_chars: String,
    /// Whether triple-click line selection keeps trailing whitespace
    pub select_trailing_spaces: bool,
    /// String sent in answer to a display-name status query; empty disables
    pub answerback: String,
    /// Clipboard buffer that selection commits target
    pub clipboard_target: crate::event::ClipboardTarget,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scrollback_lines: 1000,
            cut_chars: DEFAULT_CUT_CHARS.to_string(),
            select_trailing_spaces: false,
            answerback: String::new(),
            clipboard_target: crate::event::ClipboardTarget::Primary,
        }
    }
}

impl Config {
    /// True if `c` separates words for selection purposes.
    pub fn is_delimiter(&self, c: char) -> bool {
        self.cut_chars.contains(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let cfg = Config::default();
        assert!(cfg.is_delimiter(' '));
        assert!(cfg.is_delimiter('('));
        assert!(!cfg.is_delimiter('a'));
        assert!(!cfg.is_delimiter('_'));
    }
}
