//! Color model for cell renditions
//!
//! The rendition word stores a 3-bit indexed color for foreground and
//! background plus a "default" marker. Palette resolution (what index 1
//! actually looks like) belongs to the rendering collaborator.

use serde::{Deserialize, Serialize};

/// A cell color: either the terminal default or one of the eight standard
/// ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    /// Terminal default (resolved by the renderer)
    #[default]
    Default,
    /// Standard ANSI color index 0-7
    Indexed(u8),
}

impl Color {
    /// Build from an SGR color offset (0-7), clamping out-of-range indices.
    pub fn from_ansi_index(idx: u8) -> Self {
        Color::Indexed(idx.min(7))
    }

    /// The raw index, if this is not the default color.
    pub fn index(&self) -> Option<u8> {
        match self {
            Color::Default => None,
            Color::Indexed(i) => Some(*i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ansi_index_clamps() {
        assert_eq!(Color::from_ansi_index(3), Color::Indexed(3));
        assert_eq!(Color::from_ansi_index(200), Color::Indexed(7));
    }

    #[test]
    fn test_default_has_no_index() {
        assert_eq!(Color::Default.index(), None);
        assert_eq!(Color::Indexed(1).index(), Some(1));
    }
}
