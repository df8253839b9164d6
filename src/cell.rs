//! The atomic character-plus-rendition unit of the screen model.

use crate::rendition::{Continuation, Rendition};
use serde::{Deserialize, Serialize};

/// One screen cell: a character and its rendition word.
///
/// Cells are plain value types; the grid owns them, nothing else does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character displayed in this cell
    pub c: char,
    /// Packed attribute word
    pub rend: Rendition,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            c: ' ',
            rend: Rendition::default(),
        }
    }
}

impl Cell {
    /// A cell holding `c` with the given rendition, marked dirty.
    pub fn new(c: char, rend: Rendition) -> Self {
        let mut rend = rend;
        rend.set_dirty(true);
        Cell { c, rend }
    }

    /// A blank cell carrying a fill rendition (colors only, see
    /// [`Rendition::fill`]).
    pub fn blank(fill: Rendition) -> Self {
        Cell { c: ' ', rend: fill }
    }

    /// The trailing spacer cell behind a wide character.
    pub fn wide_trail(rend: Rendition) -> Self {
        let mut rend = rend;
        rend.set_dirty(true);
        Cell {
            c: ' ',
            rend: rend.with_continuation(Continuation::Trail),
        }
    }

    /// Reset to a blank cell with the given fill rendition.
    pub fn reset_with(&mut self, fill: Rendition) {
        self.c = ' ';
        self.rend = fill;
    }

    /// True for cells that never carry their own glyph.
    pub fn is_trail(&self) -> bool {
        self.rend.is_trail()
    }

    /// True for a blank cell (space, no continuation).
    pub fn is_blank(&self) -> bool {
        self.c == ' ' && !self.is_trail()
    }
}
