//! Packed cell rendition: style bits, colors, and the wide-character
//! continuation marker.
//!
//! Call sites never manipulate raw bits; everything goes through named
//! constructors and predicates. The attribute bits (bold, underline, blink,
//! reverse) are mutually independent; `SELECTED` and `DIRTY` are bookkeeping
//! bits owned by the selection engine and the renderer respectively and are
//! never part of the SGR state.

use crate::color::Color;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Style and bookkeeping bits of a rendition word
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct RendFlags: u8 {
        const BOLD      = 1 << 0;
        const UNDERLINE = 1 << 1;
        const BLINK     = 1 << 2;
        const REVERSE   = 1 << 3;
        /// Cell is inside the active selection (renderer highlight)
        const SELECTED  = 1 << 4;
        /// Cell changed since the renderer last drew it
        const DIRTY     = 1 << 5;
    }
}

/// Wide-character continuation marker (the 2-bit multi-column field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Continuation {
    /// Single-column cell
    #[default]
    None,
    /// First column of a multi-column character
    Lead,
    /// Trailing spacer column of a multi-column character
    Trail,
}

/// The packed attribute word of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rendition {
    flags: RendFlags,
    fg: Color,
    bg: Color,
    cont: Continuation,
}

impl Rendition {
    /// Style bits that SGR 0 clears. SELECTED/DIRTY survive an SGR reset.
    const SGR_BITS: RendFlags = RendFlags::BOLD
        .union(RendFlags::UNDERLINE)
        .union(RendFlags::BLINK)
        .union(RendFlags::REVERSE);

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Color {
        self.bg
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.flags.contains(RendFlags::BOLD)
    }

    pub fn is_underlined(&self) -> bool {
        self.flags.contains(RendFlags::UNDERLINE)
    }

    pub fn is_blinking(&self) -> bool {
        self.flags.contains(RendFlags::BLINK)
    }

    pub fn is_reversed(&self) -> bool {
        self.flags.contains(RendFlags::REVERSE)
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(RendFlags::SELECTED)
    }

    pub fn is_dirty(&self) -> bool {
        self.flags.contains(RendFlags::DIRTY)
    }

    pub fn set_bold(&mut self, on: bool) {
        self.flags.set(RendFlags::BOLD, on);
    }

    pub fn set_underline(&mut self, on: bool) {
        self.flags.set(RendFlags::UNDERLINE, on);
    }

    pub fn set_blink(&mut self, on: bool) {
        self.flags.set(RendFlags::BLINK, on);
    }

    pub fn set_reverse(&mut self, on: bool) {
        self.flags.set(RendFlags::REVERSE, on);
    }

    pub fn set_selected(&mut self, on: bool) {
        self.flags.set(RendFlags::SELECTED, on);
    }

    pub fn set_dirty(&mut self, on: bool) {
        self.flags.set(RendFlags::DIRTY, on);
    }

    /// Reset the SGR-controlled state (SGR 0): default colors, style bits off.
    pub fn reset_sgr(&mut self) {
        self.flags.remove(Self::SGR_BITS);
        self.fg = Color::Default;
        self.bg = Color::Default;
    }

    /// Rendition used to blank cells for erase and scroll operations: keeps
    /// the current colors but strips every attribute and bookkeeping bit
    /// except DIRTY, so erased regions inherit the active background without
    /// picking up underline/reverse from the cursor rendition.
    pub fn fill(&self) -> Self {
        Rendition {
            flags: RendFlags::DIRTY,
            fg: self.fg,
            bg: self.bg,
            cont: Continuation::None,
        }
    }

    pub fn continuation(&self) -> Continuation {
        self.cont
    }

    pub fn with_continuation(mut self, cont: Continuation) -> Self {
        self.cont = cont;
        self
    }

    /// True for the trailing spacer column of a wide character.
    pub fn is_trail(&self) -> bool {
        self.cont == Continuation::Trail
    }
}
