//! G0-G3 character set slots and the DEC special graphics mapping.
//!
//! ESC `( ) * +` designate a charset into a slot; SO/SI and ESC `n`/`o`
//! select which slot translates printable characters.

/// A designatable character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// US ASCII (designator `B`), no translation
    #[default]
    Ascii,
    /// DEC special graphics / line drawing (designator `0`)
    DecGraphics,
    /// United Kingdom (designator `A`): `#` becomes `£`
    UnitedKingdom,
}

impl Charset {
    /// Resolve a designator final byte; unknown designators fall back to
    /// ASCII rather than failing.
    pub fn from_designator(byte: u8) -> Self {
        match byte {
            b'0' => Charset::DecGraphics,
            b'A' => Charset::UnitedKingdom,
            _ => Charset::Ascii,
        }
    }

    /// Translate a character through this charset.
    pub fn map(&self, c: char) -> char {
        match self {
            Charset::Ascii => c,
            Charset::UnitedKingdom => {
                if c == '#' {
                    '£'
                } else {
                    c
                }
            }
            Charset::DecGraphics => match c {
                '`' => '◆',
                'a' => '▒',
                'b' => '␉',
                'c' => '␌',
                'd' => '␍',
                'e' => '␊',
                'f' => '°',
                'g' => '±',
                'h' => '␤',
                'i' => '␋',
                'j' => '┘',
                'k' => '┐',
                'l' => '┌',
                'm' => '└',
                'n' => '┼',
                'o' => '⎺',
                'p' => '⎻',
                'q' => '─',
                'r' => '⎼',
                's' => '⎽',
                't' => '├',
                'u' => '┤',
                'v' => '┴',
                'w' => '┬',
                'x' => '│',
                'y' => '≤',
                'z' => '≥',
                '{' => 'π',
                '|' => '≠',
                '}' => '£',
                '~' => '·',
                '_' => ' ',
                _ => c,
            },
        }
    }
}

/// Which of the four slots is active.
pub type CharsetIndex = usize;

/// The four invocable designators plus the active slot.
#[derive(Debug, Clone, Default)]
pub struct Charsets {
    slots: [Charset; 4],
    active: CharsetIndex,
}

impl Charsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Designate a charset into slot `index` (0-3); out-of-range indices are
    /// ignored.
    pub fn designate(&mut self, index: usize, charset: Charset) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = charset;
        }
    }

    /// Invoke slot `index` as the active translation (SO/SI/LS2/LS3).
    pub fn invoke(&mut self, index: usize) {
        if index < self.slots.len() {
            self.active = index;
        }
    }

    pub fn active_index(&self) -> CharsetIndex {
        self.active
    }

    pub fn set_active_index(&mut self, index: CharsetIndex) {
        self.invoke(index);
    }

    /// Translate a printable through the active charset.
    pub fn map(&self, c: char) -> char {
        self.slots[self.active].map(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designate_and_invoke() {
        let mut cs = Charsets::new();
        cs.designate(1, Charset::DecGraphics);
        assert_eq!(cs.map('q'), 'q');
        cs.invoke(1);
        assert_eq!(cs.map('q'), '─');
        cs.invoke(0);
        assert_eq!(cs.map('q'), 'q');
    }

    #[test]
    fn test_unknown_designator_is_ascii() {
        assert_eq!(Charset::from_designator(b'Q'), Charset::Ascii);
    }

    #[test]
    fn test_graphics_box_drawing() {
        let g = Charset::DecGraphics;
        assert_eq!(g.map('j'), '┘');
        assert_eq!(g.map('x'), '│');
        assert_eq!(g.map('Z'), 'Z');
    }
}
