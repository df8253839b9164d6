//! Text selection
//!
//! Selections are stored in absolute line coordinates so they stay anchored
//! to their text while the viewport scrolls; a selection dies only when its
//! lines are evicted from the scrollback ring or overwritten. Endpoints are
//! kept normalized (`beg <= end`, row-major) with the end column inclusive.

use crate::config::Config;
use crate::grid::Grid;

/// A position in the text stream: absolute line number plus column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub line: usize,
    pub col: usize,
}

impl Point {
    pub fn new(line: usize, col: usize) -> Self {
        Point { line, col }
    }
}

/// Selection granularity; repeated clicks at the same spot rotate through
/// the units and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionUnit {
    #[default]
    Char,
    Word,
    Line,
}

impl SelectionUnit {
    /// Unit for a click count (1 = char, 2 = word, 3 = line, then wraps).
    pub fn from_clicks(clicks: usize) -> Self {
        match (clicks + 2) % 3 {
            0 => SelectionUnit::Char,
            1 => SelectionUnit::Word,
            _ => SelectionUnit::Line,
        }
    }

    pub fn rotate(self) -> Self {
        match self {
            SelectionUnit::Char => SelectionUnit::Word,
            SelectionUnit::Word => SelectionUnit::Line,
            SelectionUnit::Line => SelectionUnit::Char,
        }
    }
}

/// Gesture progress of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Anchor placed, not yet dragged
    Initiated,
    /// At least one extend has happened
    Active,
    /// Text captured and handed to the clipboard
    Committed,
}

/// An active selection between two normalized endpoints.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Where the gesture started; extension pivots around this point
    pub anchor: Point,
    pub beg: Point,
    pub end: Point,
    pub unit: SelectionUnit,
    pub state: SelectionState,
    /// Detached copy made at commit time; survives buffer changes
    pub text: Option<String>,
}

impl Selection {
    /// Begin a selection at `anchor`. Char selections start empty at the
    /// anchor cell; word and line selections snap immediately.
    pub fn start(grid: &Grid, cfg: &Config, anchor: Point, unit: SelectionUnit) -> Self {
        let mut sel = Selection {
            anchor,
            beg: anchor,
            end: anchor,
            unit,
            state: SelectionState::Initiated,
            text: None,
        };
        sel.update_points(grid, cfg, anchor);
        sel
    }

    /// Extend toward `to`, re-snapping both ends to the current unit.
    pub fn update(&mut self, grid: &Grid, cfg: &Config, to: Point) {
        self.state = SelectionState::Active;
        self.update_points(grid, cfg, to);
    }

    fn update_points(&mut self, grid: &Grid, cfg: &Config, to: Point) {
        let (lo, hi) = if to < self.anchor {
            (to, self.anchor)
        } else {
            (self.anchor, to)
        };
        self.beg = snap_low(grid, cfg, lo, self.unit);
        self.end = snap_high(grid, cfg, hi, self.unit);
    }

    /// Rotate the unit (multi-click on an existing selection) and re-snap.
    pub fn rotate(&mut self, grid: &Grid, cfg: &Config, at: Point) {
        self.unit = self.unit.rotate();
        self.update(grid, cfg, at);
    }

    /// Capture the selected text as a detached string.
    pub fn commit(&mut self, grid: &Grid, cfg: &Config) -> String {
        let text = self.text(grid, cfg);
        self.text = Some(text.clone());
        self.state = SelectionState::Committed;
        text
    }

    pub fn contains(&self, p: Point) -> bool {
        self.beg <= p && p <= self.end
    }

    /// True if any selected line falls in `[from, to]` (absolute lines).
    pub fn intersects_lines(&self, from: usize, to: usize) -> bool {
        self.beg.line <= to && from <= self.end.line
    }

    /// Gather the selected text. Wrapped rows run on without a newline;
    /// naturally-ended rows contribute one.
    pub fn text(&self, grid: &Grid, cfg: &Config) -> String {
        let mut out = String::new();
        for line in self.beg.line..=self.end.line {
            let (Some(cells), Some(tail)) = (grid.abs_line(line), grid.abs_tail(line)) else {
                continue;
            };
            let len = tail.len(grid.cols());
            let from = if line == self.beg.line { self.beg.col } else { 0 };
            let to = if line == self.end.line {
                (self.end.col + 1).min(len)
            } else {
                len
            };
            if from < to {
                let mut text: String = cells[from..to]
                    .iter()
                    .filter(|c| !c.is_trail())
                    .map(|c| c.c)
                    .collect();
                if !cfg.select_trailing_spaces && !tail.is_wrapped() {
                    text.truncate(text.trim_end_matches(' ').len());
                }
                out.push_str(&text);
            }
            if line < self.end.line && !tail.is_wrapped() {
                out.push('\n');
            }
        }
        out
    }
}

fn snap_low(grid: &Grid, cfg: &Config, p: Point, unit: SelectionUnit) -> Point {
    match unit {
        SelectionUnit::Char => p,
        SelectionUnit::Word => scan_word(grid, cfg, p, false),
        SelectionUnit::Line => Point::new(logical_line_start(grid, p.line), 0),
    }
}

fn snap_high(grid: &Grid, cfg: &Config, p: Point, unit: SelectionUnit) -> Point {
    match unit {
        SelectionUnit::Char => p,
        SelectionUnit::Word => scan_word(grid, cfg, p, true),
        SelectionUnit::Line => {
            let line = logical_line_end(grid, p.line);
            let len = grid
                .abs_tail(line)
                .map(|t| t.len(grid.cols()))
                .unwrap_or(0);
            Point::new(line, len.saturating_sub(1))
        }
    }
}

/// First line of the logical line containing `line` (follow wrap sentinels
/// upward).
fn logical_line_start(grid: &Grid, line: usize) -> usize {
    let mut l = line;
    while l > 0
        && grid
            .abs_tail(l - 1)
            .map(|t| t.is_wrapped())
            .unwrap_or(false)
    {
        l -= 1;
    }
    l
}

/// Last line of the logical line containing `line`.
fn logical_line_end(grid: &Grid, line: usize) -> usize {
    let mut l = line;
    while l + 1 < grid.abs_end()
        && grid.abs_tail(l).map(|t| t.is_wrapped()).unwrap_or(false)
    {
        l += 1;
    }
    l
}

fn char_at(grid: &Grid, p: Point) -> Option<char> {
    grid.abs_line(p.line).and_then(|cells| {
        let len = grid.abs_tail(p.line)?.len(grid.cols());
        if p.col < len {
            Some(cells[p.col].c)
        } else {
            None
        }
    })
}

/// Walk from `p` over characters of the same class (delimiter or not),
/// crossing wrap boundaries, and return the far endpoint in the chosen
/// direction.
fn scan_word(grid: &Grid, cfg: &Config, p: Point, forward: bool) -> Point {
    let Some(start) = char_at(grid, p) else {
        return p;
    };
    let in_word = !cfg.is_delimiter(start);
    let mut cur = p;
    loop {
        let next = if forward {
            step_forward(grid, cur)
        } else {
            step_back(grid, cur)
        };
        match next {
            Some(n) => match char_at(grid, n) {
                Some(c) if !cfg.is_delimiter(c) == in_word => cur = n,
                _ => break,
            },
            None => break,
        }
    }
    cur
}

fn step_forward(grid: &Grid, p: Point) -> Option<Point> {
    let tail = grid.abs_tail(p.line)?;
    let len = tail.len(grid.cols());
    if p.col + 1 < len {
        Some(Point::new(p.line, p.col + 1))
    } else if tail.is_wrapped() && p.line + 1 < grid.abs_end() {
        Some(Point::new(p.line + 1, 0))
    } else {
        None
    }
}

fn step_back(grid: &Grid, p: Point) -> Option<Point> {
    if p.col > 0 {
        Some(Point::new(p.line, p.col - 1))
    } else if p.line > 0
        && grid
            .abs_tail(p.line - 1)
            .map(|t| t.is_wrapped())
            .unwrap_or(false)
    {
        let len = grid.abs_tail(p.line - 1)?.len(grid.cols());
        Some(Point::new(p.line - 1, len.saturating_sub(1)))
    } else {
        None
    }
}
