//! The terminal context object
//!
//! `Terminal` owns the primary and alternate grids, cursor, rendition,
//! charsets, mode flags, scroll region, tab stops, the escape-sequence
//! parser, and the selection. Bytes go in through [`Terminal::process`];
//! responses, events, and dirty rows come back out through the drain
//! methods. Everything is a method on the context; there is no shared or
//! global state.

use std::collections::HashMap;

use tracing::debug;

use crate::cell::Cell;
use crate::charset::Charsets;
use crate::config::Config;
use crate::cursor::{Cursor, SavedCursor};
use crate::event::TerminalEvent;
use crate::grid::{Grid, LineTail};
use crate::rendition::{Continuation, Rendition};
use crate::selection::{Point, Selection, SelectionUnit};

mod perform;
mod sequences;

#[cfg(test)]
mod tests;

/// Mouse reporting protocol requested by the application. Only the mode is
/// tracked here; event encoding happens in the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseMode {
    #[default]
    Off,
    /// DECSET 9: press only
    X10,
    /// DECSET 1000: press and release
    X11,
}

/// The terminal mode flags an application can toggle.
#[derive(Debug, Clone)]
pub struct Modes {
    /// DECAWM: wrap at the right margin instead of clamping
    pub auto_wrap: bool,
    /// IRM: printables shift the rest of the row right
    pub insert: bool,
    /// DECOM: cursor addressing is relative to the scroll region
    pub origin: bool,
    /// LNM: LF implies CR
    pub linefeed_newline: bool,
    /// DECCKM: cursor keys send application sequences
    pub app_cursor_keys: bool,
    /// DECNKM/DECPAM: keypad sends application sequences
    pub app_keypad: bool,
    /// DECSCNM: reverse video for the whole screen
    pub reverse_video: bool,
    /// DECBKM-style: backspace key sends DEL instead of BS
    pub backspace_sends_del: bool,
    pub mouse: MouseMode,
}

impl Default for Modes {
    fn default() -> Self {
        Modes {
            auto_wrap: true,
            insert: false,
            origin: false,
            linefeed_newline: false,
            app_cursor_keys: false,
            app_keypad: false,
            reverse_video: false,
            backspace_sends_del: false,
            mouse: MouseMode::Off,
        }
    }
}

const DEFAULT_TAB_INTERVAL: usize = 8;

/// A complete terminal screen state machine.
pub struct Terminal {
    primary: Grid,
    alternate: Grid,
    using_alternate: bool,
    pub(crate) cursor: Cursor,
    saved_cursor: Option<SavedCursor>,
    alt_saved_cursor: Option<SavedCursor>,
    pub(crate) rendition: Rendition,
    pub(crate) charsets: Charsets,
    pub(crate) modes: Modes,
    /// Deferred-wrap flag: set after printing in the last column, consumed
    /// by the next printable
    pub(crate) pending_wrap: bool,
    pub(crate) scroll_top: usize,
    pub(crate) scroll_bottom: usize,
    tab_stops: Vec<bool>,
    /// How many scrollback lines the view is shifted back by
    view_start: usize,
    /// DECSET states stashed by `CSI ? Ps s`
    pub(crate) saved_modes: HashMap<u16, bool>,
    /// VTE parser instance (maintains state across process() calls)
    parser: vte::Parser,
    pub(crate) response_buffer: Vec<u8>,
    pub(crate) events: Vec<TerminalEvent>,
    /// Merged range of viewport rows touched since the last drain
    dirty: Option<(usize, usize)>,
    pub(crate) selection: Option<Selection>,
    pub(crate) config: Config,
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("cols", &self.primary.cols())
            .field("rows", &self.primary.rows())
            .field("cursor", &self.cursor)
            .field("using_alternate", &self.using_alternate)
            .field("view_start", &self.view_start)
            .finish_non_exhaustive()
    }
}

impl Terminal {
    pub fn new(cols: usize, rows: usize, config: Config) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Terminal {
            primary: Grid::new(cols, rows, config.scrollback_lines),
            alternate: Grid::new(cols, rows, 0),
            using_alternate: false,
            cursor: Cursor::new(),
            saved_cursor: None,
            alt_saved_cursor: None,
            rendition: Rendition::default(),
            charsets: Charsets::new(),
            modes: Modes::default(),
            pending_wrap: false,
            scroll_top: 0,
            scroll_bottom: rows - 1,
            tab_stops: default_tab_stops(cols),
            view_start: 0,
            saved_modes: HashMap::new(),
            parser: vte::Parser::new(),
            response_buffer: Vec::new(),
            events: Vec::new(),
            dirty: Some((0, rows - 1)),
            selection: None,
            config,
        }
    }

    // ------------------------------------------------------------------
    // Byte interface

    /// Feed a chunk of output from the application through the parser.
    pub fn process(&mut self, data: &[u8]) {
        // Temporarily take the parser to keep the borrow checker happy;
        // its state survives across calls.
        let mut parser = std::mem::replace(&mut self.parser, vte::Parser::new());
        parser.advance(self, data);
        self.parser = parser;
    }

    /// Bytes owed to the application (status reports, answerback).
    pub fn drain_responses(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.response_buffer)
    }

    /// Events owed to the windowing/rendering/clipboard collaborators.
    pub fn drain_events(&mut self) -> Vec<TerminalEvent> {
        std::mem::take(&mut self.events)
    }

    /// The merged range of viewport rows touched since the last call,
    /// inclusive, or `None` if nothing changed.
    pub fn take_dirty_rows(&mut self) -> Option<(usize, usize)> {
        self.dirty.take()
    }

    // ------------------------------------------------------------------
    // Grid access

    pub(crate) fn grid(&self) -> &Grid {
        if self.using_alternate {
            &self.alternate
        } else {
            &self.primary
        }
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        if self.using_alternate {
            &mut self.alternate
        } else {
            &mut self.primary
        }
    }

    pub fn cols(&self) -> usize {
        self.grid().cols()
    }

    pub fn rows(&self) -> usize {
        self.grid().rows()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.using_alternate
    }

    pub fn modes(&self) -> &Modes {
        &self.modes
    }

    pub fn scrollback_len(&self) -> usize {
        self.primary.scrollback_len()
    }

    /// The cell shown at viewport position (`col`, `row`) with the current
    /// view offset applied.
    pub fn visible_cell(&self, col: usize, row: usize) -> Option<&Cell> {
        let line = (self.grid().viewport_base() + row).checked_sub(self.view_start)?;
        self.grid().abs_line(line).and_then(|cells| cells.get(col))
    }

    /// Text of one visible row (view offset applied), trailing blanks kept.
    pub fn visible_row_text(&self, row: usize) -> String {
        let Some(line) = (self.grid().viewport_base() + row).checked_sub(self.view_start) else {
            return String::new();
        };
        match (self.grid().abs_line(line), self.grid().abs_tail(line)) {
            (Some(cells), Some(tail)) => cells[..tail.len(self.cols())]
                .iter()
                .filter(|c| !c.is_trail())
                .map(|c| c.c)
                .collect(),
            _ => String::new(),
        }
    }

    /// The whole viewport as newline-joined text, ignoring the view offset.
    pub fn contents(&self) -> String {
        (0..self.rows())
            .map(|row| self.grid().row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ------------------------------------------------------------------
    // Scrollback viewing

    pub fn view_start(&self) -> usize {
        self.view_start
    }

    /// Shift the view `n` lines further into history.
    pub fn scroll_view_up(&mut self, n: usize) {
        if self.using_alternate {
            return;
        }
        let new = (self.view_start + n).min(self.primary.scrollback_len());
        if new != self.view_start {
            self.view_start = new;
            self.mark_all_dirty();
        }
    }

    /// Shift the view `n` lines back toward the live screen.
    pub fn scroll_view_down(&mut self, n: usize) {
        let new = self.view_start.saturating_sub(n);
        if new != self.view_start {
            self.view_start = new;
            self.mark_all_dirty();
        }
    }

    // ------------------------------------------------------------------
    // Dirty tracking

    pub(crate) fn mark_dirty(&mut self, row: usize) {
        self.mark_dirty_range(row, row);
    }

    pub(crate) fn mark_dirty_range(&mut self, first: usize, last: usize) {
        self.dirty = Some(match self.dirty {
            Some((a, b)) => (a.min(first), b.max(last)),
            None => (first, last),
        });
    }

    pub(crate) fn mark_all_dirty(&mut self) {
        self.mark_dirty_range(0, self.rows().saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // Character writing

    /// Write one character at the cursor, handling the C0 controls the
    /// parser routes here as well as printables.
    pub(crate) fn write_char(&mut self, c: char) {
        match c {
            '\r' => {
                self.cursor.col = 0;
                self.pending_wrap = false;
            }
            '\n' => {
                self.line_feed();
                if self.modes.linefeed_newline {
                    self.cursor.col = 0;
                }
            }
            '\t' => self.horizontal_tab(),
            '\x08' => {
                self.cursor.move_left(1);
                self.pending_wrap = false;
            }
            _ => self.print_char(c),
        }
    }

    fn print_char(&mut self, c: char) {
        let c = self.charsets.map(c);
        let width = match unicode_width::UnicodeWidthChar::width(c) {
            Some(w) if w > 0 => w,
            // Zero-width and control-ish characters don't occupy a cell
            _ => return,
        };

        let cols = self.cols();
        if self.pending_wrap && self.modes.auto_wrap {
            let row = self.cursor.row;
            self.grid_mut().set_tail(row, LineTail::Wrapped);
            self.pending_wrap = false;
            self.line_feed();
            self.cursor.col = 0;
        }
        // A wide char that doesn't fit at the margin wraps (or clamps) early
        if width > 1 && self.cursor.col + width > cols {
            if self.modes.auto_wrap {
                let row = self.cursor.row;
                self.grid_mut().set_tail(row, LineTail::Wrapped);
                self.line_feed();
                self.cursor.col = 0;
            } else {
                self.cursor.col = cols.saturating_sub(width);
            }
        }

        let (row, col) = (self.cursor.row, self.cursor.col);
        self.invalidate_selection_on_row(row);

        if self.modes.insert {
            let fill = self.rendition.fill();
            self.grid_mut().insert_chars(row, col, width, fill);
        }

        let rend = if width > 1 {
            self.rendition.with_continuation(Continuation::Lead)
        } else {
            self.rendition
        };
        let trail_rend = self.rendition;
        self.grid_mut().set(col, row, Cell::new(c, rend));
        if width > 1 {
            self.grid_mut().set(col + 1, row, Cell::wide_trail(trail_rend));
        }
        self.grid_mut().bump_line_len(row, col + width);
        self.mark_dirty(row);

        if col + width >= cols {
            self.cursor.col = cols - 1;
            self.pending_wrap = self.modes.auto_wrap;
        } else {
            self.cursor.col = col + width;
        }
    }

    // ------------------------------------------------------------------
    // Cursor motion and scrolling

    /// Move down one row, scrolling the region when the cursor sits on its
    /// bottom line (IND / LF).
    pub(crate) fn line_feed(&mut self) {
        self.pending_wrap = false;
        if self.cursor.row == self.scroll_bottom {
            self.scroll_up_region(1);
        } else if self.cursor.row + 1 < self.rows() {
            self.cursor.row += 1;
        }
    }

    /// Move up one row, scrolling the region down when the cursor sits on
    /// its top line (RI).
    pub(crate) fn reverse_index(&mut self) {
        self.pending_wrap = false;
        if self.cursor.row == self.scroll_top {
            self.scroll_down_region(1);
        } else {
            self.cursor.move_up(1);
        }
    }

    /// Scroll the region up `n` lines. A full-screen scroll on the primary
    /// grid feeds scrollback and keeps a scrolled-back view pinned to its
    /// content; a margin scroll drops the lines.
    pub(crate) fn scroll_up_region(&mut self, n: usize) {
        let (top, bottom) = (self.scroll_top, self.scroll_bottom);
        let fill = self.rendition.fill();
        let full = top == 0 && bottom + 1 == self.rows();
        if full && !self.using_alternate {
            self.primary.scroll_up(n, fill);
            if self.view_start > 0 {
                self.view_start = (self.view_start + n).min(self.primary.scrollback_len());
            }
            // Selection coordinates are absolute; only ring eviction kills it
            if let Some(sel) = &self.selection {
                if sel.beg.line < self.primary.history_floor() {
                    self.clear_selection();
                }
            }
        } else {
            let base = self.grid().viewport_base();
            if let Some(sel) = &self.selection {
                if sel.intersects_lines(base + top, base + bottom) {
                    self.clear_selection();
                }
            }
            self.grid_mut().scroll_region_up(n, top, bottom, fill);
        }
        self.mark_dirty_range(top, bottom);
    }

    /// Scroll the region down `n` lines.
    pub(crate) fn scroll_down_region(&mut self, n: usize) {
        let (top, bottom) = (self.scroll_top, self.scroll_bottom);
        let fill = self.rendition.fill();
        let base = self.grid().viewport_base();
        if let Some(sel) = &self.selection {
            if sel.intersects_lines(base + top, base + bottom) {
                self.clear_selection();
            }
        }
        self.grid_mut().scroll_region_down(n, top, bottom, fill);
        self.mark_dirty_range(top, bottom);
    }

    /// Absolute cursor addressing (CUP/HVP), honoring origin mode.
    pub(crate) fn goto(&mut self, row: usize, col: usize) {
        let (base, max_row) = if self.modes.origin {
            (self.scroll_top, self.scroll_bottom)
        } else {
            (0, self.rows() - 1)
        };
        self.cursor.row = (base + row).min(max_row);
        self.cursor.col = col.min(self.cols() - 1);
        self.pending_wrap = false;
    }

    pub(crate) fn horizontal_tab(&mut self) {
        let cols = self.cols();
        let mut col = self.cursor.col + 1;
        while col < cols && !self.tab_stops.get(col).copied().unwrap_or(false) {
            col += 1;
        }
        self.cursor.col = col.min(cols - 1);
        self.pending_wrap = false;
    }

    pub(crate) fn set_tab_stop(&mut self) {
        if let Some(stop) = self.tab_stops.get_mut(self.cursor.col) {
            *stop = true;
        }
    }

    pub(crate) fn clear_tab_stop(&mut self) {
        if let Some(stop) = self.tab_stops.get_mut(self.cursor.col) {
            *stop = false;
        }
    }

    pub(crate) fn clear_all_tab_stops(&mut self) {
        self.tab_stops.iter_mut().for_each(|s| *s = false);
    }

    /// Set the scroll region (DECSTBM). 0-based inclusive bounds; an invalid
    /// pair resets to the full screen. Homes the cursor.
    pub(crate) fn set_scroll_region(&mut self, top: usize, bottom: usize) {
        let rows = self.rows();
        if top < bottom && bottom < rows {
            self.scroll_top = top;
            self.scroll_bottom = bottom;
        } else {
            self.scroll_top = 0;
            self.scroll_bottom = rows - 1;
        }
        self.goto(0, 0);
    }

    // ------------------------------------------------------------------
    // Save/restore and screen switching

    pub(crate) fn save_cursor(&mut self) {
        let saved = SavedCursor {
            cursor: self.cursor,
            rendition: self.rendition,
            active_charset: self.charsets.active_index(),
            origin_mode: self.modes.origin,
            pending_wrap: self.pending_wrap,
        };
        if self.using_alternate {
            self.alt_saved_cursor = Some(saved);
        } else {
            self.saved_cursor = Some(saved);
        }
    }

    pub(crate) fn restore_cursor(&mut self) {
        let saved = if self.using_alternate {
            self.alt_saved_cursor
        } else {
            self.saved_cursor
        };
        match saved {
            Some(saved) => {
                self.cursor = saved.cursor;
                self.cursor.clamp(self.cols(), self.rows());
                self.rendition = saved.rendition;
                self.charsets.set_active_index(saved.active_charset);
                self.modes.origin = saved.origin_mode;
                self.pending_wrap = saved.pending_wrap;
            }
            // DECRC without a prior DECSC homes the cursor
            None => {
                self.cursor = Cursor::new();
                self.rendition = Rendition::default();
                self.pending_wrap = false;
            }
        }
    }

    /// Switch between the primary and alternate screen. `clear` blanks the
    /// alternate grid on entry (1047/1049 semantics).
    pub(crate) fn switch_screen(&mut self, to_alternate: bool, clear: bool) {
        if self.using_alternate == to_alternate {
            return;
        }
        self.clear_selection();
        self.using_alternate = to_alternate;
        if to_alternate {
            self.view_start = 0;
            if clear {
                let fill = self.rendition.fill();
                self.alternate.clear_all(fill);
            }
        }
        self.cursor.clamp(self.cols(), self.rows());
        self.pending_wrap = false;
        self.mark_all_dirty();
        self.events.push(TerminalEvent::ModeChanged {
            mode: "altscreen",
            enabled: to_alternate,
        });
    }

    /// Full reset (RIS). Scrollback is kept; everything else returns to its
    /// power-on state.
    pub(crate) fn reset(&mut self) {
        debug!("full terminal reset");
        let cols = self.cols();
        let rows = self.rows();
        self.clear_selection();
        self.using_alternate = false;
        self.cursor = Cursor::new();
        self.saved_cursor = None;
        self.alt_saved_cursor = None;
        self.rendition = Rendition::default();
        self.charsets = Charsets::new();
        self.modes = Modes::default();
        self.pending_wrap = false;
        self.scroll_top = 0;
        self.scroll_bottom = rows - 1;
        self.tab_stops = default_tab_stops(cols);
        self.view_start = 0;
        self.saved_modes.clear();
        let fill = Rendition::default().fill();
        self.primary.clear_all(fill);
        self.alternate.clear_all(fill);
        self.mark_all_dirty();
    }

    // ------------------------------------------------------------------
    // Resizing

    /// Resize both screens. Content sticks to the bottom: shrinking pushes
    /// primary rows into scrollback, growing pulls them back. No reflow.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if cols == self.cols() && rows == self.rows() {
            return;
        }

        let cursor_row = self.cursor.row;
        let primary_cursor = if self.using_alternate {
            rows.saturating_sub(1)
        } else {
            cursor_row
        };
        let primary_delta = self.primary.resize(cols, rows, primary_cursor, true);
        let alt_delta = self.alternate.resize(cols, rows, cursor_row, false);
        let delta = if self.using_alternate {
            alt_delta
        } else {
            primary_delta
        };

        let row = (cursor_row as isize + delta).clamp(0, rows as isize - 1) as usize;
        self.cursor.row = row;
        self.cursor.clamp(cols, rows);
        self.pending_wrap = false;
        self.scroll_top = 0;
        self.scroll_bottom = rows - 1;
        self.tab_stops = default_tab_stops(cols);
        self.view_start = self.view_start.min(self.primary.scrollback_len());
        self.validate_selection();
        self.mark_all_dirty();
    }

    // ------------------------------------------------------------------
    // Selection

    /// Absolute-coordinate point for a view position.
    fn view_point(&self, col: usize, row: usize) -> Point {
        let line = (self.grid().viewport_base() + row.min(self.rows().saturating_sub(1)))
            .saturating_sub(self.view_start);
        Point::new(line, col.min(self.cols().saturating_sub(1)))
    }

    /// Anchor a new selection at a view position, dropping any prior one.
    pub fn selection_start(&mut self, col: usize, row: usize) {
        self.clear_selection();
        let point = self.view_point(col, row);
        let sel = Selection::start(self.grid(), &self.config, point, SelectionUnit::Char);
        self.selection = Some(sel);
        self.apply_selection_flags(true);
    }

    /// Extend the selection to a view position. `clicks` picks the unit
    /// (1 char, 2 word, 3 line). A char selection dragged back onto its
    /// anchor collapses to nothing.
    pub fn selection_extend(&mut self, col: usize, row: usize, clicks: usize) {
        let point = self.view_point(col, row);
        let Some(mut sel) = self.selection.take() else {
            return;
        };
        self.apply_selection_range(sel.beg, sel.end, false);
        sel.unit = SelectionUnit::from_clicks(clicks);
        sel.update(self.grid(), &self.config, point);
        if sel.unit == SelectionUnit::Char && point == sel.anchor {
            return;
        }
        self.selection = Some(sel);
        self.apply_selection_flags(true);
    }

    /// Rotate the selection unit in place (multi-click) and re-snap around
    /// the existing anchor.
    pub fn selection_rotate(&mut self, col: usize, row: usize) {
        let point = self.view_point(col, row);
        let Some(mut sel) = self.selection.take() else {
            return;
        };
        self.apply_selection_range(sel.beg, sel.end, false);
        sel.rotate(self.grid(), &self.config, point);
        self.selection = Some(sel);
        self.apply_selection_flags(true);
    }

    /// Capture the selected text, queue it for the clipboard collaborator,
    /// and return it.
    pub fn selection_commit(&mut self) -> Option<String> {
        let Some(mut sel) = self.selection.take() else {
            return None;
        };
        let text = sel.commit(self.grid(), &self.config);
        self.selection = Some(sel);
        if text.is_empty() {
            return None;
        }
        self.events.push(TerminalEvent::ClipboardSet {
            target: self.config.clipboard_target,
            text: text.clone(),
        });
        Some(text)
    }

    /// The committed selection text, if any.
    pub fn selection_text(&self) -> Option<&str> {
        self.selection.as_ref().and_then(|s| s.text.as_deref())
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn clear_selection(&mut self) {
        if let Some(sel) = self.selection.take() {
            self.apply_selection_range(sel.beg, sel.end, false);
        }
    }

    /// Drop the selection if a write lands on one of its rows.
    pub(crate) fn invalidate_selection_on_row(&mut self, row: usize) {
        let line = self.grid().viewport_base() + row;
        if let Some(sel) = &self.selection {
            if sel.intersects_lines(line, line) {
                self.clear_selection();
            }
        }
    }

    /// Drop the selection when its text no longer exists (resize, eviction),
    /// unpainting the SELECTED bits still on surviving cells.
    fn validate_selection(&mut self) {
        let Some(sel) = &self.selection else {
            return;
        };
        let grid = self.grid();
        let gone = sel.beg.line < grid.history_floor()
            || sel.end.line >= grid.abs_end()
            || sel.beg.col >= grid.cols()
            || sel.end.col >= grid.cols();
        if gone {
            self.clear_selection();
            self.mark_all_dirty();
        }
    }

    fn apply_selection_flags(&mut self, on: bool) {
        if let Some(sel) = &self.selection {
            let (beg, end) = (sel.beg, sel.end);
            self.apply_selection_range(beg, end, on);
        }
    }

    /// Paint or clear the SELECTED bit over an absolute-coordinate range.
    fn apply_selection_range(&mut self, beg: Point, end: Point, on: bool) {
        let cols = self.grid().cols();
        let base = self.grid().viewport_base();
        for line in beg.line..=end.line {
            let from = if line == beg.line { beg.col } else { 0 };
            let to = if line == end.line {
                end.col.min(cols.saturating_sub(1))
            } else {
                cols.saturating_sub(1)
            };
            // A column shrink can leave an endpoint past the new width
            if from > to {
                continue;
            }
            if let Some(cells) = self.grid_mut().abs_line_mut(line) {
                for cell in &mut cells[from..=to] {
                    cell.rend.set_selected(on);
                    cell.rend.set_dirty(true);
                }
            }
            if line >= base {
                self.mark_dirty(line - base);
            }
        }
        if beg.line < base {
            // Part of the range is history; a scrolled-back view may show it
            self.mark_all_dirty();
        }
    }
}

fn default_tab_stops(cols: usize) -> Vec<bool> {
    (0..cols).map(|col| col % DEFAULT_TAB_INTERVAL == 0).collect()
}
