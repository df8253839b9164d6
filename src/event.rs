//! Events emitted toward the windowing, rendering, and clipboard
//! collaborators.
//!
//! The interpreter never touches the window system directly: anything that
//! belongs to a collaborator is queued as an event and drained by the
//! embedder after each `process()` call.

use serde::{Deserialize, Serialize};

/// Clipboard buffer selector for selection commits and paste requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClipboardTarget {
    /// X11 primary selection
    #[default]
    Primary,
    /// X11 secondary selection
    Secondary,
    /// Desktop clipboard
    Clipboard,
    /// Numbered cut buffer 0-7
    CutBuffer(u8),
}

/// Window-manipulation requests forwarded verbatim to the windowing
/// collaborator; none of these are implemented locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOp {
    /// Deiconify / map
    Deiconify,
    /// Iconify / unmap
    Iconify,
    /// Move the window to pixel position
    Move { x: i32, y: i32 },
    /// Resize the text area in pixels
    ResizePixels { width: usize, height: usize },
    /// Resize the text area in character cells
    ResizeChars { cols: usize, rows: usize },
    /// Raise to the top of the stacking order
    Raise,
    /// Lower to the bottom of the stacking order
    Lower,
    /// Refresh the window
    Refresh,
    /// Switch between 80 and 132 column layout (DECCOLM)
    SetColumns(usize),
    /// Report iconified/normal state
    ReportState,
    /// Report window position
    ReportPosition,
    /// Report text area size in pixels
    ReportSizePixels,
    /// Report text area size in characters
    ReportSizeChars,
}

/// Everything this core tells the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Window title changed (OSC 0/2); pure metadata
    TitleChanged(String),
    /// Icon name changed (OSC 0/1)
    IconNameChanged(String),
    /// Icon pixmap path changed (OSC private selector)
    IconPixmapChanged(String),
    /// Background pixmap request forwarded to the renderer
    PixmapChanged(String),
    /// Private extension command payload, forwarded uninterpreted
    Extension(String),
    /// BEL received
    BellRang,
    /// Window-manipulation request for the windowing collaborator
    WindowOp(WindowOp),
    /// A mode the renderer cares about flipped (reverse video, cursor
    /// visibility, mouse reporting, ...)
    ModeChanged { mode: &'static str, enabled: bool },
    /// Selection committed; hand the text to the clipboard collaborator
    ClipboardSet {
        target: ClipboardTarget,
        text: String,
    },
}
