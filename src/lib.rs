//! Terminal emulation core: screen and scrollback buffers, an
//! ANSI/VT100/xterm escape-sequence interpreter, and a text-selection
//! engine.
//!
//! The crate models the text side of an X terminal emulator. Feed
//! application output to [`Terminal::process`]; read back the grid, the
//! queued responses, and the events for the windowing, rendering, and
//! clipboard collaborators. Rendering, keyboard handling, and process
//! plumbing live in the embedder.
//!
//! ```
//! use vt_term_core::{Config, Terminal};
//!
//! let mut term = Terminal::new(80, 24, Config::default());
//! term.process(b"\x1b[1mhello\x1b[0m world\r\n");
//! assert_eq!(term.visible_row_text(0), "hello world");
//! ```

pub mod cell;
pub mod charset;
pub mod color;
pub mod config;
pub mod cursor;
pub mod event;
pub mod grid;
pub mod rendition;
pub mod selection;
pub mod terminal;

pub use cell::Cell;
pub use color::Color;
pub use config::Config;
pub use cursor::Cursor;
pub use event::{ClipboardTarget, TerminalEvent, WindowOp};
pub use grid::{Grid, LineTail};
pub use rendition::{Continuation, RendFlags, Rendition};
pub use selection::{Point, Selection, SelectionState, SelectionUnit};
pub use terminal::{Modes, MouseMode, Terminal};
