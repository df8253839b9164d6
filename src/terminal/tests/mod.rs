mod scrolling;

use crate::config::Config;
use crate::terminal::Terminal;

pub(crate) fn term(cols: usize, rows: usize) -> Terminal {
    Terminal::new(cols, rows, Config::default())
}
