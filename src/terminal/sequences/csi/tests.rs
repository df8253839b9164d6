use crate::color::Color;
use crate::config::Config;
use crate::event::{TerminalEvent, WindowOp};
use crate::terminal::{MouseMode, Terminal};

fn term() -> Terminal {
    Terminal::new(10, 5, Config::default())
}

#[test]
fn test_cursor_movement_clamps_at_edges() {
    let mut t = term();
    t.process(b"\x1b[99C");
    assert_eq!(t.cursor().col, 9);
    t.process(b"\x1b[99B");
    assert_eq!(t.cursor().row, 4);
    t.process(b"\x1b[99D\x1b[99A");
    assert_eq!(t.cursor().col, 0);
    assert_eq!(t.cursor().row, 0);
}

#[test]
fn test_cup_is_one_based_and_clamped() {
    let mut t = term();
    t.process(b"\x1b[3;4H");
    assert_eq!(t.cursor().row, 2);
    assert_eq!(t.cursor().col, 3);
    t.process(b"\x1b[99;99H");
    assert_eq!(t.cursor().row, 4);
    assert_eq!(t.cursor().col, 9);
    // Zero params mean 1
    t.process(b"\x1b[0;0H");
    assert_eq!(t.cursor().row, 0);
    assert_eq!(t.cursor().col, 0);
}

#[test]
fn test_cha_and_vpa() {
    let mut t = term();
    t.process(b"\x1b[5G");
    assert_eq!(t.cursor().col, 4);
    t.process(b"\x1b[3d");
    assert_eq!(t.cursor().row, 2);
    assert_eq!(t.cursor().col, 4);
}

#[test]
fn test_ed_variants() {
    let mut t = term();
    t.process(b"aaa\r\nbbb\r\nccc\x1b[2;2H\x1b[0J");
    assert_eq!(t.visible_row_text(0), "aaa");
    assert_eq!(t.visible_row_text(1), "b");
    assert_eq!(t.visible_row_text(2), "");

    let mut t = term();
    t.process(b"aaa\r\nbbb\r\nccc\x1b[2;2H\x1b[1J");
    assert_eq!(t.visible_row_text(0), "");
    assert_eq!(t.visible_row_text(1), "  b");
    assert_eq!(t.visible_row_text(2), "ccc");

    let mut t = term();
    t.process(b"aaa\r\nbbb\x1b[2J");
    assert_eq!(t.contents(), "\n\n\n\n");
}

#[test]
fn test_ed_3_clears_scrollback() {
    let mut t = Terminal::new(10, 2, Config::default());
    t.process(b"one\r\ntwo\r\nthree\r\nfour");
    assert!(t.scrollback_len() > 0);
    t.process(b"\x1b[3J");
    assert_eq!(t.scrollback_len(), 0);
    // Viewport untouched
    assert_eq!(t.visible_row_text(1), "four");
}

#[test]
fn test_el_variants() {
    let mut t = term();
    t.process(b"abcdef\x1b[4G\x1b[K");
    assert_eq!(t.visible_row_text(0), "abc");

    let mut t = term();
    t.process(b"abcdef\x1b[4G\x1b[1K");
    assert_eq!(t.visible_row_text(0), "    ef");

    let mut t = term();
    t.process(b"abcdef\x1b[2K");
    assert_eq!(t.visible_row_text(0), "");
}

#[test]
fn test_ich_dch_ech() {
    let mut t = term();
    t.process(b"abcdef\x1b[2G\x1b[2@");
    assert_eq!(t.visible_row_text(0), "a  bcdef");

    let mut t = term();
    t.process(b"abcdef\x1b[2G\x1b[2P");
    assert_eq!(t.visible_row_text(0), "adef");

    let mut t = term();
    t.process(b"abcdef\x1b[2G\x1b[2X");
    assert_eq!(t.visible_row_text(0), "a  def");
}

#[test]
fn test_il_dl_respect_scroll_region() {
    let mut t = term();
    t.process(b"a\r\nb\r\nc\r\nd\r\ne");
    // Region rows 2-4 (1-based), cursor to row 2, insert one line
    t.process(b"\x1b[2;4r\x1b[2;1H\x1b[L");
    assert_eq!(t.visible_row_text(0), "a");
    assert_eq!(t.visible_row_text(1), "");
    assert_eq!(t.visible_row_text(2), "b");
    assert_eq!(t.visible_row_text(3), "c");
    // Row below the region is untouched; "d" was pushed out of the region
    assert_eq!(t.visible_row_text(4), "e");

    t.process(b"\x1b[M");
    assert_eq!(t.visible_row_text(1), "b");
    assert_eq!(t.visible_row_text(2), "c");
    assert_eq!(t.visible_row_text(3), "");
}

#[test]
fn test_il_outside_region_is_noop() {
    let mut t = term();
    t.process(b"a\r\nb\r\nc\x1b[2;3r\x1b[1;1H\x1b[L");
    assert_eq!(t.visible_row_text(0), "a");
    assert_eq!(t.visible_row_text(1), "b");
}

#[test]
fn test_su_sd_within_region() {
    let mut t = term();
    t.process(b"a\r\nb\r\nc\r\nd\r\ne\x1b[2;4r");
    t.process(b"\x1b[S");
    assert_eq!(t.visible_row_text(0), "a");
    assert_eq!(t.visible_row_text(1), "c");
    assert_eq!(t.visible_row_text(2), "d");
    assert_eq!(t.visible_row_text(3), "");
    assert_eq!(t.visible_row_text(4), "e");

    t.process(b"\x1b[T");
    assert_eq!(t.visible_row_text(1), "");
    assert_eq!(t.visible_row_text(2), "c");
    assert_eq!(t.visible_row_text(3), "d");
}

#[test]
fn test_decstbm_invalid_resets_to_full() {
    let mut t = term();
    t.process(b"\x1b[4;2r");
    // top >= bottom resets the region; LF at the last row must scroll
    t.process(b"\x1b[5;1Hx\n");
    assert_eq!(t.scrollback_len(), 1);
}

#[test]
fn test_sgr_sets_and_resets() {
    let mut t = term();
    t.process(b"\x1b[1;4;31;42mx\x1b[my");
    let bold = t.visible_cell(0, 0).unwrap();
    assert!(bold.rend.is_bold());
    assert!(bold.rend.is_underlined());
    assert_eq!(bold.rend.fg(), Color::Indexed(1));
    assert_eq!(bold.rend.bg(), Color::Indexed(2));

    let plain = t.visible_cell(1, 0).unwrap();
    assert!(!plain.rend.is_bold());
    assert_eq!(plain.rend.fg(), Color::Default);
}

#[test]
fn test_sgr_individual_resets() {
    let mut t = term();
    t.process(b"\x1b[1;7m\x1b[27mx");
    let cell = t.visible_cell(0, 0).unwrap();
    assert!(cell.rend.is_bold());
    assert!(!cell.rend.is_reversed());
}

#[test]
fn test_erase_fill_keeps_colors_only() {
    let mut t = term();
    t.process(b"\x1b[7;44mxyz\x1b[2K");
    let cell = t.visible_cell(0, 0).unwrap();
    assert_eq!(cell.rend.bg(), Color::Indexed(4));
    assert!(!cell.rend.is_reversed());
}

#[test]
fn test_decset_decrst_modes() {
    let mut t = term();
    t.process(b"\x1b[?1h\x1b[?25l\x1b[?5h");
    assert!(t.modes().app_cursor_keys);
    assert!(!t.cursor().visible);
    assert!(t.modes().reverse_video);
    t.process(b"\x1b[?1l\x1b[?25h\x1b[?5l");
    assert!(!t.modes().app_cursor_keys);
    assert!(t.cursor().visible);
    assert!(!t.modes().reverse_video);
}

#[test]
fn test_mouse_modes() {
    let mut t = term();
    t.process(b"\x1b[?9h");
    assert_eq!(t.modes().mouse, MouseMode::X10);
    t.process(b"\x1b[?9l\x1b[?1000h");
    assert_eq!(t.modes().mouse, MouseMode::X11);
    t.process(b"\x1b[?1000l");
    assert_eq!(t.modes().mouse, MouseMode::Off);
}

#[test]
fn test_private_mode_save_restore_toggle() {
    let mut t = term();
    t.process(b"\x1b[?7l\x1b[?7s\x1b[?7h");
    assert!(t.modes().auto_wrap);
    t.process(b"\x1b[?7r");
    assert!(!t.modes().auto_wrap);
    t.process(b"\x1b[?7t");
    assert!(t.modes().auto_wrap);
    t.process(b"\x1b[?7t");
    assert!(!t.modes().auto_wrap);
}

#[test]
fn test_insert_mode() {
    let mut t = term();
    t.process(b"abc\x1b[1G\x1b[4hXY");
    assert_eq!(t.visible_row_text(0), "XYabc");
    t.process(b"\x1b[4lZ");
    assert_eq!(t.visible_row_text(0), "XYZbc");
}

#[test]
fn test_dsr_status_and_cpr() {
    let mut t = term();
    t.process(b"\x1b[5n");
    assert_eq!(t.drain_responses(), b"\x1b[0n");
    t.process(b"\x1b[3;5H\x1b[6n");
    assert_eq!(t.drain_responses(), b"\x1b[3;5R");
}

#[test]
fn test_cpr_honors_origin_mode() {
    let mut t = term();
    t.process(b"\x1b[2;4r\x1b[?6h\x1b[6n");
    assert_eq!(t.drain_responses(), b"\x1b[1;1R");
}

#[test]
fn test_dsr_printer_status_has_no_answer() {
    let mut t = term();
    t.process(b"\x1b[9n");
    assert!(t.drain_responses().is_empty());
    assert!(t.drain_events().is_empty());
}

#[test]
fn test_da_report() {
    let mut t = term();
    t.process(b"\x1b[c");
    assert_eq!(t.drain_responses(), b"\x1b[?1;2c");
    t.process(b"\x1b[1c");
    assert!(t.drain_responses().is_empty());
}

#[test]
fn test_window_ops_forwarded() {
    let mut t = term();
    t.process(b"\x1b[2t\x1b[3;10;20t\x1b[8;30;100t");
    let events = t.drain_events();
    assert!(events.contains(&TerminalEvent::WindowOp(WindowOp::Iconify)));
    assert!(events.contains(&TerminalEvent::WindowOp(WindowOp::Move { x: 10, y: 20 })));
    assert!(events.contains(&TerminalEvent::WindowOp(WindowOp::ResizeChars {
        cols: 100,
        rows: 30
    })));
}

#[test]
fn test_size_report_answered_locally() {
    let mut t = term();
    t.process(b"\x1b[18t");
    assert_eq!(t.drain_responses(), b"\x1b[8;5;10t");
    assert!(t.drain_events().is_empty());
}

#[test]
fn test_deccolm_clears_and_emits() {
    let mut t = term();
    t.process(b"hello\x1b[?3h");
    assert_eq!(t.contents(), "\n\n\n\n");
    assert_eq!(t.cursor().row, 0);
    let events = t.drain_events();
    assert!(events.contains(&TerminalEvent::WindowOp(WindowOp::SetColumns(132))));
}

#[test]
fn test_scosc_scorc() {
    let mut t = term();
    t.process(b"abc\x1b[s\x1b[4;4H\x1b[u");
    assert_eq!(t.cursor().row, 0);
    assert_eq!(t.cursor().col, 3);
}

#[test]
fn test_decstr_resets() {
    let mut t = term();
    t.process(b"\x1b[?6h\x1b[4h\x1b[!p");
    assert!(!t.modes().origin);
    assert!(!t.modes().insert);
}

#[test]
fn test_tbc_clears_tab_stops() {
    let mut t = term();
    // Clear all stops: TAB then jumps to the last column
    t.process(b"\x1b[3g\t");
    assert_eq!(t.cursor().col, 9);
}

#[test]
fn test_unknown_csi_is_ignored() {
    let mut t = Terminal::new(10, 5, Config::default());
    t.process(b"ab\x1b[99~cd");
    assert_eq!(t.visible_row_text(0), "abcd");
}
