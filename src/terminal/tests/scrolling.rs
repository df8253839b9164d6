use super::term;
use crate::config::Config;
use crate::terminal::Terminal;

#[test]
fn test_lf_at_bottom_feeds_scrollback() {
    let mut t = term(10, 2);
    t.process(b"one\r\ntwo\r\nthree");
    assert_eq!(t.scrollback_len(), 1);
    assert_eq!(t.visible_row_text(0), "two");
    assert_eq!(t.visible_row_text(1), "three");
}

#[test]
fn test_view_scrolls_into_history() {
    let mut t = term(10, 2);
    t.process(b"one\r\ntwo\r\nthree\r\nfour");
    assert_eq!(t.scrollback_len(), 2);

    t.scroll_view_up(1);
    assert_eq!(t.view_start(), 1);
    assert_eq!(t.visible_row_text(0), "two");
    assert_eq!(t.visible_row_text(1), "three");

    t.scroll_view_up(99);
    assert_eq!(t.view_start(), 2);
    assert_eq!(t.visible_row_text(0), "one");

    t.scroll_view_down(99);
    assert_eq!(t.view_start(), 0);
    assert_eq!(t.visible_row_text(1), "four");
}

#[test]
fn test_scrolled_back_view_stays_pinned() {
    let mut t = term(10, 2);
    t.process(b"one\r\ntwo\r\nthree");
    t.scroll_view_up(1);
    assert_eq!(t.visible_row_text(0), "one");

    // New output scrolls the live screen; the view keeps showing "one"
    t.process(b"\r\nfour");
    assert_eq!(t.view_start(), 2);
    assert_eq!(t.visible_row_text(0), "one");
    assert_eq!(t.visible_row_text(1), "two");
}

#[test]
fn test_view_pin_stops_at_ring_capacity() {
    let cfg = Config {
        scrollback_lines: 2,
        ..Config::default()
    };
    let mut t = Terminal::new(10, 1, cfg);
    t.process(b"a\r\nb");
    t.scroll_view_up(1);
    // Keep scrolling until the pinned line is evicted
    t.process(b"\r\nc\r\nd\r\ne");
    assert!(t.view_start() <= t.scrollback_len());
    assert_eq!(t.scrollback_len(), 2);
}

#[test]
fn test_region_scroll_skips_scrollback() {
    let mut t = term(10, 4);
    t.process(b"a\r\nb\r\nc\r\nd");
    // LF at the bottom of a partial region must not feed history
    t.process(b"\x1b[1;3r\x1b[3;1H\n");
    assert_eq!(t.scrollback_len(), 0);
    assert_eq!(t.visible_row_text(0), "b");
    assert_eq!(t.visible_row_text(1), "c");
    assert_eq!(t.visible_row_text(2), "");
    assert_eq!(t.visible_row_text(3), "d");
}

#[test]
fn test_alternate_screen_never_scrolls_back() {
    let mut t = term(10, 2);
    t.process(b"\x1b[?47h");
    t.process(b"x\r\ny\r\nz");
    assert_eq!(t.scrollback_len(), 0);
    t.scroll_view_up(5);
    assert_eq!(t.view_start(), 0);
}

#[test]
fn test_ring_eviction_is_silent() {
    let cfg = Config {
        scrollback_lines: 3,
        ..Config::default()
    };
    let mut t = Terminal::new(10, 1, cfg);
    for i in 0..20 {
        t.process(format!("line{}\r\n", i).as_bytes());
    }
    assert_eq!(t.scrollback_len(), 3);
    t.scroll_view_up(99);
    assert_eq!(t.view_start(), 3);
    assert_eq!(t.visible_row_text(0), "line17");
}
