use super::*;
use crate::rendition::Rendition;

fn grid_with_text(cols: usize, rows: usize, scrollback: usize, lines: &[&str]) -> Grid {
    let mut grid = Grid::new(cols, rows, scrollback);
    for (row, line) in lines.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            grid.set(col, row, Cell::new(c, Rendition::default()));
        }
        grid.set_tail(row, LineTail::Hard(line.chars().count() as u16));
    }
    grid
}

#[test]
fn test_new_grid_is_blank() {
    let grid = Grid::new(10, 4, 100);
    assert_eq!(grid.cols(), 10);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.scrollback_len(), 0);
    assert_eq!(grid.row_text(0), "");
    assert_eq!(grid.tail(0), Some(LineTail::Hard(0)));
}

#[test]
fn test_set_get_out_of_bounds() {
    let mut grid = Grid::new(4, 2, 0);
    grid.set(10, 10, Cell::new('x', Rendition::default()));
    assert!(grid.get(10, 10).is_none());
    assert!(grid.get(3, 1).is_some());
}

#[test]
fn test_scroll_up_feeds_scrollback() {
    let mut grid = grid_with_text(8, 3, 100, &["one", "two", "three"]);
    grid.scroll_up(1, Rendition::default());

    assert_eq!(grid.row_text(0), "two");
    assert_eq!(grid.row_text(1), "three");
    assert_eq!(grid.row_text(2), "");
    assert_eq!(grid.scrollback_len(), 1);
    assert_eq!(grid.viewport_base(), 1);

    let line: String = grid
        .scrollback_line(0)
        .unwrap()
        .iter()
        .take(3)
        .map(|c| c.c)
        .collect();
    assert_eq!(line, "one");
    assert_eq!(grid.scrollback_tail(0), Some(LineTail::Hard(3)));
}

#[test]
fn test_scrollback_ring_evicts_oldest() {
    let mut grid = Grid::new(4, 1, 2);
    for i in 0..5 {
        grid.set(0, 0, Cell::new(char::from(b'a' + i), Rendition::default()));
        grid.set_tail(0, LineTail::Hard(1));
        grid.scroll_up(1, Rendition::default());
    }
    assert_eq!(grid.scrollback_len(), 2);
    assert_eq!(grid.viewport_base(), 5);
    assert_eq!(grid.history_floor(), 3);
    // Oldest surviving lines are 'd' and 'e'
    assert_eq!(grid.scrollback_line(0).unwrap()[0].c, 'd');
    assert_eq!(grid.scrollback_line(1).unwrap()[0].c, 'e');
}

#[test]
fn test_zero_scrollback_discards() {
    let mut grid = grid_with_text(8, 2, 0, &["gone", "stay"]);
    grid.scroll_up(1, Rendition::default());
    assert_eq!(grid.scrollback_len(), 0);
    assert_eq!(grid.row_text(0), "stay");
    assert_eq!(grid.viewport_base(), 1);
}

#[test]
fn test_region_scroll_up_leaves_surroundings() {
    let mut grid = grid_with_text(8, 4, 100, &["aaa", "bbb", "ccc", "ddd"]);
    grid.scroll_region_up(1, 1, 2, Rendition::default());

    assert_eq!(grid.row_text(0), "aaa");
    assert_eq!(grid.row_text(1), "ccc");
    assert_eq!(grid.row_text(2), "");
    assert_eq!(grid.row_text(3), "ddd");
    assert_eq!(grid.scrollback_len(), 0);
}

#[test]
fn test_region_scroll_down() {
    let mut grid = grid_with_text(8, 4, 0, &["aaa", "bbb", "ccc", "ddd"]);
    grid.scroll_region_down(1, 1, 2, Rendition::default());

    assert_eq!(grid.row_text(0), "aaa");
    assert_eq!(grid.row_text(1), "");
    assert_eq!(grid.row_text(2), "bbb");
    assert_eq!(grid.row_text(3), "ddd");
}

#[test]
fn test_region_scroll_overshoot_blanks_region() {
    let mut grid = grid_with_text(8, 3, 0, &["aaa", "bbb", "ccc"]);
    grid.scroll_region_up(99, 0, 1, Rendition::default());
    assert_eq!(grid.row_text(0), "");
    assert_eq!(grid.row_text(1), "");
    assert_eq!(grid.row_text(2), "ccc");
}

#[test]
fn test_insert_delete_lines() {
    let mut grid = grid_with_text(8, 4, 0, &["aaa", "bbb", "ccc", "ddd"]);
    grid.insert_lines(1, 1, 3, Rendition::default());
    assert_eq!(grid.row_text(1), "");
    assert_eq!(grid.row_text(2), "bbb");
    assert_eq!(grid.row_text(3), "ccc");

    grid.delete_lines(1, 1, 3, Rendition::default());
    assert_eq!(grid.row_text(1), "bbb");
    assert_eq!(grid.row_text(2), "ccc");
    assert_eq!(grid.row_text(3), "");
}

#[test]
fn test_insert_chars_shifts_right() {
    let mut grid = grid_with_text(8, 1, 0, &["abcdef"]);
    grid.insert_chars(0, 2, 2, Rendition::default());
    assert_eq!(grid.row_text(0), "ab  cdef");
    assert_eq!(grid.tail(0), Some(LineTail::Hard(8)));
}

#[test]
fn test_delete_chars_shifts_left() {
    let mut grid = grid_with_text(8, 1, 0, &["abcdef"]);
    grid.delete_chars(0, 1, 2, Rendition::default());
    assert_eq!(grid.row_text(0), "adef");
    assert_eq!(grid.tail(0), Some(LineTail::Hard(4)));
}

#[test]
fn test_clear_line_right_truncates_and_unwraps() {
    let mut grid = grid_with_text(6, 2, 0, &["abcdef", "ghi"]);
    grid.set_tail(0, LineTail::Wrapped);
    grid.clear_line_right(0, 3, Rendition::default());
    assert_eq!(grid.row_text(0), "abc");
    assert_eq!(grid.tail(0), Some(LineTail::Hard(3)));
}

#[test]
fn test_clear_line_left_keeps_length() {
    let mut grid = grid_with_text(8, 1, 0, &["abcdef"]);
    grid.clear_line_left(0, 2, Rendition::default());
    assert_eq!(grid.row_text(0), "   def");
    assert_eq!(grid.tail(0), Some(LineTail::Hard(6)));
}

#[test]
fn test_clear_screen_below_and_above() {
    let mut grid = grid_with_text(8, 3, 0, &["aaa", "bbb", "ccc"]);
    grid.clear_screen_below(1, 1, Rendition::default());
    assert_eq!(grid.row_text(0), "aaa");
    assert_eq!(grid.row_text(1), "b");
    assert_eq!(grid.row_text(2), "");

    let mut grid = grid_with_text(8, 3, 0, &["aaa", "bbb", "ccc"]);
    grid.clear_screen_above(1, 1, Rendition::default());
    assert_eq!(grid.row_text(0), "");
    assert_eq!(grid.row_text(1), "  b");
    assert_eq!(grid.row_text(2), "ccc");
}

#[test]
fn test_erase_chars_no_shift() {
    let mut grid = grid_with_text(8, 1, 0, &["abcdef"]);
    grid.erase_chars(0, 1, 3, Rendition::default());
    assert_eq!(grid.row_text(0), "a   ef");
}

#[test]
fn test_clear_scrollback() {
    let mut grid = grid_with_text(8, 2, 10, &["one", "two"]);
    grid.scroll_up(1, Rendition::default());
    assert_eq!(grid.scrollback_len(), 1);
    grid.clear_scrollback();
    assert_eq!(grid.scrollback_len(), 0);
    assert!(grid.scrollback_line(0).is_none());
    // Absolute numbering keeps counting
    assert_eq!(grid.viewport_base(), 1);
}

#[test]
fn test_abs_line_addressing() {
    let mut grid = grid_with_text(8, 2, 10, &["one", "two"]);
    grid.scroll_up(1, Rendition::default());
    // abs 0 is in scrollback, abs 1 is viewport row 0
    let one: String = grid.abs_line(0).unwrap().iter().take(3).map(|c| c.c).collect();
    assert_eq!(one, "one");
    let two: String = grid.abs_line(1).unwrap().iter().take(3).map(|c| c.c).collect();
    assert_eq!(two, "two");
    assert!(grid.abs_line(grid.abs_end()).is_none());
}

#[test]
fn test_resize_cols_prefix_copy() {
    let mut grid = grid_with_text(6, 2, 10, &["abcdef", "gh"]);
    grid.scroll_up(1, Rendition::default());
    grid.resize(4, 2, 0, true);

    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.row_text(0), "gh");
    let sb: String = grid.scrollback_line(0).unwrap().iter().map(|c| c.c).collect();
    assert_eq!(sb, "abcd");
    assert_eq!(grid.scrollback_tail(0), Some(LineTail::Hard(4)));
}

#[test]
fn test_resize_cols_grow_then_shrink_round_trip() {
    let mut grid = grid_with_text(6, 2, 10, &["abcdef", "gh"]);
    grid.scroll_up(1, Rendition::default());

    // Widening pads on the right; narrowing back must restore the original
    // content in both the viewport and scrollback
    grid.resize(10, 2, 0, true);
    assert_eq!(grid.cols(), 10);
    assert_eq!(grid.row_text(0), "gh");
    grid.resize(6, 2, 0, true);

    assert_eq!(grid.row_text(0), "gh");
    assert_eq!(grid.tail(0), Some(LineTail::Hard(2)));
    let sb: String = grid.scrollback_line(0).unwrap().iter().map(|c| c.c).collect();
    assert_eq!(sb, "abcdef");
    assert_eq!(grid.scrollback_tail(0), Some(LineTail::Hard(6)));
}

#[test]
fn test_resize_shrink_rows_pushes_history() {
    let mut grid = grid_with_text(8, 4, 10, &["aaa", "bbb", "ccc", "ddd"]);
    let delta = grid.resize(8, 2, 3, true);

    assert_eq!(delta, -2);
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.row_text(0), "ccc");
    assert_eq!(grid.row_text(1), "ddd");
    assert_eq!(grid.scrollback_len(), 2);
}

#[test]
fn test_resize_shrink_drops_blank_bottom_first() {
    let mut grid = grid_with_text(8, 4, 10, &["aaa", "bbb"]);
    let delta = grid.resize(8, 2, 1, true);

    assert_eq!(delta, 0);
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.row_text(0), "aaa");
    assert_eq!(grid.row_text(1), "bbb");
    assert_eq!(grid.scrollback_len(), 0);
}

#[test]
fn test_resize_grow_pulls_from_history() {
    let mut grid = grid_with_text(8, 2, 10, &["one", "two"]);
    grid.scroll_up(1, Rendition::default());
    let delta = grid.resize(8, 3, 0, true);

    assert_eq!(delta, 1);
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.row_text(0), "one");
    assert_eq!(grid.row_text(1), "two");
    assert_eq!(grid.scrollback_len(), 0);
}

#[test]
fn test_resize_grow_without_history_adds_blank_bottom() {
    let mut grid = grid_with_text(8, 2, 0, &["one", "two"]);
    let delta = grid.resize(8, 4, 0, false);

    assert_eq!(delta, 0);
    assert_eq!(grid.row_text(0), "one");
    assert_eq!(grid.row_text(2), "");
    assert_eq!(grid.row_text(3), "");
}

#[test]
fn test_push_after_resize_pull_reuses_slots() {
    let mut grid = Grid::new(4, 1, 3);
    for i in 0..3 {
        grid.set(0, 0, Cell::new(char::from(b'a' + i), Rendition::default()));
        grid.set_tail(0, LineTail::Hard(1));
        grid.scroll_up(1, Rendition::default());
    }
    // Pull one line back, then push two more
    grid.resize(4, 2, 0, true);
    assert_eq!(grid.scrollback_len(), 2);
    grid.set(0, 0, Cell::new('x', Rendition::default()));
    grid.set_tail(0, LineTail::Hard(1));
    grid.scroll_up(1, Rendition::default());

    assert_eq!(grid.scrollback_len(), 3);
    assert_eq!(grid.scrollback_line(0).unwrap()[0].c, 'a');
    assert_eq!(grid.scrollback_line(1).unwrap()[0].c, 'b');
    assert_eq!(grid.scrollback_line(2).unwrap()[0].c, 'x');
}
