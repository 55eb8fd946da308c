//! Pointer and keyboard interaction flows driven through the public
//! `GridView` surface: selection gestures, header gestures, resize
//! drags, and the statistics they feed.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{cell_center, click_cell, drag_cells, grid_100x50, toggle_click_cell};
use gridview::SelectionKind;

#[test]
fn click_then_drag_produces_anchored_rectangle() {
    let mut grid = grid_100x50();
    drag_cells(&mut grid, (2, 2), (6, 4));
    let active = grid.selection().active.unwrap();
    assert_eq!((active.start_row, active.start_col), (2, 2));
    assert_eq!(active.bounds(), (2, 2, 6, 4));
}

#[test]
fn reverse_drag_keeps_anchor_and_normalizes_bounds() {
    let mut grid = grid_100x50();
    drag_cells(&mut grid, (6, 4), (2, 2));
    let active = grid.selection().active.unwrap();
    assert_eq!((active.start_row, active.start_col), (6, 4));
    assert_eq!((active.end_row, active.end_col), (2, 2));
    assert_eq!(active.bounds(), (2, 2, 6, 4));
}

#[test]
fn plain_click_discards_committed_ranges() {
    let mut grid = grid_100x50();
    click_cell(&mut grid, 2, 2);
    toggle_click_cell(&mut grid, 5, 5);
    assert_eq!(grid.selection().ranges.len(), 1);

    click_cell(&mut grid, 8, 8);
    let change = grid.selection();
    assert!(change.ranges.is_empty());
    assert_eq!(change.active.unwrap().bounds(), (8, 8, 8, 8));
}

#[test]
fn toggle_builds_disjoint_selection_for_stats() {
    let mut grid = grid_100x50();
    grid.set_cell(2, 2, "10");
    grid.set_cell(5, 5, "20");
    grid.set_cell(8, 8, "ignored");

    click_cell(&mut grid, 2, 2);
    toggle_click_cell(&mut grid, 5, 5);

    let stats = grid.selection_stats();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.sum, 30.0);
    assert_eq!(stats.min, Some(10.0));
    assert_eq!(stats.max, Some(20.0));
    assert_eq!(stats.average, Some(15.0));
}

#[test]
fn header_drag_spans_columns() {
    let mut grid = grid_100x50();
    // Column 2 header band center: x = 48 + 80 + 40 = 168, y = 12.
    grid.pointer_down(168.0, 12.0, false, false);
    grid.pointer_move(328.0, 12.0);
    grid.pointer_up(328.0, 12.0);

    let active = grid.selection().active.unwrap();
    assert_eq!(active.kind, SelectionKind::Column);
    assert_eq!(active.bounds(), (1, 2, 100, 4));
}

#[test]
fn row_header_toggle_accumulates_rows() {
    let mut grid = grid_100x50();
    grid.pointer_down(10.0, 36.0, false, false); // row 1
    grid.pointer_up(10.0, 36.0);
    grid.pointer_down(10.0, 84.0, false, true); // row 3
    grid.pointer_up(10.0, 84.0);

    let change = grid.selection();
    assert_eq!(change.ranges.len(), 1);
    assert_eq!(change.ranges[0].kind, SelectionKind::Row);
    assert_eq!(change.ranges[0].bounds(), (1, 1, 1, 50));
    assert_eq!(change.active.unwrap().bounds(), (3, 1, 3, 50));
}

#[test]
fn select_all_stats_cover_every_stored_cell() {
    let mut grid = grid_100x50();
    grid.set_cell(1, 1, "1");
    grid.set_cell(50, 25, "2");
    grid.set_cell(100, 50, "3");

    grid.pointer_down(10.0, 10.0, false, false);
    grid.pointer_up(10.0, 10.0);

    let stats = grid.selection_stats();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.sum, 6.0);
}

#[test]
fn column_resize_drag_shifts_downstream_cells() {
    let mut grid = grid_100x50();
    // Boundary between col 1 and col 2 sits at x = 128.
    grid.pointer_down(128.0, 10.0, false, false);
    grid.pointer_move(178.0, 10.0);
    grid.pointer_up(178.0, 10.0);

    assert_eq!(grid.state().data.cols.size(1), 130.0);
    // Col 2 now starts 50px later.
    assert_eq!(grid.state().data.cols.position(2), 178.0);

    assert!(grid.undo());
    assert_eq!(grid.state().data.cols.position(2), 128.0);
}

#[test]
fn resize_drag_does_not_touch_selection() {
    let mut grid = grid_100x50();
    click_cell(&mut grid, 3, 3);
    grid.pointer_down(128.0, 10.0, false, false);
    grid.pointer_move(150.0, 10.0);
    grid.pointer_up(150.0, 10.0);
    assert_eq!(grid.selection().active.unwrap().bounds(), (3, 3, 3, 3));
}

#[test]
fn drag_near_edge_requests_autoscroll() {
    let mut grid = grid_100x50();
    let (x, y) = cell_center(2, 2);
    let out = grid.pointer_down(x, y, false, false);
    assert!(out.autoscroll);
    let out = grid.pointer_move(795.0, 595.0);
    assert!(out.autoscroll);
    grid.pointer_up(795.0, 595.0);
}

#[test]
fn drag_keeps_extending_after_programmatic_scroll() {
    let mut grid = grid_100x50();
    let (x, y) = cell_center(2, 2);
    grid.pointer_down(x, y, false, false);
    grid.pointer_move(790.0, 590.0);
    let before = grid.selection().active.unwrap().bounds();

    // What the autoscroll tick does: scroll, then replay the pointer.
    assert!(grid.scroll_by(80.0, 48.0));
    grid.pointer_move(790.0, 590.0);
    let after = grid.selection().active.unwrap().bounds();
    assert!(after.2 > before.2);
    assert!(after.3 > before.3);
    grid.pointer_up(790.0, 590.0);
}

#[test]
fn shift_click_after_scroll_targets_correct_cell() {
    let mut grid = grid_100x50();
    click_cell(&mut grid, 2, 2);
    grid.scroll_by(160.0, 48.0);
    // Screen (168, 60) now maps to virtual (168 + 160, 60 + 48):
    // col 4, row 4.
    grid.pointer_down(168.0, 60.0, true, false);
    grid.pointer_up(168.0, 60.0);
    assert_eq!(grid.selection().active.unwrap().bounds(), (2, 2, 4, 4));
}

#[test]
fn keyboard_extends_pointer_selection() {
    let mut grid = grid_100x50();
    drag_cells(&mut grid, (2, 2), (3, 3));
    grid.key_down("ArrowDown", true);
    assert_eq!(grid.selection().active.unwrap().bounds(), (2, 2, 4, 3));

    grid.key_down("ArrowRight", false);
    assert_eq!(grid.selection().active.unwrap().bounds(), (2, 3, 2, 3));
}

#[test]
fn stats_update_as_selection_grows() {
    let mut grid = grid_100x50();
    for row in 1..=5 {
        grid.set_cell(row, 1, &row.to_string());
    }
    let (x, y) = cell_center(1, 1);
    grid.pointer_down(x, y, false, false);
    assert_eq!(grid.selection_stats().sum, 1.0);

    let (x, y) = cell_center(3, 1);
    grid.pointer_move(x, y);
    assert_eq!(grid.selection_stats().sum, 6.0);

    let (x, y) = cell_center(5, 1);
    grid.pointer_move(x, y);
    grid.pointer_up(x, y);
    let stats = grid.selection_stats();
    assert_eq!(stats.sum, 15.0);
    assert_eq!(stats.count, 5);
    assert_eq!(stats.average, Some(3.0));
}
