//! End-to-end scenarios exercising the full pipeline: edits through
//! the command stack, scrolling, hit testing, selection, statistics,
//! and undo history across gesture kinds.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{cell_center, click_cell, grid_100x50};
use gridview::{CellValue, SelectionKind};

#[test]
fn write_scroll_click_sum_scenario() {
    let mut grid = grid_100x50();

    // Write a value well below the initial viewport.
    grid.set_cell(40, 10, "42");
    assert_eq!(grid.cell_value(40, 10), CellValue::Number(42.0));

    // Scroll until row 40 / col 10 is on screen. Row 40 starts at
    // 24 + 39*24 = 960 virtual; col 10 starts at 48 + 9*80 = 768.
    assert!(grid.scroll_by(600.0, 800.0));
    let (start_row, end_row) = grid
        .state()
        .viewport
        .visible_rows(&grid.state().data.rows);
    assert!(start_row <= 40 && 40 <= end_row);

    // Click the cell at its on-screen position.
    let x = 768.0 - 600.0 + 40.0;
    let y = 960.0 - 800.0 + 12.0;
    grid.pointer_down(x, y, false, false);
    grid.pointer_up(x, y);

    let active = grid.selection().active.unwrap();
    assert_eq!(active.bounds(), (40, 10, 40, 10));

    let stats = grid.selection_stats();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.sum, 42.0);
    assert_eq!(stats.average, Some(42.0));
}

#[test]
fn default_geometry_write_select_sum() {
    // 100x50 data grid with 100x25 cells and a 50px row-header band.
    let mut grid = gridview::GridView::new_test(101, 51, 25.0, 100.0, 50.0);
    grid.resize(800.0, 600.0);

    grid.set_cell(3, 2, "42");

    // Col 2 spans 150..250 on screen, row 3 spans 75..100.
    grid.pointer_down(200.0, 87.0, false, false);
    grid.pointer_up(200.0, 87.0);

    assert_eq!(grid.selection().active.unwrap().bounds(), (3, 2, 3, 2));
    let stats = grid.selection_stats();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.sum, 42.0);
}

#[test]
fn full_session_undoes_back_to_pristine() {
    let mut grid = grid_100x50();

    grid.set_cell(2, 2, "10");
    grid.set_cell(3, 2, "twenty");
    grid.set_col_width(2, 140.0);

    click_cell(&mut grid, 5, 5);
    grid.begin_edit();
    grid.commit_edit("30");

    // Resize row 5 by dragging its boundary (y = 24 + 5*24 = 144).
    grid.pointer_down(10.0, 144.0, false, false);
    grid.pointer_move(10.0, 160.0);
    grid.pointer_up(10.0, 160.0);

    assert_eq!(grid.cell_value(5, 5), CellValue::Number(30.0));
    assert_eq!(grid.state().data.rows.size(5), 40.0);

    let mut steps = 0;
    while grid.undo() {
        steps += 1;
    }
    assert_eq!(steps, 5);
    assert!(grid.state().data.store.is_empty() || grid.cell_value(2, 2).is_empty());
    assert_eq!(grid.state().data.cols.size(2), 80.0);
    assert_eq!(grid.state().data.rows.size(5), 24.0);

    while grid.redo() {}
    assert_eq!(grid.cell_value(2, 2), CellValue::Number(10.0));
    assert_eq!(grid.cell_value(5, 5), CellValue::Number(30.0));
    assert_eq!(grid.state().data.cols.size(2), 140.0);
    assert_eq!(grid.state().data.rows.size(5), 40.0);
}

#[test]
fn mixed_text_and_numbers_aggregate_like_a_spreadsheet() {
    let mut grid = grid_100x50();
    grid.set_cell(1, 1, "1");
    grid.set_cell(2, 1, "x");
    grid.set_cell(3, 1, "3");
    grid.set_cell(5, 1, "5");
    // (4, 1) stays empty.

    let (x0, y0) = cell_center(1, 1);
    let (x1, y1) = cell_center(5, 1);
    grid.pointer_down(x0, y0, false, false);
    grid.pointer_move(x1, y1);
    grid.pointer_up(x1, y1);

    let stats = grid.selection_stats();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.sum, 9.0);
    assert_eq!(stats.min, Some(1.0));
    assert_eq!(stats.max, Some(5.0));
    assert_eq!(stats.average, Some(3.0));
}

#[test]
fn header_aware_select_all_skips_header_tracks() {
    let mut grid = grid_100x50();
    grid.set_cell(1, 1, "7");

    grid.pointer_down(10.0, 10.0, false, false);
    grid.pointer_up(10.0, 10.0);
    let active = grid.selection().active.unwrap();
    assert_eq!(active.kind, SelectionKind::All);
    // Bounds start at the first data cell, not the header tracks.
    assert_eq!(active.bounds().0, 1);
    assert_eq!(active.bounds().1, 1);
    assert_eq!(grid.selection_stats().sum, 7.0);
}

#[test]
fn editing_after_resize_lands_in_the_same_logical_cell() {
    let mut grid = grid_100x50();
    grid.set_col_width(1, 160.0);

    // Col 2 now spans 208..288 on screen.
    grid.pointer_down(248.0, 60.0, false, false);
    grid.pointer_up(248.0, 60.0);
    assert_eq!(grid.selection().active.unwrap().bounds(), (2, 2, 2, 2));

    grid.begin_edit();
    grid.commit_edit("99");
    assert_eq!(grid.cell_value(2, 2), CellValue::Number(99.0));
}

#[test]
fn sparse_store_stays_sparse_across_a_session() {
    let mut grid = grid_100x50();
    grid.set_cell(100, 50, "1");
    assert_eq!(grid.state().data.store.len(), 1);

    // Clearing via an empty edit leaves the entry Empty but the grid
    // still reports an empty value.
    grid.set_cell(100, 50, "");
    assert!(grid.cell_value(100, 50).is_empty());
}
