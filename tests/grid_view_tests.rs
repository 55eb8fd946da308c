//! Public API tests for `GridView`: cell writes, resizes, undo/redo,
//! selection snapshots, and observer notification.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{cell_center, click_cell, grid_100x50, toggle_click_cell};
use gridview::{CellValue, GridView, SelectionKind};

#[test]
fn cells_start_empty() {
    let grid = grid_100x50();
    assert_eq!(grid.cell_value(1, 1), CellValue::Empty);
    assert_eq!(grid.cell_value(100, 50), CellValue::Empty);
}

#[test]
fn set_cell_parses_typed_input() {
    let mut grid = grid_100x50();
    grid.set_cell(3, 2, "42");
    grid.set_cell(3, 3, "hello");
    grid.set_cell(3, 4, "  7.5 ");
    assert_eq!(grid.cell_value(3, 2), CellValue::Number(42.0));
    assert_eq!(grid.cell_value(3, 3), CellValue::Text("hello".to_string()));
    assert_eq!(grid.cell_value(3, 4), CellValue::Number(7.5));
}

#[test]
fn set_cell_overwrite_then_undo_restores_previous_value() {
    let mut grid = grid_100x50();
    grid.set_cell(3, 2, "1");
    grid.set_cell(3, 2, "2");
    assert_eq!(grid.cell_value(3, 2), CellValue::Number(2.0));

    assert!(grid.undo());
    assert_eq!(grid.cell_value(3, 2), CellValue::Number(1.0));
    assert!(grid.undo());
    assert_eq!(grid.cell_value(3, 2), CellValue::Empty);
    assert!(!grid.undo());
}

#[test]
fn redo_replays_in_order_and_new_edit_clears_it() {
    let mut grid = grid_100x50();
    grid.set_cell(1, 1, "a");
    grid.set_cell(1, 1, "b");
    grid.undo();
    grid.undo();

    assert!(grid.redo());
    assert_eq!(grid.cell_value(1, 1), CellValue::Text("a".to_string()));
    assert!(grid.redo());
    assert_eq!(grid.cell_value(1, 1), CellValue::Text("b".to_string()));
    assert!(!grid.redo());

    grid.undo();
    grid.set_cell(1, 1, "c");
    assert!(!grid.can_redo());
}

#[test]
fn setting_identical_value_pushes_no_command() {
    let mut grid = grid_100x50();
    grid.set_cell(3, 2, "42");
    grid.set_cell(3, 2, "42");
    assert!(grid.undo());
    assert!(!grid.can_undo());
}

#[test]
fn track_resize_round_trips_through_undo() {
    let mut grid = grid_100x50();
    grid.set_col_width(2, 120.0);
    grid.set_row_height(5, 40.0);
    assert_eq!(grid.state().data.cols.size(2), 120.0);
    assert_eq!(grid.state().data.rows.size(5), 40.0);

    grid.undo();
    assert_eq!(grid.state().data.rows.size(5), 24.0);
    grid.undo();
    assert_eq!(grid.state().data.cols.size(2), 80.0);
}

#[test]
fn resize_out_of_range_is_ignored() {
    let mut grid = grid_100x50();
    grid.set_col_width(999, 120.0);
    assert!(!grid.can_undo());
}

#[test]
fn mixed_edit_and_resize_undo_in_reverse_order() {
    let mut grid = grid_100x50();
    grid.set_cell(3, 2, "42");
    grid.set_col_width(2, 120.0);
    grid.set_cell(3, 2, "43");

    grid.undo();
    assert_eq!(grid.cell_value(3, 2), CellValue::Number(42.0));
    assert_eq!(grid.state().data.cols.size(2), 120.0);
    grid.undo();
    assert_eq!(grid.state().data.cols.size(2), 80.0);
    grid.undo();
    assert_eq!(grid.cell_value(3, 2), CellValue::Empty);
}

#[test]
fn selection_snapshot_has_active_and_committed_ranges() {
    let mut grid = grid_100x50();
    click_cell(&mut grid, 2, 2);
    toggle_click_cell(&mut grid, 5, 5);

    let change = grid.selection();
    assert_eq!(change.ranges.len(), 1);
    assert_eq!(change.ranges[0].bounds(), (2, 2, 2, 2));
    assert_eq!(change.active.unwrap().bounds(), (5, 5, 5, 5));
}

#[test]
fn observers_see_every_selection_change() {
    let mut grid = grid_100x50();
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    grid.add_selection_observer(Box::new(move |change| {
        sink.borrow_mut().push(change.ranges.len());
    }));

    click_cell(&mut grid, 2, 2);
    toggle_click_cell(&mut grid, 5, 5);

    let seen = seen.borrow();
    // One notification per selection-mutating pointer-down.
    assert_eq!(seen.len(), 2);
    assert_eq!(*seen.last().unwrap(), 1);
}

#[test]
fn each_discrete_event_broadcasts_before_the_next() {
    let mut grid = grid_100x50();
    let count = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&count);
    grid.add_selection_observer(Box::new(move |_| {
        *sink.borrow_mut() += 1;
    }));

    // Every mutation is followed by its own notification, delivered
    // before control returns; consecutive events never coalesce.
    let (x, y) = cell_center(2, 2);
    grid.pointer_down(x, y, false, false);
    assert_eq!(*count.borrow(), 1);
    grid.pointer_up(x, y);
    assert_eq!(*count.borrow(), 1);

    grid.key_down("ArrowDown", false);
    assert_eq!(*count.borrow(), 2);
    grid.key_down("ArrowRight", true);
    assert_eq!(*count.borrow(), 3);
}

#[test]
fn late_observer_only_sees_later_changes() {
    let mut grid = grid_100x50();
    click_cell(&mut grid, 2, 2);

    let count = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&count);
    grid.add_selection_observer(Box::new(move |_| {
        *sink.borrow_mut() += 1;
    }));
    assert_eq!(*count.borrow(), 0);

    click_cell(&mut grid, 3, 3);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn edit_lifecycle_through_public_api() {
    let mut grid = grid_100x50();
    assert!(grid.begin_edit().is_none());

    click_cell(&mut grid, 3, 2);
    assert_eq!(grid.begin_edit().unwrap(), "");
    assert!(grid.commit_edit("42"));
    assert_eq!(grid.cell_value(3, 2), CellValue::Number(42.0));

    // Re-editing seeds the input with the display text.
    assert_eq!(grid.begin_edit().unwrap(), "42");
    grid.cancel_edit();
    assert_eq!(grid.cell_value(3, 2), CellValue::Number(42.0));
}

#[test]
fn keyboard_navigation_reaches_grid_edges() {
    let mut grid = grid_100x50();
    click_cell(&mut grid, 2, 2);
    grid.key_down("ArrowLeft", false);
    grid.key_down("ArrowLeft", false);
    assert_eq!(grid.selection().active.unwrap().bounds(), (2, 1, 2, 1));

    grid.key_down("ArrowUp", false);
    assert_eq!(grid.selection().active.unwrap().bounds(), (1, 1, 1, 1));
}

#[test]
fn select_all_kind_survives_snapshot() {
    let mut grid = grid_100x50();
    grid.pointer_down(10.0, 10.0, false, false);
    grid.pointer_up(10.0, 10.0);
    let active = grid.selection().active.unwrap();
    assert_eq!(active.kind, SelectionKind::All);
}

#[test]
fn selection_serializes_with_camel_case_wire_names() {
    let mut grid = grid_100x50();
    click_cell(&mut grid, 2, 3);
    let json = serde_json::to_string(&grid.selection()).unwrap();
    assert!(json.contains("\"startRow\":2"));
    assert!(json.contains("\"startCol\":3"));
    assert!(json.contains("\"kind\":\"cells\""));
    assert!(json.contains("\"ranges\":[]"));
}

#[test]
fn version_is_the_package_version() {
    assert_eq!(gridview::version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn fresh_grid_has_no_selection() {
    let grid: GridView = grid_100x50();
    let change = grid.selection();
    assert!(change.active.is_none());
    assert!(change.ranges.is_empty());
}
