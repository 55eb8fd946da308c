//! Shared helpers for integration tests.
#![allow(dead_code)]

use gridview::GridView;

/// Standard fixture: 100 data rows x 50 data cols (plus the header
/// track on each axis), 24px rows, 80px columns, 48px header column,
/// 800x600 viewport.
pub fn grid_100x50() -> GridView {
    let mut grid = GridView::new_test(101, 51, 24.0, 80.0, 48.0);
    grid.resize(800.0, 600.0);
    grid
}

/// Screen position of a data cell's center, valid while nothing has
/// been scrolled or resized.
pub fn cell_center(row: u32, col: u32) -> (f32, f32) {
    let x = 48.0 + (col as f32 - 1.0) * 80.0 + 40.0;
    let y = 24.0 + (row as f32 - 1.0) * 24.0 + 12.0;
    (x, y)
}

/// Click (down + up) on a data cell.
pub fn click_cell(grid: &mut GridView, row: u32, col: u32) {
    let (x, y) = cell_center(row, col);
    grid.pointer_down(x, y, false, false);
    grid.pointer_up(x, y);
}

/// Ctrl-click (down + up) on a data cell.
pub fn toggle_click_cell(grid: &mut GridView, row: u32, col: u32) {
    let (x, y) = cell_center(row, col);
    grid.pointer_down(x, y, false, true);
    grid.pointer_up(x, y);
}

/// Drag from one data cell to another.
pub fn drag_cells(grid: &mut GridView, from: (u32, u32), to: (u32, u32)) {
    let (x0, y0) = cell_center(from.0, from.1);
    let (x1, y1) = cell_center(to.0, to.1);
    grid.pointer_down(x0, y0, false, false);
    grid.pointer_move(x1, y1);
    grid.pointer_up(x1, y1);
}
