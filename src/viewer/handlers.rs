//! Pointer interaction: an ordered chain of gesture handlers.
//!
//! Each handler claims a region of the surface via [`PointerHandler::hit_test`].
//! The dispatcher walks the chain in priority order on pointer-down and
//! routes every subsequent move/up to whichever handler claimed the
//! gesture, so overlapping regions (a resize hot zone sits inside a
//! header) resolve deterministically.

use crate::layout::{Axis, MIN_TRACK_SIZE};
use crate::render::ResizeGuide;
use crate::types::SelectionRange;
use crate::viewer::ViewerState;
use crate::Command;

/// Hot zone half-width around a track boundary, in logical pixels.
pub const RESIZE_MARGIN: f32 = 4.0;

/// One pointer event in viewport-local logical coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
    /// Range-extension modifier (Shift).
    pub shift: bool,
    /// Multi-range modifier (Ctrl / Cmd).
    pub toggle: bool,
}

impl PointerInput {
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            shift: false,
            toggle: false,
        }
    }
}

/// What a handler wants done after processing an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Cell contents or geometry changed; redraw both layers.
    pub repaint_base: bool,
    /// Selection or guide changed; redraw the overlay.
    pub repaint_overlay: bool,
    /// Notify selection observers.
    pub selection_changed: bool,
    /// A cell drag is live; edge autoscroll may engage.
    pub autoscroll: bool,
}

impl Outcome {
    fn overlay() -> Self {
        Self {
            repaint_overlay: true,
            ..Self::default()
        }
    }

    fn selection() -> Self {
        Self {
            repaint_overlay: true,
            selection_changed: true,
            ..Self::default()
        }
    }
}

/// A gesture handler in the dispatch chain.
pub trait PointerHandler {
    /// Does a pointer-down at this position belong to this handler?
    fn hit_test(&self, state: &ViewerState, input: &PointerInput) -> bool;

    fn pointer_down(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome;

    fn pointer_move(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome;

    fn pointer_up(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome;

    /// CSS cursor to show while hovering this handler's region.
    fn cursor(&self) -> &'static str {
        "default"
    }
}

/// Screen x of a column's left edge. Column 0 is pinned at the origin.
fn col_screen_left(state: &ViewerState, col: u32) -> f32 {
    if col == 0 {
        0.0
    } else {
        state.data.cols.position(col) - state.viewport.scroll_x
    }
}

fn row_screen_top(state: &ViewerState, row: u32) -> f32 {
    if row == 0 {
        0.0
    } else {
        state.data.rows.position(row) - state.viewport.scroll_y
    }
}

/// Find the column whose right edge sits within [`RESIZE_MARGIN`] of a
/// screen x inside the column header band.
fn column_boundary_at(state: &ViewerState, x: f32) -> Option<u32> {
    let cols = &state.data.cols;
    let band_x = cols.size(0);
    if (x - band_x).abs() <= RESIZE_MARGIN {
        return Some(0);
    }
    if x <= band_x {
        return None;
    }
    let virtual_x = x + state.viewport.scroll_x;
    let col = cols.index_at(virtual_x)?;
    // Near the left edge the boundary belongs to the previous column;
    // column 1's left edge is the pinned header border, already handled.
    if col >= 2 && (virtual_x - cols.position(col)).abs() <= RESIZE_MARGIN {
        return Some(col - 1);
    }
    if (cols.position(col + 1) - virtual_x).abs() <= RESIZE_MARGIN {
        return Some(col);
    }
    None
}

fn row_boundary_at(state: &ViewerState, y: f32) -> Option<u32> {
    let rows = &state.data.rows;
    let band_y = rows.size(0);
    if (y - band_y).abs() <= RESIZE_MARGIN {
        return Some(0);
    }
    if y <= band_y {
        return None;
    }
    let virtual_y = y + state.viewport.scroll_y;
    let row = rows.index_at(virtual_y)?;
    if row >= 2 && (virtual_y - rows.position(row)).abs() <= RESIZE_MARGIN {
        return Some(row - 1);
    }
    if (rows.position(row + 1) - virtual_y).abs() <= RESIZE_MARGIN {
        return Some(row);
    }
    None
}

/// Resolve a screen position to a data cell, clamped into the data
/// region (never a header index, never past the last track).
pub(crate) fn data_cell_at(state: &ViewerState, x: f32, y: f32) -> (u32, u32) {
    let virtual_x = x.max(0.0) + state.viewport.scroll_x;
    let virtual_y = y.max(0.0) + state.viewport.scroll_y;
    let row = state.data.rows.index_at_clamped(virtual_y).max(1);
    let col = state.data.cols.index_at_clamped(virtual_x).max(1);
    (row, col)
}

#[derive(Debug, Clone, Copy)]
struct ResizeGesture {
    index: u32,
    start: f32,
    original: f32,
}

/// Drag a column boundary in the column header band.
#[derive(Default)]
pub struct ColResizeHandler {
    gesture: Option<ResizeGesture>,
}

impl ColResizeHandler {
    fn preview_size(gesture: &ResizeGesture, x: f32) -> f32 {
        (gesture.original + (x - gesture.start)).max(MIN_TRACK_SIZE)
    }
}

impl PointerHandler for ColResizeHandler {
    fn hit_test(&self, state: &ViewerState, input: &PointerInput) -> bool {
        input.y < state.data.rows.size(0) && column_boundary_at(state, input.x).is_some()
    }

    fn pointer_down(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(index) = column_boundary_at(state, input.x) else {
            return Outcome::default();
        };
        self.gesture = Some(ResizeGesture {
            index,
            start: input.x,
            original: state.data.cols.size(index),
        });
        state.resize_guide = Some(ResizeGuide::Vertical(input.x));
        Outcome::overlay()
    }

    fn pointer_move(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(gesture) = self.gesture else {
            return Outcome::default();
        };
        let left = col_screen_left(state, gesture.index);
        let size = Self::preview_size(&gesture, input.x);
        state.resize_guide = Some(ResizeGuide::Vertical(left + size));
        Outcome::overlay()
    }

    fn pointer_up(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(gesture) = self.gesture.take() else {
            return Outcome::default();
        };
        state.resize_guide = None;
        let size = Self::preview_size(&gesture, input.x);
        if (size - gesture.original).abs() > f32::EPSILON {
            state.commands.push(
                Command::ResizeTrack {
                    axis: Axis::Col,
                    index: gesture.index,
                    old: gesture.original,
                    new: size,
                },
                &mut state.data,
            );
        }
        Outcome {
            repaint_base: true,
            repaint_overlay: true,
            ..Outcome::default()
        }
    }

    fn cursor(&self) -> &'static str {
        "col-resize"
    }
}

/// Drag a row boundary in the row header band.
#[derive(Default)]
pub struct RowResizeHandler {
    gesture: Option<ResizeGesture>,
}

impl RowResizeHandler {
    fn preview_size(gesture: &ResizeGesture, y: f32) -> f32 {
        (gesture.original + (y - gesture.start)).max(MIN_TRACK_SIZE)
    }
}

impl PointerHandler for RowResizeHandler {
    fn hit_test(&self, state: &ViewerState, input: &PointerInput) -> bool {
        input.x < state.data.cols.size(0) && row_boundary_at(state, input.y).is_some()
    }

    fn pointer_down(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(index) = row_boundary_at(state, input.y) else {
            return Outcome::default();
        };
        self.gesture = Some(ResizeGesture {
            index,
            start: input.y,
            original: state.data.rows.size(index),
        });
        state.resize_guide = Some(ResizeGuide::Horizontal(input.y));
        Outcome::overlay()
    }

    fn pointer_move(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(gesture) = self.gesture else {
            return Outcome::default();
        };
        let top = row_screen_top(state, gesture.index);
        let size = Self::preview_size(&gesture, input.y);
        state.resize_guide = Some(ResizeGuide::Horizontal(top + size));
        Outcome::overlay()
    }

    fn pointer_up(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(gesture) = self.gesture.take() else {
            return Outcome::default();
        };
        state.resize_guide = None;
        let size = Self::preview_size(&gesture, input.y);
        if (size - gesture.original).abs() > f32::EPSILON {
            state.commands.push(
                Command::ResizeTrack {
                    axis: Axis::Row,
                    index: gesture.index,
                    old: gesture.original,
                    new: size,
                },
                &mut state.data,
            );
        }
        Outcome {
            repaint_base: true,
            repaint_overlay: true,
            ..Outcome::default()
        }
    }

    fn cursor(&self) -> &'static str {
        "row-resize"
    }
}

/// The top-left corner cell: select everything.
#[derive(Default)]
pub struct CornerHandler;

impl PointerHandler for CornerHandler {
    fn hit_test(&self, state: &ViewerState, input: &PointerInput) -> bool {
        input.x < state.data.cols.size(0) && input.y < state.data.rows.size(0)
    }

    fn pointer_down(&mut self, state: &mut ViewerState, _input: &PointerInput) -> Outcome {
        state.ranges.clear();
        state.active = Some(SelectionRange::all(
            state.data.rows.last_index(),
            state.data.cols.last_index(),
        ));
        Outcome::selection()
    }

    fn pointer_move(&mut self, _state: &mut ViewerState, _input: &PointerInput) -> Outcome {
        Outcome::default()
    }

    fn pointer_up(&mut self, _state: &mut ViewerState, _input: &PointerInput) -> Outcome {
        Outcome::default()
    }

    fn cursor(&self) -> &'static str {
        "pointer"
    }
}

/// Clicks and drags in the column header band select whole columns.
#[derive(Default)]
pub struct ColumnHeaderHandler {
    dragging: bool,
}

impl ColumnHeaderHandler {
    fn col_at(state: &ViewerState, x: f32) -> u32 {
        state
            .data
            .cols
            .index_at_clamped(x.max(0.0) + state.viewport.scroll_x)
            .max(1)
    }
}

impl PointerHandler for ColumnHeaderHandler {
    fn hit_test(&self, state: &ViewerState, input: &PointerInput) -> bool {
        input.y < state.data.rows.size(0) && input.x >= state.data.cols.size(0)
    }

    fn pointer_down(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let col = Self::col_at(state, input.x);
        let last_row = state.data.rows.last_index();

        if input.shift {
            if let Some(active) = state.active.as_mut() {
                active.end_col = col;
                self.dragging = true;
                return Outcome::selection();
            }
        }

        let range = SelectionRange::column(col, last_row);
        if input.toggle {
            if let Some(prev) = state.active.take() {
                state.ranges.push(prev);
            }
            if state.ranges.ranges().iter().any(|r| r.same_bounds(&range)) {
                state.ranges.toggle(range);
                self.dragging = false;
                return Outcome::selection();
            }
        } else {
            state.ranges.clear();
        }
        state.active = Some(range);
        self.dragging = true;
        Outcome::selection()
    }

    fn pointer_move(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        if !self.dragging {
            return Outcome::default();
        }
        let col = Self::col_at(state, input.x);
        if let Some(active) = state.active.as_mut() {
            if active.end_col != col {
                active.end_col = col;
                return Outcome::selection();
            }
        }
        Outcome::default()
    }

    fn pointer_up(&mut self, _state: &mut ViewerState, _input: &PointerInput) -> Outcome {
        self.dragging = false;
        Outcome::default()
    }

    fn cursor(&self) -> &'static str {
        "pointer"
    }
}

/// Clicks and drags in the row header band select whole rows.
#[derive(Default)]
pub struct RowHeaderHandler {
    dragging: bool,
}

impl RowHeaderHandler {
    fn row_at(state: &ViewerState, y: f32) -> u32 {
        state
            .data
            .rows
            .index_at_clamped(y.max(0.0) + state.viewport.scroll_y)
            .max(1)
    }
}

impl PointerHandler for RowHeaderHandler {
    fn hit_test(&self, state: &ViewerState, input: &PointerInput) -> bool {
        input.x < state.data.cols.size(0) && input.y >= state.data.rows.size(0)
    }

    fn pointer_down(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let row = Self::row_at(state, input.y);
        let last_col = state.data.cols.last_index();

        if input.shift {
            if let Some(active) = state.active.as_mut() {
                active.end_row = row;
                self.dragging = true;
                return Outcome::selection();
            }
        }

        let range = SelectionRange::row(row, last_col);
        if input.toggle {
            if let Some(prev) = state.active.take() {
                state.ranges.push(prev);
            }
            if state.ranges.ranges().iter().any(|r| r.same_bounds(&range)) {
                state.ranges.toggle(range);
                self.dragging = false;
                return Outcome::selection();
            }
        } else {
            state.ranges.clear();
        }
        state.active = Some(range);
        self.dragging = true;
        Outcome::selection()
    }

    fn pointer_move(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        if !self.dragging {
            return Outcome::default();
        }
        let row = Self::row_at(state, input.y);
        if let Some(active) = state.active.as_mut() {
            if active.end_row != row {
                active.end_row = row;
                return Outcome::selection();
            }
        }
        Outcome::default()
    }

    fn pointer_up(&mut self, _state: &mut ViewerState, _input: &PointerInput) -> Outcome {
        self.dragging = false;
        Outcome::default()
    }

    fn cursor(&self) -> &'static str {
        "pointer"
    }
}

/// Clicks and drags in the data region: the catch-all at the end of
/// the chain.
#[derive(Default)]
pub struct CellHandler {
    dragging: bool,
}

impl PointerHandler for CellHandler {
    fn hit_test(&self, _state: &ViewerState, _input: &PointerInput) -> bool {
        true
    }

    fn pointer_down(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let (row, col) = data_cell_at(state, input.x, input.y);

        if input.shift {
            if let Some(active) = state.active.as_mut() {
                active.end_row = row;
                active.end_col = col;
                self.dragging = true;
                return Outcome {
                    autoscroll: true,
                    ..Outcome::selection()
                };
            }
        }

        let range = SelectionRange::cells(row, col, row, col);
        if input.toggle {
            if let Some(prev) = state.active.take() {
                state.ranges.push(prev);
            }
            if state.ranges.ranges().iter().any(|r| r.same_bounds(&range)) {
                state.ranges.toggle(range);
                self.dragging = false;
                return Outcome::selection();
            }
        } else {
            state.ranges.clear();
        }
        state.active = Some(range);
        self.dragging = true;
        Outcome {
            autoscroll: true,
            ..Outcome::selection()
        }
    }

    fn pointer_move(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        if !self.dragging {
            return Outcome::default();
        }
        let (row, col) = data_cell_at(state, input.x, input.y);
        if let Some(active) = state.active.as_mut() {
            if active.end_row != row || active.end_col != col {
                active.end_row = row;
                active.end_col = col;
                return Outcome {
                    autoscroll: true,
                    ..Outcome::selection()
                };
            }
        }
        Outcome {
            autoscroll: true,
            ..Outcome::default()
        }
    }

    fn pointer_up(&mut self, _state: &mut ViewerState, _input: &PointerInput) -> Outcome {
        self.dragging = false;
        Outcome::default()
    }

    fn cursor(&self) -> &'static str {
        "cell"
    }
}

/// Ordered handler chain with gesture capture.
///
/// Resize zones win over headers, headers win over cells, and the cell
/// handler claims whatever is left. The handler that claims a
/// pointer-down receives every move and the up, even when the pointer
/// leaves its region mid-gesture.
pub struct PointerDispatcher {
    handlers: Vec<Box<dyn PointerHandler>>,
    captured: Option<usize>,
}

impl Default for PointerDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(ColResizeHandler::default()),
                Box::new(RowResizeHandler::default()),
                Box::new(CornerHandler),
                Box::new(ColumnHeaderHandler::default()),
                Box::new(RowHeaderHandler::default()),
                Box::new(CellHandler::default()),
            ],
            captured: None,
        }
    }

    pub fn pointer_down(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let hit = self
            .handlers
            .iter()
            .position(|h| h.hit_test(state, input));
        let Some(index) = hit else {
            return Outcome::default();
        };
        self.captured = Some(index);
        match self.handlers.get_mut(index) {
            Some(handler) => handler.pointer_down(state, input),
            None => Outcome::default(),
        }
    }

    pub fn pointer_move(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(index) = self.captured else {
            return Outcome::default();
        };
        match self.handlers.get_mut(index) {
            Some(handler) => handler.pointer_move(state, input),
            None => Outcome::default(),
        }
    }

    pub fn pointer_up(&mut self, state: &mut ViewerState, input: &PointerInput) -> Outcome {
        let Some(index) = self.captured.take() else {
            return Outcome::default();
        };
        match self.handlers.get_mut(index) {
            Some(handler) => handler.pointer_up(state, input),
            None => Outcome::default(),
        }
    }

    /// Is a gesture currently captured?
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.captured.is_some()
    }

    /// Hover cursor for a position, from the first handler that claims it.
    #[must_use]
    pub fn cursor(&self, state: &ViewerState, input: &PointerInput) -> &'static str {
        self.handlers
            .iter()
            .find(|h| h.hit_test(state, input))
            .map_or("default", |h| h.cursor())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::SelectionKind;

    // 100 data rows / 50 data cols plus header tracks, 24px rows,
    // 80px cols, 48px header column.
    fn state() -> ViewerState {
        let mut s = ViewerState::new(101, 51, 24.0, 80.0, 48.0);
        s.viewport.resize(800.0, 600.0);
        s
    }

    #[test]
    fn corner_wins_over_headers_and_cells() {
        let s = state();
        let dispatcher = PointerDispatcher::new();
        assert_eq!(dispatcher.cursor(&s, &PointerInput::at(10.0, 10.0)), "pointer");
        assert_eq!(dispatcher.cursor(&s, &PointerInput::at(100.0, 100.0)), "cell");
    }

    #[test]
    fn resize_zone_wins_over_column_header() {
        let s = state();
        let dispatcher = PointerDispatcher::new();
        // Boundary between col 1 and col 2 sits at 48 + 80 = 128.
        assert_eq!(
            dispatcher.cursor(&s, &PointerInput::at(128.0, 10.0)),
            "col-resize"
        );
        // Mid-column is an ordinary header hit.
        assert_eq!(
            dispatcher.cursor(&s, &PointerInput::at(90.0, 10.0)),
            "pointer"
        );
    }

    #[test]
    fn cell_click_selects_single_cell() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        // Row 2 spans y 48..72, col 2 spans x 128..208.
        let out = d.pointer_down(&mut s, &PointerInput::at(150.0, 60.0));
        assert!(out.selection_changed);
        let active = s.active.unwrap();
        assert_eq!(active.bounds(), (2, 2, 2, 2));
        assert_eq!(active.kind, SelectionKind::Cells);
    }

    #[test]
    fn cell_drag_extends_active_range() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(150.0, 60.0));
        let out = d.pointer_move(&mut s, &PointerInput::at(300.0, 120.0));
        assert!(out.selection_changed);
        assert!(out.autoscroll);
        let active = s.active.unwrap();
        // Drag end: y 120 is row 5 (96..120 is row 4, 120..144 is row 5),
        // x 300 is col 4 (288..368).
        assert_eq!(active.bounds(), (2, 2, 5, 4));
        d.pointer_up(&mut s, &PointerInput::at(300.0, 120.0));
        assert!(!d.gesture_active());
    }

    #[test]
    fn gesture_stays_captured_outside_origin_region() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(150.0, 60.0));
        // Pointer wanders into the header band; the cell handler still
        // owns the gesture and clamps to the data region.
        d.pointer_move(&mut s, &PointerInput::at(150.0, 5.0));
        let active = s.active.unwrap();
        assert_eq!(active.end_row, 1);
    }

    #[test]
    fn toggle_click_accumulates_ranges() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(150.0, 60.0));
        d.pointer_up(&mut s, &PointerInput::at(150.0, 60.0));

        let mut input = PointerInput::at(300.0, 120.0);
        input.toggle = true;
        d.pointer_down(&mut s, &input);
        d.pointer_up(&mut s, &input);

        assert_eq!(s.ranges.ranges().len(), 1);
        assert_eq!(s.ranges.ranges()[0].bounds(), (2, 2, 2, 2));
        assert_eq!(s.active.unwrap().bounds(), (5, 4, 5, 4));
    }

    #[test]
    fn toggle_click_on_exact_range_removes_it() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(150.0, 60.0));
        d.pointer_up(&mut s, &PointerInput::at(150.0, 60.0));

        // Ctrl-click the same cell: the committed copy is removed and
        // nothing stays active.
        let mut input = PointerInput::at(150.0, 60.0);
        input.toggle = true;
        d.pointer_down(&mut s, &input);
        d.pointer_up(&mut s, &input);

        assert!(s.ranges.is_empty());
        assert!(s.active.is_none());
    }

    #[test]
    fn shift_click_extends_without_moving_anchor() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(150.0, 60.0));
        d.pointer_up(&mut s, &PointerInput::at(150.0, 60.0));

        let mut input = PointerInput::at(300.0, 120.0);
        input.shift = true;
        d.pointer_down(&mut s, &input);
        let active = s.active.unwrap();
        assert_eq!((active.start_row, active.start_col), (2, 2));
        assert_eq!((active.end_row, active.end_col), (5, 4));
    }

    #[test]
    fn column_header_click_selects_full_column() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        let out = d.pointer_down(&mut s, &PointerInput::at(150.0, 10.0));
        assert!(out.selection_changed);
        let active = s.active.unwrap();
        assert_eq!(active.kind, SelectionKind::Column);
        assert_eq!(active.bounds(), (1, 2, 100, 2));
    }

    #[test]
    fn column_header_drag_extends_column_span() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(150.0, 10.0));
        d.pointer_move(&mut s, &PointerInput::at(300.0, 10.0));
        let active = s.active.unwrap();
        assert_eq!(active.bounds(), (1, 2, 100, 4));
        assert_eq!(active.kind, SelectionKind::Column);
    }

    #[test]
    fn row_header_click_selects_full_row() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(10.0, 60.0));
        let active = s.active.unwrap();
        assert_eq!(active.kind, SelectionKind::Row);
        assert_eq!(active.bounds(), (2, 1, 2, 50));
    }

    #[test]
    fn corner_click_selects_everything() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        s.ranges.push(SelectionRange::cells(3, 3, 3, 3));
        d.pointer_down(&mut s, &PointerInput::at(10.0, 10.0));
        assert!(s.ranges.is_empty());
        let active = s.active.unwrap();
        assert_eq!(active.kind, SelectionKind::All);
        assert_eq!(active.bounds(), (1, 1, 100, 50));
    }

    #[test]
    fn column_resize_commits_undoable_command() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        // Grab the boundary between col 1 and 2 at x = 128.
        d.pointer_down(&mut s, &PointerInput::at(128.0, 10.0));
        assert!(matches!(s.resize_guide, Some(ResizeGuide::Vertical(_))));
        d.pointer_move(&mut s, &PointerInput::at(168.0, 10.0));
        d.pointer_up(&mut s, &PointerInput::at(168.0, 10.0));

        assert!(s.resize_guide.is_none());
        assert_eq!(s.data.cols.size(1), 120.0);
        assert!(s.commands.can_undo());
        s.commands.undo(&mut s.data);
        assert_eq!(s.data.cols.size(1), 80.0);
    }

    #[test]
    fn resize_clamps_to_minimum_size() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        d.pointer_down(&mut s, &PointerInput::at(128.0, 10.0));
        d.pointer_move(&mut s, &PointerInput::at(-500.0, 10.0));
        d.pointer_up(&mut s, &PointerInput::at(-500.0, 10.0));
        assert_eq!(s.data.cols.size(1), MIN_TRACK_SIZE);
    }

    #[test]
    fn header_column_resize_uses_pinned_left_edge() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        // The header column's right edge sits at x = 48.
        d.pointer_down(&mut s, &PointerInput::at(48.0, 10.0));
        d.pointer_move(&mut s, &PointerInput::at(70.0, 10.0));
        d.pointer_up(&mut s, &PointerInput::at(70.0, 10.0));
        assert_eq!(s.data.cols.size(0), 70.0);
    }

    #[test]
    fn row_resize_commits_undoable_command() {
        let mut s = state();
        let mut d = PointerDispatcher::new();
        // Boundary between row 1 and 2 at y = 48.
        d.pointer_down(&mut s, &PointerInput::at(10.0, 48.0));
        d.pointer_move(&mut s, &PointerInput::at(10.0, 60.0));
        d.pointer_up(&mut s, &PointerInput::at(10.0, 60.0));
        assert_eq!(s.data.rows.size(1), 36.0);
        s.commands.undo(&mut s.data);
        assert_eq!(s.data.rows.size(1), 24.0);
    }
}
