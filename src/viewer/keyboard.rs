//! Keyboard navigation over the selection.

use super::handlers::Outcome;
use super::scroll::ensure_cell_visible;
use super::ViewerState;
use crate::types::SelectionRange;

fn step(value: u32, forward: bool, last: u32) -> u32 {
    if forward {
        value.saturating_add(1).min(last)
    } else {
        value.saturating_sub(1).max(1)
    }
}

/// Handle an arrow key. Plain arrows collapse the selection to a
/// single cell one step from the current anchor; Shift+arrow moves
/// only the extension end, leaving the anchor in place. Either way the
/// moved cell is scrolled into view. Unrecognized keys are ignored.
pub(crate) fn handle_key(state: &mut ViewerState, key: &str, shift: bool) -> Outcome {
    let (row_forward, col_forward) = match key {
        "ArrowUp" => (Some(false), None),
        "ArrowDown" => (Some(true), None),
        "ArrowLeft" => (None, Some(false)),
        "ArrowRight" => (None, Some(true)),
        _ => return Outcome::default(),
    };
    let last_row = state.data.rows.last_index();
    let last_col = state.data.cols.last_index();

    let Some(active) = state.active else {
        // Nothing selected yet: any arrow lands on the first data cell.
        state.ranges.clear();
        state.active = Some(SelectionRange::cells(1, 1, 1, 1));
        let scrolled = ensure_cell_visible(state, 1, 1);
        return Outcome {
            repaint_base: scrolled,
            repaint_overlay: true,
            selection_changed: true,
            ..Outcome::default()
        };
    };

    let (row, col, range) = if shift {
        let row = row_forward.map_or(active.end_row, |f| step(active.end_row, f, last_row));
        let col = col_forward.map_or(active.end_col, |f| step(active.end_col, f, last_col));
        let mut extended = active;
        extended.end_row = row;
        extended.end_col = col;
        (row, col, extended)
    } else {
        let row = row_forward.map_or(active.start_row.max(1), |f| {
            step(active.start_row.max(1), f, last_row)
        });
        let col = col_forward.map_or(active.start_col.max(1), |f| {
            step(active.start_col.max(1), f, last_col)
        });
        state.ranges.clear();
        (row, col, SelectionRange::cells(row, col, row, col))
    };

    state.active = Some(range);
    let scrolled = ensure_cell_visible(state, row, col);
    Outcome {
        repaint_base: scrolled,
        repaint_overlay: true,
        selection_changed: true,
        ..Outcome::default()
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

    fn state() -> ViewerState {
        let mut s = ViewerState::new(101, 51, 24.0, 80.0, 48.0);
        s.viewport.resize(800.0, 600.0);
        s
    }

    #[test]
    fn arrow_moves_single_cell() {
        let mut s = state();
        s.active = Some(SelectionRange::cells(5, 5, 5, 5));
        handle_key(&mut s, "ArrowDown", false);
        assert_eq!(s.active.unwrap().bounds(), (6, 5, 6, 5));
        handle_key(&mut s, "ArrowLeft", false);
        assert_eq!(s.active.unwrap().bounds(), (6, 4, 6, 4));
    }

    #[test]
    fn arrow_collapses_multi_cell_range_to_anchor_step() {
        let mut s = state();
        s.active = Some(SelectionRange::cells(5, 5, 9, 9));
        s.ranges.push(SelectionRange::cells(2, 2, 2, 2));
        handle_key(&mut s, "ArrowRight", false);
        assert_eq!(s.active.unwrap().bounds(), (5, 6, 5, 6));
        assert!(s.ranges.is_empty());
    }

    #[test]
    fn arrow_clamps_at_data_region_edges() {
        let mut s = state();
        s.active = Some(SelectionRange::cells(1, 1, 1, 1));
        handle_key(&mut s, "ArrowUp", false);
        assert_eq!(s.active.unwrap().bounds(), (1, 1, 1, 1));
        handle_key(&mut s, "ArrowLeft", false);
        assert_eq!(s.active.unwrap().bounds(), (1, 1, 1, 1));

        s.active = Some(SelectionRange::cells(100, 50, 100, 50));
        handle_key(&mut s, "ArrowDown", false);
        let out = handle_key(&mut s, "ArrowRight", false);
        assert_eq!(s.active.unwrap().bounds(), (100, 50, 100, 50));
        assert!(out.selection_changed);
    }

    #[test]
    fn shift_arrow_extends_without_moving_anchor() {
        let mut s = state();
        s.active = Some(SelectionRange::cells(5, 5, 5, 5));
        handle_key(&mut s, "ArrowDown", true);
        handle_key(&mut s, "ArrowRight", true);
        let active = s.active.unwrap();
        assert_eq!((active.start_row, active.start_col), (5, 5));
        assert_eq!((active.end_row, active.end_col), (6, 6));
        assert_eq!(active.kind, SelectionKind::Cells);
    }

    #[test]
    fn shift_arrow_can_extend_backwards_past_anchor() {
        let mut s = state();
        s.active = Some(SelectionRange::cells(5, 5, 5, 5));
        handle_key(&mut s, "ArrowUp", true);
        let active = s.active.unwrap();
        assert_eq!(active.end_row, 4);
        // Normalized bounds still come out min-to-max.
        assert_eq!(active.bounds(), (4, 5, 5, 5));
    }

    #[test]
    fn arrow_with_no_selection_lands_on_first_cell() {
        let mut s = state();
        let out = handle_key(&mut s, "ArrowDown", false);
        assert_eq!(s.active.unwrap().bounds(), (1, 1, 1, 1));
        assert!(out.selection_changed);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut s = state();
        s.active = Some(SelectionRange::cells(5, 5, 5, 5));
        let out = handle_key(&mut s, "PageDown", false);
        assert_eq!(out, Outcome::default());
        assert_eq!(s.active.unwrap().bounds(), (5, 5, 5, 5));
    }

    #[test]
    fn arrow_past_viewport_scrolls_cell_into_view() {
        let mut s = state();
        // Row 24 bottom edge: 25 * 24 = 600, exactly at the viewport
        // bottom. Moving to row 25 must scroll.
        s.active = Some(SelectionRange::cells(24, 1, 24, 1));
        let out = handle_key(&mut s, "ArrowDown", false);
        assert!(out.repaint_base);
        assert!(s.viewport.scroll_y > 0.0);
    }
}
