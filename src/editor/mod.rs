//! Cell editing: begin/commit/cancel lifecycle over the input overlay.
//!
//! Commit routes through the command stack so every edit is a single
//! undoable unit; cancel discards the typed text without touching the
//! store.

#[cfg(target_arch = "wasm32")]
pub(crate) mod input;

use crate::viewer::ViewerState;
use crate::types::CellValue;
use crate::Command;

/// The cell an edit gesture should target: the active range's anchor,
/// clamped into the data region. None when nothing is selected.
pub(crate) fn edit_anchor(state: &ViewerState) -> Option<(u32, u32)> {
    let active = state.active.as_ref()?;
    Some((active.start_row.max(1), active.start_col.max(1)))
}

/// Start editing a cell. Returns the current display text to seed the
/// input widget. Header coordinates are shifted to the nearest data
/// cell.
pub(crate) fn begin_edit(state: &mut ViewerState, row: u32, col: u32) -> String {
    let row = row.max(1).min(state.data.rows.last_index());
    let col = col.max(1).min(state.data.cols.last_index());
    state.editing = Some((row, col));
    state.data.store.value(row, col).display()
}

/// Commit the in-flight edit as one undoable command. A value that
/// parses identical to what the cell already holds is a no-op and
/// pushes nothing. Returns true when the store changed.
pub(crate) fn commit_edit(state: &mut ViewerState, text: &str) -> bool {
    let Some((row, col)) = state.editing.take() else {
        return false;
    };
    let old = state.data.store.value(row, col);
    let new = CellValue::parse(text);
    if new == old {
        return false;
    }
    state
        .commands
        .push(Command::EditCell { row, col, old, new }, &mut state.data);
    true
}

/// Abandon the in-flight edit, leaving the store untouched.
pub(crate) fn cancel_edit(state: &mut ViewerState) {
    state.editing = None;
}

/// Screen rectangle `[x, y, w, h]` of a data cell, or None when the
/// cell is entirely hidden behind a header band or outside the
/// viewport. Used to position the input overlay.
pub(crate) fn cell_screen_rect(state: &ViewerState, row: u32, col: u32) -> Option<[f32; 4]> {
    let band_x = state.data.cols.size(0);
    let band_y = state.data.rows.size(0);
    let vp = &state.viewport;

    let x = state.data.cols.position(col) - vp.scroll_x;
    let y = state.data.rows.position(row) - vp.scroll_y;
    let w = state.data.cols.size(col);
    let h = state.data.rows.size(row);

    if x + w <= band_x || y + h <= band_y || x >= vp.width || y >= vp.height {
        return None;
    }
    Some([x, y, w, h])
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
    use crate::types::SelectionRange;

    fn state() -> ViewerState {
        let mut s = ViewerState::new(101, 51, 24.0, 80.0, 48.0);
        s.viewport.resize(800.0, 600.0);
        s
    }

    #[test]
    fn begin_seeds_input_with_current_display_text() {
        let mut s = state();
        s.data.store.set(3, 2, CellValue::Number(42.0));
        assert_eq!(begin_edit(&mut s, 3, 2), "42");
        assert_eq!(s.editing, Some((3, 2)));
    }

    #[test]
    fn begin_on_header_shifts_to_nearest_data_cell() {
        let mut s = state();
        assert_eq!(begin_edit(&mut s, 0, 0), "");
        assert_eq!(s.editing, Some((1, 1)));
    }

    #[test]
    fn commit_writes_parsed_value_through_undo_stack() {
        let mut s = state();
        begin_edit(&mut s, 3, 2);
        assert!(commit_edit(&mut s, "42"));
        assert_eq!(s.data.store.value(3, 2), CellValue::Number(42.0));
        assert!(s.editing.is_none());

        s.commands.undo(&mut s.data);
        assert_eq!(s.data.store.value(3, 2), CellValue::Empty);
        s.commands.redo(&mut s.data);
        assert_eq!(s.data.store.value(3, 2), CellValue::Number(42.0));
    }

    #[test]
    fn commit_of_unchanged_value_pushes_nothing() {
        let mut s = state();
        s.data.store.set(3, 2, CellValue::Text("hi".into()));
        begin_edit(&mut s, 3, 2);
        assert!(!commit_edit(&mut s, "hi"));
        assert!(!s.commands.can_undo());
    }

    #[test]
    fn commit_without_begin_is_a_no_op() {
        let mut s = state();
        assert!(!commit_edit(&mut s, "42"));
        assert!(s.data.store.is_empty());
    }

    #[test]
    fn cancel_discards_typed_text() {
        let mut s = state();
        s.data.store.set(3, 2, CellValue::Number(1.0));
        begin_edit(&mut s, 3, 2);
        cancel_edit(&mut s);
        assert_eq!(s.data.store.value(3, 2), CellValue::Number(1.0));
        assert!(s.editing.is_none());
        assert!(!s.commands.can_undo());
    }

    #[test]
    fn commit_empty_text_clears_the_cell() {
        let mut s = state();
        s.data.store.set(3, 2, CellValue::Number(7.0));
        begin_edit(&mut s, 3, 2);
        assert!(commit_edit(&mut s, ""));
        assert!(s.data.store.value(3, 2).is_empty());
    }

    #[test]
    fn anchor_follows_active_selection() {
        let mut s = state();
        assert!(edit_anchor(&s).is_none());
        s.active = Some(SelectionRange::cells(4, 6, 9, 9));
        assert_eq!(edit_anchor(&s), Some((4, 6)));
    }

    #[test]
    fn screen_rect_follows_resize_commands_while_editing() {
        use crate::layout::Axis;

        let mut s = state();
        begin_edit(&mut s, 2, 3);
        // Cell (2, 3): x 208, y 48, 80x24.
        assert_eq!(cell_screen_rect(&s, 2, 3), Some([208.0, 48.0, 80.0, 24.0]));

        let old = s.data.cols.size(1);
        s.commands.push(
            Command::ResizeTrack {
                axis: Axis::Col,
                index: 1,
                old,
                new: 120.0,
            },
            &mut s.data,
        );
        // The widened upstream column shifted the edited cell right;
        // the overlay repositions from this rect.
        assert_eq!(cell_screen_rect(&s, 2, 3), Some([248.0, 48.0, 80.0, 24.0]));

        s.commands.undo(&mut s.data);
        assert_eq!(cell_screen_rect(&s, 2, 3), Some([208.0, 48.0, 80.0, 24.0]));
    }

    #[test]
    fn screen_rect_accounts_for_scroll_and_headers() {
        let mut s = state();
        // Cell (2, 2): x 128, y 48, 80x24.
        assert_eq!(cell_screen_rect(&s, 2, 2), Some([128.0, 48.0, 80.0, 24.0]));

        s.viewport.scroll_x = 200.0;
        // Now fully hidden behind the pinned header column.
        assert!(cell_screen_rect(&s, 2, 2).is_none());
    }
}
