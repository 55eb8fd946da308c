//! Reversible edit and resize commands with undo/redo stacks.
//!
//! One user gesture maps to exactly one command: a keystroke-to-commit
//! edit or a resize-drag-to-release. Commands capture old and new state
//! so they replay in either direction without consulting anything
//! outside the grid data they target.

use crate::layout::{Axis, AxisTrack};
use crate::types::{CellStore, CellValue};

/// The mutable grid data commands operate on.
#[derive(Debug)]
pub struct GridData {
    /// Sparse cell contents.
    pub store: CellStore,
    /// Row heights.
    pub rows: AxisTrack,
    /// Column widths.
    pub cols: AxisTrack,
}

impl GridData {
    fn track_mut(&mut self, axis: Axis) -> &mut AxisTrack {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Col => &mut self.cols,
        }
    }
}

/// A reversible unit of grid mutation.
#[derive(Debug, Clone)]
pub enum Command {
    /// Swap a cell's value between `old` and `new`.
    EditCell {
        row: u32,
        col: u32,
        old: CellValue,
        new: CellValue,
    },
    /// Swap a track's size between `old` and `new`.
    ResizeTrack {
        axis: Axis,
        index: u32,
        old: f32,
        new: f32,
    },
}

impl Command {
    /// Apply the forward direction.
    pub fn execute(&self, data: &mut GridData) {
        match self {
            Command::EditCell { row, col, new, .. } => {
                data.store.set(*row, *col, new.clone());
            }
            Command::ResizeTrack { axis, index, new, .. } => {
                // Out-of-range here would mean the command outlived its
                // track, which cannot happen with a fixed track count.
                let _ = data.track_mut(*axis).set_size(*index, *new);
            }
        }
    }

    /// Apply the reverse direction.
    pub fn undo(&self, data: &mut GridData) {
        match self {
            Command::EditCell { row, col, old, .. } => {
                data.store.set(*row, *col, old.clone());
            }
            Command::ResizeTrack { axis, index, old, .. } => {
                let _ = data.track_mut(*axis).set_size(*index, *old);
            }
        }
    }
}

/// Undo/redo history. Pushing a new command clears the redo stack.
#[derive(Debug, Default)]
pub struct CommandStack {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl CommandStack {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `cmd` against `data` and record it. Clears the redo
    /// stack: history forks are discarded.
    pub fn push(&mut self, cmd: Command, data: &mut GridData) {
        cmd.execute(data);
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
    }

    /// Revert the most recent command. Silent no-op (returns false) on
    /// an empty stack, never an error.
    pub fn undo(&mut self, data: &mut GridData) -> bool {
        let Some(cmd) = self.undo_stack.pop() else {
            return false;
        };
        cmd.undo(data);
        self.redo_stack.push(cmd);
        true
    }

    /// Re-apply the most recently undone command. Silent no-op on an
    /// empty redo stack.
    pub fn redo(&mut self, data: &mut GridData) -> bool {
        let Some(cmd) = self.redo_stack.pop() else {
            return false;
        };
        cmd.execute(data);
        self.undo_stack.push(cmd);
        true
    }

    /// True when there is something to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// True when there is something to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
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

    fn data() -> GridData {
        GridData {
            store: CellStore::new(),
            rows: AxisTrack::new(Axis::Row, 10, 25.0),
            cols: AxisTrack::new(Axis::Col, 10, 100.0),
        }
    }

    fn edit(row: u32, col: u32, old: CellValue, new: CellValue) -> Command {
        Command::EditCell { row, col, old, new }
    }

    #[test]
    fn execute_then_undo_restores_store_exactly() {
        let mut data = data();
        let mut stack = CommandStack::new();
        data.store.set(2, 2, CellValue::Text("before".into()));

        stack.push(
            edit(
                2,
                2,
                CellValue::Text("before".into()),
                CellValue::Number(7.0),
            ),
            &mut data,
        );
        assert_eq!(data.store.value(2, 2), CellValue::Number(7.0));

        assert!(stack.undo(&mut data));
        assert_eq!(data.store.value(2, 2), CellValue::Text("before".into()));
    }

    #[test]
    fn undo_redo_inverse_law_over_a_sequence() {
        let mut data = data();
        let mut stack = CommandStack::new();
        let edits = [
            (1u32, 1u32, CellValue::Number(1.0)),
            (1, 2, CellValue::Text("a".into())),
            (1, 1, CellValue::Number(2.0)),
        ];
        for (row, col, new) in edits.iter().cloned() {
            let old = data.store.value(row, col);
            stack.push(edit(row, col, old, new), &mut data);
        }
        let after: Vec<_> = edits
            .iter()
            .map(|(r, c, _)| data.store.value(*r, *c))
            .collect();

        while stack.undo(&mut data) {}
        assert_eq!(data.store.value(1, 1), CellValue::Empty);
        assert_eq!(data.store.value(1, 2), CellValue::Empty);

        while stack.redo(&mut data) {}
        let replayed: Vec<_> = edits
            .iter()
            .map(|(r, c, _)| data.store.value(*r, *c))
            .collect();
        assert_eq!(after, replayed);
    }

    #[test]
    fn resize_round_trips_positions() {
        let mut data = data();
        let mut stack = CommandStack::new();
        let total_before = data.cols.total_extent();

        stack.push(
            Command::ResizeTrack {
                axis: Axis::Col,
                index: 3,
                old: 100.0,
                new: 180.0,
            },
            &mut data,
        );
        assert_eq!(data.cols.size(3), 180.0);
        assert_eq!(data.cols.total_extent(), total_before + 80.0);

        stack.undo(&mut data);
        assert_eq!(data.cols.size(3), 100.0);
        assert_eq!(data.cols.total_extent(), total_before);
    }

    #[test]
    fn new_command_clears_redo() {
        let mut data = data();
        let mut stack = CommandStack::new();
        stack.push(
            edit(0, 0, CellValue::Empty, CellValue::Number(1.0)),
            &mut data,
        );
        stack.undo(&mut data);
        assert!(stack.can_redo());
        stack.push(
            edit(0, 0, CellValue::Empty, CellValue::Number(2.0)),
            &mut data,
        );
        assert!(!stack.can_redo());
    }

    #[test]
    fn underflow_is_a_silent_noop() {
        let mut data = data();
        let mut stack = CommandStack::new();
        assert!(!stack.undo(&mut data));
        assert!(!stack.redo(&mut data));
    }
}
