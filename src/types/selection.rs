//! Selection ranges and the multi-range selection set.
//!
//! A range stores its anchor corner (`start_*`) untouched for the whole
//! gesture; normalization happens only at consumption time so reversing
//! a drag keeps the anchor fixed.

use serde::{Deserialize, Serialize};

/// How a selection originated. Header-origin selections get the
/// stronger header highlight when painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionKind {
    /// Anchored on a data cell.
    #[default]
    Cells,
    /// Anchored on a row header (column 0).
    Row,
    /// Anchored on a column header (row 0).
    Column,
    /// Corner click: the whole grid.
    All,
}

/// An anchored rectangular selection.
///
/// `start_*` is the anchor corner fixed at gesture start; `end_*`
/// tracks the pointer or keyboard and may be on any side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
    /// Gesture origin, drives header highlight strength.
    pub kind: SelectionKind,
}

impl SelectionRange {
    /// A 1x1 or dragged cell-range selection.
    #[must_use]
    pub fn cells(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
            kind: SelectionKind::Cells,
        }
    }

    /// A full-width row selection anchored at `row`.
    #[must_use]
    pub fn row(row: u32, last_col: u32) -> Self {
        Self {
            start_row: row,
            start_col: 0,
            end_row: row,
            end_col: last_col,
            kind: SelectionKind::Row,
        }
    }

    /// A full-height column selection anchored at `col`.
    #[must_use]
    pub fn column(col: u32, last_row: u32) -> Self {
        Self {
            start_row: 0,
            start_col: col,
            end_row: last_row,
            end_col: col,
            kind: SelectionKind::Column,
        }
    }

    /// Every data cell (corner click). Anchored on the first data
    /// cell; the header tracks are never part of a selection.
    #[must_use]
    pub fn all(last_row: u32, last_col: u32) -> Self {
        Self {
            start_row: 1,
            start_col: 1,
            end_row: last_row,
            end_col: last_col,
            kind: SelectionKind::All,
        }
    }

    /// Normalized bounds `(min_row, min_col, max_row, max_col)`.
    ///
    /// Never mutates the stored anchor; normalizing twice yields the
    /// same bounds.
    #[must_use]
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.start_row.min(self.end_row),
            self.start_col.min(self.end_col),
            self.start_row.max(self.end_row),
            self.start_col.max(self.end_col),
        )
    }

    /// True when the two ranges cover the identical rectangle,
    /// regardless of anchor direction or gesture origin.
    #[must_use]
    pub fn same_bounds(&self, other: &SelectionRange) -> bool {
        self.bounds() == other.bounds()
    }

    /// True when (row, col) lies inside the normalized rectangle.
    #[must_use]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        let (r0, c0, r1, c1) = self.bounds();
        row >= r0 && row <= r1 && col >= c0 && col <= c1
    }
}

/// Ordered collection of committed, possibly overlapping selection
/// rectangles accumulated via the toggle-add modifier.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ranges: Vec<SelectionRange>,
}

impl SelectionSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed ranges, in insertion order.
    #[must_use]
    pub fn ranges(&self) -> &[SelectionRange] {
        &self.ranges
    }

    /// Append a committed range. Overlap with existing ranges is
    /// allowed; no dedup.
    pub fn push(&mut self, range: SelectionRange) {
        self.ranges.push(range);
    }

    /// Toggle-add: remove an exact four-bound match if present (returns
    /// true), otherwise append. Partial overlap never deselects.
    pub fn toggle(&mut self, range: SelectionRange) -> bool {
        if let Some(pos) = self.ranges.iter().position(|r| r.same_bounds(&range)) {
            self.ranges.remove(pos);
            true
        } else {
            self.ranges.push(range);
            false
        }
    }

    /// Drop every committed range (plain anchor without the modifier).
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// True when no range has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Snapshot broadcast after every selection mutation: the active range
/// plus the full committed set, in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionChange {
    /// The in-progress or most recently committed range.
    pub active: Option<SelectionRange>,
    /// All committed additional ranges.
    pub ranges: Vec<SelectionRange>,
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

    #[test]
    fn bounds_normalize_reversed_drag() {
        let sel = SelectionRange::cells(5, 7, 2, 3);
        assert_eq!(sel.bounds(), (2, 3, 5, 7));
        // Anchor untouched
        assert_eq!((sel.start_row, sel.start_col), (5, 7));
    }

    #[test]
    fn normalization_is_idempotent() {
        let sel = SelectionRange::cells(5, 1, 2, 4);
        let (r0, c0, r1, c1) = sel.bounds();
        let normalized = SelectionRange::cells(r0, c0, r1, c1);
        assert_eq!(normalized.bounds(), sel.bounds());
        assert_eq!(normalized.bounds(), normalized.bounds());
    }

    #[test]
    fn toggle_removes_exact_match_only() {
        let mut set = SelectionSet::new();
        let row3 = SelectionRange::row(3, 49);
        assert!(!set.toggle(row3)); // appended
        assert_eq!(set.ranges().len(), 1);

        // Overlapping but not identical: appended, not removed
        let partial = SelectionRange::cells(3, 0, 3, 10);
        assert!(!set.toggle(partial));
        assert_eq!(set.ranges().len(), 2);

        // Same bounds, different anchor direction: removed
        let reversed = SelectionRange {
            start_row: 3,
            start_col: 49,
            end_row: 3,
            end_col: 0,
            kind: SelectionKind::Row,
        };
        assert!(set.toggle(reversed));
        assert_eq!(set.ranges().len(), 1);
    }

    #[test]
    fn set_allows_overlap_without_dedup() {
        let mut set = SelectionSet::new();
        set.push(SelectionRange::cells(1, 1, 4, 4));
        set.push(SelectionRange::cells(2, 2, 3, 3));
        set.push(SelectionRange::cells(1, 1, 4, 4));
        assert_eq!(set.ranges().len(), 3);
    }

    #[test]
    fn contains_uses_normalized_bounds() {
        let sel = SelectionRange::cells(6, 6, 2, 2);
        assert!(sel.contains(4, 4));
        assert!(!sel.contains(1, 4));
    }
}
