//! Cell values and the sparse cell store.
//!
//! Cells are created lazily on first write and never on read; the
//! store only grows with distinct written coordinates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A cell's stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "t", content = "v")]
pub enum CellValue {
    /// No value stored (also the state of an absent cell).
    #[default]
    #[serde(rename = "e")]
    Empty,
    /// Text value.
    #[serde(rename = "s")]
    Text(String),
    /// Numeric value.
    #[serde(rename = "n")]
    Number(f64),
}

impl CellValue {
    /// Parse user input into a typed value: numeric strings become
    /// numbers, empty input stays empty, everything else is text.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return CellValue::Empty;
        }
        match input.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(input.to_string()),
        }
    }

    /// Numeric view of the value. Text that parses as a number counts,
    /// mirroring the spreadsheet convention used for alignment and
    /// aggregation.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            CellValue::Empty => None,
        }
    }

    /// True when there is nothing to display or count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Display string for rendering.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract().abs() < f64::EPSILON && n.abs() < 1e15 {
                    format!("{n:.0}")
                } else {
                    format!("{n}")
                }
            }
        }
    }
}

/// A single grid cell.
///
/// `is_selected` is a transient render hint; selection truth lives in
/// the selection engine, not the store.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    /// The cell's value.
    pub value: CellValue,
    /// Render hint set while the cell is inside a painted selection.
    pub is_selected: bool,
}

/// Sparse mapping from (row, col) to cells.
#[derive(Debug, Default)]
pub struct CellStore {
    cells: HashMap<(u32, u32), Cell>,
}

impl CellStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cell. Reading never allocates.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Write a value, creating the cell (unselected) on first write and
    /// mutating in place afterwards. Returns the cell.
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) -> &mut Cell {
        let cell = self.cells.entry((row, col)).or_default();
        cell.value = value;
        cell
    }

    /// The stored value at (row, col), `Empty` when absent.
    #[must_use]
    pub fn value(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Number of materialized cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
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

    #[test]
    fn read_never_creates() {
        let store = CellStore::new();
        assert!(store.get(3, 2).is_none());
        assert_eq!(store.len(), 0);
        assert_eq!(store.value(3, 2), CellValue::Empty);
    }

    #[test]
    fn set_creates_then_mutates_in_place() {
        let mut store = CellStore::new();
        store.set(1, 1, CellValue::Number(1.0));
        assert_eq!(store.len(), 1);
        store.set(1, 1, CellValue::Text("x".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.value(1, 1), CellValue::Text("x".into()));
        // New cells start unselected
        assert!(!store.get(1, 1).unwrap().is_selected);
    }

    #[test]
    fn parse_distinguishes_numbers_from_text() {
        assert_eq!(CellValue::parse("42"), CellValue::Number(42.0));
        assert_eq!(CellValue::parse(" 3.5 "), CellValue::Number(3.5));
        assert_eq!(CellValue::parse("abc"), CellValue::Text("abc".into()));
        assert_eq!(CellValue::parse(""), CellValue::Empty);
        assert_eq!(CellValue::parse("NaN"), CellValue::Text("NaN".into()));
    }

    #[test]
    fn numeric_text_counts_as_number() {
        assert_eq!(CellValue::Text("7".into()).as_number(), Some(7.0));
        assert_eq!(CellValue::Text("x".into()).as_number(), None);
    }

    #[test]
    fn display_formats_integers_without_fraction() {
        assert_eq!(CellValue::Number(42.0).display(), "42");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
        assert_eq!(CellValue::Empty.display(), "");
    }
}
