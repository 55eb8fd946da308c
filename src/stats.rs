//! Selection statistics: aggregates over the selected rectangles.
//!
//! Consumes the same selection-change broadcast as the renderer and
//! produces count/sum/min/max/average over every cell of every selected
//! rectangle, falling back to the active range when no additional
//! ranges have been committed.

use serde::{Deserialize, Serialize};

use crate::types::{CellStore, SelectionRange};

/// Aggregate numbers over a selection.
///
/// `count` counts non-empty values (text included); the numeric
/// aggregates exclude non-numeric and absent values. Numeric text
/// ("42") participates in both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStats {
    /// Non-empty cells.
    pub count: u32,
    /// Sum of numeric values.
    pub sum: f64,
    /// Smallest numeric value, if any.
    pub min: Option<f64>,
    /// Largest numeric value, if any.
    pub max: Option<f64>,
    /// Mean of numeric values, if any.
    pub average: Option<f64>,
}

/// Aggregate over every cell of every rectangle in `ranges`.
///
/// Overlapping rectangles are iterated independently (no dedup), and
/// header row/column 0 is skipped - header labels are derived, not
/// data.
#[must_use]
pub fn aggregate(store: &CellStore, ranges: &[SelectionRange]) -> SelectionStats {
    let mut stats = SelectionStats::default();
    let mut numeric_count = 0u32;

    for range in ranges {
        let (r0, c0, r1, c1) = range.bounds();
        // `..=r1` is empty when the rectangle sits entirely in header
        // territory (r1 == 0), which is exactly right.
        for row in r0.max(1)..=r1 {
            for col in c0.max(1)..=c1 {
                let Some(cell) = store.get(row, col) else {
                    continue;
                };
                if cell.value.is_empty() {
                    continue;
                }
                stats.count += 1;
                if let Some(n) = cell.value.as_number() {
                    numeric_count += 1;
                    stats.sum += n;
                    stats.min = Some(stats.min.map_or(n, |m| m.min(n)));
                    stats.max = Some(stats.max.map_or(n, |m| m.max(n)));
                }
            }
        }
    }

    if numeric_count > 0 {
        stats.average = Some(stats.sum / f64::from(numeric_count));
    }
    stats
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
    use crate::types::CellValue;

    fn store_with_row(values: &[CellValue]) -> CellStore {
        let mut store = CellStore::new();
        for (i, v) in values.iter().enumerate() {
            store.set(1, u32::try_from(i).unwrap() + 1, v.clone());
        }
        store
    }

    #[test]
    fn mixed_values_per_contract() {
        // [1, "x", 3, null, 5]
        let store = store_with_row(&[
            CellValue::Number(1.0),
            CellValue::Text("x".into()),
            CellValue::Number(3.0),
            CellValue::Empty,
            CellValue::Number(5.0),
        ]);
        let sel = [SelectionRange::cells(1, 1, 1, 5)];
        let stats = aggregate(&store, &sel);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.sum, 9.0);
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(5.0));
        assert_eq!(stats.average, Some(3.0));
    }

    #[test]
    fn numeric_text_participates() {
        let store = store_with_row(&[CellValue::Text("7".into())]);
        let stats = aggregate(&store, &[SelectionRange::cells(1, 1, 1, 1)]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, 7.0);
    }

    #[test]
    fn empty_selection_yields_default() {
        let store = CellStore::new();
        let stats = aggregate(&store, &[SelectionRange::cells(1, 1, 10, 10)]);
        assert_eq!(stats, SelectionStats::default());
        assert_eq!(stats.average, None);
    }

    #[test]
    fn header_indices_are_skipped() {
        let mut store = CellStore::new();
        // Header territory - never counted even if something lands there
        store.set(0, 3, CellValue::Number(100.0));
        store.set(3, 0, CellValue::Number(100.0));
        store.set(2, 2, CellValue::Number(5.0));
        let stats = aggregate(&store, &[SelectionRange::cells(0, 0, 3, 3)]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, 5.0);
    }

    #[test]
    fn overlapping_rectangles_iterate_independently() {
        let store = store_with_row(&[CellValue::Number(2.0)]);
        let sel = [
            SelectionRange::cells(1, 1, 1, 1),
            SelectionRange::cells(1, 1, 1, 1),
        ];
        let stats = aggregate(&store, &sel);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum, 4.0);
    }
}
