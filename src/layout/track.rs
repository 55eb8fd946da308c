//! Per-axis dimension track: ordered sizes plus cumulative positions.
//!
//! One `AxisTrack` instance exists per axis (row heights, column
//! widths). `positions[i]` is the virtual-space offset of index `i`'s
//! leading edge, so `positions` has `count + 1` entries and
//! `positions[count]` is the total extent.

use crate::error::{GridError, Result};

/// Minimum size a track can be resized to, in logical pixels.
/// Prevents degenerate zero-width/zero-height tracks.
pub const MIN_TRACK_SIZE: f32 = 10.0;

/// Which axis a track (or a resize command) refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row heights / vertical offsets.
    Row,
    /// Column widths / horizontal offsets.
    Col,
}

impl Axis {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Col => "col",
        }
    }
}

/// Ordered list of track sizes with derived cumulative positions.
#[derive(Debug, Clone)]
pub struct AxisTrack {
    axis: Axis,
    /// One size per index, all >= `MIN_TRACK_SIZE`.
    sizes: Vec<f32>,
    /// `positions[i]` = sum of `sizes[0..i]`; strictly increasing,
    /// length `count + 1`.
    positions: Vec<f32>,
}

impl AxisTrack {
    /// Create a track of `count` entries with a uniform default size.
    pub fn new(axis: Axis, count: u32, default_size: f32) -> Self {
        let size = default_size.max(MIN_TRACK_SIZE);
        let n = count as usize;
        let mut positions = Vec::with_capacity(n + 1);
        let mut offset = 0.0f32;
        for _ in 0..n {
            positions.push(offset);
            offset += size;
        }
        positions.push(offset);
        AxisTrack {
            axis,
            sizes: vec![size; n],
            positions,
        }
    }

    /// Number of tracks on this axis.
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::try_from(self.sizes.len()).unwrap_or(u32::MAX)
    }

    /// Index of the last track, clamping to 0 for empty tracks.
    #[must_use]
    pub fn last_index(&self) -> u32 {
        self.count().saturating_sub(1)
    }

    /// Size of track `i`, or 0 when out of range.
    #[must_use]
    pub fn size(&self, i: u32) -> f32 {
        self.sizes.get(i as usize).copied().unwrap_or(0.0)
    }

    /// Leading-edge position of track `i` in virtual space, O(1).
    /// `position(count)` is the total extent.
    #[must_use]
    pub fn position(&self, i: u32) -> f32 {
        self.positions.get(i as usize).copied().unwrap_or(0.0)
    }

    /// Total extent of the axis in virtual pixels.
    #[must_use]
    pub fn total_extent(&self) -> f32 {
        self.positions.last().copied().unwrap_or(0.0)
    }

    /// Resize track `i`, clamping to [`MIN_TRACK_SIZE`].
    ///
    /// Downstream cumulative positions are shifted by the size delta in
    /// the same call, so renderers querying immediately afterwards see
    /// consistent state. Returns the previous size.
    ///
    /// # Errors
    /// Returns [`GridError::Bounds`] when `i` is out of range.
    pub fn set_size(&mut self, i: u32, new_size: f32) -> Result<f32> {
        let count = self.count();
        let Some(slot) = self.sizes.get_mut(i as usize) else {
            return Err(GridError::Bounds {
                axis: self.axis.name(),
                index: i,
                count,
            });
        };
        let clamped = new_size.max(MIN_TRACK_SIZE);
        let old = *slot;
        *slot = clamped;
        let delta = clamped - old;
        if delta.abs() > f32::EPSILON {
            for pos in self.positions.iter_mut().skip(i as usize + 1) {
                *pos += delta;
            }
        }
        Ok(old)
    }

    /// Find the track containing `offset` (binary search).
    ///
    /// Returns `None` when the offset is negative or at/past the total
    /// extent - the not-found sentinel. Interactive callers clamp this
    /// to the last index rather than propagating it into paint math.
    #[must_use]
    pub fn index_at(&self, offset: f32) -> Option<u32> {
        if offset < 0.0 || offset >= self.total_extent() || self.sizes.is_empty() {
            return None;
        }
        match self
            .positions
            .binary_search_by(|pos| pos.partial_cmp(&offset).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => u32::try_from(i).ok(),
            Err(i) => u32::try_from(i.saturating_sub(1)).ok(),
        }
    }

    /// `index_at` with the sentinel clamped to the last track.
    #[must_use]
    pub fn index_at_clamped(&self, offset: f32) -> u32 {
        if offset < 0.0 {
            return 0;
        }
        self.index_at(offset).unwrap_or_else(|| self.last_index())
    }
}

/// Convert a 0-based column index to spreadsheet column letters
/// (A, B, ..., Z, AA, AB, ...). Bijective base-26: there is no
/// representable zero digit.
#[must_use]
pub fn col_to_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = col + 1; // Convert to 1-based
    while n > 0 {
        n -= 1;
        let c = char::from(b'A' + (n % 26) as u8);
        result.insert(0, c);
        n /= 26;
    }
    result
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
    use test_case::test_case;

    #[test]
    fn uniform_positions() {
        let track = AxisTrack::new(Axis::Col, 5, 100.0);
        assert_eq!(track.count(), 5);
        for i in 0..=5 {
            assert_eq!(track.position(i), 100.0 * i as f32);
        }
        assert_eq!(track.total_extent(), 500.0);
    }

    #[test]
    fn set_size_shifts_downstream_positions() {
        let mut track = AxisTrack::new(Axis::Col, 4, 100.0);
        let old = track.set_size(1, 150.0).unwrap();
        assert_eq!(old, 100.0);
        assert_eq!(track.position(0), 0.0);
        assert_eq!(track.position(1), 100.0);
        assert_eq!(track.position(2), 250.0);
        assert_eq!(track.position(3), 350.0);
        assert_eq!(track.total_extent(), 450.0);
    }

    #[test]
    fn set_size_clamps_to_minimum() {
        let mut track = AxisTrack::new(Axis::Row, 3, 25.0);
        track.set_size(0, 2.0).unwrap();
        assert_eq!(track.size(0), MIN_TRACK_SIZE);
        // Positions stay strictly increasing
        for i in 0..3 {
            assert!(track.position(i) < track.position(i + 1));
        }
    }

    #[test]
    fn set_size_out_of_range_is_an_error() {
        let mut track = AxisTrack::new(Axis::Row, 3, 25.0);
        assert!(matches!(
            track.set_size(3, 40.0),
            Err(GridError::Bounds { index: 3, .. })
        ));
    }

    #[test]
    fn index_at_round_trip() {
        let mut track = AxisTrack::new(Axis::Col, 6, 80.0);
        track.set_size(2, 140.0).unwrap();
        track.set_size(4, 30.0).unwrap();
        for i in 0..6 {
            assert_eq!(track.index_at(track.position(i)), Some(i));
            let mid = track.position(i) + track.size(i) / 2.0;
            assert_eq!(track.index_at(mid), Some(i));
        }
    }

    #[test]
    fn index_at_sentinel() {
        let track = AxisTrack::new(Axis::Col, 3, 100.0);
        assert_eq!(track.index_at(-1.0), None);
        assert_eq!(track.index_at(300.0), None);
        assert_eq!(track.index_at(299.9), Some(2));
        assert_eq!(track.index_at_clamped(1000.0), 2);
    }

    /// Linear-walk reference used to cross-check the binary search.
    fn linear_index_at(offset: f32, sizes: &[f32]) -> Option<u32> {
        if offset < 0.0 {
            return None;
        }
        let mut upper = 0.0f32;
        for (i, size) in sizes.iter().enumerate() {
            upper += size;
            if offset < upper {
                return Some(i as u32);
            }
        }
        None
    }

    #[test]
    fn linear_walk_matches_binary_search() {
        let mut track = AxisTrack::new(Axis::Row, 8, 25.0);
        track.set_size(3, 60.0).unwrap();
        let sizes: Vec<f32> = (0..8).map(|i| track.size(i)).collect();
        for offset in [0.0, 12.0, 25.0, 80.0, 134.9, 199.0, 234.9, 235.0] {
            assert_eq!(
                linear_index_at(offset, &sizes),
                track.index_at(offset),
                "offset {offset}"
            );
        }
    }

    #[test_case(0, "A")]
    #[test_case(1, "B")]
    #[test_case(25, "Z")]
    #[test_case(26, "AA")]
    #[test_case(27, "AB")]
    #[test_case(51, "AZ")]
    #[test_case(52, "BA")]
    #[test_case(701, "ZZ")]
    #[test_case(702, "AAA")]
    fn column_letters(col: u32, expected: &str) {
        assert_eq!(col_to_letter(col), expected);
    }

    #[test]
    fn column_letters_injective_through_zzz() {
        let mut seen = std::collections::HashSet::new();
        for col in 0..18278 {
            assert!(seen.insert(col_to_letter(col)), "collision at {col}");
        }
    }
}
