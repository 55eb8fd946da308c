//! Viewport state: scroll offsets and visible-range computation.
//!
//! The scroll offsets mirror the surrounding scroll container; the
//! renderer reads them but never writes them directly.

use super::AxisTrack;

/// The currently visible pixel window into virtual grid space.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Horizontal scroll position in virtual coordinates.
    pub scroll_x: f32,
    /// Vertical scroll position in virtual coordinates.
    pub scroll_y: f32,
    /// Viewport width in logical pixels.
    pub width: f32,
    /// Viewport height in logical pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a viewport with default dimensions and no scroll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    /// Visible row range (inclusive) for the current scroll position.
    ///
    /// The first index includes the row partially visible at the top
    /// edge; the last includes the row partially visible at the bottom
    /// edge. Every on-screen pixel maps to an index inside the range.
    #[must_use]
    pub fn visible_rows(&self, rows: &AxisTrack) -> (u32, u32) {
        visible_range(rows, self.scroll_y, self.height)
    }

    /// Visible column range (inclusive), mirror of [`visible_rows`].
    ///
    /// [`visible_rows`]: Viewport::visible_rows
    #[must_use]
    pub fn visible_cols(&self, cols: &AxisTrack) -> (u32, u32) {
        visible_range(cols, self.scroll_x, self.width)
    }

    /// Convert virtual coordinates to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.scroll_x, y - self.scroll_y)
    }

    /// Convert screen coordinates to virtual coordinates.
    #[must_use]
    pub fn to_virtual(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (screen_x + self.scroll_x, screen_y + self.scroll_y)
    }

    /// Clamp scroll offsets so the viewport stays inside the grid.
    pub fn clamp_scroll(&mut self, rows: &AxisTrack, cols: &AxisTrack) {
        let max_x = (cols.total_extent() - self.width).max(0.0);
        let max_y = (rows.total_extent() - self.height).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_x);
        self.scroll_y = self.scroll_y.clamp(0.0, max_y);
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

/// Inclusive track range covering `[scroll, scroll + extent)`.
fn visible_range(track: &AxisTrack, scroll: f32, extent: f32) -> (u32, u32) {
    let last = track.last_index();
    let start = track.index_at(scroll).unwrap_or(last);
    let end = track
        .index_at(scroll + extent.max(0.0))
        .unwrap_or(last);
    (start.min(last), end.min(last))
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
    use crate::layout::Axis;

    fn tracks() -> (AxisTrack, AxisTrack) {
        (
            AxisTrack::new(Axis::Row, 100, 25.0),
            AxisTrack::new(Axis::Col, 50, 100.0),
        )
    }

    #[test]
    fn visible_range_at_origin() {
        let (rows, cols) = tracks();
        let vp = Viewport {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(vp.visible_rows(&rows), (0, 24));
        assert_eq!(vp.visible_cols(&cols), (0, 8));
    }

    #[test]
    fn visible_range_includes_partial_edges() {
        let (rows, cols) = tracks();
        let vp = Viewport {
            scroll_x: 50.0,
            scroll_y: 10.0,
            width: 800.0,
            height: 600.0,
        };
        // Row 0 is partially visible at the top; row at 610px partially
        // visible at the bottom.
        assert_eq!(vp.visible_rows(&rows), (0, 24));
        assert_eq!(vp.visible_cols(&cols), (0, 8));
    }

    #[test]
    fn visible_range_clamps_past_extent() {
        let (rows, cols) = tracks();
        let vp = Viewport {
            scroll_x: 4900.0,
            scroll_y: 2400.0,
            width: 800.0,
            height: 600.0,
        };
        let (rs, re) = vp.visible_rows(&rows);
        let (cs, ce) = vp.visible_cols(&cols);
        assert_eq!(re, 99);
        assert_eq!(ce, 49);
        assert!(rs <= re && cs <= ce);
    }

    #[test]
    fn containment_every_pixel_resolves_within_range() {
        let (rows, _) = tracks();
        let vp = Viewport {
            scroll_x: 0.0,
            scroll_y: 333.0,
            width: 800.0,
            height: 600.0,
        };
        let (start, end) = vp.visible_rows(&rows);
        let mut y = 0.0f32;
        while y < vp.height {
            if let Some(row) = rows.index_at(vp.scroll_y + y) {
                assert!(row >= start && row <= end, "row {row} at y {y}");
            }
            y += 7.3;
        }
    }

    #[test]
    fn clamp_scroll_limits() {
        let (rows, cols) = tracks();
        let mut vp = Viewport {
            scroll_x: 1e9,
            scroll_y: -50.0,
            width: 800.0,
            height: 600.0,
        };
        vp.clamp_scroll(&rows, &cols);
        assert_eq!(vp.scroll_x, cols.total_extent() - 800.0);
        assert_eq!(vp.scroll_y, 0.0);
    }
}
