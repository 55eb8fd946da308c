//! Selection geometry helpers.
//!
//! These keep selection math testable without depending on Canvas
//! APIs: rectangle projection into screen space and header highlight
//! classification.

use std::collections::HashSet;

use crate::layout::AxisTrack;
use crate::layout::Viewport;
use crate::types::{SelectionKind, SelectionRange};

/// A selection rectangle in screen coordinates, restricted to the data
/// area (header row/col 0 excluded - headers get their own highlight).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Project a range's data-area portion into screen space.
///
/// Returns `None` for ranges without any data-area cells or that
/// collapse to zero size. Callers clip against the header bands when
/// painting; this only handles the virtual-to-screen transform.
#[must_use]
pub fn selection_rects(
    range: &SelectionRange,
    rows: &AxisTrack,
    cols: &AxisTrack,
    viewport: &Viewport,
) -> Option<SelectionRect> {
    let (r0, c0, r1, c1) = range.bounds();
    // Headers are row/col 0; the fill covers data cells only.
    let r0 = r0.max(1);
    let c0 = c0.max(1);
    if r1 < r0 || c1 < c0 {
        return None;
    }

    let x1 = cols.position(c0);
    let y1 = rows.position(r0);
    let x2 = cols.position(c1.saturating_add(1));
    let y2 = rows.position(r1.saturating_add(1));

    let (sx1, sy1) = viewport.to_screen(x1, y1);
    let (sx2, sy2) = viewport.to_screen(x2, y2);
    let w = sx2 - sx1;
    let h = sy2 - sy1;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }

    Some(SelectionRect {
        x: f64::from(sx1),
        y: f64::from(sy1),
        w: f64::from(w),
        h: f64::from(h),
    })
}

/// Header indices touched by the current selection, per axis.
///
/// `spanned` headers sit inside some selected rectangle; `strong`
/// headers belong to a selection that originated on that header (row
/// selection for rows, column selection for columns, corner for both)
/// and get the inverted highlight.
#[derive(Debug, Default)]
pub struct HeaderHighlights {
    pub spanned_rows: HashSet<u32>,
    pub strong_rows: HashSet<u32>,
    pub spanned_cols: HashSet<u32>,
    pub strong_cols: HashSet<u32>,
}

/// Classify header highlights for the active range plus the set.
///
/// Only indices inside the viewport's visible range are classified:
/// offscreen headers are never painted, so a full-column selection on
/// a million-row grid touches a few dozen row entries, not a million.
#[must_use]
pub fn header_highlights(
    active: Option<&SelectionRange>,
    ranges: &[SelectionRange],
    rows: &AxisTrack,
    cols: &AxisTrack,
    viewport: &Viewport,
) -> HeaderHighlights {
    let (vis_r0, vis_r1) = viewport.visible_rows(rows);
    let (vis_c0, vis_c1) = viewport.visible_cols(cols);
    let mut hl = HeaderHighlights::default();
    for range in active.into_iter().chain(ranges.iter()) {
        let (r0, c0, r1, c1) = range.bounds();
        let strong_rows = matches!(range.kind, SelectionKind::Row | SelectionKind::All);
        let strong_cols = matches!(range.kind, SelectionKind::Column | SelectionKind::All);
        for row in r0.max(1).max(vis_r0)..=r1.min(vis_r1) {
            hl.spanned_rows.insert(row);
            if strong_rows {
                hl.strong_rows.insert(row);
            }
        }
        for col in c0.max(1).max(vis_c0)..=c1.min(vis_c1) {
            hl.spanned_cols.insert(col);
            if strong_cols {
                hl.strong_cols.insert(col);
            }
        }
    }
    hl
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
            AxisTrack::new(Axis::Row, 20, 25.0),
            AxisTrack::new(Axis::Col, 20, 100.0),
        )
    }

    #[test]
    fn rect_accounts_for_scroll() {
        let (rows, cols) = tracks();
        let vp = Viewport {
            scroll_x: 50.0,
            scroll_y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let sel = SelectionRange::cells(2, 3, 4, 5);
        let rect = selection_rects(&sel, &rows, &cols, &vp).unwrap();
        assert_eq!(rect.x, f64::from(cols.position(3) - 50.0));
        assert_eq!(rect.y, f64::from(rows.position(2) - 20.0));
        assert_eq!(rect.w, f64::from(cols.position(6) - cols.position(3)));
        assert_eq!(rect.h, f64::from(rows.position(5) - rows.position(2)));
    }

    #[test]
    fn rect_clips_header_indices() {
        let (rows, cols) = tracks();
        let vp = Viewport::new();
        // Row selection spans col 0; fill starts at col 1
        let sel = SelectionRange::row(3, 19);
        let rect = selection_rects(&sel, &rows, &cols, &vp).unwrap();
        assert_eq!(rect.x, f64::from(cols.position(1)));
    }

    #[test]
    fn header_only_range_has_no_fill() {
        let (rows, cols) = tracks();
        let vp = Viewport::new();
        let sel = SelectionRange::cells(0, 0, 0, 5);
        assert!(selection_rects(&sel, &rows, &cols, &vp).is_none());
    }

    /// A viewport wide enough to see all 20x20 tracks at once.
    fn full_viewport() -> Viewport {
        Viewport {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 2000.0,
            height: 500.0,
        }
    }

    #[test]
    fn strong_highlight_follows_gesture_origin() {
        let (rows, cols) = tracks();
        let active = SelectionRange::column(4, 19);
        let committed = [SelectionRange::cells(2, 2, 3, 3)];
        let hl = header_highlights(Some(&active), &committed, &rows, &cols, &full_viewport());

        // Column-origin selection: strong column highlight
        assert!(hl.strong_cols.contains(&4));
        assert!(hl.spanned_cols.contains(&4));
        // Cell-origin selection spans headers without strength
        assert!(hl.spanned_cols.contains(&2));
        assert!(!hl.strong_cols.contains(&2));
        assert!(hl.spanned_rows.contains(&3));
        assert!(hl.strong_rows.is_empty());
    }

    #[test]
    fn corner_selection_is_strong_on_both_axes() {
        let (rows, cols) = tracks();
        let active = SelectionRange::all(19, 19);
        let hl = header_highlights(Some(&active), &[], &rows, &cols, &full_viewport());
        assert_eq!(hl.strong_rows.len(), 19);
        assert_eq!(hl.strong_cols.len(), 19);
    }

    #[test]
    fn highlights_are_bounded_by_the_viewport() {
        // Full-column selection on a million-row grid: the classified
        // entries cover the visible rows only.
        let rows = AxisTrack::new(Axis::Row, 1_000_000, 25.0);
        let cols = AxisTrack::new(Axis::Col, 50, 100.0);
        let vp = Viewport {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
        let active = SelectionRange::column(3, 999_999);
        let hl = header_highlights(Some(&active), &[], &rows, &cols, &vp);

        let (vis_r0, vis_r1) = vp.visible_rows(&rows);
        let visible = (vis_r1 - vis_r0.max(1) + 1) as usize;
        assert_eq!(hl.spanned_rows.len(), visible);
        assert!(hl.strong_cols.contains(&3));
        assert!(hl.spanned_rows.iter().all(|r| *r >= 1 && *r <= vis_r1));
    }

    #[test]
    fn highlights_track_the_scroll_window() {
        let rows = AxisTrack::new(Axis::Row, 1_000_000, 25.0);
        let cols = AxisTrack::new(Axis::Col, 50, 100.0);
        let vp = Viewport {
            scroll_x: 0.0,
            scroll_y: 250_000.0,
            width: 800.0,
            height: 600.0,
        };
        let (vis_r0, vis_r1) = vp.visible_rows(&rows);
        let active = SelectionRange::all(999_999, 49);
        let hl = header_highlights(Some(&active), &[], &rows, &cols, &vp);

        assert!(hl.strong_rows.contains(&vis_r0));
        assert!(hl.strong_rows.contains(&vis_r1));
        assert!(!hl.strong_rows.contains(&(vis_r1 + 1)));
        assert!(!hl.strong_rows.contains(&1));
        assert_eq!(hl.strong_rows.len(), (vis_r1 - vis_r0 + 1) as usize);
    }
}
