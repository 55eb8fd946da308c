//! Canvas 2D rendering: base layer (grid lines, cell text) and overlay
//! layer (selection, headers, resize guide).
//!
//! Pure geometry lives in [`selection`] so selection math stays
//! testable without a canvas.

pub mod canvas;
pub mod headers;
pub mod selection;

pub use canvas::CanvasRenderer;
pub use selection::{header_highlights, selection_rects, HeaderHighlights, SelectionRect};

use crate::layout::{AxisTrack, Viewport};
use crate::types::{CellStore, SelectionRange};

/// Color palette for the grid surface and headers.
#[derive(Debug, Clone)]
pub struct GridTheme {
    /// Grid line color.
    pub grid_line: String,
    /// Cell text color.
    pub cell_text: String,
    /// Header background.
    pub header_bg: String,
    /// Header label color.
    pub header_text: String,
    /// Header border color.
    pub header_border: String,
    /// Header background when spanned by a selection.
    pub header_spanned_bg: String,
    /// Header background when the selection originated on the header.
    pub header_active_bg: String,
    /// Header label color for header-origin selections.
    pub header_active_text: String,
    /// Light fill for selected cell interiors.
    pub selection_fill: String,
    /// Accent border around the active range.
    pub selection_border: String,
    /// Dashed resize preview guide.
    pub resize_guide: String,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            grid_line: "#D9D9D9".to_string(),
            cell_text: "#202124".to_string(),
            header_bg: "#F3F3F3".to_string(),
            header_text: "#595959".to_string(),
            header_border: "#CCCCCC".to_string(),
            header_spanned_bg: "#CFD8E8".to_string(),
            header_active_bg: "#A8C7FA".to_string(),
            header_active_text: "#1A73E8".to_string(),
            selection_fill: "rgba(26, 115, 232, 0.12)".to_string(),
            selection_border: "#1A73E8".to_string(),
            resize_guide: "#80868B".to_string(),
        }
    }
}

/// In-progress resize preview: one dashed guide line on the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeGuide {
    /// Vertical guide at the given screen x (column resize).
    Vertical(f32),
    /// Horizontal guide at the given screen y (row resize).
    Horizontal(f32),
}

/// Everything a render pass needs, borrowed from shared state.
pub struct RenderParams<'a> {
    /// Sparse cell contents.
    pub store: &'a CellStore,
    /// Row heights.
    pub rows: &'a AxisTrack,
    /// Column widths.
    pub cols: &'a AxisTrack,
    /// Scroll offsets and viewport extents.
    pub viewport: &'a Viewport,
    /// The active (in-progress or last committed) range.
    pub active: Option<SelectionRange>,
    /// Committed additional ranges.
    pub ranges: &'a [SelectionRange],
    /// Color palette.
    pub theme: &'a GridTheme,
    /// Resize preview guide, if a resize gesture is live.
    pub resize_guide: Option<ResizeGuide>,
}
