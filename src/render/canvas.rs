//! Canvas 2D renderer for the grid.
//!
//! Two instances back the component: the base canvas (grid lines and
//! cell text) and the overlay canvas (selection, headers, resize
//! guide). Splitting the layers keeps pointer-move repaints cheap:
//! drag gestures redraw only the overlay.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{GridError, Result};
use crate::render::headers::{render_column_headers, render_corner, render_row_headers};
use crate::render::selection::{header_highlights, selection_rects};
use crate::render::{RenderParams, ResizeGuide};
use crate::types::SelectionKind;

const CELL_FONT: &str = "13px -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
const CELL_PADDING: f64 = 4.0;

/// One Canvas 2D drawing surface.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    dpr: f32,
}

impl CanvasRenderer {
    /// Wrap a canvas element, acquiring its 2D context.
    ///
    /// # Errors
    /// Returns [`GridError::Canvas`] when no 2D context is available -
    /// a fatal condition, the component cannot render.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| GridError::Canvas("failed to get 2d context".into()))?
            .ok_or_else(|| GridError::Canvas("no 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::Canvas("not a CanvasRenderingContext2d".into()))?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            dpr: 1.0,
        })
    }

    /// Resize the backing buffer to physical pixels and rescale the
    /// context so all drawing stays in logical coordinates.
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        self.width = physical_width;
        self.height = physical_height;
        self.dpr = dpr;
        self.canvas.set_width(physical_width);
        self.canvas.set_height(physical_height);
        let _ = self.ctx.scale(f64::from(dpr), f64::from(dpr));
    }

    /// Current buffer width in physical pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current buffer height in physical pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn clear(&self, viewport_w: f64, viewport_h: f64) {
        self.ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    }

    /// Render the base layer: grid lines and cell text inside the
    /// visible range. Cells outside the range are never touched.
    pub fn render_base(&self, params: &RenderParams) {
        let vp = params.viewport;
        let width = f64::from(vp.width);
        let height = f64::from(vp.height);
        self.clear(width, height);

        let (start_row, end_row) = vp.visible_rows(params.rows);
        let (start_col, end_col) = vp.visible_cols(params.cols);
        let band_x = f64::from(params.cols.size(0));
        let band_y = f64::from(params.rows.size(0));

        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(band_x, band_y, width - band_x, height - band_y);
        self.ctx.clip();

        self.draw_grid_lines(params, (start_row, end_row), (start_col, end_col));
        self.draw_cell_contents(params, (start_row, end_row), (start_col, end_col));

        self.ctx.restore();
    }

    fn draw_grid_lines(
        &self,
        params: &RenderParams,
        (start_row, end_row): (u32, u32),
        (start_col, end_col): (u32, u32),
    ) {
        let vp = params.viewport;
        let width = f64::from(vp.width);
        let height = f64::from(vp.height);

        self.ctx.set_stroke_style_str(&params.theme.grid_line);
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();

        for col in start_col..=end_col.saturating_add(1) {
            let x = f64::from(params.cols.position(col) - vp.scroll_x).floor() + 0.5;
            self.ctx.move_to(x, 0.0);
            self.ctx.line_to(x, height);
        }
        for row in start_row..=end_row.saturating_add(1) {
            let y = f64::from(params.rows.position(row) - vp.scroll_y).floor() + 0.5;
            self.ctx.move_to(0.0, y);
            self.ctx.line_to(width, y);
        }
        self.ctx.stroke();
    }

    fn draw_cell_contents(
        &self,
        params: &RenderParams,
        (start_row, end_row): (u32, u32),
        (start_col, end_col): (u32, u32),
    ) {
        let vp = params.viewport;

        self.ctx.set_font(CELL_FONT);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&params.theme.cell_text);

        for row in start_row.max(1)..=end_row {
            let y = f64::from(params.rows.position(row) - vp.scroll_y);
            let h = f64::from(params.rows.size(row));
            for col in start_col.max(1)..=end_col {
                let Some(cell) = params.store.get(row, col) else {
                    continue;
                };
                if cell.value.is_empty() {
                    continue;
                }
                let x = f64::from(params.cols.position(col) - vp.scroll_x);
                let w = f64::from(params.cols.size(col));
                let text = cell.value.display();

                // One alignment rule everywhere: numbers right, text left.
                if cell.value.as_number().is_some() {
                    self.ctx.set_text_align("right");
                    let _ = self.ctx.fill_text(&text, x + w - CELL_PADDING, y + h / 2.0);
                } else {
                    self.ctx.set_text_align("left");
                    let _ = self.ctx.fill_text(&text, x + CELL_PADDING, y + h / 2.0);
                }
            }
        }
    }

    /// Render the overlay layer: selection fills, the active range's
    /// accent border, headers (always topmost), and the resize guide.
    pub fn render_overlay(&self, params: &RenderParams) {
        let vp = params.viewport;
        let width = f64::from(vp.width);
        let height = f64::from(vp.height);
        self.clear(width, height);

        let band_x = f64::from(params.cols.size(0));
        let band_y = f64::from(params.rows.size(0));

        // Selection fills, clipped to the data region so the frozen
        // header illusion is never broken by fill bleeding.
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(band_x, band_y, width - band_x, height - band_y);
        self.ctx.clip();

        for range in params.ranges {
            if let Some(rect) = selection_rects(range, params.rows, params.cols, vp) {
                self.ctx.set_fill_style_str(&params.theme.selection_fill);
                self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
            }
        }
        if let Some(active) = params.active.as_ref() {
            if let Some(rect) = selection_rects(active, params.rows, params.cols, vp) {
                self.ctx.set_fill_style_str(&params.theme.selection_fill);
                self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
                // Accent border above the fill
                self.ctx.set_stroke_style_str(&params.theme.selection_border);
                self.ctx.set_line_width(2.0);
                self.ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
            }
        }

        self.ctx.restore();

        // Headers above selection, corner above headers.
        let highlights =
            header_highlights(params.active.as_ref(), params.ranges, params.rows, params.cols, vp);
        render_column_headers(&self.ctx, params.rows, params.cols, vp, params.theme, &highlights);
        render_row_headers(&self.ctx, params.rows, params.cols, vp, params.theme, &highlights);
        let all_selected = params
            .active
            .as_ref()
            .is_some_and(|a| a.kind == SelectionKind::All);
        render_corner(&self.ctx, params.rows, params.cols, params.theme, all_selected);

        if let Some(guide) = params.resize_guide {
            self.draw_resize_guide(guide, params, width, height);
        }
    }

    /// Dashed preview line for an in-progress resize gesture. Lives on
    /// the overlay so every pointer-move redraw stays cheap.
    fn draw_resize_guide(&self, guide: ResizeGuide, params: &RenderParams, width: f64, height: f64) {
        let dashes = js_sys::Array::of2(&4.0.into(), &4.0.into());
        let _ = self.ctx.set_line_dash(&dashes);
        self.ctx.set_stroke_style_str(&params.theme.resize_guide);
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        match guide {
            ResizeGuide::Vertical(x) => {
                let x = f64::from(x);
                self.ctx.move_to(x, 0.0);
                self.ctx.line_to(x, height);
            }
            ResizeGuide::Horizontal(y) => {
                let y = f64::from(y);
                self.ctx.move_to(0.0, y);
                self.ctx.line_to(width, y);
            }
        }
        self.ctx.stroke();
        let _ = self.ctx.set_line_dash(&js_sys::Array::new());
    }
}
