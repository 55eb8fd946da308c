//! Header band rendering.
//!
//! Headers are row 0 and column 0 of the ordinary tracks. The column
//! header band is pinned vertically (it translates only with
//! horizontal scroll); the row header band is the mirror. The corner
//! cell is fixed at the origin and always drawn last so the frozen
//! effect survives any selection fill underneath.

use web_sys::CanvasRenderingContext2d;

use crate::layout::{col_to_letter, AxisTrack, Viewport};
use crate::render::selection::HeaderHighlights;
use crate::render::GridTheme;

const HEADER_FONT: &str = "500 11px -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

/// Render the column header band (row 0): letters A, B, C, ...
pub fn render_column_headers(
    ctx: &CanvasRenderingContext2d,
    rows: &AxisTrack,
    cols: &AxisTrack,
    viewport: &Viewport,
    theme: &GridTheme,
    highlights: &HeaderHighlights,
) {
    let band_h = f64::from(rows.size(0));
    let band_x = f64::from(cols.size(0));
    if band_h <= 0.0 {
        return;
    }
    let width = f64::from(viewport.width);

    ctx.save();
    ctx.begin_path();
    ctx.rect(band_x, 0.0, width - band_x, band_h);
    ctx.clip();

    ctx.set_fill_style_str(&theme.header_bg);
    ctx.fill_rect(band_x, 0.0, width - band_x, band_h);

    ctx.set_font(HEADER_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let (start_col, end_col) = viewport.visible_cols(cols);
    for col in start_col.max(1)..=end_col {
        let x = f64::from(cols.position(col) - viewport.scroll_x);
        let w = f64::from(cols.size(col));
        if w <= 0.0 || x + w < band_x {
            continue;
        }
        if x > width {
            break;
        }

        let strong = highlights.strong_cols.contains(&col);
        let spanned = highlights.spanned_cols.contains(&col);
        if strong {
            ctx.set_fill_style_str(&theme.header_active_bg);
            ctx.fill_rect(x, 0.0, w, band_h);
        } else if spanned {
            ctx.set_fill_style_str(&theme.header_spanned_bg);
            ctx.fill_rect(x, 0.0, w, band_h);
        }

        // Cell separator
        ctx.set_stroke_style_str(&theme.header_border);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x + w - 0.5, 0.0);
        ctx.line_to(x + w - 0.5, band_h);
        ctx.stroke();

        let text_color = if strong {
            &theme.header_active_text
        } else {
            &theme.header_text
        };
        ctx.set_fill_style_str(text_color);
        if w >= 20.0 {
            let _ = ctx.fill_text(&col_to_letter(col - 1), x + w / 2.0, band_h / 2.0);
        }
    }

    ctx.restore();

    // Bottom border of the band, full width
    ctx.set_stroke_style_str(&theme.header_border);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(band_x, band_h - 0.5);
    ctx.line_to(width, band_h - 0.5);
    ctx.stroke();
}

/// Render the row header band (column 0): numbers 1, 2, 3, ...
pub fn render_row_headers(
    ctx: &CanvasRenderingContext2d,
    rows: &AxisTrack,
    cols: &AxisTrack,
    viewport: &Viewport,
    theme: &GridTheme,
    highlights: &HeaderHighlights,
) {
    let band_w = f64::from(cols.size(0));
    let band_y = f64::from(rows.size(0));
    if band_w <= 0.0 {
        return;
    }
    let height = f64::from(viewport.height);

    ctx.save();
    ctx.begin_path();
    ctx.rect(0.0, band_y, band_w, height - band_y);
    ctx.clip();

    ctx.set_fill_style_str(&theme.header_bg);
    ctx.fill_rect(0.0, band_y, band_w, height - band_y);

    ctx.set_font(HEADER_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let (start_row, end_row) = viewport.visible_rows(rows);
    for row in start_row.max(1)..=end_row {
        let y = f64::from(rows.position(row) - viewport.scroll_y);
        let h = f64::from(rows.size(row));
        if h <= 0.0 || y + h < band_y {
            continue;
        }
        if y > height {
            break;
        }

        let strong = highlights.strong_rows.contains(&row);
        let spanned = highlights.spanned_rows.contains(&row);
        if strong {
            ctx.set_fill_style_str(&theme.header_active_bg);
            ctx.fill_rect(0.0, y, band_w, h);
        } else if spanned {
            ctx.set_fill_style_str(&theme.header_spanned_bg);
            ctx.fill_rect(0.0, y, band_w, h);
        }

        ctx.set_stroke_style_str(&theme.header_border);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(0.0, y + h - 0.5);
        ctx.line_to(band_w, y + h - 0.5);
        ctx.stroke();

        let text_color = if strong {
            &theme.header_active_text
        } else {
            &theme.header_text
        };
        ctx.set_fill_style_str(text_color);
        if h >= 12.0 {
            let _ = ctx.fill_text(&row.to_string(), band_w / 2.0, y + h / 2.0);
        }
    }

    ctx.restore();

    // Right border of the band, full height
    ctx.set_stroke_style_str(&theme.header_border);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(band_w - 0.5, band_y);
    ctx.line_to(band_w - 0.5, height);
    ctx.stroke();
}

/// Render the corner cell at (0, 0), fixed on both axes, topmost.
pub fn render_corner(
    ctx: &CanvasRenderingContext2d,
    rows: &AxisTrack,
    cols: &AxisTrack,
    theme: &GridTheme,
    all_selected: bool,
) {
    let w = f64::from(cols.size(0));
    let h = f64::from(rows.size(0));
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    let bg = if all_selected {
        &theme.header_active_bg
    } else {
        &theme.header_bg
    };
    ctx.set_fill_style_str(bg);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Select-all affordance: small triangle in the bottom-right corner
    if !all_selected {
        ctx.set_fill_style_str(&theme.resize_guide);
        ctx.begin_path();
        let tri = 6.0;
        let margin = 4.0;
        ctx.move_to(w - margin, h - margin - tri);
        ctx.line_to(w - margin, h - margin);
        ctx.line_to(w - margin - tri, h - margin);
        ctx.close_path();
        ctx.fill();
    }

    ctx.set_stroke_style_str(&theme.header_border);
    ctx.set_line_width(1.0);

    ctx.begin_path();
    ctx.move_to(w - 0.5, 0.0);
    ctx.line_to(w - 0.5, h);
    ctx.stroke();

    ctx.begin_path();
    ctx.move_to(0.0, h - 0.5);
    ctx.line_to(w, h - 0.5);
    ctx.stroke();
}
