//! Scroll state management and the drag-autoscroll timer.
//!
//! The pure helpers here own all scroll arithmetic so they stay
//! testable off the browser; the interval timer that nudges the
//! viewport while a cell drag hovers near an edge is wasm-only.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState};
use super::ViewerState;

/// Distance from a viewport edge at which drag-autoscroll engages.
pub(crate) const AUTOSCROLL_EDGE: f32 = 24.0;
/// Scroll applied per autoscroll tick, in logical pixels.
pub(crate) const AUTOSCROLL_STEP: f32 = 16.0;
/// Autoscroll tick interval.
#[cfg(target_arch = "wasm32")]
const AUTOSCROLL_INTERVAL_MS: i32 = 50;

/// Apply a scroll delta, clamped to the content extent. Returns true
/// when the offset actually moved.
pub(crate) fn apply_scroll(state: &mut ViewerState, dx: f32, dy: f32) -> bool {
    let ViewerState { data, viewport, .. } = state;
    let old_x = viewport.scroll_x;
    let old_y = viewport.scroll_y;
    viewport.scroll_x += dx;
    viewport.scroll_y += dy;
    viewport.clamp_scroll(&data.rows, &data.cols);
    (viewport.scroll_x - old_x).abs() > f32::EPSILON
        || (viewport.scroll_y - old_y).abs() > f32::EPSILON
}

/// Scroll the minimum distance that brings a cell fully into the data
/// region (the area not covered by the pinned header bands). Returns
/// true when the offset moved.
pub(crate) fn ensure_cell_visible(state: &mut ViewerState, row: u32, col: u32) -> bool {
    let ViewerState { data, viewport, .. } = state;
    let band_x = data.cols.size(0);
    let band_y = data.rows.size(0);
    let old_x = viewport.scroll_x;
    let old_y = viewport.scroll_y;

    let left = data.cols.position(col);
    let right = left + data.cols.size(col);
    if left - viewport.scroll_x < band_x {
        viewport.scroll_x = (left - band_x).max(0.0);
    } else if right - viewport.scroll_x > viewport.width {
        viewport.scroll_x = right - viewport.width;
    }

    let top = data.rows.position(row);
    let bottom = top + data.rows.size(row);
    if top - viewport.scroll_y < band_y {
        viewport.scroll_y = (top - band_y).max(0.0);
    } else if bottom - viewport.scroll_y > viewport.height {
        viewport.scroll_y = bottom - viewport.height;
    }

    viewport.clamp_scroll(&data.rows, &data.cols);
    (viewport.scroll_x - old_x).abs() > f32::EPSILON
        || (viewport.scroll_y - old_y).abs() > f32::EPSILON
}

/// Per-tick scroll delta for a pointer position during a cell drag.
/// Zero on both axes when the pointer sits comfortably inside the
/// data region.
pub(crate) fn autoscroll_delta(state: &ViewerState, x: f32, y: f32) -> (f32, f32) {
    let band_x = state.data.cols.size(0);
    let band_y = state.data.rows.size(0);
    let vp = &state.viewport;

    let dx = if x < band_x + AUTOSCROLL_EDGE {
        -AUTOSCROLL_STEP
    } else if x > vp.width - AUTOSCROLL_EDGE {
        AUTOSCROLL_STEP
    } else {
        0.0
    };
    let dy = if y < band_y + AUTOSCROLL_EDGE {
        -AUTOSCROLL_STEP
    } else if y > vp.height - AUTOSCROLL_EDGE {
        AUTOSCROLL_STEP
    } else {
        0.0
    };
    (dx, dy)
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Start the autoscroll interval if it is not already running.
    /// Each tick nudges the viewport toward the last pointer position
    /// and replays that position through the dispatcher so the drag
    /// selection keeps growing.
    pub(crate) fn start_autoscroll(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        if s.autoscroll_timer.is_some() {
            return;
        }
        if s.autoscroll_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    GridView::autoscroll_tick(&state);
                }
            }) as Box<dyn FnMut()>);
            s.autoscroll_closure = Some(closure);
        }
        let Some(callback) = s.autoscroll_closure.as_ref() else {
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            AUTOSCROLL_INTERVAL_MS,
        ) {
            Ok(id) => s.autoscroll_timer = Some(id),
            Err(_) => s.autoscroll_timer = None,
        }
    }

    /// Clear the autoscroll interval. Always safe to call; does
    /// nothing when no timer is live.
    pub(crate) fn stop_autoscroll(s: &mut SharedState) {
        if let Some(timer_id) = s.autoscroll_timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(timer_id);
            }
        }
    }

    fn autoscroll_tick(state: &Rc<RefCell<SharedState>>) {
        let repaint = {
            let mut s = state.borrow_mut();
            let Some(input) = s.last_pointer else {
                Self::stop_autoscroll(&mut s);
                return;
            };
            let (dx, dy) = autoscroll_delta(&s.view, input.x, input.y);
            if dx.abs() < f32::EPSILON && dy.abs() < f32::EPSILON {
                return;
            }
            if !apply_scroll(&mut s.view, dx, dy) {
                // Hit the content edge; nothing left to scroll toward.
                return;
            }
            let SharedState {
                view, dispatcher, ..
            } = &mut *s;
            dispatcher.pointer_move(view, &input);
            s.needs_base = true;
            s.needs_overlay = true;
            true
        };
        if repaint {
            Self::schedule_render(state);
            Self::publish_selection(state);
        }
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

    fn state() -> ViewerState {
        let mut s = ViewerState::new(101, 51, 24.0, 80.0, 48.0);
        s.viewport.resize(800.0, 600.0);
        s
    }

    #[test]
    fn scroll_clamps_to_content_extent() {
        let mut s = state();
        assert!(apply_scroll(&mut s, 100.0, 50.0));
        assert_eq!(s.viewport.scroll_x, 100.0);
        assert_eq!(s.viewport.scroll_y, 50.0);

        // Way past the end clamps to extent minus viewport.
        apply_scroll(&mut s, 1.0e6, 1.0e6);
        let max_x = s.data.cols.total_extent() - 800.0;
        let max_y = s.data.rows.total_extent() - 600.0;
        assert_eq!(s.viewport.scroll_x, max_x);
        assert_eq!(s.viewport.scroll_y, max_y);

        // And back before the origin clamps to zero.
        apply_scroll(&mut s, -1.0e6, -1.0e6);
        assert_eq!(s.viewport.scroll_x, 0.0);
        assert_eq!(s.viewport.scroll_y, 0.0);
    }

    #[test]
    fn scroll_to_same_position_reports_no_change() {
        let mut s = state();
        assert!(!apply_scroll(&mut s, -10.0, -10.0));
        assert!(!apply_scroll(&mut s, 0.0, 0.0));
    }

    #[test]
    fn ensure_visible_scrolls_forward_to_far_cell() {
        let mut s = state();
        // Col 30 ends at 48 + 30*80 = 2448, far past the 800px viewport.
        assert!(ensure_cell_visible(&mut s, 1, 30));
        let right = s.data.cols.position(30) + s.data.cols.size(30);
        assert_eq!(s.viewport.scroll_x, right - 800.0);
        // The cell's right edge now sits exactly at the viewport edge.
        assert!(!ensure_cell_visible(&mut s, 1, 30));
    }

    #[test]
    fn ensure_visible_scrolls_back_under_header_band() {
        let mut s = state();
        apply_scroll(&mut s, 500.0, 0.0);
        // Col 2 starts at 128, now hidden behind the pinned header.
        assert!(ensure_cell_visible(&mut s, 1, 2));
        // Its left edge lands just after the 48px header column.
        assert_eq!(s.viewport.scroll_x, 128.0 - 48.0);
    }

    #[test]
    fn autoscroll_delta_fires_only_near_edges() {
        let mut s = state();
        apply_scroll(&mut s, 100.0, 100.0);
        assert_eq!(autoscroll_delta(&s, 400.0, 300.0), (0.0, 0.0));
        assert_eq!(
            autoscroll_delta(&s, 50.0, 300.0),
            (-AUTOSCROLL_STEP, 0.0)
        );
        assert_eq!(autoscroll_delta(&s, 790.0, 595.0), (AUTOSCROLL_STEP, AUTOSCROLL_STEP));
        assert_eq!(autoscroll_delta(&s, 400.0, 30.0), (0.0, -AUTOSCROLL_STEP));
    }
}
