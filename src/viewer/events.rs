//! Browser event wiring for `GridView` (wasm32 only).
//!
//! Pointer-down/up, keys and wheel act immediately and broadcast any
//! selection change in the same event tick; pointer-move is coalesced
//! so only the latest position is dispatched, once per animation
//! frame, broadcasting from inside that frame. Repainting always
//! defers to the animation frame. The host page must give the overlay
//! canvas a `tabindex` for keyboard events to arrive.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

#[cfg(target_arch = "wasm32")]
use super::handlers::{data_cell_at, PointerInput};
#[cfg(target_arch = "wasm32")]
use super::{keyboard, scroll, GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::editor;
#[cfg(target_arch = "wasm32")]
use crate::types::SelectionRange;

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation)]
fn wheel_deltas(event: &WheelEvent) -> (f32, f32) {
    (event.delta_x() as f32, event.delta_y() as f32)
}

#[cfg(target_arch = "wasm32")]
fn pointer_input(event: &MouseEvent) -> PointerInput {
    PointerInput {
        x: event.offset_x() as f32,
        y: event.offset_y() as f32,
        shift: event.shift_key(),
        toggle: event.ctrl_key() || event.meta_key(),
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    pub(crate) fn internal_pointer_down(state: &Rc<RefCell<SharedState>>, input: PointerInput) {
        let (changed, autoscroll) = {
            let mut s = state.borrow_mut();
            // Clicking anywhere while the edit overlay is open commits
            // the typed value first.
            if s.view.editing.is_some() {
                let text = s.input_overlay.value().unwrap_or_default();
                if editor::commit_edit(&mut s.view, &text) {
                    s.needs_base = true;
                }
                s.input_overlay.hide();
            }
            let SharedState {
                view, dispatcher, ..
            } = &mut *s;
            let out = dispatcher.pointer_down(view, &input);
            s.last_pointer = Some(input);
            s.pending_move = None;
            if out.repaint_base {
                s.needs_base = true;
            }
            if out.repaint_overlay {
                s.needs_overlay = true;
            }
            (out.selection_changed, out.autoscroll)
        };
        // Broadcast in the same event tick as the mutation; only the
        // repaint defers to the animation frame.
        if changed {
            Self::publish_selection(state);
        }
        Self::schedule_render(state);
        if autoscroll {
            Self::start_autoscroll(state);
        }
    }

    pub(crate) fn internal_pointer_move(state: &Rc<RefCell<SharedState>>, input: PointerInput) {
        let (gesture, cursor) = {
            let mut s = state.borrow_mut();
            s.last_pointer = Some(input);
            if s.dispatcher.gesture_active() {
                // Keep only the newest position; the animation frame
                // dispatches it.
                s.pending_move = Some(input);
                (true, "")
            } else {
                (false, s.dispatcher.cursor(&s.view, &input))
            }
        };
        if gesture {
            Self::schedule_render(state);
        } else {
            Self::set_cursor(state, cursor);
        }
    }

    pub(crate) fn internal_pointer_up(state: &Rc<RefCell<SharedState>>, input: PointerInput) {
        // Flush a coalesced move so the up lands on current state. The
        // flush is a mutation of its own and broadcasts before the up
        // does.
        let flushed = {
            let mut s = state.borrow_mut();
            Self::stop_autoscroll(&mut s);
            match s.pending_move.take() {
                Some(pending) => {
                    let SharedState {
                        view, dispatcher, ..
                    } = &mut *s;
                    let out = dispatcher.pointer_move(view, &pending);
                    if out.repaint_overlay {
                        s.needs_overlay = true;
                    }
                    out.selection_changed
                }
                None => false,
            }
        };
        if flushed {
            Self::publish_selection(state);
        }
        let changed = {
            let mut s = state.borrow_mut();
            let SharedState {
                view, dispatcher, ..
            } = &mut *s;
            let out = dispatcher.pointer_up(view, &input);
            s.last_pointer = None;
            if out.repaint_base {
                s.needs_base = true;
            }
            if out.repaint_overlay {
                s.needs_overlay = true;
            }
            out.selection_changed
        };
        if changed {
            Self::publish_selection(state);
        }
        Self::schedule_render(state);
    }

    fn internal_double_click(state: &Rc<RefCell<SharedState>>, input: PointerInput) {
        let shown = {
            let mut s = state.borrow_mut();
            let (row, col) = data_cell_at(&s.view, input.x, input.y);
            s.view.active = Some(SelectionRange::cells(row, col, row, col));
            s.view.ranges.clear();
            s.needs_overlay = true;
            let seed = editor::begin_edit(&mut s.view, row, col);
            match editor::cell_screen_rect(&s.view, row, col) {
                Some(rect) => {
                    s.input_overlay.show(rect, &seed, None);
                    true
                }
                None => {
                    editor::cancel_edit(&mut s.view);
                    false
                }
            }
        };
        Self::publish_selection(state);
        Self::schedule_render(state);
        let _ = shown;
    }

    fn internal_key_down(state: &Rc<RefCell<SharedState>>, key: &str, shift: bool) -> bool {
        let (handled, changed) = {
            let mut s = state.borrow_mut();
            if s.view.editing.is_some() {
                // The input overlay owns the keyboard while editing.
                return false;
            }
            let out = keyboard::handle_key(&mut s.view, key, shift);
            if out.repaint_base {
                s.needs_base = true;
            }
            if out.repaint_overlay {
                s.needs_overlay = true;
            }
            (
                out.repaint_overlay || out.selection_changed,
                out.selection_changed,
            )
        };
        if changed {
            Self::publish_selection(state);
        }
        if handled {
            Self::schedule_render(state);
        }
        handled
    }

    fn internal_wheel(state: &Rc<RefCell<SharedState>>, dx: f32, dy: f32) {
        let moved = {
            let mut s = state.borrow_mut();
            let moved = scroll::apply_scroll(&mut s.view, dx, dy);
            if moved {
                s.needs_base = true;
                s.needs_overlay = true;
                Self::sync_edit_overlay(&mut s);
            }
            moved
        };
        if moved {
            Self::schedule_render(state);
        }
    }

    fn set_cursor(state: &Rc<RefCell<SharedState>>, cursor: &str) {
        let s = state.borrow();
        if let Some(canvas) = s.overlay_canvas.as_ref() {
            let _ = canvas.style().set_property("cursor", cursor);
        }
    }

    /// Register all DOM event handlers on the overlay canvas. The
    /// returned closures must be kept alive for as long as the view.
    #[allow(clippy::type_complexity)]
    pub(crate) fn register_events(
        canvas: &HtmlCanvasElement,
        state: &Rc<RefCell<SharedState>>,
    ) -> (
        Vec<Closure<dyn FnMut(MouseEvent)>>,
        Option<Closure<dyn FnMut(WheelEvent)>>,
        Option<Closure<dyn FnMut(KeyboardEvent)>>,
    ) {
        let mut mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                GridView::internal_pointer_down(&state, pointer_input(&event));
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            mouse_closures.push(closure);
        }

        {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                GridView::internal_pointer_move(&state, pointer_input(&event));
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            mouse_closures.push(closure);
        }

        {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                GridView::internal_pointer_up(&state, pointer_input(&event));
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            mouse_closures.push(closure);
        }

        {
            // Leaving the surface mid-gesture ends the gesture; the
            // autoscroll timer must never outlive the drag.
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let gesture = state.borrow().dispatcher.gesture_active();
                if gesture {
                    GridView::internal_pointer_up(&state, pointer_input(&event));
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            mouse_closures.push(closure);
        }

        {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                GridView::internal_double_click(&state, pointer_input(&event));
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = canvas
                .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
            mouse_closures.push(closure);
        }

        let wheel_closure = {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                let (dx, dy) = wheel_deltas(&event);
                GridView::internal_wheel(&state, dx, dy);
            }) as Box<dyn FnMut(WheelEvent)>);
            let _ = canvas
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
            Some(closure)
        };

        let key_closure = {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if GridView::internal_key_down(&state, &event.key(), event.shift_key()) {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            let _ = canvas
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            Some(closure)
        };

        (mouse_closures, wheel_closure, key_closure)
    }
}
