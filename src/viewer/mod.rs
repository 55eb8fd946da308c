//! Main `GridView` struct - the primary entry point for the grid component.
//!
//! This module provides the WASM-exported `GridView` struct that handles:
//! - Owning the grid model (tracks, sparse cells, selection, undo stack)
//! - Managing viewport state (scroll, visible range)
//! - Coordinating between layout computation and Canvas 2D rendering
//! - Routing pointer and keyboard input through the handler chain
//!
//! Event handlers are registered against the overlay canvas when the
//! view is created - no manual JavaScript wiring required. Selection
//! observers subscribe explicitly via [`GridView::add_selection_observer`];
//! nothing is broadcast to parties that did not ask.

mod events;
pub mod handlers;
mod keyboard;
mod scroll;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

use crate::commands::{Command, CommandStack, GridData};
use crate::layout::{Axis, AxisTrack, Viewport};
#[cfg(target_arch = "wasm32")]
use crate::editor::input::InputOverlay;
use crate::editor;
#[cfg(target_arch = "wasm32")]
use crate::render::CanvasRenderer;
use crate::render::{GridTheme, RenderParams, ResizeGuide};
use crate::stats::{self, SelectionStats};
use crate::types::{CellStore, CellValue, SelectionChange, SelectionRange, SelectionSet};

#[cfg(not(target_arch = "wasm32"))]
use handlers::Outcome;
use handlers::{PointerDispatcher, PointerInput};

/// The complete target-independent view model: grid data, viewport,
/// selection, undo history, and in-flight gesture state. Everything
/// the handlers, renderer, and statistics read or mutate lives here;
/// the wasm layer wraps it in `Rc<RefCell<..>>` for event closures.
pub struct ViewerState {
    /// Cell store and both dimension tracks.
    pub data: GridData,
    /// Scroll offsets and viewport extents in logical pixels.
    pub viewport: Viewport,
    /// The active (most recent, possibly still dragging) range.
    pub active: Option<SelectionRange>,
    /// Ranges committed with the multi-select modifier.
    pub ranges: SelectionSet,
    /// Undo/redo history.
    pub commands: CommandStack,
    /// Dashed preview line while a resize gesture is live.
    pub resize_guide: Option<ResizeGuide>,
    /// Palette used by both render layers.
    pub theme: GridTheme,
    /// Cell currently under the edit overlay.
    pub editing: Option<(u32, u32)>,
}

impl ViewerState {
    /// Build a grid of `row_count` x `col_count` tracks (index 0 on
    /// each axis is the header track) with uniform data-track sizes.
    #[must_use]
    pub fn new(
        row_count: u32,
        col_count: u32,
        row_height: f32,
        col_width: f32,
        header_col_width: f32,
    ) -> Self {
        let rows = AxisTrack::new(Axis::Row, row_count, row_height);
        let mut cols = AxisTrack::new(Axis::Col, col_count, col_width);
        if col_count > 0 {
            let _ = cols.set_size(0, header_col_width);
        }
        Self {
            data: GridData {
                store: CellStore::new(),
                rows,
                cols,
            },
            viewport: Viewport::new(),
            active: None,
            ranges: SelectionSet::new(),
            commands: CommandStack::new(),
            resize_guide: None,
            theme: GridTheme::default(),
            editing: None,
        }
    }

    /// Snapshot of the current selection for observers.
    #[must_use]
    pub fn selection_change(&self) -> SelectionChange {
        SelectionChange {
            active: self.active,
            ranges: self.ranges.ranges().to_vec(),
        }
    }

    /// Aggregate statistics over every selected range.
    #[must_use]
    pub fn selection_stats(&self) -> SelectionStats {
        let mut all: Vec<SelectionRange> = self.ranges.ranges().to_vec();
        if let Some(active) = self.active {
            all.push(active);
        }
        stats::aggregate(&self.data.store, &all)
    }

    /// Borrow everything a render pass needs.
    #[must_use]
    pub fn render_params(&self) -> RenderParams<'_> {
        RenderParams {
            store: &self.data.store,
            rows: &self.data.rows,
            cols: &self.data.cols,
            viewport: &self.viewport,
            active: self.active,
            ranges: self.ranges.ranges(),
            theme: &self.theme,
            resize_guide: self.resize_guide,
        }
    }
}

/// Explicit selection observer list (wasm32). Observers are JS
/// functions receiving a serialized [`SelectionChange`]; dispatch
/// happens on a snapshot taken after the state borrow is released so
/// an observer may call back into the view.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub(crate) struct SelectionObservers {
    observers: Vec<Function>,
}

#[cfg(target_arch = "wasm32")]
impl SelectionObservers {
    pub(crate) fn subscribe(&mut self, callback: Function) {
        self.observers.push(callback);
    }

    pub(crate) fn snapshot(&self) -> Vec<Function> {
        self.observers.clone()
    }

    pub(crate) fn dispatch(observers: &[Function], change: &SelectionChange) {
        let Ok(value) = serde_wasm_bindgen::to_value(change) else {
            return;
        };
        for callback in observers {
            let _ = callback.call1(&JsValue::NULL, &value);
        }
    }
}

/// Explicit selection observer list (native). Same contract as the
/// wasm variant with plain Rust callbacks, used by tests.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct SelectionObservers {
    observers: Vec<Box<dyn FnMut(&SelectionChange)>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl SelectionObservers {
    pub fn subscribe(&mut self, observer: Box<dyn FnMut(&SelectionChange)>) {
        self.observers.push(observer);
    }

    pub fn notify(&mut self, change: &SelectionChange) {
        for observer in &mut self.observers {
            observer(change);
        }
    }
}

/// Shared state accessed by event closures (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) view: ViewerState,
    pub(crate) dispatcher: PointerDispatcher,
    pub(crate) observers: SelectionObservers,
    pub(crate) base: Option<CanvasRenderer>,
    pub(crate) overlay: Option<CanvasRenderer>,
    pub(crate) overlay_canvas: Option<HtmlCanvasElement>,
    pub(crate) input_overlay: InputOverlay,
    pub(crate) dpr: f32,
    pub(crate) needs_base: bool,
    pub(crate) needs_overlay: bool,
    /// A repaint frame is already queued.
    pub(crate) raf_pending: bool,
    pub(crate) raf_closure: Option<Closure<dyn FnMut()>>,
    /// Latest pointer-move waiting for the next animation frame.
    pub(crate) pending_move: Option<PointerInput>,
    /// Last pointer position, replayed by the autoscroll timer.
    pub(crate) last_pointer: Option<PointerInput>,
    pub(crate) autoscroll_timer: Option<i32>,
    pub(crate) autoscroll_closure: Option<Closure<dyn FnMut()>>,
}

/// The grid view exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    wheel_closure: Option<Closure<dyn FnMut(WheelEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,

    // Non-wasm32 fields (tests and native embedding)
    #[cfg(not(target_arch = "wasm32"))]
    state: ViewerState,
    #[cfg(not(target_arch = "wasm32"))]
    dispatcher: PointerDispatcher,
    #[cfg(not(target_arch = "wasm32"))]
    observers: SelectionObservers,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a view over a base canvas (grid + cells) and an overlay
    /// canvas (selection + headers), registering all event handlers on
    /// the overlay. The grid starts empty; call [`GridView::init`].
    #[wasm_bindgen(constructor)]
    pub fn new(
        base_canvas: HtmlCanvasElement,
        overlay_canvas: HtmlCanvasElement,
        dpr: f32,
    ) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let base = CanvasRenderer::new(base_canvas)?;
        let overlay = CanvasRenderer::new(overlay_canvas.clone())?;

        let state = Rc::new(RefCell::new(SharedState {
            view: ViewerState::new(0, 0, 0.0, 0.0, 0.0),
            dispatcher: PointerDispatcher::new(),
            observers: SelectionObservers::default(),
            base: Some(base),
            overlay: Some(overlay),
            overlay_canvas: Some(overlay_canvas.clone()),
            input_overlay: InputOverlay::new(),
            dpr,
            needs_base: true,
            needs_overlay: true,
            raf_pending: false,
            raf_closure: None,
            pending_move: None,
            last_pointer: None,
            autoscroll_timer: None,
            autoscroll_closure: None,
        }));

        let (mouse_closures, wheel_closure, key_closure) =
            Self::register_events(&overlay_canvas, &state);

        Ok(GridView {
            state,
            mouse_closures,
            wheel_closure,
            key_closure,
        })
    }

    /// Reset the grid to `rows` x `cols` tracks (index 0 on each axis
    /// is the header track) with uniform sizes. Clears cells,
    /// selection, and undo history.
    pub fn init(
        &self,
        rows: u32,
        cols: u32,
        row_height: f32,
        col_width: f32,
        header_col_width: f32,
    ) {
        {
            let mut s = self.state.borrow_mut();
            let viewport = s.view.viewport;
            s.view = ViewerState::new(rows, cols, row_height, col_width, header_col_width);
            s.view.viewport = viewport;
            s.view.viewport.clamp_scroll(&s.view.data.rows, &s.view.data.cols);
            s.dispatcher = PointerDispatcher::new();
            s.needs_base = true;
            s.needs_overlay = true;
        }
        Self::schedule_render(&self.state);
    }

    /// Resize the drawing buffers to physical pixels. Logical viewport
    /// extents are derived from the device pixel ratio.
    pub fn resize(&self, physical_width: u32, physical_height: u32, dpr: f32) {
        {
            let mut s = self.state.borrow_mut();
            s.dpr = dpr;
            let logical_width = physical_width as f32 / dpr;
            let logical_height = physical_height as f32 / dpr;
            if let Some(base) = s.base.as_mut() {
                base.resize(physical_width, physical_height, dpr);
            }
            if let Some(overlay) = s.overlay.as_mut() {
                overlay.resize(physical_width, physical_height, dpr);
            }
            s.view.viewport.resize(logical_width, logical_height);
            s.view
                .viewport
                .clamp_scroll(&s.view.data.rows, &s.view.data.cols);
            s.needs_base = true;
            s.needs_overlay = true;
        }
        Self::schedule_render(&self.state);
    }

    /// Paint both layers now, outside the frame scheduler.
    pub fn render(&self) {
        let mut s = self.state.borrow_mut();
        s.needs_base = true;
        s.needs_overlay = true;
        Self::render_now(&mut s);
    }

    /// Scroll by a delta in logical pixels, clamped to the content.
    pub fn scroll_by(&self, dx: f32, dy: f32) {
        let moved = {
            let mut s = self.state.borrow_mut();
            let moved = scroll::apply_scroll(&mut s.view, dx, dy);
            if moved {
                s.needs_base = true;
                s.needs_overlay = true;
                Self::sync_edit_overlay(&mut s);
            }
            moved
        };
        if moved {
            Self::schedule_render(&self.state);
        }
    }

    /// Write a cell through the undo stack. The value is parsed the
    /// same way the editor parses typed input.
    pub fn set_cell(&self, row: u32, col: u32, value: &str) {
        {
            let mut s = self.state.borrow_mut();
            let old = s.view.data.store.value(row, col);
            let new = CellValue::parse(value);
            if new == old {
                return;
            }
            let ViewerState { data, commands, .. } = &mut s.view;
            commands.push(Command::EditCell { row, col, old, new }, data);
            s.needs_base = true;
        }
        Self::schedule_render(&self.state);
    }

    /// Display text of a cell ("" when empty).
    #[must_use]
    pub fn cell_value(&self, row: u32, col: u32) -> String {
        self.state.borrow().view.data.store.value(row, col).display()
    }

    /// Resize one column through the undo stack.
    pub fn set_col_width(&self, col: u32, width: f32) {
        self.push_resize(Axis::Col, col, width);
    }

    /// Resize one row through the undo stack.
    pub fn set_row_height(&self, row: u32, height: f32) {
        self.push_resize(Axis::Row, row, height);
    }

    pub fn undo(&self) -> bool {
        let undone = {
            let mut s = self.state.borrow_mut();
            let ViewerState { data, commands, .. } = &mut s.view;
            let undone = commands.undo(data);
            if undone {
                s.needs_base = true;
                s.needs_overlay = true;
                // A reverted resize may have moved the edited cell.
                Self::sync_edit_overlay(&mut s);
            }
            undone
        };
        if undone {
            Self::schedule_render(&self.state);
        }
        undone
    }

    pub fn redo(&self) -> bool {
        let redone = {
            let mut s = self.state.borrow_mut();
            let ViewerState { data, commands, .. } = &mut s.view;
            let redone = commands.redo(data);
            if redone {
                s.needs_base = true;
                s.needs_overlay = true;
                Self::sync_edit_overlay(&mut s);
            }
            redone
        };
        if redone {
            Self::schedule_render(&self.state);
        }
        redone
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.borrow().view.commands.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.state.borrow().view.commands.can_redo()
    }

    /// Current selection as `{ active, ranges }`.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        let change = self.state.borrow().view.selection_change();
        serde_wasm_bindgen::to_value(&change).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current selection as a JSON string. Prefer [`GridView::selection`]
    /// when the result is consumed directly in JavaScript.
    pub fn selection_json(&self) -> Result<String, JsValue> {
        let change = self.state.borrow().view.selection_change();
        serde_json::to_string(&change)
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    /// Aggregate statistics over the selected cells:
    /// `{ count, sum, min, max, average }`.
    pub fn selection_stats(&self) -> Result<JsValue, JsValue> {
        let stats = self.state.borrow().view.selection_stats();
        serde_wasm_bindgen::to_value(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Subscribe to selection changes. The callback receives the same
    /// shape as [`GridView::selection`] after every selection-mutating
    /// gesture or key press.
    pub fn add_selection_observer(&self, callback: Function) {
        self.state.borrow_mut().observers.subscribe(callback);
    }

    /// Open the edit overlay on the active cell. Returns false when
    /// nothing is selected or the cell is scrolled out of view.
    pub fn begin_edit(&self) -> bool {
        let shown = {
            let mut s = self.state.borrow_mut();
            let Some((row, col)) = editor::edit_anchor(&s.view) else {
                return false;
            };
            let seed = editor::begin_edit(&mut s.view, row, col);
            let Some(rect) = editor::cell_screen_rect(&s.view, row, col) else {
                editor::cancel_edit(&mut s.view);
                return false;
            };
            s.input_overlay.show(rect, &seed, None);
            true
        };
        shown
    }

    /// Commit the overlay's text as one undoable edit and hide it.
    pub fn commit_edit(&self) -> bool {
        let changed = {
            let mut s = self.state.borrow_mut();
            let text = s.input_overlay.value().unwrap_or_default();
            let changed = editor::commit_edit(&mut s.view, &text);
            s.input_overlay.hide();
            if changed {
                s.needs_base = true;
            }
            changed
        };
        if changed {
            Self::schedule_render(&self.state);
        }
        changed
    }

    /// Close the overlay without writing anything.
    pub fn cancel_edit(&self) {
        let mut s = self.state.borrow_mut();
        editor::cancel_edit(&mut s.view);
        s.input_overlay.hide();
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    fn push_resize(&self, axis: Axis, index: u32, size: f32) {
        {
            let mut s = self.state.borrow_mut();
            let track = match axis {
                Axis::Row => &s.view.data.rows,
                Axis::Col => &s.view.data.cols,
            };
            if index >= track.count() {
                return;
            }
            let old = track.size(index);
            if (size - old).abs() <= f32::EPSILON {
                return;
            }
            let ViewerState { data, commands, .. } = &mut s.view;
            commands.push(
                Command::ResizeTrack {
                    axis,
                    index,
                    old,
                    new: size,
                },
                data,
            );
            s.needs_base = true;
            s.needs_overlay = true;
            Self::sync_edit_overlay(&mut s);
        }
        Self::schedule_render(&self.state);
    }

    /// Keep the edit overlay glued to its cell after a layout or
    /// scroll change. Abandons the edit when the cell moves out of
    /// view.
    pub(crate) fn sync_edit_overlay(s: &mut SharedState) {
        let Some((row, col)) = s.view.editing else {
            return;
        };
        match editor::cell_screen_rect(&s.view, row, col) {
            Some(rect) => s.input_overlay.set_bounds(rect),
            None => {
                editor::cancel_edit(&mut s.view);
                s.input_overlay.hide();
            }
        }
    }

    /// Paint whichever layers are marked dirty and clear the flags.
    pub(crate) fn render_now(s: &mut SharedState) {
        let SharedState {
            view,
            base,
            overlay,
            needs_base,
            needs_overlay,
            ..
        } = s;
        let params = view.render_params();
        if *needs_base {
            if let Some(renderer) = base.as_ref() {
                renderer.render_base(&params);
            }
            *needs_base = false;
        }
        if *needs_overlay {
            if let Some(renderer) = overlay.as_ref() {
                renderer.render_overlay(&params);
            }
            *needs_overlay = false;
        }
    }

    /// Queue one repaint on the next animation frame. Repeat calls
    /// before the frame fires are free; the frame also drains the
    /// latest coalesced pointer-move and broadcasts its selection
    /// change.
    pub(crate) fn schedule_render(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        if s.raf_pending {
            return;
        }
        if s.raf_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    GridView::on_animation_frame(&state);
                }
            }) as Box<dyn FnMut()>);
            s.raf_closure = Some(closure);
        }
        let Some(callback) = s.raf_closure.as_ref() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .is_ok()
            {
                s.raf_pending = true;
            }
        }
    }

    fn on_animation_frame(state: &Rc<RefCell<SharedState>>) {
        let notify = {
            let mut s = state.borrow_mut();
            s.raf_pending = false;
            let mut changed = false;
            if let Some(input) = s.pending_move.take() {
                let SharedState {
                    view, dispatcher, ..
                } = &mut *s;
                let out = dispatcher.pointer_move(view, &input);
                if out.repaint_base {
                    s.needs_base = true;
                }
                if out.repaint_overlay {
                    s.needs_overlay = true;
                }
                changed = out.selection_changed;
            }
            Self::render_now(&mut s);
            changed
        };
        if notify {
            Self::publish_selection(state);
        }
    }

    /// Notify all observers with the current selection. The observer
    /// snapshot and the change are taken under the borrow; the calls
    /// happen after it is released.
    pub(crate) fn publish_selection(state: &Rc<RefCell<SharedState>>) {
        let (observers, change) = {
            let s = state.borrow();
            (s.observers.snapshot(), s.view.selection_change())
        };
        SelectionObservers::dispatch(&observers, &change);
    }
}

// ============================================================================
// Native Implementation (tests, benchmarks, native embedding)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a view without a canvas, for tests and benchmarks. Same
    /// model and dispatch pipeline as the wasm constructor, minus the
    /// DOM.
    #[must_use]
    pub fn new_test(
        rows: u32,
        cols: u32,
        row_height: f32,
        col_width: f32,
        header_col_width: f32,
    ) -> Self {
        GridView {
            state: ViewerState::new(rows, cols, row_height, col_width, header_col_width),
            dispatcher: PointerDispatcher::new(),
            observers: SelectionObservers::default(),
        }
    }

    /// Set the logical viewport extents.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.viewport.resize(width, height);
        let ViewerState { data, viewport, .. } = &mut self.state;
        viewport.clamp_scroll(&data.rows, &data.cols);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, shift: bool, toggle: bool) -> Outcome {
        let input = PointerInput { x, y, shift, toggle };
        let out = self.dispatcher.pointer_down(&mut self.state, &input);
        self.after(out);
        out
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Outcome {
        let input = PointerInput::at(x, y);
        let out = self.dispatcher.pointer_move(&mut self.state, &input);
        self.after(out);
        out
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> Outcome {
        let input = PointerInput::at(x, y);
        let out = self.dispatcher.pointer_up(&mut self.state, &input);
        self.after(out);
        out
    }

    pub fn key_down(&mut self, key: &str, shift: bool) -> Outcome {
        let out = keyboard::handle_key(&mut self.state, key, shift);
        self.after(out);
        out
    }

    /// Scroll by a delta, clamped to the content. Returns true when
    /// the offset moved.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) -> bool {
        scroll::apply_scroll(&mut self.state, dx, dy)
    }

    pub fn set_cell(&mut self, row: u32, col: u32, value: &str) {
        let old = self.state.data.store.value(row, col);
        let new = CellValue::parse(value);
        if new == old {
            return;
        }
        let ViewerState { data, commands, .. } = &mut self.state;
        commands.push(Command::EditCell { row, col, old, new }, data);
    }

    #[must_use]
    pub fn cell_value(&self, row: u32, col: u32) -> CellValue {
        self.state.data.store.value(row, col)
    }

    pub fn set_col_width(&mut self, col: u32, width: f32) {
        self.push_resize(Axis::Col, col, width);
    }

    pub fn set_row_height(&mut self, row: u32, height: f32) {
        self.push_resize(Axis::Row, row, height);
    }

    fn push_resize(&mut self, axis: Axis, index: u32, size: f32) {
        let track = match axis {
            Axis::Row => &self.state.data.rows,
            Axis::Col => &self.state.data.cols,
        };
        if index >= track.count() {
            return;
        }
        let old = track.size(index);
        if (size - old).abs() <= f32::EPSILON {
            return;
        }
        let ViewerState { data, commands, .. } = &mut self.state;
        commands.push(
            Command::ResizeTrack {
                axis,
                index,
                old,
                new: size,
            },
            data,
        );
    }

    pub fn undo(&mut self) -> bool {
        let ViewerState { data, commands, .. } = &mut self.state;
        commands.undo(data)
    }

    pub fn redo(&mut self) -> bool {
        let ViewerState { data, commands, .. } = &mut self.state;
        commands.redo(data)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.commands.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.state.commands.can_redo()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionChange {
        self.state.selection_change()
    }

    #[must_use]
    pub fn selection_stats(&self) -> SelectionStats {
        self.state.selection_stats()
    }

    pub fn add_selection_observer(&mut self, observer: Box<dyn FnMut(&SelectionChange)>) {
        self.observers.subscribe(observer);
    }

    /// Start editing the active cell; returns the seed text, or None
    /// when nothing is selected.
    pub fn begin_edit(&mut self) -> Option<String> {
        let (row, col) = editor::edit_anchor(&self.state)?;
        Some(editor::begin_edit(&mut self.state, row, col))
    }

    /// Commit typed text as one undoable edit. Returns true when the
    /// store changed.
    pub fn commit_edit(&mut self, text: &str) -> bool {
        editor::commit_edit(&mut self.state, text)
    }

    pub fn cancel_edit(&mut self) {
        editor::cancel_edit(&mut self.state);
    }

    /// Direct access to the view model, mainly for assertions.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    fn after(&mut self, out: Outcome) {
        if out.selection_changed {
            let change = self.state.selection_change();
            self.observers.notify(&change);
        }
    }
}
