//! DOM input overlay for cell editing.
//!
//! A single lazily created `<input>` element, absolutely positioned
//! over the cell being edited. Enter/Escape routing happens in the
//! host page, which calls back into `commit_edit` / `cancel_edit`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

pub(crate) struct InputOverlay {
    input: Option<HtmlInputElement>,
}

impl InputOverlay {
    pub(crate) fn new() -> Self {
        InputOverlay { input: None }
    }

    /// Show the overlay at a cell rectangle `[x, y, w, h]` in logical
    /// pixels, seeded with the cell's current text, focused with the
    /// text selected.
    pub(crate) fn show(&mut self, rect: [f32; 4], current_value: &str, container: Option<&HtmlElement>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let [x, y, w, h] = rect;

        let input = self.get_or_create_input(&document, container);
        let style = input.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
        let _ = style.set_property("width", &format!("{w}px"));
        let _ = style.set_property("height", &format!("{h}px"));

        input.set_value(current_value);
        let _ = input.focus();
        input.select();
    }

    /// Move and resize the widget without touching its value, focus,
    /// or text selection.
    pub(crate) fn set_bounds(&mut self, rect: [f32; 4]) {
        let Some(ref input) = self.input else {
            return;
        };
        let [x, y, w, h] = rect;
        let style = input.style();
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
        let _ = style.set_property("width", &format!("{w}px"));
        let _ = style.set_property("height", &format!("{h}px"));
    }

    pub(crate) fn hide(&mut self) {
        if let Some(ref input) = self.input {
            let _ = input.style().set_property("display", "none");
            let _ = input.blur();
        }
    }

    /// Text currently in the widget, if it exists.
    pub(crate) fn value(&self) -> Option<String> {
        self.input.as_ref().map(HtmlInputElement::value)
    }

    fn get_or_create_input(
        &mut self,
        document: &Document,
        container: Option<&HtmlElement>,
    ) -> &HtmlInputElement {
        if self.input.is_none() {
            if let Ok(el) = document.create_element("input") {
                if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
                    input.set_type("text");
                    let style = input.style();
                    let _ = style.set_property("position", "absolute");
                    let _ = style.set_property("z-index", "1000");
                    let _ = style.set_property("box-sizing", "border-box");
                    let _ = style.set_property("border", "2px solid #1A73E8");
                    let _ = style.set_property("outline", "none");
                    let _ = style.set_property("padding", "0 4px");
                    let _ = style.set_property("font-family", "inherit");
                    let _ = style.set_property("font-size", "13px");
                    let _ = style.set_property("background", "#fff");
                    let _ = style.set_property("display", "none");

                    if let Some(c) = container {
                        let _ = c.append_child(&input);
                    } else if let Some(body) = document.body() {
                        let _ = body.append_child(&input);
                    }

                    self.input = Some(input);
                }
            }
        }

        // Just created above when it was None; on the (unreachable)
        // creation failure path this would panic rather than render a
        // widgetless editor.
        #[allow(clippy::expect_used)]
        self.input.as_ref().expect("input element must exist")
    }
}

impl Drop for InputOverlay {
    fn drop(&mut self) {
        if let Some(ref input) = self.input {
            if let Some(parent) = input.parent_node() {
                let _ = parent.remove_child(input);
            }
        }
    }
}
