//! gridview - virtualized editable grid for the web
//!
//! Renders and edits a spreadsheet-style grid in the browser via
//! WebAssembly and Canvas 2D:
//! - Virtualized rendering: only the visible cell window is painted
//! - Multi-range selection with header and select-all gestures
//! - Undoable cell edits and row/column resizes
//! - Live selection statistics (count, sum, min, max, average)
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(canvas, overlay, devicePixelRatio);
//! grid.init(101, 51, 24, 80, 48);
//! grid.resize(canvas.width, canvas.height, devicePixelRatio);
//! grid.add_selection_observer((change) => console.log(change));
//! ```

pub mod commands;
pub mod editor;
pub mod error;
pub mod layout;
pub mod render;
pub mod stats;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main view struct and the model types embedders need.
pub use viewer::GridView;

pub use commands::{Command, CommandStack, GridData};
pub use error::{GridError, Result};
pub use stats::SelectionStats;
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
