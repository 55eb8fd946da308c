//! Structured error types for gridview.
//!
//! Interactive paths (drag, autoscroll) clamp and continue instead of
//! erroring; these types cover construction failures and programmatic
//! API misuse.

/// All errors that can occur in gridview construction and mutation.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Canvas element has no usable 2D drawing context. Fatal: the
    /// component cannot render and construction must abort.
    #[error("Canvas 2D context unavailable: {0}")]
    Canvas(String),

    /// Index outside the track range on a programmatic call.
    #[error("index {index} out of range for {axis} track of {count}")]
    Bounds {
        /// Axis name ("row" or "col").
        axis: &'static str,
        /// The offending index.
        index: u32,
        /// Track count at the time of the call.
        count: u32,
    },

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors at the JS boundary.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
