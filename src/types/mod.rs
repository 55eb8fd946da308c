//! Core data types: cell values, the sparse store, and selections.

mod cell;
mod selection;

pub use cell::{Cell, CellStore, CellValue};
pub use selection::{SelectionChange, SelectionKind, SelectionRange, SelectionSet};
