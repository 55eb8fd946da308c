//! Layout computation: dimension tracks and viewport math.
//!
//! Positions are computed once per track and updated incrementally on
//! resize, enabling O(1) position lookups and O(log n) hit testing.

mod track;
mod viewport;

pub use track::{col_to_letter, Axis, AxisTrack, MIN_TRACK_SIZE};
pub use viewport::Viewport;
