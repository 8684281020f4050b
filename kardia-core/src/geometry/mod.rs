//! Heart geometry
//!
//! Pure functions mapping integer columns to the heart's upper and lower
//! boundary, and the visible x-range derived from the shape parameters.

pub mod curve;
pub mod span;

pub use curve::{bottom_boundary, bottom_y, floor_to_pixel, top_boundary, top_y, ShapeError, ShapeParams};
pub use span::{BoundingBox, HeartSpan};
