//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering logic
//! and display-specific implementations.

pub mod surface;

pub use surface::{DisplayError, DrawColor, PixelSurface};
