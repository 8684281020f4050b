//! Heart rendering
//!
//! Everything reaches the surface through [`plot_dot`] and
//! [`PixelSurface::draw_vline`](crate::traits::PixelSurface::draw_vline).
//! The static outline draws in one pass without presenting; the sequence
//! replays the same pixels in a hand-drawn order with a present and a
//! blocking wait after every step.

pub mod dot;
pub mod outline;
pub mod sequence;

#[cfg(test)]
pub(crate) mod testing;

pub use dot::{plot_dot, DotSize};
pub use outline::{draw_closing_edge, draw_heart};
pub use sequence::draw_heart_seq;
