//! Scene state
//!
//! The heart's visibility and the caption corner are explicit values
//! threaded through every frame rather than hidden statics.

pub mod state;

pub use state::{Corner, FrameState, HeartPhase};
