//! Display backend trait
//!
//! Defines the interface for different panel types.

pub use kardia_core::traits::DisplayError;

use crate::framebuffer::FrameBuffer;

/// Display backend trait
///
/// Provides a hardware-agnostic interface for pushing a frame buffer to a
/// panel. Implementations handle the controller specifics (command set,
/// column offsets, bus).
pub trait DisplayBackend {
    /// Run the panel's power-up sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Send the whole frame buffer to the panel
    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
