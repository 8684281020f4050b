//! Drawing canvas
//!
//! Pairs the frame buffer with a backend. Heart renderers see it as a
//! [`PixelSurface`], captions see it as an `embedded-graphics` target.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use kardia_core::traits::{DrawColor, PixelSurface};

use crate::backend::{DisplayBackend, DisplayError};
use crate::framebuffer::FrameBuffer;

/// Frame buffer, active color and the panel it is presented on
pub struct Canvas<B> {
    frame: FrameBuffer,
    color: DrawColor,
    backend: B,
}

impl<B: DisplayBackend> Canvas<B> {
    /// Create a blank canvas drawing in On
    pub fn new(backend: B) -> Self {
        Self {
            frame: FrameBuffer::new(),
            color: DrawColor::On,
            backend,
        }
    }

    /// Initialize the panel and show a blank frame
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.backend.init()?;
        self.frame.clear();
        self.backend.flush(&self.frame)
    }

    /// Clear the buffer (the panel keeps its content until presented)
    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Active draw color
    pub fn color(&self) -> DrawColor {
        self.color
    }

    /// Current buffer content
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Mutable buffer access for direct drawing
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: DisplayBackend> PixelSurface for Canvas<B> {
    fn set_color(&mut self, color: DrawColor) {
        self.color = color;
    }

    fn plot_pixel(&mut self, x: u16, y: u16) {
        self.frame.set_pixel(x, y, self.color.is_on());
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if !self.backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }
        self.backend.flush(&self.frame)
    }
}

impl<B> OriginDimensions for Canvas<B> {
    fn size(&self) -> Size {
        self.frame.size()
    }
}

impl<B> DrawTarget for Canvas<B> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.frame.draw_iter(pixels)
    }
}
