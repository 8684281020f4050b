//! Test doubles for the renderers

use embedded_hal::delay::DelayNs;

use crate::traits::{DisplayError, DrawColor, PixelSurface};

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;

/// In-memory 128x64 surface that records what the renderers did
pub struct RecordingSurface {
    pixels: [[bool; WIDTH]; HEIGHT],
    pub color: DrawColor,
    pub color_changes: usize,
    /// Pixel writes per column, whatever the color
    pub column_writes: [u32; WIDTH],
    pub clipped: usize,
    pub presents: usize,
    /// Lit pixel count at every present
    pub frames: heapless::Vec<usize, 256>,
    /// Fail the n-th present (1-based)
    pub fail_on_present: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
            color: DrawColor::On,
            color_changes: 0,
            column_writes: [0; WIDTH],
            clipped: 0,
            presents: 0,
            frames: heapless::Vec::new(),
            fail_on_present: None,
        }
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }

    pub fn same_pixels(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl PixelSurface for RecordingSurface {
    fn set_color(&mut self, color: DrawColor) {
        self.color = color;
        self.color_changes += 1;
    }

    fn plot_pixel(&mut self, x: u16, y: u16) {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            self.clipped += 1;
            return;
        }
        self.column_writes[x] += 1;
        self.pixels[y][x] = self.color.is_on();
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.presents += 1;
        if self.fail_on_present == Some(self.presents) {
            return Err(DisplayError::Communication);
        }
        let lit = self.lit_count();
        let _ = self.frames.push(lit);
        Ok(())
    }
}

/// Delay that only counts
#[derive(Default)]
pub struct CountingDelay {
    pub calls: usize,
    pub total_ms: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms;
    }
}
