//! Dot plotter

use core::num::NonZeroU8;

use crate::traits::{DrawColor, PixelSurface};

/// Side length of the square plotted per curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DotSize(NonZeroU8);

impl DotSize {
    /// Single pixel dots
    pub const MIN: Self = Self(NonZeroU8::MIN);

    /// Create a dot size, `None` for zero
    pub const fn new(size: u8) -> Option<Self> {
        match NonZeroU8::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Side length in pixels
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// Fill a `size` x `size` square with its top-left corner at `(x, y)`
///
/// With `color: None` the surface's active color is used and no color
/// change is issued, so the same call draws or erases depending on what
/// the caller selected beforehand.
pub fn plot_dot<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x: u16,
    y: u16,
    size: DotSize,
    color: Option<DrawColor>,
) {
    if let Some(color) = color {
        surface.set_color(color);
    }

    let size = u16::from(size.get());
    for dy in 0..size {
        for dx in 0..size {
            surface.plot_pixel(x.saturating_add(dx), y.saturating_add(dy));
        }
    }
}
