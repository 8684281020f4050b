//! Pixel surface trait for monochrome displays

/// Errors that can occur when presenting to a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Binary draw color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawColor {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

impl DrawColor {
    /// Check if this color lights a pixel
    pub fn is_on(self) -> bool {
        self == DrawColor::On
    }
}

/// Monochrome pixel surface
///
/// The only boundary between the heart renderers and a display. Drawing
/// operations write with the currently active color and are expected to
/// be buffered until [`PixelSurface::present`] is called.
///
/// Coordinates outside the addressable area are the surface's concern:
/// implementations clip silently.
pub trait PixelSurface {
    /// Set the active draw color for subsequent plot operations
    fn set_color(&mut self, color: DrawColor);

    /// Set a single pixel using the active color
    fn plot_pixel(&mut self, x: u16, y: u16);

    /// Draw a vertical segment using the active color
    ///
    /// Both endpoints are inclusive and may be given in either order.
    fn draw_vline(&mut self, x: u16, y_from: u16, y_to: u16) {
        let (top, bottom) = if y_from <= y_to {
            (y_from, y_to)
        } else {
            (y_to, y_from)
        };
        for y in top..=bottom {
            self.plot_pixel(x, y);
        }
    }

    /// Flush buffered drawing to the physical display
    fn present(&mut self) -> Result<(), DisplayError>;
}
