//! Frame buffer
//!
//! 1 bit per pixel, organized as 8-row pages the way SH1106/SSD1306
//! controllers expect it: byte `pages[p][x]` holds rows `8p..8p+8` of
//! column `x`, least significant bit on top.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use kardia_core::config::{PANEL_HEIGHT, PANEL_WIDTH};

/// Panel width in pixels
pub const WIDTH: usize = PANEL_WIDTH as usize;

/// Panel height in pixels
pub const HEIGHT: usize = PANEL_HEIGHT as usize;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Monochrome frame buffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set or clear one pixel
    ///
    /// Returns `false` if the pixel lies outside the panel (clipped).
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> bool {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let mask = 1u8 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        true
    }

    /// Read one pixel (`false` outside the panel)
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw page data, top page first
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// Iterate over all pages, top first
    pub fn pages(&self) -> impl Iterator<Item = &[u8; WIDTH]> {
        self.pages.iter()
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    /// Check if no pixel is lit
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|page| page.iter().all(|&b| b == 0))
    }

    /// Number of lit pixels inside an inclusive rectangle
    pub fn lit_in(&self, x_min: u16, y_min: u16, x_max: u16, y_max: u16) -> usize {
        let mut count = 0;
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                if self.pixel(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FrameBuffer[{}x{}, {} lit]", WIDTH, HEIGHT, self.lit_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_page_layout() {
        let mut frame = FrameBuffer::new();
        assert!(frame.set_pixel(5, 0, true));
        assert!(frame.set_pixel(5, 9, true));
        assert!(frame.set_pixel(127, 63, true));

        assert_eq!(frame.page(0).unwrap()[5], 0b0000_0001);
        assert_eq!(frame.page(1).unwrap()[5], 0b0000_0010);
        assert_eq!(frame.page(7).unwrap()[127], 0b1000_0000);
        assert_eq!(frame.lit_count(), 3);
    }

    #[test]
    fn test_clear_pixel() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(10, 10, true);
        frame.set_pixel(10, 11, true);
        frame.set_pixel(10, 10, false);

        assert!(!frame.pixel(10, 10));
        assert!(frame.pixel(10, 11));
    }

    #[test]
    fn test_clipping() {
        let mut frame = FrameBuffer::new();
        assert!(!frame.set_pixel(128, 0, true));
        assert!(!frame.set_pixel(0, 64, true));
        assert!(!frame.pixel(500, 500));
        assert!(frame.is_blank());
    }

    #[test]
    fn test_matches_validated_panel() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.size(), Size::new(u32::from(PANEL_WIDTH), u32::from(PANEL_HEIGHT)));
        assert_eq!(frame.pages().count() * 8, HEIGHT);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(1, 1, true);
        frame.clear();
        assert!(frame.is_blank());
    }

    #[test]
    fn test_draw_target() {
        let mut frame = FrameBuffer::new();
        Rectangle::new(Point::new(-2, -2), Size::new(6, 6))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut frame)
            .unwrap();

        // Negative coordinates dropped, the rest drawn
        assert_eq!(frame.lit_count(), 16);
        assert_eq!(frame.lit_in(0, 0, 3, 3), 16);
    }
}
