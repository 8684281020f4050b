//! Visible x-range of the heart

use libm::{ceilf, floorf, roundf};

use super::curve::{bottom_y, top_y, ShapeParams};
use crate::render::DotSize;

/// Columns the heart occupies
///
/// Every renderer derives its loop bounds from here, so the curve
/// evaluator is never asked for a column outside
/// `[h - 2*sqrt(a), h + 2*sqrt(a)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeartSpan {
    x_min: u16,
    x_max: u16,
    x_mid: u16,
    /// Column at the cleft/point, never plotted
    skip_x: Option<u16>,
}

impl HeartSpan {
    /// Compute the span for a shape
    ///
    /// Returns `None` when the range is empty (gain too small for a single
    /// column) or when the left edge is not addressable (`x_min < 0`).
    pub fn new(params: &ShapeParams) -> Option<Self> {
        let reach = 2.0 * params.root_gain();
        let left = ceilf(params.center_x() - reach);
        let right = floorf(params.center_x() + reach);

        if left > right || left < 0.0 || right > u16::MAX as f32 {
            return None;
        }

        let x_min = left as u16;
        let x_max = right as u16;
        let center = roundf(params.center_x());
        let skip_x = if (0.0..=u16::MAX as f32).contains(&center) {
            Some(center as u16)
        } else {
            None
        };

        Some(Self {
            x_min,
            x_max,
            x_mid: x_min + (x_max - x_min) / 2,
            skip_x,
        })
    }

    /// Leftmost column (closing edge)
    pub fn x_min(&self) -> u16 {
        self.x_min
    }

    /// Rightmost column (closing edge)
    pub fn x_max(&self) -> u16 {
        self.x_max
    }

    /// Sweep midpoint, `x_min + (x_max - x_min) / 2`
    pub fn x_mid(&self) -> u16 {
        self.x_mid
    }

    /// Column that never receives a dot
    pub fn skip_x(&self) -> Option<u16> {
        self.skip_x
    }

    /// Number of paired steps in each sweep
    pub fn half_width(&self) -> u16 {
        self.x_mid - self.x_min
    }

    /// Check if a column is the skipped center column
    pub fn is_skipped(&self, x: u16) -> bool {
        self.skip_x == Some(x)
    }

    /// Columns that receive dots, left to right
    pub fn columns(&self) -> impl Iterator<Item = u16> {
        let skip_x = self.skip_x;
        (self.x_min..=self.x_max).filter(move |&x| Some(x) != skip_x)
    }

    /// Pixel extent of the rendered outline, dots included
    ///
    /// Returns `None` if every column is skipped.
    pub fn bounding_box(&self, params: &ShapeParams, dot: DotSize) -> Option<BoundingBox> {
        let extent = u16::from(dot.get()) - 1;
        let mut bbox: Option<BoundingBox> = None;

        for x in self.columns() {
            let top = top_y(params, x);
            let bottom = bottom_y(params, x);
            let (y_min, y_max) = (top.min(bottom), top.max(bottom));

            bbox = Some(match bbox {
                None => BoundingBox {
                    x_min: x,
                    y_min,
                    x_max: x.saturating_add(extent),
                    y_max: y_max.saturating_add(extent),
                },
                Some(b) => BoundingBox {
                    x_min: b.x_min.min(x),
                    y_min: b.y_min.min(y_min),
                    x_max: b.x_max.max(x.saturating_add(extent)),
                    y_max: b.y_max.max(y_max.saturating_add(extent)),
                },
            });
        }

        bbox
    }
}

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundingBox {
    pub x_min: u16,
    pub y_min: u16,
    pub x_max: u16,
    pub y_max: u16,
}

impl BoundingBox {
    /// Check if the rectangle fits a `width` x `height` panel
    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.x_max < width && self.y_max < height
    }
}
