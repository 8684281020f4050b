//! Heart boundary curves
//!
//! The heart is the union of two piecewise curves around a center `(h, k)`
//! with gain `a`:
//!
//! ```text
//! top(x)    = k - sqrt(a - (|x - h| - sqrt(a))^2)
//! bottom(x) = k - sqrt(a) * (acos(1 - |x - h| / sqrt(a)) - pi)
//! ```
//!
//! Both are only defined for `|x - h| <= 2 * sqrt(a)`. Evaluation outside
//! that domain is fail-soft: the radicand is clamped to zero and the acos
//! argument to `[-1, 1]`, producing a degenerate but defined pixel.

use core::f32::consts::PI;

use libm::{acosf, fabsf, sqrtf};

/// Shape parameter errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShapeError {
    /// Gain is zero, negative or not finite
    NonPositiveGain,
    /// Center coordinate is NaN or infinite
    NonFiniteCenter,
}

/// Heart shape parameters
///
/// A gain of ~235 spans the full height of a 64 row panel, ~60 about half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    gain: f32,
    /// Cached `sqrt(gain)`
    root_gain: f32,
    center_x: f32,
    center_y: f32,
}

impl ShapeParams {
    /// Create validated shape parameters
    pub fn new(gain: f32, center_x: f32, center_y: f32) -> Result<Self, ShapeError> {
        if !gain.is_finite() || gain <= 0.0 {
            return Err(ShapeError::NonPositiveGain);
        }
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ShapeError::NonFiniteCenter);
        }

        Ok(Self {
            gain,
            root_gain: sqrtf(gain),
            center_x,
            center_y,
        })
    }

    /// Gain (overall size)
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Square root of the gain
    pub fn root_gain(&self) -> f32 {
        self.root_gain
    }

    /// Horizontal center (the cleft and the point)
    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    /// Vertical center (the cleft height)
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    /// Distance from the horizontal center to a column
    fn offset(&self, x: u16) -> f32 {
        fabsf(x as f32 - self.center_x)
    }
}

/// Convert a curve value to a pixel coordinate
///
/// Truncates toward zero, which is a floor for every positive value. Both
/// renderers go through here so mirrored columns round the same way.
/// Negative values and NaN saturate to 0, values past the coordinate range
/// saturate to `u16::MAX`.
pub fn floor_to_pixel(value: f32) -> u16 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= u16::MAX as f32 {
        u16::MAX
    } else {
        value as u16
    }
}

/// Upper (lobe) boundary at column `x`
pub fn top_boundary(params: &ShapeParams, x: u16) -> f32 {
    let lobe = params.offset(x) - params.root_gain;
    let radicand = (params.gain - lobe * lobe).max(0.0);
    params.center_y - sqrtf(radicand)
}

/// Lower (point) boundary at column `x`
pub fn bottom_boundary(params: &ShapeParams, x: u16) -> f32 {
    let ratio = params.offset(x) / params.root_gain;
    let arc = acosf((1.0 - ratio).clamp(-1.0, 1.0));
    params.center_y - params.root_gain * (arc - PI)
}

/// Upper boundary pixel row at column `x`
pub fn top_y(params: &ShapeParams, x: u16) -> u16 {
    floor_to_pixel(top_boundary(params, x))
}

/// Lower boundary pixel row at column `x`
pub fn bottom_y(params: &ShapeParams, x: u16) -> u16 {
    floor_to_pixel(bottom_boundary(params, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_heart() -> ShapeParams {
        ShapeParams::new(180.0, 64.0, 17.0).unwrap()
    }

    #[test]
    fn test_params_validation() {
        assert_eq!(
            ShapeParams::new(0.0, 64.0, 17.0),
            Err(ShapeError::NonPositiveGain)
        );
        assert_eq!(
            ShapeParams::new(-4.0, 64.0, 17.0),
            Err(ShapeError::NonPositiveGain)
        );
        assert_eq!(
            ShapeParams::new(f32::NAN, 64.0, 17.0),
            Err(ShapeError::NonPositiveGain)
        );
        assert_eq!(
            ShapeParams::new(180.0, f32::INFINITY, 17.0),
            Err(ShapeError::NonFiniteCenter)
        );
        assert_eq!(
            ShapeParams::new(180.0, 64.0, f32::NAN),
            Err(ShapeError::NonFiniteCenter)
        );

        let params = ShapeParams::new(100.0, 20.0, 5.0).unwrap();
        assert_eq!(params.root_gain(), 10.0);
    }

    #[test]
    fn test_floor_to_pixel() {
        assert_eq!(floor_to_pixel(0.0), 0);
        assert_eq!(floor_to_pixel(3.99), 3);
        assert_eq!(floor_to_pixel(17.0), 17);
        assert_eq!(floor_to_pixel(59.15), 59);
        // Saturates instead of wrapping
        assert_eq!(floor_to_pixel(-0.5), 0);
        assert_eq!(floor_to_pixel(-200.0), 0);
        assert_eq!(floor_to_pixel(f32::NAN), 0);
        assert_eq!(floor_to_pixel(1.0e9), u16::MAX);
    }

    #[test]
    fn test_known_pixels() {
        let params = scene_heart();

        // Cleft sits exactly on the center
        assert_eq!(top_y(&params, 64), 17);
        // Closing edges
        assert_eq!(top_y(&params, 38), 12);
        assert_eq!(bottom_y(&params, 38), 21);
        assert_eq!(top_y(&params, 90), 12);
        assert_eq!(bottom_y(&params, 90), 21);
        // Lobe peaks
        assert_eq!(top_y(&params, 50), 3);
        assert_eq!(top_y(&params, 78), 3);
        // Next to the point
        assert_eq!(bottom_y(&params, 63), 53);
        assert_eq!(bottom_y(&params, 65), 53);
    }

    #[test]
    fn test_point_is_lowest() {
        let params = scene_heart();
        let point = bottom_boundary(&params, 64);
        assert!(fabsf(point - (17.0 + sqrtf(180.0) * PI)) < 0.01);
        for x in 38..=90 {
            assert!(bottom_boundary(&params, x) <= point + 0.001);
        }
    }

    #[test]
    fn test_cleft_above_edges() {
        let params = scene_heart();
        let cleft = top_y(&params, 64);
        let edge = bottom_y(&params, 38);
        assert!(cleft < edge);
        assert!(cleft <= 63);
        assert!(edge <= 63);
    }

    #[test]
    fn test_mirror_columns_match() {
        let params = scene_heart();
        for d in 0..=26u16 {
            assert_eq!(top_y(&params, 64 - d), top_y(&params, 64 + d));
            assert_eq!(bottom_y(&params, 64 - d), bottom_y(&params, 64 + d));
        }
    }

    #[test]
    fn test_out_of_domain_is_fail_soft() {
        let params = scene_heart();

        // Far outside [38, 90]: clamped, still a finite value
        let top = top_boundary(&params, 0);
        let bottom = bottom_boundary(&params, 127);
        assert!(top.is_finite());
        assert!(bottom.is_finite());
        assert_eq!(top, 17.0);
        assert!(fabsf(bottom - 17.0) < 0.001);
    }

    #[test]
    fn test_top_above_panel_saturates() {
        // Lobes rise 5 rows above the panel edge
        let params = ShapeParams::new(100.0, 20.0, 5.0).unwrap();
        assert!(top_boundary(&params, 10) < 0.0);
        assert_eq!(top_y(&params, 10), 0);
        assert_eq!(top_y(&params, 20), 5);
    }

    #[test]
    fn test_bottom_past_byte_range_does_not_wrap() {
        // The point of a large heart lands below row 255
        let params = ShapeParams::new(4900.0, 300.0, 40.0).unwrap();
        let point = bottom_y(&params, 300);
        assert!(point > 255);
        assert_eq!(point, floor_to_pixel(40.0 + 70.0 * PI));
    }
}
