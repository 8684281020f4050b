//! Configuration type definitions

use heapless::String;
use libm::ceilf;

use crate::geometry::{bottom_boundary, top_boundary, HeartSpan, ShapeError, ShapeParams};
use crate::render::DotSize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum center label length
pub const MAX_LABEL_LEN: usize = 8;

/// Panel width the frame buffer is built for
pub const PANEL_WIDTH: u16 = 128;

/// Panel height the frame buffer and SH1106 multiplex ratio are built for
pub const PANEL_HEIGHT: u16 = 64;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Gain or center unusable
    Shape(ShapeError),
    /// Dot size of zero
    ZeroDotSize,
    /// Gain too small to cover a single drawable column
    EmptySpan,
    /// Heart does not fit the panel
    OutOfBounds,
    /// Panel size other than `PANEL_WIDTH` x `PANEL_HEIGHT`
    InvalidDimensions,
    /// I2C address outside the 7-bit range
    InvalidI2cAddress,
    /// Center label is empty
    EmptyLabel,
}

impl From<ShapeError> for ConfigError {
    fn from(err: ShapeError) -> Self {
        ConfigError::Shape(err)
    }
}

/// Heart shape and animation timing
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeartConfig {
    /// Overall size (~235 fills 64 rows, ~60 fills half)
    pub gain: f32,
    /// Horizontal center in pixels
    pub center_x: f32,
    /// Vertical center (cleft height) in pixels
    pub center_y: f32,
    /// Dot side length in pixels
    pub dot_size: u8,
    /// Wait after each animation step
    pub step_delay_ms: u32,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            gain: 180.0,
            center_x: 64.0,
            center_y: 17.0,
            dot_size: 2,
            step_delay_ms: 2,
        }
    }
}

impl HeartConfig {
    /// Validated shape parameters
    pub fn shape(&self) -> Result<ShapeParams, ShapeError> {
        ShapeParams::new(self.gain, self.center_x, self.center_y)
    }

    /// Dot size, `None` if configured as zero
    pub fn dot(&self) -> Option<DotSize> {
        DotSize::new(self.dot_size)
    }

    /// Check the heart renders entirely inside a `width` x `height` panel
    pub fn validate(&self, width: u16, height: u16) -> Result<(), ConfigError> {
        let params = self.shape()?;
        let dot = self.dot().ok_or(ConfigError::ZeroDotSize)?;

        let Some(span) = HeartSpan::new(&params) else {
            let left = ceilf(params.center_x() - 2.0 * params.root_gain());
            return Err(if left < 0.0 {
                ConfigError::OutOfBounds
            } else {
                ConfigError::EmptySpan
            });
        };

        let bbox = span
            .bounding_box(&params, dot)
            .ok_or(ConfigError::EmptySpan)?;
        if !bbox.fits(width, height) {
            return Err(ConfigError::OutOfBounds);
        }

        // Pixel rows saturate at 0, so a lobe above the panel only shows
        // up in the raw curve
        for x in span.columns() {
            let top = top_boundary(&params, x);
            let bottom = bottom_boundary(&params, x);
            if top < 0.0 || bottom < 0.0 || bottom >= f32::from(height) {
                return Err(ConfigError::OutOfBounds);
            }
        }

        Ok(())
    }
}

/// Panel hardware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayHwConfig {
    /// 7-bit I2C address (typically 0x3C or 0x3D)
    pub i2c_address: u8,
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// Contrast (0-255)
    pub contrast: u8,
    /// First visible RAM column (SH1106 modules start at 2)
    pub column_offset: u8,
}

impl Default for DisplayHwConfig {
    fn default() -> Self {
        Self {
            i2c_address: 0x3C,
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            contrast: 0xCF,
            column_offset: 2,
        }
    }
}

impl DisplayHwConfig {
    /// Check address and dimensions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i2c_address > 0x7F {
            return Err(ConfigError::InvalidI2cAddress);
        }
        if self.width != PANEL_WIDTH || self.height != PANEL_HEIGHT {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Scene configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Heart drawn every frame
    pub heart: HeartConfig,
    /// Text at the center of the panel
    pub center_label: String<MAX_LABEL_LEN>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::with_label(HeartConfig::default(), "21")
    }
}

impl SceneConfig {
    /// Create a scene config, truncating the label to [`MAX_LABEL_LEN`]
    pub fn with_label(heart: HeartConfig, label: &str) -> Self {
        let mut center_label = String::new();
        for ch in label.chars() {
            if center_label.push(ch).is_err() {
                break;
            }
        }
        Self {
            heart,
            center_label,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KardiaConfig {
    /// Panel hardware
    pub display: DisplayHwConfig,
    /// What gets drawn
    pub scene: SceneConfig,
}

impl KardiaConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        self.scene
            .heart
            .validate(self.display.width, self.display.height)?;
        if self.scene.center_label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        Ok(())
    }
}
