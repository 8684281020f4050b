//! Scene composer
//!
//! One call per frame: caption in a fresh corner, the center label, then a
//! full heart animation pass. Odd frames draw the heart in, even frames
//! erase it again.

use embedded_hal::delay::DelayNs;
use kardia_core::config::{ConfigError, SceneConfig, MAX_LABEL_LEN};
use kardia_core::geometry::ShapeParams;
use kardia_core::render::{draw_heart, draw_heart_seq, DotSize};
use kardia_core::scene::FrameState;
use kardia_core::traits::{DrawColor, PixelSurface};

use crate::backend::{DisplayBackend, DisplayError};
use crate::canvas::Canvas;
use crate::captions::{draw_caption, draw_center_label};

/// Result of one composed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameOutcome {
    /// State to pass into the next frame
    pub next: FrameState,
    /// Animation steps presented
    pub steps: usize,
}

/// Validated scene, ready to draw frames
#[derive(Debug, Clone)]
pub struct SceneComposer {
    params: ShapeParams,
    dot: DotSize,
    step_delay_ms: u32,
    label: heapless::String<MAX_LABEL_LEN>,
}

impl SceneComposer {
    /// Resolve the heart parameters of a scene
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        let heart = &config.heart;
        Ok(Self {
            params: heart.shape()?,
            dot: heart.dot().ok_or(ConfigError::ZeroDotSize)?,
            step_delay_ms: heart.step_delay_ms,
            label: config.center_label.clone(),
        })
    }

    /// Compose and animate one frame
    ///
    /// Blocks for the whole animation pass. On a present failure the frame
    /// is abandoned and the error returned; the caller keeps its old state.
    pub fn frame<B, D>(
        &self,
        canvas: &mut Canvas<B>,
        delay: &mut D,
        state: FrameState,
        roll: u8,
    ) -> Result<FrameOutcome, DisplayError>
    where
        B: DisplayBackend,
        D: DelayNs,
    {
        let next = state.advance(roll);

        canvas.clear();
        canvas.set_color(DrawColor::On);
        let Ok(()) = draw_caption(canvas, next.corner);
        let Ok(()) = draw_center_label(canvas, &self.label);

        if state.phase.is_shown() {
            // Put the heart back so the erase pass has something to remove
            draw_heart(canvas, &self.params, self.dot, Some(DrawColor::On));
            canvas.set_color(DrawColor::Off);
        } else {
            canvas.set_color(DrawColor::On);
        }

        let steps = draw_heart_seq(canvas, delay, &self.params, self.dot, self.step_delay_ms)?;

        Ok(FrameOutcome { next, steps })
    }
}
