//! Animated "drawn by hand" sequence
//!
//! Replays the static outline in three phases, presenting and waiting
//! after every step:
//!
//! 1. Top sweep: `n` steps from the cleft outward, one mirrored pair of
//!    upper-boundary dots per step (the first step also takes `x_mid`).
//! 2. Closure: both closing edges and their boundary dots in one step.
//! 3. Bottom sweep: `n` steps from the edges in toward the point, one
//!    mirrored pair of lower-boundary dots per step (the last step also
//!    takes the middle column(s) left between the arms).
//!
//! `n = x_mid - x_min`, so a full sequence presents `2n + 1` times. Every
//! dot is plotted with the surface's active color: select On to reveal,
//! Off to erase. The touched pixels are exactly those of
//! [`draw_heart`](super::draw_heart), so an erase pass after a static draw
//! leaves nothing behind.
//!
//! The wait is a blocking delay and a started sequence always runs to
//! completion unless presenting fails.

use embedded_hal::delay::DelayNs;

use super::dot::{plot_dot, DotSize};
use super::outline::draw_closing_edge;
use crate::geometry::{bottom_y, top_y, HeartSpan, ShapeParams};
use crate::traits::{DisplayError, PixelSurface};

/// Plots heart dots with the active color, skipping the center column
struct Pen<'a, S: ?Sized> {
    surface: &'a mut S,
    params: &'a ShapeParams,
    span: HeartSpan,
    dot: DotSize,
}

impl<S: PixelSurface + ?Sized> Pen<'_, S> {
    fn top(&mut self, x: u16) {
        if !self.span.is_skipped(x) {
            let y = top_y(self.params, x);
            plot_dot(self.surface, x, y, self.dot, None);
        }
    }

    fn bottom(&mut self, x: u16) {
        if !self.span.is_skipped(x) {
            let y = bottom_y(self.params, x);
            plot_dot(self.surface, x, y, self.dot, None);
        }
    }

    fn side(&mut self, x: u16) {
        if !self.span.is_skipped(x) {
            draw_closing_edge(self.surface, self.params, x, self.dot);
            self.top(x);
            self.bottom(x);
        }
    }

    fn present<D: DelayNs + ?Sized>(
        &mut self,
        delay: &mut D,
        step_delay_ms: u32,
    ) -> Result<(), DisplayError> {
        self.surface.present()?;
        delay.delay_ms(step_delay_ms);
        Ok(())
    }
}

/// Draw (or erase) the heart progressively
///
/// Returns the number of steps presented. An empty span draws and presents
/// nothing.
pub fn draw_heart_seq<S, D>(
    surface: &mut S,
    delay: &mut D,
    params: &ShapeParams,
    dot: DotSize,
    step_delay_ms: u32,
) -> Result<usize, DisplayError>
where
    S: PixelSurface + ?Sized,
    D: DelayNs + ?Sized,
{
    let Some(span) = HeartSpan::new(params) else {
        return Ok(0);
    };

    let mut pen = Pen {
        surface,
        params,
        span,
        dot,
    };
    let (x_min, x_mid, x_max) = (span.x_min(), span.x_mid(), span.x_max());
    let half = span.half_width();
    let mut steps = 0;

    // Top, center outward
    for offset in 1..=half {
        if offset == 1 {
            pen.top(x_mid);
        }
        pen.top(x_mid - offset);
        pen.top(x_mid + offset);
        pen.present(delay, step_delay_ms)?;
        steps += 1;
    }

    // Left and right sides
    pen.side(x_min);
    pen.side(x_max);
    pen.present(delay, step_delay_ms)?;
    steps += 1;

    // Bottom, outside in
    for i in 0..half {
        pen.bottom(x_min + i);
        pen.bottom(x_max - i);
        if i + 1 == half {
            for x in (x_min + half)..=(x_max - half) {
                pen.bottom(x);
            }
        }
        pen.present(delay, step_delay_ms)?;
        steps += 1;
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::draw_heart;
    use crate::render::testing::{CountingDelay, RecordingSurface};
    use crate::traits::DrawColor;

    fn scene_heart() -> ShapeParams {
        ShapeParams::new(180.0, 64.0, 17.0).unwrap()
    }

    #[test]
    fn test_step_count() {
        let mut surface = RecordingSurface::new();
        let mut delay = CountingDelay::default();
        let steps = draw_heart_seq(
            &mut surface,
            &mut delay,
            &scene_heart(),
            DotSize::new(2).unwrap(),
            2,
        )
        .unwrap();

        // n = 64 - 38 = 26 per sweep, plus the closure
        assert_eq!(steps, 53);
        assert_eq!(surface.presents, 53);
        assert_eq!(delay.calls, 53);
        assert_eq!(delay.total_ms, 106);
    }

    #[test]
    fn test_reveal_matches_static() {
        let params = scene_heart();
        let dot = DotSize::new(2).unwrap();

        let mut animated = RecordingSurface::new();
        draw_heart_seq(&mut animated, &mut CountingDelay::default(), &params, dot, 0).unwrap();

        let mut drawn = RecordingSurface::new();
        draw_heart(&mut drawn, &params, dot, Some(DrawColor::On));

        assert!(animated.same_pixels(&drawn));
        // Sequence never switches color itself
        assert_eq!(animated.color_changes, 0);
    }

    #[test]
    fn test_reveal_order() {
        let mut surface = RecordingSurface::new();
        draw_heart_seq(
            &mut surface,
            &mut CountingDelay::default(),
            &scene_heart(),
            DotSize::new(2).unwrap(),
            0,
        )
        .unwrap();

        // First step: the pair beside the cleft only (x_mid itself is skipped)
        assert_eq!(surface.frames[0], 8);
        // Every step adds, never removes
        assert!(surface.frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(surface.frames.last().copied(), Some(340));
    }

    #[test]
    fn test_erase_after_static_leaves_nothing() {
        let params = scene_heart();
        let dot = DotSize::new(2).unwrap();
        let mut surface = RecordingSurface::new();

        draw_heart(&mut surface, &params, dot, Some(DrawColor::On));
        surface.set_color(DrawColor::Off);
        draw_heart_seq(&mut surface, &mut CountingDelay::default(), &params, dot, 0).unwrap();

        assert_eq!(surface.lit_count(), 0);
        assert!(surface.frames.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_erase_fractional_center() {
        // Arms of unequal length around x_mid
        let params = ShapeParams::new(180.0, 64.6, 17.0).unwrap();
        let dot = DotSize::new(2).unwrap();
        let mut surface = RecordingSurface::new();

        draw_heart(&mut surface, &params, dot, Some(DrawColor::On));
        assert!(surface.lit_count() > 0);
        surface.set_color(DrawColor::Off);
        let steps =
            draw_heart_seq(&mut surface, &mut CountingDelay::default(), &params, dot, 0).unwrap();

        assert_eq!(steps, 53);
        assert_eq!(surface.lit_count(), 0);
    }

    #[test]
    fn test_center_column_never_plotted() {
        let mut surface = RecordingSurface::new();
        draw_heart_seq(
            &mut surface,
            &mut CountingDelay::default(),
            &scene_heart(),
            DotSize::MIN,
            0,
        )
        .unwrap();

        assert_eq!(surface.column_writes[64], 0);
    }

    #[test]
    fn test_present_failure_stops_sequence() {
        let mut surface = RecordingSurface::new();
        surface.fail_on_present = Some(3);
        let mut delay = CountingDelay::default();

        let result = draw_heart_seq(
            &mut surface,
            &mut delay,
            &scene_heart(),
            DotSize::new(2).unwrap(),
            2,
        );

        assert_eq!(result, Err(DisplayError::Communication));
        assert_eq!(surface.presents, 3);
        assert_eq!(delay.calls, 2);
    }

    #[test]
    fn test_empty_span() {
        let params = ShapeParams::new(0.01, 64.5, 17.0).unwrap();
        let mut surface = RecordingSurface::new();
        let mut delay = CountingDelay::default();

        let steps = draw_heart_seq(&mut surface, &mut delay, &params, DotSize::MIN, 5).unwrap();

        assert_eq!(steps, 0);
        assert_eq!(surface.presents, 0);
        assert_eq!(delay.calls, 0);
    }

    #[test]
    fn test_single_skipped_column() {
        // One column, and it is the center: only the closure step remains
        let params = ShapeParams::new(0.01, 64.0, 17.0).unwrap();
        let mut surface = RecordingSurface::new();

        let steps = draw_heart_seq(
            &mut surface,
            &mut CountingDelay::default(),
            &params,
            DotSize::MIN,
            0,
        )
        .unwrap();

        assert_eq!(steps, 1);
        assert_eq!(surface.lit_count(), 0);
    }
}
