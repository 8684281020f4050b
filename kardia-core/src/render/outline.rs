//! Static heart outline

use super::dot::{plot_dot, DotSize};
use crate::geometry::{bottom_y, top_y, HeartSpan, ShapeParams};
use crate::traits::{DrawColor, PixelSurface};

/// Draw one closing side of the heart at column `x`
///
/// `dot` parallel vertical lines joining the lower boundary to the upper
/// one, using the active color.
pub fn draw_closing_edge<S: PixelSurface + ?Sized>(
    surface: &mut S,
    params: &ShapeParams,
    x: u16,
    dot: DotSize,
) {
    let top = top_y(params, x);
    let bottom = bottom_y(params, x);
    for i in 0..u16::from(dot.get()) {
        surface.draw_vline(x.saturating_add(i), bottom, top);
    }
}

/// Draw the complete outline in a single pass
///
/// Sets `color` once if given, then plots both boundaries for every column
/// in the span except the center one, plus the closing edges at `x_min`
/// and `x_max`. Does not present.
pub fn draw_heart<S: PixelSurface + ?Sized>(
    surface: &mut S,
    params: &ShapeParams,
    dot: DotSize,
    color: Option<DrawColor>,
) {
    let Some(span) = HeartSpan::new(params) else {
        return;
    };

    if let Some(color) = color {
        surface.set_color(color);
    }

    for x in span.columns() {
        if x == span.x_min() || x == span.x_max() {
            draw_closing_edge(surface, params, x, dot);
        }

        plot_dot(surface, x, top_y(params, x), dot, None);
        plot_dot(surface, x, bottom_y(params, x), dot, None);
    }
}
