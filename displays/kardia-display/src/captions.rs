//! Corner captions and the center label

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use kardia_core::scene::Corner;

/// Gap between captions and the panel edge
const MARGIN: i32 = 2;

/// Caption line pitch (6x10 font plus one row)
const LINE_HEIGHT: i32 = 11;

/// Center label offset left of the panel midpoint
const LABEL_OFFSET_X: i32 = 14;

/// Caption text for a corner, top line first
pub fn caption_lines(corner: Corner) -> &'static [&'static str] {
    match corner {
        Corner::TopLeft => &["ooOoO"],
        Corner::TopRight => &["BONK"],
        Corner::BottomLeft => &["party", "time!"],
        Corner::BottomRight => &["wowza?!"],
    }
}

/// Draw the caption for `corner`, lit, hugging that corner
pub fn draw_caption<D>(target: &mut D, corner: Corner) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let size = target.size();
    let (width, height) = (size.width as i32, size.height as i32);
    let lines = caption_lines(corner);

    let (x, alignment) = if corner.is_left() {
        (MARGIN, Alignment::Left)
    } else {
        (width - MARGIN, Alignment::Right)
    };
    let first_y = if corner.is_top() {
        MARGIN
    } else {
        height - MARGIN - lines.len() as i32 * LINE_HEIGHT
    };

    let character_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();

    for (i, line) in lines.iter().enumerate() {
        let position = Point::new(x, first_y + i as i32 * LINE_HEIGHT);
        Text::with_text_style(line, position, character_style, text_style).draw(target)?;
    }
    Ok(())
}

/// Draw the center label with its baseline on the middle row
pub fn draw_center_label<D>(target: &mut D, label: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let size = target.size();
    let position = Point::new(
        size.width as i32 / 2 - LABEL_OFFSET_X,
        size.height as i32 / 2,
    );
    let character_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    Text::with_baseline(label, position, character_style, Baseline::Alphabetic).draw(target)?;
    Ok(())
}
