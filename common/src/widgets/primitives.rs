//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::styles::{CENTERED_MIDDLE, font_for_size};

/// Draw a single line of text centered on `center`.
///
/// Used for the "updated" caption under the donut.
pub fn draw_caption<D>(
    display: &mut D,
    text: &str,
    center: Point,
    font_size: u32,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if text.is_empty() {
        return;
    }
    let style = MonoTextStyle::new(font_for_size(font_size), color);
    Text::with_text_style(text, center, style, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}
