//! Linear background gradient.
//!
//! A gradient is an ordered list of color stops with locations in `0.0..=1.0`.
//! Rows between two stops are linearly interpolated in RGB space; rows
//! before the first stop or after the last take that stop's color.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{BACKGROUND_BOTTOM, BLACK};

/// One color stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Rgb888,
    /// Position along the gradient, `0.0` = top, `1.0` = bottom.
    pub location: f32,
}

/// Widget background: `#000000` at the top fading to `#202020` at the bottom.
pub const WIDGET_GRADIENT: [GradientStop; 2] = [
    GradientStop { color: BLACK, location: 0.0 },
    GradientStop {
        color: BACKGROUND_BOTTOM,
        location: 1.0,
    },
];

/// Color of the gradient at position `t`.
///
/// An empty stop list yields black.
pub fn gradient_color(stops: &[GradientStop], t: f32) -> Rgb888 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return BLACK;
    };
    if t <= first.location {
        return first.color;
    }
    if t >= last.location {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if t <= to.location {
            let span = to.location - from.location;
            if span <= 0.0 {
                return to.color;
            }
            return lerp_rgb888(from.color, to.color, (t - from.location) / span);
        }
    }
    last.color
}

/// Fill `area` with a top-to-bottom gradient, one row at a time.
pub fn draw_vertical_gradient<D>(
    display: &mut D,
    area: Rectangle,
    stops: &[GradientStop],
) where
    D: DrawTarget<Color = Rgb888>,
{
    let height = area.size.height;
    if height == 0 || area.size.width == 0 {
        return;
    }
    let last_row = height.saturating_sub(1).max(1) as f32;

    for row in 0..height {
        let color = gradient_color(stops, row as f32 / last_row);
        Rectangle::new(area.top_left + Point::new(0, row as i32), Size::new(area.size.width, 1))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

/// Linear interpolation between two Rgb888 colors.
///
/// Uses 8-bit fixed point for `t`, so `t = 1.0` lands exactly on `to`.
fn lerp_rgb888(from: Rgb888, to: Rgb888, t: f32) -> Rgb888 {
    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;
    let mix = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        (a + (((b - a) * t_fixed) >> 8)).clamp(0, 255) as u8
    };
    Rgb888::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}
