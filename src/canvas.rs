//! Transparent RGBA canvas for the donut image.
//!
//! Starts fully transparent; every pixel drawn through `DrawTarget` becomes
//! opaque. Drawing outside the canvas is clipped silently.

use std::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use image::{Rgba, RgbaImage};

/// Pixel buffer with an alpha channel.
pub struct DonutCanvas {
    image: RgbaImage,
}

impl DonutCanvas {
    /// Transparent canvas of `size` pixels.
    pub fn new(size: Size) -> Self {
        Self {
            image: RgbaImage::new(size.width, size.height),
        }
    }

    /// Color at `point`, `None` where nothing was drawn or outside the canvas.
    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        let (x, y) = self.index(point)?;
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        (a > 0).then(|| Rgb888::new(r, g, b))
    }

    /// Copy the opaque pixels onto `target` with the canvas origin at `top_left`.
    pub fn draw_onto<D>(&self, target: &mut D, top_left: Point)
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pixels = self.image.enumerate_pixels().filter_map(|(x, y, px)| {
            let Rgba([r, g, b, a]) = *px;
            (a > 0).then(|| Pixel(top_left + Point::new(x as i32, y as i32), Rgb888::new(r, g, b)))
        });
        target.draw_iter(pixels).ok();
    }

    fn index(&self, point: Point) -> Option<(u32, u32)> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        (x < self.image.width() && y < self.image.height()).then_some((x, y))
    }
}

impl OriginDimensions for DonutCanvas {
    fn size(&self) -> Size { Size::new(self.image.width(), self.image.height()) }
}

impl DrawTarget for DonutCanvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = self.index(point) {
                self.image.put_pixel(x, y, Rgba([color.r(), color.g(), color.b(), u8::MAX]));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{Circle, PrimitiveStyle};
    use widget_common::{DonutSegment, DonutSpec, Donut, draw_donut};

    use super::*;

    const RED: Rgb888 = Rgb888::new(255, 0, 0);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = DonutCanvas::new(Size::new(8, 4));
        assert_eq!(canvas.size(), Size::new(8, 4));
        assert!(canvas.bounding_box().points().all(|p| canvas.pixel(p).is_none()));
        assert_eq!(canvas.pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn test_drawing_is_clipped() {
        let mut canvas = DonutCanvas::new(Size::new(10, 10));
        Circle::with_center(Point::new(0, 0), 8)
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut canvas)
            .unwrap();

        assert_eq!(canvas.pixel(Point::new(0, 0)), Some(RED));
        assert_eq!(canvas.pixel(Point::new(-1, 0)), None);
        assert_eq!(canvas.pixel(Point::new(9, 9)), None);
    }

    #[test]
    fn test_donut_leaves_background_transparent() {
        let spec = DonutSpec {
            center_x: 60.0,
            center_y: 60.0,
            radius: 50.0,
            stroke_width: 14.0,
            max_value: 100.0,
            background: None,
        };
        let segments = [DonutSegment { value: 100.0, color: RED }];
        let mut canvas = DonutCanvas::new(Size::new(120, 120));
        draw_donut(&Donut { spec, segments: &segments, label: None }, &mut canvas);

        assert_eq!(canvas.pixel(Point::new(60, 10)), Some(RED));
        assert_eq!(canvas.pixel(Point::new(60, 60)), None);
        assert_eq!(canvas.pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_draw_onto_skips_transparent_pixels() {
        let mut canvas = DonutCanvas::new(Size::new(4, 4));
        Pixel(Point::new(1, 1), RED).draw(&mut canvas).unwrap();

        let mut target = DonutCanvas::new(Size::new(8, 8));
        let blue = Rgb888::new(0, 0, 255);
        target.clear(blue).unwrap();
        canvas.draw_onto(&mut target, Point::new(2, 3));

        assert_eq!(target.pixel(Point::new(3, 4)), Some(RED));
        assert_eq!(target.pixel(Point::new(2, 3)), Some(blue));
    }
}
