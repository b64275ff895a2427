//! Widget container and presentation.
//!
//! Mirrors a home-screen widget: a fixed-size container with a background
//! gradient, one horizontal stack of images centered in it, and an optional
//! caption along the bottom edge. Rendering goes into a
//! `SimulatorDisplay<Rgb888>`; presenting writes that display out as a PNG.
//!
//! All layout constants are in points and multiplied by the device scale.

use std::path::Path;

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use tracing::info;
use widget_common::colors::CAPTION_GRAY;
use widget_common::config::{CAPTION_BOTTOM_INSET, CAPTION_FONT_SIZE, SMALL_WIDGET_SIZE};
use widget_common::widgets::{GradientStop, draw_caption, draw_vertical_gradient};

use crate::canvas::DonutCanvas;

// =============================================================================
// Horizontal Stack
// =============================================================================

/// Images laid out left to right with fixed spacing, vertically centered.
pub struct HStack {
    images: Vec<DonutCanvas>,
    spacing: u32,
}

impl HStack {
    pub fn new(spacing: u32) -> Self {
        Self {
            images: Vec::new(),
            spacing,
        }
    }

    pub fn add_image(&mut self, image: DonutCanvas) { self.images.push(image); }

    /// Bounding size of the laid out images.
    pub fn size(&self) -> Size {
        let gaps = self.images.len().saturating_sub(1) as u32 * self.spacing;
        let width = self.images.iter().map(|image| image.size().width).sum::<u32>() + gaps;
        let height = self.images.iter().map(|image| image.size().height).max().unwrap_or(0);
        Size::new(width, height)
    }

    /// Top-left corner of every image when the stack is centered on `center`.
    pub fn layout(&self, center: Point) -> Vec<Point> {
        let size = self.size();
        let mut x = center.x - (size.width / 2) as i32;
        self.images
            .iter()
            .map(|image| {
                let image_size = image.size();
                let top_left = Point::new(x, center.y - (image_size.height / 2) as i32);
                x += (image_size.width + self.spacing) as i32;
                top_left
            })
            .collect()
    }

    fn draw<D>(&self, target: &mut D, center: Point)
    where
        D: DrawTarget<Color = Rgb888>,
    {
        for (image, top_left) in self.images.iter().zip(self.layout(center)) {
            image.draw_onto(target, top_left);
        }
    }
}

// =============================================================================
// Widget
// =============================================================================

/// One small widget, built up and then presented once.
pub struct Widget {
    size: Size,
    scale: u32,
    gradient: Vec<GradientStop>,
    stack: HStack,
    caption: Option<String>,
}

impl Widget {
    /// Small square widget at `scale` device pixels per point.
    pub fn small(scale: u32, stack: HStack) -> Self {
        let edge = SMALL_WIDGET_SIZE * scale;
        Self {
            size: Size::new(edge, edge),
            scale,
            gradient: Vec::new(),
            stack,
            caption: None,
        }
    }

    /// Pixel size of the rendered widget.
    pub fn size(&self) -> Size { self.size }

    pub fn set_background_gradient(&mut self, stops: &[GradientStop]) { self.gradient = stops.to_vec(); }

    pub fn set_caption(&mut self, caption: impl Into<String>) { self.caption = Some(caption.into()); }

    /// Rasterize background, stack and caption.
    pub fn render(&self) -> SimulatorDisplay<Rgb888> {
        let mut display = SimulatorDisplay::new(self.size);
        let area = display.bounding_box();
        draw_vertical_gradient(&mut display, area, &self.gradient);

        let center = area.center();
        self.stack.draw(&mut display, center);

        if let Some(caption) = &self.caption {
            let baseline = Point::new(center.x, (self.size.height - CAPTION_BOTTOM_INSET * self.scale) as i32);
            draw_caption(&mut display, caption, baseline, CAPTION_FONT_SIZE * self.scale, CAPTION_GRAY);
        }
        display
    }

    /// Render the widget and write it to `path` as a PNG.
    ///
    /// Consumes the widget: it is presented exactly once per run. With the
    /// `window` feature a preview window is also shown until closed.
    pub fn present_small(self, path: &Path) -> Result<()> {
        let display = self.render();
        let output_settings = OutputSettingsBuilder::new().scale(1).build();

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        display
            .to_rgb_output_image(&output_settings)
            .save_png(path)
            .with_context(|| format!("Failed to write widget image to {}", path.display()))?;
        info!("Widget presented at {}", path.display());

        #[cfg(feature = "window")]
        {
            let mut window = embedded_graphics_simulator::Window::new("Mobile Data", &output_settings);
            window.show_static(&display);
        }

        Ok(())
    }
}
