//! Multi-segment donut chart renderer.
//!
//! A donut is a ring of colored arcs around a common center, with an optional
//! text label in the middle. Rendering happens in two stateless steps:
//!
//! 1. [`plan`] turns a [`Donut`] into an ordered sequence of [`DrawCall`]
//!    records. Every record carries its own geometry and color, so there is
//!    no drawing context holding a "current" stroke color or line width.
//! 2. [`rasterize`] draws a single record onto any
//!    `DrawTarget<Color = Rgb888>`.
//!
//! [`draw_donut`] chains the two.
//!
//! # Arc Sampling
//!
//! Arcs are not stroked natively. Each segment is drawn as a run of filled
//! disks (diameter = stroke width) placed on the ring at
//! [`SAMPLES_PER_PERCENT`] positions per percentage point. Angle 0 is
//! 12 o'clock and angles grow clockwise:
//!
//! ```text
//! x = cx + r * sin(θ)
//! y = cy - r * cos(θ)
//! ```
//!
//! A segment covering exactly `[0, max_value]` is drawn as one stroked circle
//! instead, which avoids a visible seam where the first and last disks meet.
//!
//! # Capping
//!
//! After all segments are drawn, every segment except the last gets one more
//! disk at its end angle, in its own color. This rounds the interior seams
//! and keeps the next segment's first disks from covering the previous
//! segment's end. The start of the first segment and the end of the last are
//! never capped.
//!
//! # Out-of-range Input
//!
//! Nothing is validated. Zero-width and negative spans, non-finite values
//! and a non-positive `max_value` produce empty sample ranges; spans past
//! `max_value` are clamped to one full turn.
//!
//! Each segment samples the half-open range `[start, end)`, so a 0% segment
//! draws nothing and a shared boundary is sampled once, by the segment that
//! starts there.

use core::f32::consts::TAU;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
    text::Text,
};
use micromath::F32;

use crate::config::SAMPLES_PER_PERCENT;
use crate::styles::{CENTERED_MIDDLE, font_for_size};

/// Sample index of a full turn.
const FULL_TURN_SAMPLES: i32 = (100.0 * SAMPLES_PER_PERCENT) as i32;

// =============================================================================
// Donut Description
// =============================================================================

/// Geometry of one donut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutSpec {
    /// Ring center X in pixels.
    pub center_x: f32,
    /// Ring center Y in pixels.
    pub center_y: f32,
    /// Radius to the middle of the stroke.
    pub radius: f32,
    /// Ring thickness; also the diameter of every arc sample.
    pub stroke_width: f32,
    /// Value of a full turn.
    pub max_value: f32,
    /// Color of the full "unused" track drawn under the segments.
    pub background: Option<Rgb888>,
}

impl DonutSpec {
    /// Multiply all pixel geometry by a device scale factor.
    ///
    /// `max_value` and colors are unchanged.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            center_x: self.center_x * factor,
            center_y: self.center_y * factor,
            radius: self.radius * factor,
            stroke_width: self.stroke_width * factor,
            ..self
        }
    }

    /// Ring center snapped to the pixel grid.
    pub fn center(&self) -> Point { Point::new(round(self.center_x), round(self.center_y)) }

    /// Point on the ring at `value` (in `max_value` units) from 12 o'clock.
    pub fn point_at_value(&self, value: f32) -> Point { self.point_at_fraction(value / self.max_value) }

    fn point_at_fraction(&self, fraction: f32) -> Point {
        let angle = F32(fraction * TAU);
        let x = self.center_x + self.radius * angle.sin().0;
        let y = self.center_y - self.radius * angle.cos().0;
        Point::new(round(x), round(y))
    }

    fn ring(&self, color: Rgb888) -> DrawCall<'static> {
        DrawCall::Ring {
            center: self.center(),
            diameter: pixels(self.radius * 2.0),
            stroke_width: pixels(self.stroke_width),
            color,
        }
    }

    /// Sample index of `value`. Saturates for non-finite input.
    fn sample_index(&self, value: f32) -> i32 { round(value / self.max_value * 100.0 * SAMPLES_PER_PERCENT) }
}

/// One colored arc. `value` is this segment's share, not a running total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutSegment {
    pub value: f32,
    pub color: Rgb888,
}

/// Text drawn in the middle of the ring.
///
/// The text is drawn verbatim; formatting is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterLabel<'a> {
    pub text: &'a str,
    /// Requested size in points, matched to the nearest available font.
    pub font_size: u32,
    pub color: Rgb888,
}

/// Everything needed to render one donut.
#[derive(Clone, Copy, Debug)]
pub struct Donut<'a> {
    pub spec: DonutSpec,
    /// Segments in drawing order, starting at 12 o'clock.
    pub segments: &'a [DonutSegment],
    pub label: Option<CenterLabel<'a>>,
}

// =============================================================================
// Draw Calls
// =============================================================================

/// One self-contained drawing instruction produced by [`plan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall<'a> {
    /// Full stroked circle (background track or a full-turn segment).
    Ring {
        center: Point,
        diameter: u32,
        stroke_width: u32,
        color: Rgb888,
    },
    /// Filled disk sampled along a segment's arc.
    Disk { center: Point, diameter: u32, color: Rgb888 },
    /// Filled disk rounding the end of a non-final segment.
    Cap { center: Point, diameter: u32, color: Rgb888 },
    /// Centered text.
    Label {
        text: &'a str,
        center: Point,
        font_size: u32,
        color: Rgb888,
    },
}

/// Emit the draw calls for `donut`, in painting order.
///
/// Order: background track, segments (each as a ring or as sampled disks),
/// interior caps, label.
pub fn plan<'a, F>(donut: &Donut<'a>, mut emit: F)
where
    F: FnMut(DrawCall<'a>),
{
    let spec = &donut.spec;
    let diameter = pixels(spec.stroke_width);

    if let Some(color) = spec.background {
        emit(spec.ring(color));
    }

    let mut start = 0.0f32;
    for segment in donut.segments {
        let end = start + segment.value;

        if start == 0.0 && end == spec.max_value {
            emit(spec.ring(segment.color));
        } else if spec.max_value > 0.0 {
            // Half-open: a boundary sample belongs to the segment that starts there
            let first = spec.sample_index(start).max(0);
            let end_index = spec.sample_index(end).min(FULL_TURN_SAMPLES);
            for index in first..end_index {
                let fraction = index as f32 / (100.0 * SAMPLES_PER_PERCENT);
                emit(DrawCall::Disk {
                    center: spec.point_at_fraction(fraction),
                    diameter,
                    color: segment.color,
                });
            }
        }

        start = end;
    }

    if let Some((_, interior)) = donut.segments.split_last() {
        let mut boundary = 0.0f32;
        for segment in interior {
            boundary += segment.value;
            emit(DrawCall::Cap {
                center: spec.point_at_value(boundary),
                diameter,
                color: segment.color,
            });
        }
    }

    if let Some(label) = donut.label {
        emit(DrawCall::Label {
            text: label.text,
            center: spec.center(),
            font_size: label.font_size,
            color: label.color,
        });
    }
}

/// Draw a single planned call.
pub fn rasterize<D>(call: &DrawCall<'_>, target: &mut D)
where
    D: DrawTarget<Color = Rgb888>,
{
    match *call {
        DrawCall::Ring {
            center,
            diameter,
            stroke_width,
            color,
        } => {
            Circle::with_center(center, diameter)
                .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
                .draw(target)
                .ok();
        }
        DrawCall::Disk { center, diameter, color } | DrawCall::Cap { center, diameter, color } => {
            Circle::with_center(center, diameter)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(target)
                .ok();
        }
        DrawCall::Label {
            text,
            center,
            font_size,
            color,
        } => {
            let style = MonoTextStyle::new(font_for_size(font_size), color);
            Text::with_text_style(text, center, style, CENTERED_MIDDLE)
                .draw(target)
                .ok();
        }
    }
}

/// Plan and rasterize `donut` onto `target`.
///
/// Only pixels covered by the ring, the arcs and the label are touched; the
/// rest of the target keeps whatever it held, which is what makes the donut
/// composable over a transparent canvas or a gradient.
pub fn draw_donut<D>(donut: &Donut<'_>, target: &mut D)
where
    D: DrawTarget<Color = Rgb888>,
{
    plan(donut, |call| rasterize(&call, target));
}

// =============================================================================
// Pixel Helpers
// =============================================================================

#[inline]
fn round(value: f32) -> i32 { F32(value).round().0 as i32 }

/// Round a length to whole pixels, never below one.
#[inline]
fn pixels(length: f32) -> u32 { round(length).max(1) as u32 }

// =============================================================================
// Unit Tests
// =============================================================================
