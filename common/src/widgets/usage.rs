//! Usage donut: one used-data arc over the unused track.
//!
//! Turns the raw snapshot values into a [`Donut`]:
//!
//! | Input | Donut |
//! |-------|-------|
//! | `used_percentage` | single segment, clamped to `0..=100` |
//! | `used_volume` | label (`"1.500 GiB"`) when known and non-zero |
//! | otherwise | label (`"42%"`) |
//! | snapshot age | recent or outdated [`Palette`] |

use crate::colors::Palette;
use crate::config::{
    DONUT_CENTER, DONUT_MAX_VALUE, DONUT_RADIUS, DONUT_STROKE_WIDTH, PERCENT_FONT_SIZE, VOLUME_FONT_SIZE,
};
use crate::donut::{CenterLabel, Donut, DonutSegment, DonutSpec};
use crate::format::{Label, format_bytes, format_percentage};
use crate::thresholds::palette_for_age;

/// Owns the segment and label text that a borrowed [`Donut`] points into.
#[derive(Clone, Debug)]
pub struct UsageDonut {
    segments: [DonutSegment; 1],
    label: Label,
    font_size: u32,
    palette: Palette,
}

impl UsageDonut {
    /// Build the donut for a snapshot that is `age_secs` old.
    pub fn new(
        used_percentage: f32,
        used_volume: Option<u64>,
        age_secs: i64,
    ) -> Self {
        let palette = palette_for_age(age_secs);
        let used = if used_percentage.is_finite() {
            used_percentage.clamp(0.0, DONUT_MAX_VALUE)
        } else {
            0.0
        };

        let (label, font_size) = match used_volume {
            Some(bytes) if bytes > 0 => (format_bytes(bytes), VOLUME_FONT_SIZE),
            _ => (format_percentage(used), PERCENT_FONT_SIZE),
        };

        Self {
            segments: [DonutSegment {
                value: used,
                color: palette.used,
            }],
            label,
            font_size,
            palette,
        }
    }

    /// Palette chosen from the snapshot age.
    pub const fn palette(&self) -> Palette { self.palette }

    /// Label text drawn in the middle.
    pub fn label(&self) -> &str { self.label.as_str() }

    /// Donut at the given device scale, in image coordinates.
    pub fn donut(&self, scale: f32) -> Donut<'_> {
        let spec = DonutSpec {
            center_x: DONUT_CENTER,
            center_y: DONUT_CENTER,
            radius: DONUT_RADIUS,
            stroke_width: DONUT_STROKE_WIDTH,
            max_value: DONUT_MAX_VALUE,
            background: Some(self.palette.track),
        };
        Donut {
            spec: spec.scaled(scale),
            segments: &self.segments,
            label: Some(CenterLabel {
                text: self.label.as_str(),
                font_size: (self.font_size as f32 * scale) as u32,
                color: self.palette.label,
            }),
        }
    }
}
