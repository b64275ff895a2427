//! Color constants for the usage widget.
//!
//! Colors are `Rgb888` because the widget background gradient needs the full
//! 8-bit range (`#000000` → `#202020` is only four steps wide in Rgb565).

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Top stop of the widget background gradient.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Label color on the recent palette.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Widget Colors
// =============================================================================

/// Bottom stop of the widget background gradient (`#202020`).
pub const BACKGROUND_BOTTOM: Rgb888 = Rgb888::new(0x20, 0x20, 0x20);

/// Used-data arc while the snapshot is fresh (`#30D158`).
pub const USED_GREEN: Rgb888 = Rgb888::new(0x30, 0xD1, 0x58);

/// Unused track behind a fresh snapshot (`#3A3A3C`).
pub const TRACK_GRAY: Rgb888 = Rgb888::new(0x3A, 0x3A, 0x3C);

/// Used-data arc and label once the snapshot is stale (`#8E8E93`).
pub const STALE_GRAY: Rgb888 = Rgb888::new(0x8E, 0x8E, 0x93);

/// Unused track behind a stale snapshot (`#2C2C2E`).
pub const STALE_TRACK: Rgb888 = Rgb888::new(0x2C, 0x2C, 0x2E);

/// Caption text under the donut (`#A0A0A0`).
pub const CAPTION_GRAY: Rgb888 = Rgb888::new(0xA0, 0xA0, 0xA0);

// =============================================================================
// Palettes
// =============================================================================

/// Colors used to draw one usage donut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Arc color for the used share.
    pub used: Rgb888,
    /// Background track color (the unused share).
    pub track: Rgb888,
    /// Center label color.
    pub label: Rgb888,
}

/// Palette for a snapshot younger than [`crate::thresholds::STALE_AFTER_SECS`].
pub const RECENT_PALETTE: Palette = Palette {
    used: USED_GREEN,
    track: TRACK_GRAY,
    label: WHITE,
};

/// Palette for a snapshot at or past [`crate::thresholds::STALE_AFTER_SECS`].
pub const OUTDATED_PALETTE: Palette = Palette {
    used: STALE_GRAY,
    track: STALE_TRACK,
    label: STALE_GRAY,
};
