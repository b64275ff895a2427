//! Pre-computed text styles and font selection.
//!
//! Alignment styles are `const` so they are built at compile time. Label
//! colors vary per palette, so callers build `MonoTextStyle::new(font, color)`
//! with a font reference from [`font_for_size`].

use embedded_graphics::{
    mono_font::MonoFont,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{
    PROFONT_7_POINT, PROFONT_9_POINT, PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT,
    PROFONT_24_POINT,
};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Horizontally and vertically centered on the text position.
/// Used for the donut center label and the widget caption.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font Selection
// =============================================================================

/// Available `ProFont` sizes in points, ascending, paired with their fonts.
const FONT_SIZES: [(u32, &MonoFont<'static>); 7] = [
    (7, &PROFONT_7_POINT),
    (9, &PROFONT_9_POINT),
    (10, &PROFONT_10_POINT),
    (12, &PROFONT_12_POINT),
    (14, &PROFONT_14_POINT),
    (18, &PROFONT_18_POINT),
    (24, &PROFONT_24_POINT),
];

/// Pick the `ProFont` closest to the requested size.
///
/// Sizes below 7pt use 7pt and sizes above 24pt use 24pt. On a tie the
/// smaller font wins, so a label never grows past the requested size.
///
/// Scaled sizes are clamped too: an 18pt label at scale 2 asks for 36pt and
/// gets 24pt. Use [`is_font_size`] to check a size survives scaling.
pub fn font_for_size(points: u32) -> &'static MonoFont<'static> {
    let mut best = FONT_SIZES[0];
    for candidate in FONT_SIZES {
        if candidate.0.abs_diff(points) < best.0.abs_diff(points) {
            best = candidate;
        }
    }
    best.1
}

/// Whether `points` is an exact `ProFont` size.
pub const fn is_font_size(points: u32) -> bool {
    let mut i = 0;
    while i < FONT_SIZES.len() {
        if FONT_SIZES[i].0 == points {
            return true;
        }
        i += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each ProFont size has a distinct glyph cell, so the cell identifies the font.
    fn same_font(a: &MonoFont<'static>, b: &MonoFont<'static>) -> bool { a.character_size == b.character_size }

    #[test]
    fn test_exact_sizes() {
        assert!(same_font(font_for_size(18), &PROFONT_18_POINT));
        assert!(same_font(font_for_size(9), &PROFONT_9_POINT));
    }

    #[test]
    fn test_nearest_size() {
        assert!(same_font(font_for_size(17), &PROFONT_18_POINT));
        assert!(same_font(font_for_size(11), &PROFONT_10_POINT), "tie prefers smaller font");
        assert!(same_font(font_for_size(20), &PROFONT_18_POINT));
    }

    #[test]
    fn test_is_font_size() {
        assert!(is_font_size(12));
        assert!(is_font_size(24));
        assert!(!is_font_size(36));
        assert!(!is_font_size(11));
    }

    #[test]
    fn test_clamped_sizes() {
        assert!(same_font(font_for_size(0), &PROFONT_7_POINT));
        assert!(same_font(font_for_size(96), &PROFONT_24_POINT));
    }
}
