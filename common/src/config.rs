//! Layout and rendering configuration constants.
//!
//! All sizes are in points. The host multiplies them by the device scale
//! factor before allocating pixel buffers, so one set of constants serves
//! every output density.

// =============================================================================
// Donut Geometry
// =============================================================================

/// Width and height of the rendered donut image.
pub const DONUT_IMAGE_SIZE: u32 = 120;

/// Donut center, in image coordinates (both axes).
pub const DONUT_CENTER: f32 = (DONUT_IMAGE_SIZE / 2) as f32;

/// Stroke width of the ring and every arc sample.
pub const DONUT_STROKE_WIDTH: f32 = 14.0;

/// Ring radius measured to the middle of the stroke.
/// Leaves a one-point margin so end disks are never clipped.
pub const DONUT_RADIUS: f32 = DONUT_CENTER - DONUT_STROKE_WIDTH / 2.0 - 1.0;

/// Value that corresponds to a full ring (usage is a percentage).
pub const DONUT_MAX_VALUE: f32 = 100.0;

/// Arc samples per percentage point of the ring.
///
/// Fixed quality/performance tradeoff: 400 disks for a full ring, one every
/// 0.9°. Disks overlap heavily, which is what closes the gaps between them.
///
/// The step is 0.25 percentage points, not 0.25°. A 0.25° step would need
/// 14.4 samples per percentage point; the fixed factor of 4 wins.
pub const SAMPLES_PER_PERCENT: f32 = 4.0;

/// Center label font size for a percentage (`"42%"`).
///
/// Label sizes are chosen so that both the size and its double are ProFont
/// sizes, so the label keeps its proportion at device scale 2.
pub const PERCENT_FONT_SIZE: u32 = 12;

/// Center label font size for a volume (`"1.500 GiB"`), which is wider.
pub const VOLUME_FONT_SIZE: u32 = 9;

const _: () = assert!(DONUT_STROKE_WIDTH > 0.0);
const _: () = assert!(DONUT_RADIUS + DONUT_STROKE_WIDTH / 2.0 < DONUT_CENTER);

// =============================================================================
// Widget Layout
// =============================================================================

/// Small widget edge length (square).
pub const SMALL_WIDGET_SIZE: u32 = 158;

/// Horizontal gap between images inside a stack.
pub const STACK_SPACING: u32 = 8;

/// Distance from the widget bottom edge to the caption baseline center.
pub const CAPTION_BOTTOM_INSET: u32 = 9;

/// Caption font size.
pub const CAPTION_FONT_SIZE: u32 = 9;

const _: () = assert!(DONUT_IMAGE_SIZE < SMALL_WIDGET_SIZE);
