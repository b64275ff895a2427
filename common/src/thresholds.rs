//! Staleness and byte-unit thresholds.
//!
//! All thresholds are compile-time constants with validation assertions,
//! shared by the palette selection and the label formatting code.

use crate::colors::{OUTDATED_PALETTE, Palette, RECENT_PALETTE};

// =============================================================================
// Snapshot Age
// =============================================================================

/// Age (seconds) at which a usage snapshot counts as outdated (2 hours).
/// Younger snapshots use the recent palette.
pub const STALE_AFTER_SECS: i64 = 2 * 60 * 60;

/// Check if a snapshot of the given age is outdated.
///
/// The switch happens exactly at [`STALE_AFTER_SECS`]: an age of exactly two
/// hours is already outdated. Negative ages (clock skew) count as recent.
#[inline]
pub fn is_outdated(age_secs: i64) -> bool { age_secs >= STALE_AFTER_SECS }

/// Select the donut palette for a snapshot of the given age.
#[inline]
pub fn palette_for_age(age_secs: i64) -> Palette {
    if is_outdated(age_secs) {
        OUTDATED_PALETTE
    } else {
        RECENT_PALETTE
    }
}

// =============================================================================
// Byte Units
// =============================================================================

/// Bytes per mebibyte.
pub const MIB: u64 = 1024 * 1024;

/// Bytes per gibibyte. Volumes at or above this render in GiB.
pub const GIB: u64 = 1024 * MIB;

const _: () = assert!(MIB < GIB);

// =============================================================================
// Unit Tests
// =============================================================================
