//! Label formatting into stack-allocated strings.
//!
//! Labels are formatted with `core::fmt::Write` into `heapless::String` so
//! the renderer never needs an allocator. A label that would overflow the
//! buffer is truncated at the failing write rather than reported.

use core::fmt::Write;

use heapless::String;

use crate::thresholds::{GIB, MIB};

/// Capacity of a formatted label. Fits `u64::MAX` bytes as GiB.
pub const LABEL_CAPACITY: usize = 24;

/// A formatted donut label.
pub type Label = String<LABEL_CAPACITY>;

/// Format a byte count as a human-readable size.
///
/// Below one GiB the value is shown in MiB with one decimal (`"512.0 MiB"`);
/// from exactly one GiB upwards it is shown in GiB with three decimals
/// (`"1.000 GiB"`).
pub fn format_bytes(bytes: u64) -> Label {
    let mut label = Label::new();
    if bytes < GIB {
        let _ = write!(label, "{:.1} MiB", bytes as f64 / MIB as f64);
    } else {
        let _ = write!(label, "{:.3} GiB", bytes as f64 / GIB as f64);
    }
    label
}

/// Format a usage percentage as a whole number (`"42%"`).
pub fn format_percentage(percentage: f32) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "{percentage:.0}%");
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_mib() {
        assert_eq!(format_bytes(0).as_str(), "0.0 MiB");
        assert_eq!(format_bytes(512 * MIB).as_str(), "512.0 MiB");
        assert_eq!(format_bytes(1_572_864).as_str(), "1.5 MiB");
    }

    #[test]
    fn test_format_bytes_gib_boundary() {
        // One byte short of a GiB still renders in MiB
        assert!(format_bytes(GIB - 1).ends_with(" MiB"));
        assert_eq!(format_bytes(GIB).as_str(), "1.000 GiB");
    }

    #[test]
    fn test_format_bytes_gib() {
        assert_eq!(format_bytes(GIB + GIB / 2).as_str(), "1.500 GiB");
        assert_eq!(format_bytes(10 * GIB).as_str(), "10.000 GiB");
    }

    #[test]
    fn test_format_bytes_max_fits() {
        let label = format_bytes(u64::MAX);
        assert!(label.ends_with(" GiB"), "u64::MAX should format completely: {label}");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0).as_str(), "0%");
        assert_eq!(format_percentage(42.4).as_str(), "42%");
        assert_eq!(format_percentage(100.0).as_str(), "100%");
    }
}
