//! Rendering crate for the mobile data usage widget.
//!
//! This crate contains the platform-agnostic drawing code used by the host
//! binary:
//!
//! - [`colors`]: Rgb888 color constants and the recent/outdated palettes
//! - [`config`]: Donut geometry and widget layout constants
//! - [`thresholds`]: Staleness and byte-unit thresholds
//! - [`format`]: Byte size and percentage label formatting
//! - [`styles`]: Text alignment styles and label font selection
//! - [`donut`]: The multi-segment donut planner and rasterizer
//! - [`widgets`]: Gradient background, caption and usage donut builder
//!
//! # no_std Compatibility
//!
//! Everything is generic over `DrawTarget<Color = Rgb888>` and formats into
//! `heapless::String`, so the crate builds without an allocator. Tests run
//! with `std` enabled so they can use the standard test harness.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod donut;
pub mod format;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use colors::*;
pub use donut::{CenterLabel, Donut, DonutSegment, DonutSpec, DrawCall, draw_donut, plan, rasterize};
