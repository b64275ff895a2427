//! Application configuration.
//!
//! The widget takes no parameters: everything is either a compile-time
//! constant below or derived from them by [`Settings::resolve`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use widget_common::config::{CAPTION_FONT_SIZE, PERCENT_FONT_SIZE, VOLUME_FONT_SIZE};
use widget_common::styles::is_font_size;

// =============================================================================
// Data Acquisition
// =============================================================================

/// Carrier status endpoint. Only answers over the carrier's mobile network.
pub const STATUS_ENDPOINT: &str = "https://pass.telekom.de/api/service/generic/v1/status";

/// Upper bound for the single status request. There is no retry.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Storage
// =============================================================================

/// Directory under the platform data dir that holds all widget files.
pub const APP_DIR_NAME: &str = "mobile-data-widget";

/// Cache file holding the last live snapshot.
pub const CACHE_FILE_NAME: &str = "mobile-data-usage.json";

/// Rendered widget image.
pub const OUTPUT_FILE_NAME: &str = "mobile-data-widget.png";

// =============================================================================
// Presentation
// =============================================================================

/// Device pixels per point.
pub const DEVICE_SCALE: u32 = 2;

/// Show an "updated HH:MM" caption under the donut.
pub const SHOW_UPDATED_CAPTION: bool = true;

const _: () = assert!(DEVICE_SCALE > 0);
// Labels must not hit the font clamp at device scale
const _: () = assert!(is_font_size(PERCENT_FONT_SIZE * DEVICE_SCALE));
const _: () = assert!(is_font_size(VOLUME_FONT_SIZE * DEVICE_SCALE));
const _: () = assert!(is_font_size(CAPTION_FONT_SIZE * DEVICE_SCALE));

// =============================================================================
// Runtime Settings
// =============================================================================

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Status endpoint URL
    pub endpoint: String,
    /// Timeout for the status request
    pub fetch_timeout: Duration,
    /// Cache file path
    pub cache_path: PathBuf,
    /// Where the presented widget PNG is written
    pub output_path: PathBuf,
    /// Device pixels per point
    pub scale: u32,
    /// Whether to draw the "updated" caption
    pub show_caption: bool,
}

impl Settings {
    /// Settings with all files under the platform's local data directory.
    ///
    /// Falls back to the working directory when the platform has none.
    pub fn resolve() -> Self {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);
        Self::in_dir(&base)
    }

    /// Settings with all files under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            endpoint: STATUS_ENDPOINT.to_string(),
            fetch_timeout: FETCH_TIMEOUT,
            cache_path: dir.join(CACHE_FILE_NAME),
            output_path: dir.join(OUTPUT_FILE_NAME),
            scale: DEVICE_SCALE,
            show_caption: SHOW_UPDATED_CAPTION,
        }
    }
}
