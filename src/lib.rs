//! Mobile data usage widget.
//!
//! Fetches the carrier's data-usage status once, falls back to the last
//! cached value when offline, and presents a small widget with a donut chart
//! of the used share over a dark gradient.
//!
//! - [`config`]: Constants and resolved [`Settings`](config::Settings)
//! - [`snapshot`]: Usage snapshot model and endpoint wire format
//! - [`cache`]: JSON cache file
//! - [`source`]: Ordered usage sources and the fallback chain
//! - [`canvas`]: Transparent RGBA canvas for the donut image
//! - [`widget`]: Widget container, horizontal stack and presentation
//! - [`app`]: One complete run
//!
//! Drawing itself lives in the `no_std` `widget-common` crate.

pub mod app;
pub mod cache;
pub mod canvas;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod source;
pub mod widget;
