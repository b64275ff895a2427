//! One widget run: acquire usage, render the donut, present the widget.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use embedded_graphics::prelude::*;
use tracing::{debug, warn};
use widget_common::config::{DONUT_IMAGE_SIZE, STACK_SPACING};
use widget_common::draw_donut;
use widget_common::widgets::{UsageDonut, WIDGET_GRADIENT};

use crate::cache::CacheStore;
use crate::canvas::DonutCanvas;
use crate::config::Settings;
use crate::snapshot::UsageSnapshot;
use crate::source::{CacheSource, LiveSource, UsageSource, resolve};
use crate::widget::{HStack, Widget};

/// Sources in priority order: network, then cache.
///
/// If the HTTP client cannot be built the network source is left out and
/// the run continues from the cache.
pub fn usage_sources(settings: &Settings) -> Vec<Box<dyn UsageSource>> {
    let cache = CacheStore::new(&settings.cache_path);
    let mut sources: Vec<Box<dyn UsageSource>> = Vec::with_capacity(2);

    match LiveSource::new(&settings.endpoint, settings.fetch_timeout, cache.clone()) {
        Ok(live) => sources.push(Box::new(live)),
        Err(e) => warn!("Network source disabled: {}", e),
    }
    sources.push(Box::new(CacheSource::new(cache)));
    sources
}

/// Rasterize the usage donut at device scale onto a transparent canvas.
pub fn render_donut(snapshot: &UsageSnapshot, now: DateTime<Utc>, scale: u32) -> DonutCanvas {
    let age_secs = snapshot.age(now).num_seconds();
    let usage = UsageDonut::new(snapshot.used_percentage as f32, snapshot.used_volume, age_secs);
    debug!("Donut label {:?}, snapshot age {}s", usage.label(), age_secs);

    let edge = DONUT_IMAGE_SIZE * scale;
    let mut canvas = DonutCanvas::new(Size::new(edge, edge));
    draw_donut(&usage.donut(scale as f32), &mut canvas);
    canvas
}

/// Assemble the small widget for `snapshot`.
pub fn build_widget(snapshot: &UsageSnapshot, now: DateTime<Utc>, settings: &Settings) -> Widget {
    let mut stack = HStack::new(STACK_SPACING * settings.scale);
    stack.add_image(render_donut(snapshot, now, settings.scale));

    let mut widget = Widget::small(settings.scale, stack);
    widget.set_background_gradient(&WIDGET_GRADIENT);
    if settings.show_caption {
        let local = snapshot.timestamp.with_timezone(&Local);
        widget.set_caption(format!("updated {}", local.format("%H:%M")));
    }
    widget
}

/// Run the widget once and present it.
///
/// Only presentation can fail; missing data falls back to defaults.
pub async fn run(settings: &Settings, now: DateTime<Utc>) -> Result<UsageSnapshot> {
    let sources = usage_sources(settings);
    let snapshot = resolve(&sources, now).await;
    build_widget(&snapshot, now, settings).present_small(&settings.output_path)?;
    Ok(snapshot)
}
