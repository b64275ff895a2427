//! Mobile data usage widget binary.
//!
//! Runs once: fetch or load usage, render, present, exit.

use anyhow::Result;
use chrono::Utc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mobile_data_widget::app;
use mobile_data_widget::config::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_logging();

    let settings = Settings::resolve();
    app::run(&settings, Utc::now()).await?;
    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mobile_data_widget=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
