//! Ordered usage sources with a single terminal default.
//!
//! The widget asks each [`UsageSource`] in priority order and keeps the
//! first snapshot it gets:
//!
//! 1. [`LiveSource`]: one GET to the status endpoint. On success the result
//!    is also written to the cache.
//! 2. [`CacheSource`]: the last live result from disk.
//! 3. [`UsageSnapshot::empty`]: zero usage, measured now.
//!
//! Every failure is logged and treated as "no data from this source".

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::error::AcquireError;
use crate::snapshot::{StatusResponse, UsageSnapshot};

/// A place a usage snapshot may come from.
#[async_trait]
pub trait UsageSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// The snapshot, or `None` when this source has nothing usable.
    async fn snapshot(&self, now: DateTime<Utc>) -> Option<UsageSnapshot>;
}

/// Return the first snapshot any source yields, else zero usage at `now`.
pub async fn resolve(sources: &[Box<dyn UsageSource>], now: DateTime<Utc>) -> UsageSnapshot {
    for source in sources {
        if let Some(snapshot) = source.snapshot(now).await {
            info!("Usage from {}: {:.1}%", source.name(), snapshot.used_percentage);
            return snapshot;
        }
        debug!("No usage from {}", source.name());
    }
    info!("No usage source available, using defaults");
    UsageSnapshot::empty(now)
}

// =============================================================================
// Live Source
// =============================================================================

/// Status endpoint over HTTP.
pub struct LiveSource {
    client: Client,
    endpoint: String,
    cache: CacheStore,
}

impl LiveSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, cache: CacheStore) -> Result<Self, AcquireError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            cache,
        })
    }

    /// Issue the status request and decode the body.
    ///
    /// Non-2xx responses are errors: the endpoint refuses requests that do
    /// not arrive over the carrier's mobile network.
    pub async fn fetch(&self, now: DateTime<Utc>) -> Result<UsageSnapshot, AcquireError> {
        let response: StatusResponse = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.into_snapshot(now))
    }
}

#[async_trait]
impl UsageSource for LiveSource {
    fn name(&self) -> &'static str { "network" }

    async fn snapshot(&self, now: DateTime<Utc>) -> Option<UsageSnapshot> {
        match self.fetch(now).await {
            Ok(snapshot) => {
                if let Err(e) = self.cache.write(&snapshot) {
                    warn!("Failed to update usage cache: {}", e);
                }
                Some(snapshot)
            }
            Err(e) => {
                warn!("Live usage unavailable: {}", e);
                None
            }
        }
    }
}

// =============================================================================
// Cache Source
// =============================================================================

/// The cache file written by [`LiveSource`].
pub struct CacheSource {
    store: CacheStore,
}

impl CacheSource {
    pub fn new(store: CacheStore) -> Self { Self { store } }
}

#[async_trait]
impl UsageSource for CacheSource {
    fn name(&self) -> &'static str { "cache" }

    async fn snapshot(&self, now: DateTime<Utc>) -> Option<UsageSnapshot> {
        match self.store.read(now) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Cached usage unavailable: {}", e);
                None
            }
        }
    }
}
