//! Content providers.
//!
//! The store asks a `ContentProvider` for a mood's bundle. The bundled
//! provider stands in for a remote service: it waits out a configurable
//! latency, then answers from the static catalog.

use std::time::Duration;

use async_trait::async_trait;

use crate::catalog;
use crate::error::GenerationError;
use crate::models::{ContentBundle, MoodKey};

/// Default simulated round-trip time
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Source of content bundles
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self, mood: MoodKey) -> Result<ContentBundle, GenerationError>;
}

/// Catalog-backed provider with artificial latency
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    latency: Duration,
    offline: bool,
}

impl SimulatedProvider {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            offline: false,
        }
    }

    /// A provider whose every fetch fails after the latency elapses
    pub fn offline(latency: Duration) -> Self {
        Self {
            latency,
            offline: true,
        }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl ContentProvider for SimulatedProvider {
    async fn fetch(&self, mood: MoodKey) -> Result<ContentBundle, GenerationError> {
        tracing::debug!(%mood, latency_ms = self.latency.as_millis() as u64, "fetching content");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.offline {
            return Err(GenerationError::Unavailable {
                mood,
                reason: "simulated service is offline".to_string(),
            });
        }

        Ok(catalog::lookup(mood))
    }
}
