// Short-TTL response cache in front of the agent CLI.
// One slot per endpoint; the slot lock is held across the fetch, so concurrent
// misses collapse into a single agent invocation.

use std::future::Future;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::debug;

use crate::config::CacheConfig;
use crate::models::{DashboardView, ServerInfo};

#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at: Instant,
}

impl<T> CacheEntry<T> {
    pub fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}

/// A single cached value with a fixed time-to-live.
pub struct TtlCache<T> {
    name: &'static str,
    ttl: Duration,
    slot: Mutex<Option<CacheEntry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self {
            name,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value while it is fresh, otherwise run `fetch` and store its result.
    /// Callers arriving during a fetch wait for it and then see the new entry.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(entry) = slot.as_ref()
            && entry.is_fresh(self.ttl, Instant::now())
        {
            debug!(cache = self.name, "cache hit");
            return entry.value.clone();
        }

        debug!(cache = self.name, "cache miss");
        let value = fetch().await;
        *slot = Some(CacheEntry {
            value: value.clone(),
            fetched_at: Instant::now(),
        });
        value
    }

    /// Current entry regardless of age.
    pub async fn peek(&self) -> Option<CacheEntry<T>> {
        self.slot.lock().await.clone()
    }

    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
        debug!(cache = self.name, "cache invalidated");
    }
}

/// Per-endpoint slots; a miss on one never touches the other.
pub struct ResponseCache {
    pub status: TtlCache<DashboardView>,
    pub server: TtlCache<ServerInfo>,
}

impl ResponseCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            status: TtlCache::new("status", Duration::from_millis(config.status_ttl_ms)),
            server: TtlCache::new("server", Duration::from_millis(config.server_ttl_ms)),
        }
    }
}
