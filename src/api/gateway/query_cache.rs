//! Request memoization with a stale time.
//!
//! A [`QueryCache`] remembers the last successful result per key and serves
//! it while it is younger than the stale time. Failures are never cached.
//! Each key has its own async lock, so a slow query never holds up other
//! keys. Callers that arrive while a query for their key is in flight wait
//! for it and share its result, whatever the stale time.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::api::error::StorefrontError;

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, stale_time: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.fetched_at) < stale_time
    }
}

/// Per-key state. `completed` counts successful fetches so a waiter can tell
/// whether one finished while it was queued on `entry`.
#[derive(Debug)]
struct KeySlot<V> {
    completed: AtomicU64,
    entry: Mutex<Option<CacheEntry<V>>>,
}

impl<V> Default for KeySlot<V> {
    fn default() -> Self {
        Self {
            completed: AtomicU64::new(0),
            entry: Mutex::new(None),
        }
    }
}

/// Memoizes query results per key for `stale_time`.
#[derive(Debug)]
pub struct QueryCache<K, V> {
    stale_time: Duration,
    slots: Mutex<HashMap<K, Arc<KeySlot<V>>>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache. With a zero stale time every call refetches,
    /// except calls that overlap an in-flight query for the same key.
    #[must_use]
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// The configured stale time.
    #[must_use]
    pub const fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Returns the cached value for `key` while fresh, otherwise runs `fetch`
    /// and caches its successful result. A caller that queued behind an
    /// in-flight fetch for the same key receives that fetch's result.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `fetch`; the previous entry, if any,
    /// is kept.
    pub async fn get_or_fetch<F, Fut>(&self, key: &K, fetch: F) -> Result<V, StorefrontError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, StorefrontError>>,
    {
        let slot = self.slot(key).await;
        let seen = slot.completed.load(Ordering::Acquire);
        let mut entry = slot.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if slot.completed.load(Ordering::Acquire) != seen {
                tracing::debug!("query shared with in-flight request");
                return Ok(cached.value.clone());
            }
            if cached.is_fresh(self.stale_time, Instant::now()) {
                tracing::debug!("query cache hit");
                return Ok(cached.value.clone());
            }
        }

        let value = fetch().await?;
        *entry = Some(CacheEntry {
            value: value.clone(),
            fetched_at: Instant::now(),
        });
        slot.completed.fetch_add(1, Ordering::Release);
        Ok(value)
    }

    /// Drops the entry for `key`, forcing the next query to refetch. A fetch
    /// already in flight still completes for the callers waiting on it.
    pub async fn invalidate(&self, key: &K) {
        self.slots.lock().await.remove(key);
    }

    async fn slot(&self, key: &K) -> Arc<KeySlot<V>> {
        let mut slots = self.slots.lock().await;
        Arc::clone(slots.entry(key.clone()).or_default())
    }
}
