//! Response Cache Handle
//!
//! Thread-safe front for the cache store. Owns the background reaper and
//! stops it on `shutdown` or when the last handle is dropped.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStore, StatsSnapshot, MAX_INTERVAL, MIN_INTERVAL};
use crate::tasks::spawn_reaper_task;

// == Response Cache ==
/// Cloneable handle to a TTL cache of raw response bodies.
///
/// All clones share one store and one reaper. Lookups take a shared read
/// lock; inserts and sweeps take the exclusive write lock.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<RwLock<CacheStore>>,
    reaper: Arc<Reaper>,
    interval: Duration,
}

/// Shutdown side of the background reaper.
#[derive(Debug)]
struct Reaper {
    shutdown: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Reaper {
    fn take_handle(&self) -> Option<JoinHandle<()>> {
        self.handle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
        if let Some(handle) = self.take_handle() {
            handle.abort();
        }
    }
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Entries become eligible for removal once older than `interval`, and
    /// the reaper sweeps once per `interval`. Intervals shorter than
    /// [`MIN_INTERVAL`] are raised to it and intervals longer than
    /// [`MAX_INTERVAL`] are lowered to it.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper_task(Arc::downgrade(&store), interval, shutdown_rx);

        Self {
            store,
            reaper: Arc::new(Reaper {
                shutdown,
                handle: Mutex::new(Some(handle)),
            }),
            interval,
        }
    }

    // == Interval ==
    /// Returns the TTL and sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Get ==
    /// Returns the cached body for `key`, if present.
    ///
    /// The entry's age is not checked; a stale entry is returned until the
    /// reaper removes it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key)
    }

    // == Put ==
    /// Inserts or overwrites the body for `key`, stamping the current time.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!("Caching {} bytes for {}", value.len(), key);
        self.store.write().await.put(key, value);
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.stats()
    }

    // == Reaper Status ==
    /// Returns true while the background reaper is still running.
    pub fn is_reaper_running(&self) -> bool {
        self.reaper
            .handle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Stored entries remain readable afterwards but are no longer reaped.
    /// Calling this more than once is a no-op.
    pub async fn shutdown(&self) {
        self.reaper.shutdown.send_replace(true);

        let Some(handle) = self.reaper.take_handle() else {
            return;
        };

        if let Err(err) = handle.await {
            if !err.is_cancelled() {
                warn!("Cache reaper exited abnormally: {}", err);
            }
        }
    }
}
