//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// First-tick delay used when `now + interval` is not representable
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Spawns a background task that sweeps the store once per `interval`.
///
/// The first sweep runs one full interval after spawning, and every sweep
/// removes entries whose age exceeds `interval`. An entry can therefore stay
/// visible for just under two intervals before it is reaped.
///
/// The task only holds a weak reference to the store. It stops when:
/// - the shutdown channel receives a value or its sender is dropped
/// - the store has been dropped
///
/// # Arguments
/// * `store` - Weak reference to the shared cache store
/// * `interval` - Sweep period and TTL, must be non-zero
/// * `shutdown` - Receiver side of the cache's shutdown signal
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(interval)));
/// let (tx, rx) = watch::channel(false);
/// let handle = spawn_reaper_task(Arc::downgrade(&store), interval, rx);
/// // Later:
/// tx.send(true).ok();
/// handle.await.ok();
/// ```
pub fn spawn_reaper_task(
    store: Weak<RwLock<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        let now = Instant::now();
        let start = now.checked_add(interval).unwrap_or(now + FAR_FUTURE);
        let mut ticker = time::interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.changed() => {
                    debug!("Cache reaper received shutdown signal");
                    break;
                }
            }

            let Some(store) = store.upgrade() else {
                debug!("Cache store dropped, stopping reaper");
                break;
            };

            let removed = {
                let mut guard = store.write().await;
                guard.reap(std::time::Instant::now())
            };

            if removed > 0 {
                info!("Cache reap: removed {} expired entries", removed);
            } else {
                debug!("Cache reap: no expired entries found");
            }
        }

        info!("Cache reaper stopped");
    })
}
