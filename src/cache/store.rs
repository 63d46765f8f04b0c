//! Cache Store Module
//!
//! The map behind the response cache. Not synchronized itself; the
//! `ResponseCache` handle wraps it in a read/write lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};

// == Cache Store ==
/// Response bodies keyed by request URL, reaped on a fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// TTL and reap period, fixed for the store's lifetime
    interval: Duration,
    /// Lookup and reap counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Interval ==
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`, stamping the current time.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.put_at(key, value, Instant::now());
    }

    /// Inserts or overwrites the entry for `key` with an explicit timestamp.
    pub fn put_at(&mut self, key: String, value: Vec<u8>, now: Instant) {
        self.entries.insert(key, CacheEntry::created_at(value, now));
    }

    // == Get ==
    /// Returns the stored value regardless of its age.
    ///
    /// Expired entries stay visible until the next reap pass removes them.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry older than the interval as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(INTERVAL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.interval(), INTERVAL);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(INTERVAL);

        store.put("key1".to_string(), b"value1".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(INTERVAL);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(INTERVAL);

        store.put("key1".to_string(), b"value1".to_vec());
        store.put("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_ignores_age() {
        let mut store = CacheStore::new(INTERVAL);
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(60))
            .unwrap_or_else(Instant::now);

        store.put_at("stale".to_string(), b"old".to_vec(), long_ago);

        assert_eq!(store.get("stale"), Some(b"old".to_vec()));
    }

    #[test]
    fn test_store_reap_removes_only_expired() {
        let mut store = CacheStore::new(INTERVAL);
        let start = Instant::now();

        store.put_at("old".to_string(), b"a".to_vec(), start);
        store.put_at("fresh".to_string(), b"b".to_vec(), start + Duration::from_millis(80));

        let removed = store.reap(start + Duration::from_millis(150));

        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("fresh"), Some(b"b".to_vec()));
    }

    #[test]
    fn test_store_reap_keeps_entry_at_boundary() {
        let mut store = CacheStore::new(INTERVAL);
        let start = Instant::now();

        store.put_at("edge".to_string(), b"a".to_vec(), start);

        assert_eq!(store.reap(start + INTERVAL), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(INTERVAL);
        let start = Instant::now();

        store.put_at("key".to_string(), b"v1".to_vec(), start);
        store.put_at("key".to_string(), b"v2".to_vec(), start + Duration::from_millis(90));

        assert_eq!(store.reap(start + Duration::from_millis(150)), 0);
        assert_eq!(store.get("key"), Some(b"v2".to_vec()));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(INTERVAL);
        let start = Instant::now();

        store.put_at("key1".to_string(), b"value1".to_vec(), start);
        store.put_at("key2".to_string(), b"value2".to_vec(), start);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.reap(start + Duration::from_secs(1));

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.reaped, 2);
        assert_eq!(stats.total_entries, 0);
    }
}
