//! Cache Entry Module
//!
//! Defines a single cached response body stamped with its insertion time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A raw response body and the moment it was inserted.
///
/// Entries are never mutated; re-inserting a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body
    pub value: Vec<u8>,
    /// Insertion timestamp (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit insertion time.
    pub fn created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is eligible for reaping.
    ///
    /// Boundary condition: an entry whose age is exactly `interval` is still
    /// live. Only strictly older entries are expired.
    pub fn is_expired(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}
