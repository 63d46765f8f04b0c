//! Cache Module
//!
//! In-memory cache of raw HTTP response bodies with fixed-interval TTL reaping.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::ResponseCache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// Smallest accepted TTL interval
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Largest accepted TTL interval (30 days)
pub const MAX_INTERVAL: Duration = Duration::from_secs(30 * 24 * 60 * 60);
