//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the cache.
//!
//! # Tasks
//! - Reaper: removes expired cache entries once per TTL interval

mod reaper;

pub use reaper::spawn_reaper_task;
