//! Integration Tests for the Response Cache
//!
//! Exercises the public cache handle end to end, including the background
//! reaper and concurrent access.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pokedex::ResponseCache;

// == Lookup Tests ==

#[tokio::test]
async fn test_put_then_get_returns_value() {
    let cache = ResponseCache::new(Duration::from_secs(5));

    let url = "https://pokeapi.co/api/v2/pokemon/ditto";

    cache.put(url, br#"{"name":"ditto"}"#.to_vec()).await;

    assert_eq!(cache.get(url).await, Some(br#"{"name":"ditto"}"#.to_vec()));
    cache.shutdown().await;
}

#[tokio::test]
async fn test_unknown_key_misses() {
    let cache = ResponseCache::new(Duration::from_secs(5));

    cache.put("present", b"x".to_vec()).await;

    assert_eq!(cache.get("absent").await, None);
    cache.shutdown().await;
}

#[tokio::test]
async fn test_last_write_wins() {
    let cache = ResponseCache::new(Duration::from_secs(5));

    cache.put("k", b"v1".to_vec()).await;
    cache.put("k", b"v2".to_vec()).await;

    assert_eq!(cache.get("k").await, Some(b"v2".to_vec()));
    assert_eq!(cache.len().await, 1);
    cache.shutdown().await;
}

// == Expiry Tests ==

#[tokio::test]
async fn test_entry_expires_after_reap() {
    let cache = ResponseCache::new(Duration::from_millis(50));

    cache.put("a", b"value".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(120)).await;

    assert_eq!(cache.get("a").await, None);
    assert_eq!(cache.stats().await.reaped, 1);
    cache.shutdown().await;
}

#[tokio::test]
async fn test_entry_not_expired_early() {
    let cache = ResponseCache::new(Duration::from_millis(200));

    cache.put("b", b"value".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(cache.get("b").await, Some(b"value".to_vec()));
    cache.shutdown().await;
}

#[tokio::test]
async fn test_one_second_interval_scenario() {
    let cache = ResponseCache::new(Duration::from_secs(1));

    cache.put("x", vec![1, 2, 3]).await;
    assert_eq!(cache.get("x").await, Some(vec![1, 2, 3]));

    tokio::time::sleep(Duration::from_millis(2500)).await;

    assert_eq!(cache.get("x").await, None);
    cache.shutdown().await;
}

#[tokio::test]
async fn test_no_reaping_after_shutdown() {
    let cache = ResponseCache::new(Duration::from_millis(30));

    cache.shutdown().await;
    assert!(!cache.is_reaper_running());

    cache.put("kept", b"v".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(120)).await;

    assert_eq!(cache.get("kept").await, Some(b"v".to_vec()));
}

#[tokio::test]
async fn test_reaper_outlives_dropped_clone() {
    let cache = ResponseCache::new(Duration::from_millis(20));
    let clone = cache.clone();

    drop(cache);
    assert!(clone.is_reaper_running(), "A live clone keeps the reaper going");

    clone.put("k", b"v".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(clone.get("k").await, None);

    drop(clone);
}

// == Concurrency Tests ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_and_readers() {
    const WRITERS: usize = 4;
    const READERS: usize = 4;
    const PUTS_PER_WRITER: usize = 1000;

    let cache = ResponseCache::new(Duration::from_secs(60));
    let done = Arc::new(AtomicBool::new(false));

    let mut readers = Vec::new();
    for reader in 0..READERS {
        let cache = cache.clone();
        let done = Arc::clone(&done);
        readers.push(tokio::spawn(async move {
            let mut probes = 0usize;
            while !done.load(Ordering::Acquire) {
                let key = format!("writer-{}-{}", reader % WRITERS, probes % PUTS_PER_WRITER);
                if let Some(value) = cache.get(&key).await {
                    assert_eq!(value, key.as_bytes(), "Value for {} was corrupted", key);
                }
                probes += 1;
                tokio::task::yield_now().await;
            }
            probes
        }));
    }

    let mut writers = Vec::new();
    for writer in 0..WRITERS {
        let cache = cache.clone();
        writers.push(tokio::spawn(async move {
            for i in 0..PUTS_PER_WRITER {
                let key = format!("writer-{}-{}", writer, i);
                cache.put(key.clone(), key.clone().into_bytes()).await;
                assert!(cache.get(&key).await.is_some(), "{} not visible after put", key);
            }
        }));
    }

    for writer in writers {
        writer.await.expect("Writer should not panic");
    }
    done.store(true, Ordering::Release);
    for reader in readers {
        reader.await.expect("Reader should not panic");
    }

    assert_eq!(cache.len().await, WRITERS * PUTS_PER_WRITER);
    for writer in 0..WRITERS {
        let key = format!("writer-{}-{}", writer, PUTS_PER_WRITER - 1);
        assert_eq!(cache.get(&key).await, Some(key.into_bytes()));
    }
    cache.shutdown().await;
}
