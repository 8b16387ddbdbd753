//! Key-sharded TTL store with expiry-first bounded eviction.

use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;

/// Default entry ceiling per cache.
pub const DEFAULT_CAPACITY: usize = 1_000;

/// One stored value with its expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// Counters and occupancy snapshot for a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

/// A concurrent map from key to `{value, expires_at}`.
///
/// Guarantee: [`TtlCache::get`] never returns an entry whose expiry has
/// passed — such entries count as absent (and are dropped on the way out).
///
/// Capacity is a soft ceiling: every write that leaves the store over
/// capacity triggers an expiry-first eviction scan ([`TtlCache::evict_expired`]).
/// If every resident entry is still live, the store temporarily exceeds the
/// ceiling rather than evict live data.
pub struct TtlCache<K, V> {
    map: DashMap<K, CacheEntry<V>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a store with the default 1000-entry ceiling.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: DashMap::new(),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the live value for `key`, or `None` on miss/expiry.
    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        let expired = match self.map.get(key) {
            Some(entry) if entry.expires_at > now => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.map.remove(key);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Stores `value` under `key`, expiring `ttl` after `now`, replacing
    /// any previous entry. Runs the eviction policy as a side effect.
    pub fn insert(&self, key: K, value: V, ttl: Duration, now: DateTime<Utc>) {
        self.map.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + ttl,
            },
        );
        self.evict_expired(now);
    }

    /// Expiry-first bounded eviction: while over capacity, drop expired
    /// entries, stopping as soon as the store is back under the ceiling.
    /// Best-effort — live entries are never evicted, so an all-live store
    /// may stay over capacity. Returns the number of entries removed.
    pub fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        let over = self.map.len().saturating_sub(self.capacity);
        if over == 0 {
            return 0;
        }
        let mut stale: Vec<K> = Vec::with_capacity(over);
        for entry in self.map.iter() {
            if entry.value().expires_at <= now {
                stale.push(entry.key().clone());
                if stale.len() >= over {
                    break;
                }
            }
        }
        let mut removed = 0;
        for key in stale {
            if self.map.remove(&key).is_some() {
                removed += 1;
            }
        }
        if removed > 0 {
            debug!(removed, len = self.map.len(), "evicted expired cache entries");
        }
        removed
    }

    /// Resident entry count, live and expired alike.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Counts entries that would still be served at `now`.
    pub fn live_len(&self, now: DateTime<Utc>) -> usize {
        self.map
            .iter()
            .filter(|entry| entry.value().expires_at > now)
            .count()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.map.len(),
            capacity: self.capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
