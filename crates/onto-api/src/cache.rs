//! Cache-key-addressed fetch state for read-only queries.
//!
//! Each distinct request (collection + parameters) owns one slot. A slot is
//! only ever replaced wholesale when its own response arrives, so a late
//! response for an abandoned key can never clobber the key currently on
//! screen. Data stays visible while a revalidating fetch for the same key is
//! in flight (`is_fetching` as opposed to `is_loading`).
//!
//! Policy, mirroring the fetch layer it replaces: responses are fresh for
//! 60 seconds, concurrent requests for an identical key coalesce into one
//! in-flight request, and a failed fetch gets one silent retry before the
//! slot settles into its error state.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::warn;

use onto_model::TopicQuery;

use crate::error::ApiError;

/// Freshness window after which a slot becomes eligible for background
/// refresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Bound on retained slots per cache; old keys fall out LRU-first.
const CAPACITY: NonZeroUsize = NonZeroUsize::new(64).unwrap();

/// Cache key for one taxonomy's topic list: the structured equivalent of
/// `["topics", "list", taxonomy_id, params]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicsKey {
    pub taxonomy_id: String,
    pub query: TopicQuery,
}

#[derive(Debug)]
struct CacheEntry<V> {
    data: Option<V>,
    error: Option<ApiError>,
    fetched_at: Option<Instant>,
    in_flight: bool,
    retried: bool,
}

impl<V> CacheEntry<V> {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            fetched_at: None,
            in_flight: false,
            retried: false,
        }
    }
}

/// What the caller should do after handing a fetch result to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The slot settled; nothing further to do.
    Settled,
    /// First failure for this key: issue one silent retry.
    Retry,
}

/// Read-only view of one slot, for rendering.
#[derive(Debug, Clone, Copy)]
pub struct QuerySlot<'a, V> {
    pub data: Option<&'a V>,
    pub error: Option<&'a ApiError>,
    /// A fetch for this key is in flight (initial or revalidating).
    pub is_fetching: bool,
}

impl<V> QuerySlot<'_, V> {
    /// First fetch still running with nothing to show yet.
    pub fn is_loading(&self) -> bool {
        self.is_fetching && self.data.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<V> Default for QuerySlot<'_, V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
        }
    }
}

/// Fetch-state cache keyed by structured request keys.
///
/// One instance per collection, owned by the application state and passed
/// down explicitly.
pub struct QueryCache<K, V> {
    entries: LruCache<K, CacheEntry<V>>,
    ttl: Duration,
}

impl<K: Hash + Eq, V> QueryCache<K, V> {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: LruCache::new(CAPACITY),
            ttl,
        }
    }

    /// Record that `key`'s data is wanted now. Returns true when the caller
    /// should spawn a request: nothing fresh exists for the key and no fetch
    /// for it is already in flight.
    ///
    /// A stale slot keeps its data visible and revalidates in the
    /// background.
    pub fn begin(&mut self, key: K) -> bool {
        let ttl = self.ttl;
        let entry = self.entries.get_or_insert_mut(key, CacheEntry::new);
        if entry.in_flight {
            return false;
        }
        if let Some(fetched_at) = entry.fetched_at
            && entry.data.is_some()
            && fetched_at.elapsed() < ttl
        {
            return false;
        }
        entry.in_flight = true;
        entry.retried = false;
        entry.error = None;
        true
    }

    /// Store a fetch result in `key`'s slot.
    pub fn complete(&mut self, key: &K, result: Result<V, ApiError>) -> Completion {
        let Some(entry) = self.entries.get_mut(key) else {
            // Slot evicted while the request was in flight; drop the result.
            return Completion::Settled;
        };
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
                entry.fetched_at = Some(Instant::now());
                entry.in_flight = false;
                entry.retried = false;
                Completion::Settled
            }
            Err(error) if !entry.retried => {
                warn!(%error, "query failed, retrying once");
                entry.retried = true;
                Completion::Retry
            }
            Err(error) => {
                warn!(%error, "query failed after retry");
                entry.error = Some(error);
                entry.in_flight = false;
                Completion::Settled
            }
        }
    }

    /// Drop `key`'s slot so the next [`Self::begin`] refetches from scratch.
    /// Used by explicit retry actions after a settled error.
    pub fn invalidate(&mut self, key: &K) {
        self.entries.pop(key);
    }

    /// Read-only view of `key`'s slot.
    pub fn slot(&self, key: &K) -> QuerySlot<'_, V> {
        match self.entries.peek(key) {
            Some(entry) => QuerySlot {
                data: entry.data.as_ref(),
                error: entry.error.as_ref(),
                is_fetching: entry.in_flight,
            },
            None => QuerySlot::default(),
        }
    }
}

impl<K: Hash + Eq, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
