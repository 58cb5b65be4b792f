//! Cache Store Module
//!
//! In-memory object cache partitioned into named groups, capped at a fixed
//! number of listings with least-recently-used eviction.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheKey, CacheStats, LruTracker, ObjectCache};
use crate::store::Book;

/// Listings kept by [`CacheStore::new`].
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

// == Cache Store ==
/// Grouped in-memory cache with group-level flushing.
#[derive(Debug)]
pub struct CacheStore {
    /// group -> key -> cached rows
    groups: HashMap<String, HashMap<CacheKey, Vec<Book>>>,
    /// Use order across all groups
    lru: LruTracker,
    /// Listings held before the oldest is evicted
    max_entries: usize,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Creates a cache holding at most `max_entries` listings (at least one).
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            groups: HashMap::new(),
            lru: LruTracker::new(),
            max_entries: max_entries.max(1),
            stats: CacheStats::new(),
        }
    }

    // == Length ==
    /// Returns the number of cached queries across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    fn contains(&self, group: &str, key: &CacheKey) -> bool {
        self.groups
            .get(group)
            .is_some_and(|entries| entries.contains_key(key))
    }

    fn evict_oldest(&mut self) {
        let Some((group, key)) = self.lru.evict_oldest() else {
            return;
        };
        if let Some(entries) = self.groups.get_mut(&group) {
            entries.remove(&key);
            if entries.is_empty() {
                self.groups.remove(&group);
            }
        }
        self.stats.record_eviction();
        debug!(group, %key, "cached listing evicted");
    }

    fn sync_total(&mut self) {
        let total = self.len();
        self.stats.set_total_entries(total);
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectCache for CacheStore {
    // == Get ==
    fn get(&mut self, group: &str, key: &CacheKey) -> Option<Vec<Book>> {
        let found = self
            .groups
            .get(group)
            .and_then(|entries| entries.get(key))
            .cloned();

        if found.is_some() {
            self.lru.touch(group, key);
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        found
    }

    // == Set ==
    fn set(&mut self, group: &str, key: CacheKey, books: Vec<Book>) {
        if !self.contains(group, &key) {
            while self.len() >= self.max_entries && !self.lru.is_empty() {
                self.evict_oldest();
            }
        }

        self.lru.touch(group, &key);
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key, books);
        self.sync_total();
    }

    // == Flush ==
    fn flush(&mut self) {
        self.groups.clear();
        self.lru.clear();
        self.stats.record_flush();
        self.sync_total();
        debug!("cache flushed");
    }

    fn supports_flush_group(&self) -> bool {
        true
    }

    // == Flush Group ==
    fn flush_group(&mut self, group: &str) -> bool {
        let removed = self.groups.remove(group).map_or(0, |entries| entries.len());
        self.lru.remove_group(group);
        self.stats.record_flush();
        self.sync_total();
        debug!(group, removed, "cache group flushed");
        true
    }

    // == Stats ==
    fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.len());
        stats
    }
}
