//! Recency order for cached listings
//!
//! Entries are identified by `(group, key)`. The front of the queue is the
//! most recently read or written listing; the back is evicted first.

use std::collections::VecDeque;

use crate::cache::CacheKey;

/// Tracks use order of cached listings across all groups.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<(String, CacheKey)>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a listing as just used.
    pub fn touch(&mut self, group: &str, key: &CacheKey) {
        self.remove(group, key);
        self.order.push_front((group.to_string(), key.clone()));
    }

    pub fn remove(&mut self, group: &str, key: &CacheKey) {
        self.order.retain(|(g, k)| g != group || k != key);
    }

    /// Forgets every listing of `group`.
    pub fn remove_group(&mut self, group: &str) {
        self.order.retain(|(g, _)| g != group);
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used listing.
    pub fn evict_oldest(&mut self) -> Option<(String, CacheKey)> {
        self.order.pop_back()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
