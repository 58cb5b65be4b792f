//! Cache Module
//!
//! Read-through memoization of book listings, keyed per query and
//! invalidated by group on writes. Entries have no TTL; the store holds a
//! bounded number of listings and evicts the least recently used.

mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use key::CacheKey;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::{CacheStore, DEFAULT_MAX_ENTRIES};

use crate::store::Book;

// == Public Constants ==
/// Cache group holding every book listing
pub const CACHE_GROUP: &str = "book_list";

// == Object Cache ==
/// Grouped key-value cache for listing results.
///
/// Backends that cannot flush a single group report so through
/// [`supports_flush_group`](ObjectCache::supports_flush_group); callers
/// then fall back to [`flush`](ObjectCache::flush).
pub trait ObjectCache: Send + Sync {
    /// Returns the cached rows, recording a hit or a miss.
    fn get(&mut self, group: &str, key: &CacheKey) -> Option<Vec<Book>>;

    /// Stores rows under `key`, replacing any previous value.
    fn set(&mut self, group: &str, key: CacheKey, books: Vec<Book>);

    /// Drops every entry in every group.
    fn flush(&mut self);

    fn supports_flush_group(&self) -> bool {
        false
    }

    /// Drops every entry in `group`. Returns false when unsupported.
    fn flush_group(&mut self, _group: &str) -> bool {
        false
    }

    /// Current statistics.
    fn stats(&self) -> CacheStats;
}
