//! Catalog Module
//!
//! Composes validation, the record store and the query cache. Every read
//! goes through the cache; every successful insert invalidates it.

use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStats, CacheStore, ObjectCache, CACHE_GROUP};
use crate::error::Result;
use crate::store::{Book, BookStore, ListQuery, MemoryBookStore, NewBook};
use crate::validation::validate_book_fields;

// == Catalog ==
/// The book collection as seen by the REST and widget layers.
pub struct Catalog {
    store: Box<dyn BookStore>,
    cache: Box<dyn ObjectCache>,
}

impl Catalog {
    // == Constructor ==
    pub fn new(store: impl BookStore + 'static, cache: impl ObjectCache + 'static) -> Self {
        Self {
            store: Box::new(store),
            cache: Box::new(cache),
        }
    }

    /// Catalog over an empty in-memory table and cache.
    pub fn in_memory() -> Self {
        Self::new(MemoryBookStore::new(), CacheStore::new())
    }

    /// Catalog over an empty in-memory table, caching at most
    /// `max_entries` listings.
    pub fn in_memory_with_cache_capacity(max_entries: usize) -> Self {
        Self::new(MemoryBookStore::new(), CacheStore::with_capacity(max_entries))
    }

    // == List ==
    /// Returns one page of books, serving repeated queries from the cache.
    pub fn list_books(&mut self, query: &ListQuery) -> Result<Vec<Book>> {
        let key = CacheKey::for_query(query)?;

        if let Some(books) = self.cache.get(CACHE_GROUP, &key) {
            debug!(%key, "listing served from cache");
            return Ok(books);
        }

        let books = self.store.list(query)?;
        debug!(%key, rows = books.len(), "listing loaded from store");
        self.cache.set(CACHE_GROUP, key, books.clone());

        Ok(books)
    }

    // == Add ==
    /// Validates and inserts a book, then invalidates cached listings.
    ///
    /// Nothing is written when validation fails, and the cache is left
    /// untouched when the store rejects the write.
    pub fn add_book(&mut self, book_name: &str, author_name: &str) -> Result<Book> {
        if let Err(err) = validate_book_fields(book_name, author_name) {
            warn!(field = %err.field(), reason = err.reason(), "book rejected");
            return Err(err.into());
        }

        let book = NewBook::new(book_name, author_name);
        let id = self.store.insert(book.clone()).inspect_err(|err| {
            warn!(error = %err, "book insert failed");
        })?;

        self.invalidate();
        info!(id, book_name, author_name, "book added");

        Ok(book.with_id(id))
    }

    // == Invalidate ==
    /// Drops cached listings, by group when the backend can, otherwise
    /// everything.
    pub fn invalidate(&mut self) {
        if self.cache.supports_flush_group() && self.cache.flush_group(CACHE_GROUP) {
            return;
        }
        self.cache.flush();
    }

    // == Stats ==
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn book_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::in_memory()
    }
}
