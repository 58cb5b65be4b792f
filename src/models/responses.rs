//! Response DTOs for the book list API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::store::{Book, BookId};

/// Public view of a book record.
///
/// Only the fields declared by the book schema appear here; adding or
/// hiding a field means changing this struct and its `From` impl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    pub id: BookId,
    pub book_name: String,
    pub author_name: String,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            book_name: book.book_name.clone(),
            author_name: book.author_name.clone(),
        }
    }
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            book_name: book.book_name,
            author_name: book.author_name,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Listings answered from the cache
    pub hits: u64,
    /// Listings that reached the store
    pub misses: u64,
    /// Cache invalidations
    pub flushes: u64,
    /// Listings dropped to stay under the entry cap
    pub evictions: u64,
    /// Listings currently cached
    pub cached_queries: usize,
    /// Records in the store
    pub total_books: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, total_books: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            flushes: stats.flushes,
            evictions: stats.evictions,
            cached_queries: stats.total_entries,
            total_books,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all REST error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Error message describing what went wrong
    pub message: String,
    /// Status plus error-specific details
    pub data: Value,
}
