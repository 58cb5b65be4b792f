//! Record Store Module
//!
//! Owns the single table of book records and exposes insert plus
//! filtered, sorted and paginated reads.

mod memory;
mod query;
mod record;

// Re-export public types
pub use memory::MemoryBookStore;
pub use query::{ListQuery, OrderBy, SortOrder};
pub use record::{Book, BookId, NewBook};

use crate::error::Result;

// == Public Constants ==
/// Width of the `book_name` and `author_name` columns, in characters
pub const COLUMN_WIDTH: usize = 50;

// == Book Store ==
/// Persistence backend for book records.
///
/// The store performs no business validation; callers validate before
/// inserting. Reads receive an already-normalized [`ListQuery`].
pub trait BookStore: Send + Sync {
    /// Returns the window of records selected by `query`.
    ///
    /// An empty result is not an error.
    fn list(&self, query: &ListQuery) -> Result<Vec<Book>>;

    /// Appends a record and returns its newly assigned id.
    fn insert(&mut self, book: NewBook) -> Result<BookId>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
