//! In-Memory Book Store
//!
//! A single-table store backed by a Vec with auto-incrementing ids.

use tracing::debug;

use crate::error::{BookListError, Result};
use crate::store::{Book, BookId, BookStore, ListQuery, NewBook, COLUMN_WIDTH};

// == Memory Book Store ==
/// Book table held in process memory.
#[derive(Debug)]
pub struct MemoryBookStore {
    /// Rows in insertion order
    rows: Vec<Book>,
    /// Next id to assign
    next_id: BookId,
}

impl MemoryBookStore {
    // == Constructor ==
    /// Creates an empty table whose first id is 1.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    fn check_width(column: &str, value: &str) -> Result<()> {
        if value.chars().count() > COLUMN_WIDTH {
            return Err(BookListError::storage(Some(format!(
                "Data too long for column '{}'",
                column
            ))));
        }
        Ok(())
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for MemoryBookStore {
    // == List ==
    fn list(&self, query: &ListQuery) -> Result<Vec<Book>> {
        let needle = query.search.to_lowercase();

        let mut matched: Vec<Book> = self
            .rows
            .iter()
            .filter(|book| book.matches(&needle))
            .cloned()
            .collect();

        query.sort(&mut matched);

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.per_page).unwrap_or(usize::MAX);

        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }

    // == Insert ==
    fn insert(&mut self, book: NewBook) -> Result<BookId> {
        Self::check_width("book_name", &book.book_name)?;
        Self::check_width("author_name", &book.author_name)?;

        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(book.with_id(id));

        debug!(id, rows = self.rows.len(), "book row inserted");
        Ok(id)
    }

    // == Length ==
    fn len(&self) -> usize {
        self.rows.len()
    }
}
