//! Book Record Module
//!
//! Defines the stored book row and the insert payload.

use serde::Serialize;

/// Store-assigned, unique, immutable record id.
pub type BookId = u64;

// == Book ==
/// A persisted book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Auto-assigned primary key
    pub id: BookId,
    /// Display name of the book
    pub book_name: String,
    /// Name of the book's author
    pub author_name: String,
}

impl Book {
    /// Returns true if `needle` (already lower-cased) occurs in either name.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.book_name.to_lowercase().contains(needle)
            || self.author_name.to_lowercase().contains(needle)
    }
}

// == New Book ==
/// Column values for a row that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub book_name: String,
    pub author_name: String,
}

impl NewBook {
    pub fn new(book_name: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            book_name: book_name.into(),
            author_name: author_name.into(),
        }
    }

    /// Attaches the id assigned by the store.
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            book_name: self.book_name,
            author_name: self.author_name,
        }
    }
}
