//! List Query Module
//!
//! Normalizes paging and sorting inputs for store reads. Invalid values
//! never fail a read; they fall back to defaults.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::store::Book;

// == Order By ==
/// Column a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    Id,
    #[default]
    BookName,
    AuthorName,
}

impl OrderBy {
    /// Every sortable column, in declaration order.
    pub const ALL: [OrderBy; 3] = [OrderBy::Id, OrderBy::BookName, OrderBy::AuthorName];

    /// Parses an exact column name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == value)
    }

    /// Parses a column name, falling back to `book_name`.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Id => "id",
            OrderBy::BookName => "book_name",
            OrderBy::AuthorName => "author_name",
        }
    }

    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            OrderBy::Id => a.id.cmp(&b.id),
            OrderBy::BookName => a.book_name.to_lowercase().cmp(&b.book_name.to_lowercase()),
            OrderBy::AuthorName => a
                .author_name
                .to_lowercase()
                .cmp(&b.author_name.to_lowercase()),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Sort Order ==
/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses an exact `ASC` / `DESC`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// Parses case-insensitively, falling back to `ASC`.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(&value.to_uppercase()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == List Query ==
/// A validated listing request.
///
/// Field order is significant: it fixes the serialized form used as the
/// cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u64,
    /// Page size, at least 1
    pub per_page: u64,
    /// Sort column
    pub orderby: OrderBy,
    /// Sort direction
    pub order: SortOrder,
    /// Case-insensitive substring matched against both names
    pub search: String,
}

impl ListQuery {
    /// Builds a query from raw inputs.
    ///
    /// `page` and `per_page` take their absolute value and are floored to 1.
    /// Unknown `orderby` becomes `book_name`; `order` is upper-cased and
    /// anything other than `ASC`/`DESC` becomes `ASC`.
    pub fn new(
        page: i64,
        per_page: i64,
        orderby: &str,
        order: &str,
        search: impl Into<String>,
    ) -> Self {
        Self {
            page: page.unsigned_abs().max(1),
            per_page: per_page.unsigned_abs().max(1),
            orderby: OrderBy::parse_or_default(orderby),
            order: SortOrder::parse_or_default(order),
            search: search.into(),
        }
    }

    /// Number of records skipped before the window starts.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Sorts `books` by this query's column and direction.
    ///
    /// Ties are broken by ascending id regardless of direction.
    pub fn sort(&self, books: &mut [Book]) {
        books.sort_by(|a, b| {
            let primary = match self.order {
                SortOrder::Asc => self.orderby.compare(a, b),
                SortOrder::Desc => self.orderby.compare(b, a),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            orderby: OrderBy::default(),
            order: SortOrder::default(),
            search: String::new(),
        }
    }
}
