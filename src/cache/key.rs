//! Cache Key Module
//!
//! Derives a deterministic key from a normalized listing query.

use std::fmt;

use crate::error::{BookListError, Result};
use crate::store::ListQuery;

const KEY_PREFIX: &str = "book_list_";

// == Cache Key ==
/// Canonical encoding of `(page, per_page, orderby, order, search)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Encodes the query's five fields as JSON in their declared order.
    ///
    /// Two logically identical queries always yield the same key.
    pub fn for_query(query: &ListQuery) -> Result<Self> {
        let args = serde_json::to_string(query)
            .map_err(|e| BookListError::Internal(format!("cache key encoding failed: {}", e)))?;
        Ok(Self(format!("{}{}", KEY_PREFIX, args)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_queries_share_a_key() {
        let a = CacheKey::for_query(&ListQuery::new(1, 10, "book_name", "asc", "dune")).unwrap();
        let b = CacheKey::for_query(&ListQuery::new(1, 10, "book_name", "ASC", "dune")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalized_fallbacks_share_a_key() {
        // Both fall back to book_name / ASC / page 1.
        let a = CacheKey::for_query(&ListQuery::new(0, 10, "bogus", "sideways", "")).unwrap();
        let b = CacheKey::for_query(&ListQuery::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_field_contributes() {
        let base = ListQuery::default();
        let base_key = CacheKey::for_query(&base).unwrap();

        let variants = [
            ListQuery::new(2, 10, "book_name", "ASC", ""),
            ListQuery::new(1, 11, "book_name", "ASC", ""),
            ListQuery::new(1, 10, "id", "ASC", ""),
            ListQuery::new(1, 10, "book_name", "DESC", ""),
            ListQuery::new(1, 10, "book_name", "ASC", "x"),
        ];
        for variant in variants {
            assert_ne!(CacheKey::for_query(&variant).unwrap(), base_key);
        }
    }

    #[test]
    fn test_key_format() {
        let key = CacheKey::for_query(&ListQuery::default()).unwrap();
        assert_eq!(
            key.as_str(),
            r#"book_list_{"page":1,"per_page":10,"orderby":"book_name","order":"ASC","search":""}"#
        );
    }
}
