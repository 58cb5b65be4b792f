//! Capability checks
//!
//! The caller's identity travels as an explicit [`Caller`] value. The host
//! platform authenticates requests; this module only answers yes/no
//! questions about what an already-identified caller may do.
//!
//! Over HTTP a `Caller` is taken from request extensions when upstream
//! middleware inserted one, otherwise from the trusted
//! [`CAPABILITIES_HEADER`]. Requests carrying neither are anonymous.

use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::{BookListError, Result};

/// Header listing the caller's capabilities, comma-separated.
pub const CAPABILITIES_HEADER: &str = "x-book-list-capabilities";

// == Capability ==
/// A permission granted to a caller by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// May publish content, which includes adding books
    PublishPosts,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::PublishPosts => "publish_posts",
        }
    }
}

impl FromStr for Capability {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "publish_posts" => Ok(Capability::PublishPosts),
            _ => Err(()),
        }
    }
}

// == Caller ==
/// The identity context passed into every permission check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    capabilities: HashSet<Capability>,
}

impl Caller {
    /// A caller with no capabilities.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A caller holding the given capabilities.
    pub fn with_capabilities(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// A caller allowed to publish content.
    pub fn publisher() -> Self {
        Self::with_capabilities([Capability::PublishPosts])
    }

    /// Parses a comma-separated capability list, ignoring unknown names.
    pub fn from_header_value(value: &str) -> Self {
        Self::with_capabilities(value.split(',').filter_map(|name| name.parse().ok()))
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        if let Some(caller) = parts.extensions.get::<Caller>() {
            return Ok(caller.clone());
        }

        let caller = parts
            .headers
            .get(CAPABILITIES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(Caller::from_header_value)
            .unwrap_or_default();

        Ok(caller)
    }
}

// == Checks ==
/// Whether the caller may add books.
pub fn can_create_book(caller: &Caller) -> bool {
    caller.can(Capability::PublishPosts)
}

/// Whether the caller may list books. Listing is public.
pub fn can_view_books(_caller: &Caller) -> bool {
    true
}

/// Fails with [`BookListError::Forbidden`] unless the caller may add books.
pub fn require_create_book(caller: &Caller) -> Result<()> {
    if can_create_book(caller) {
        Ok(())
    } else {
        Err(BookListError::Forbidden(
            "Sorry, you are not allowed to create books.".to_string(),
        ))
    }
}
