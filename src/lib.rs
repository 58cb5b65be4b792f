//! Book List - a cached, validated book catalog served over HTTP
//!
//! Stores book records, caches paged list queries with group invalidation,
//! and exposes them through a REST resource and two HTML widgets.

pub mod api;
pub mod auth;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
pub mod widgets;

pub use api::{create_router, AppState};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{BookListError, Result};
