//! API Handlers
//!
//! HTTP request handlers for the `/books` collection resource and the
//! service endpoints.

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::auth::{can_view_books, require_create_book, Caller};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{BookListError, Result};
use crate::models::{
    collection_params, BookResponse, CreateBookRequest, HealthResponse, ListBooksParams,
    StatsResponse, BOOK_SCHEMA,
};
use crate::widgets::NonceRegistry;

/// Application state shared across all handlers.
///
/// Holds the catalog and the form nonce registry behind async locks.
#[derive(Clone)]
pub struct AppState {
    /// Cached book catalog
    pub catalog: Arc<RwLock<Catalog>>,
    /// Outstanding create-form nonces
    pub nonces: Arc<Mutex<NonceRegistry>>,
    /// Largest accepted `per_page`
    pub max_per_page: u64,
    /// List widget page size
    pub widget_per_page: u64,
}

impl AppState {
    /// Creates a new AppState over the given catalog with default settings.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, &Config::default())
    }

    /// Creates a new AppState over the given catalog.
    pub fn with_config(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            nonces: Arc::new(Mutex::new(NonceRegistry::new(config.nonce_capacity))),
            max_per_page: config.max_per_page,
            widget_per_page: config.widget_per_page,
        }
    }

    /// Creates a new AppState with an empty in-memory catalog.
    pub fn from_config(config: &Config) -> Self {
        Self::with_config(
            Catalog::in_memory_with_cache_capacity(config.cache_max_entries),
            config,
        )
    }
}

/// Handler for GET /books
///
/// Lists one page of books. Open to every caller.
pub async fn list_books_handler(
    State(state): State<AppState>,
    caller: Caller,
    params: std::result::Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<Vec<BookResponse>>> {
    if !can_view_books(&caller) {
        return Err(BookListError::Forbidden(
            "Sorry, you are not allowed to list books.".to_string(),
        ));
    }

    let Query(params) = params.map_err(|rejection| BookListError::InvalidParam {
        param: "query".to_string(),
        message: rejection.body_text(),
        reason: None,
    })?;
    let query = params.validate(state.max_per_page)?;

    // Write lock: a miss fills the cache and every lookup updates stats
    let mut catalog = state.catalog.write().await;
    let books = catalog.list_books(&query)?;

    Ok(Json(books.iter().map(BookResponse::from).collect()))
}

/// Handler for POST /books
///
/// Adds a book. The capability check runs before the body is looked at.
pub async fn create_book_handler(
    State(state): State<AppState>,
    caller: Caller,
    payload: std::result::Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>)> {
    require_create_book(&caller)?;

    let Json(req) = payload.map_err(|rejection| BookListError::InvalidParam {
        param: "body".to_string(),
        message: rejection.body_text(),
        reason: None,
    })?;
    let book = req.validate()?;

    let mut catalog = state.catalog.write().await;
    let created = catalog.add_book(&book.book_name, &book.author_name)?;
    debug!(id = created.id, "book created via REST");

    Ok((StatusCode::CREATED, Json(BookResponse::from(created))))
}

/// Handler for OPTIONS /books
///
/// Describes the resource schema and each method's arguments.
pub async fn book_schema_handler(State(state): State<AppState>) -> Json<Value> {
    let create_args: Vec<&str> = BOOK_SCHEMA.required().map(|p| p.name).collect();

    Json(json!({
        "methods": ["GET", "POST"],
        "schema": BOOK_SCHEMA.to_json(),
        "endpoints": [
            { "methods": ["GET"], "args": collection_params(state.max_per_page) },
            { "methods": ["POST"], "args": create_args },
        ],
    }))
}

/// Handler for GET /stats
///
/// Returns cache statistics and the stored record count.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let catalog = state.catalog.read().await;
    Json(StatsResponse::new(
        &catalog.cache_stats(),
        catalog.book_count(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
