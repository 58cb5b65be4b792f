//! API Module
//!
//! HTTP handlers and routing for the book list service.
//!
//! # Endpoints
//! - `GET /books` - List one page of books
//! - `POST /books` - Add a book
//! - `OPTIONS /books` - Describe the resource schema
//! - `GET /book-form`, `POST /book-form` - Create-form widget
//! - `GET /book-list` - Searchable list widget
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;
pub mod widget_handlers;

pub use handlers::*;
pub use routes::create_router;
pub use widget_handlers::*;
