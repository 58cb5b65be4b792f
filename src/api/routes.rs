//! API Routes
//!
//! Configures the Axum router with the REST resource and the widget pages.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    book_schema_handler, create_book_handler, health_handler, list_books_handler, stats_handler,
    AppState,
};
use super::widget_handlers::{
    book_form_handler, book_list_widget_handler, submit_book_form_handler, BOOK_FORM_PATH,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /books` - List one page of books
/// - `POST /books` - Add a book (requires `publish_posts`)
/// - `OPTIONS /books` - Describe the resource schema
/// - `GET /book-form` - Render the create form
/// - `POST /book-form` - Handle a form submission
/// - `GET /book-list` - Render the searchable list
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/books",
            get(list_books_handler)
                .post(create_book_handler)
                .options(book_schema_handler),
        )
        .route(
            BOOK_FORM_PATH,
            get(book_form_handler).post(submit_book_form_handler),
        )
        .route("/book-list", get(book_list_widget_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
