//! Widget Handlers
//!
//! Serves the create form and the searchable list as HTML fragments.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::warn;

use crate::api::handlers::AppState;
use crate::auth::{can_create_book, Caller};
use crate::error::BookListError;
use crate::models::{BookFormParams, BookFormSubmission, BookListWidgetParams};
use crate::widgets::{
    render_book_form, render_book_list, render_failure_page, NO_PERMISSION_MESSAGE,
};

/// Path the create form is mounted at.
pub const BOOK_FORM_PATH: &str = "/book-form";

const BOOK_ADDED_PATH: &str = "/book-form?book_added=true";

/// Handler for GET /book-form
///
/// Issues a fresh nonce with every rendering.
pub async fn book_form_handler(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<BookFormParams>,
) -> Html<String> {
    if !can_create_book(&caller) {
        return Html(NO_PERMISSION_MESSAGE.to_string());
    }

    let nonce = state.nonces.lock().await.issue();
    let book_added = params.book_added.as_deref() == Some("true");

    Html(render_book_form(BOOK_FORM_PATH, &nonce, book_added))
}

/// Handler for POST /book-form
///
/// Redirects back to the form with a confirmation flag on success.
pub async fn submit_book_form_handler(
    State(state): State<AppState>,
    caller: Caller,
    Form(submission): Form<BookFormSubmission>,
) -> Response {
    if !submission.is_submission() {
        return Redirect::to(BOOK_FORM_PATH).into_response();
    }

    let nonce = submission.book_nonce.as_deref().unwrap_or_default();
    if !state.nonces.lock().await.consume(nonce) {
        warn!("book form submitted with an unknown nonce");
        return failure(BookListError::InvalidNonce);
    }

    if !can_create_book(&caller) {
        return failure(BookListError::Forbidden("Permission denied.".to_string()));
    }

    let (book_name, author_name) = submission.sanitized_fields();
    let result = state
        .catalog
        .write()
        .await
        .add_book(&book_name, &author_name);

    match result {
        Ok(_) => Redirect::to(BOOK_ADDED_PATH).into_response(),
        Err(err) => failure(err),
    }
}

/// Handler for GET /book-list
///
/// Pages through books sorted by name, filtered by `book_search`.
pub async fn book_list_widget_handler(
    State(state): State<AppState>,
    Query(params): Query<BookListWidgetParams>,
) -> Response {
    let query = params.to_query(state.widget_per_page);
    let result = state.catalog.write().await.list_books(&query);

    match result {
        Ok(books) => Html(render_book_list(&books, &query.search)).into_response(),
        Err(err) => failure(err),
    }
}

fn failure(err: BookListError) -> Response {
    (err.status(), Html(render_failure_page(&err.message()))).into_response()
}
