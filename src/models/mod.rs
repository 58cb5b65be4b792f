//! Request and Response models for the book list API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, and the
//! declared schema of the book resource.

pub mod requests;
pub mod responses;
pub mod schema;

// Re-export commonly used types
pub use requests::{
    BookFormParams, BookFormSubmission, BookListWidgetParams, CreateBookRequest, ListBooksParams,
};
pub use responses::{BookResponse, ErrorResponse, HealthResponse, StatsResponse};
pub use schema::{collection_params, BOOK_SCHEMA};
