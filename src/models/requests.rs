//! Request DTOs for the book list API
//!
//! Defines the structure of incoming query strings, JSON bodies and form
//! submissions, and checks them against the declared argument schema.

use serde::Deserialize;

use crate::error::{BookListError, Result};
use crate::models::schema::BOOK_SCHEMA;
use crate::store::{ListQuery, NewBook, OrderBy, SortOrder};
use crate::validation::sanitize_text_field;

/// Query string for `GET /books`.
///
/// Fields stay raw strings so that malformed values are reported with the
/// same error body as every other argument failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBooksParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub per_page: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub orderby: Option<String>,
}

impl ListBooksParams {
    /// Checks every argument against its declared type and range, then
    /// builds the store query.
    pub fn validate(&self, max_per_page: u64) -> Result<ListQuery> {
        let page = parse_integer("page", self.page.as_deref(), 1)?;
        if page < 1 {
            return Err(invalid("page", "page must be greater than or equal to 1"));
        }

        let per_page = parse_integer("per_page", self.per_page.as_deref(), 10)?;
        if per_page < 1 || per_page.unsigned_abs() > max_per_page {
            return Err(invalid(
                "per_page",
                &format!(
                    "per_page must be between 1 (inclusive) and {} (inclusive)",
                    max_per_page
                ),
            ));
        }

        let order = match self.order.as_deref() {
            None => SortOrder::default(),
            Some(value) => SortOrder::parse(value)
                .ok_or_else(|| invalid("order", "order is not one of ASC and DESC."))?,
        };

        let orderby = match self.orderby.as_deref() {
            None => OrderBy::default(),
            Some(value) => OrderBy::parse(value).ok_or_else(|| {
                invalid(
                    "orderby",
                    "orderby is not one of id, book_name, and author_name.",
                )
            })?,
        };

        let search = self
            .search
            .as_deref()
            .map(sanitize_text_field)
            .unwrap_or_default();

        Ok(ListQuery::new(
            page,
            per_page,
            orderby.as_str(),
            order.as_str(),
            search,
        ))
    }
}

fn parse_integer(name: &str, value: Option<&str>, default: i64) -> Result<i64> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| invalid(name, &format!("{} is not of type integer.", name))),
    }
}

fn invalid(param: &str, message: &str) -> BookListError {
    BookListError::InvalidParam {
        param: param.to_string(),
        message: message.to_string(),
        reason: None,
    }
}

/// JSON body for `POST /books`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub book_name: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
}

impl CreateBookRequest {
    /// Checks the body against the book schema.
    ///
    /// Required fields must be present; values are sanitized and then held
    /// to the schema's length bounds.
    pub fn validate(&self) -> Result<NewBook> {
        let missing: Vec<String> = BOOK_SCHEMA
            .required()
            .filter(|p| self.field(p.name).is_none())
            .map(|p| p.name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(BookListError::MissingParam(missing));
        }

        let book_name = sanitize_text_field(self.book_name.as_deref().unwrap_or_default());
        let author_name = sanitize_text_field(self.author_name.as_deref().unwrap_or_default());

        for (name, value) in [("book_name", &book_name), ("author_name", &author_name)] {
            if let Some(property) = BOOK_SCHEMA.property(name) {
                property.check_string(value)?;
            }
        }

        Ok(NewBook::new(book_name, author_name))
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "book_name" => self.book_name.as_deref(),
            "author_name" => self.author_name.as_deref(),
            _ => None,
        }
    }
}

/// Urlencoded body posted by the create-form widget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookFormSubmission {
    /// Present when the submit button was used
    #[serde(default)]
    pub submit_book: Option<String>,
    /// Anti-forgery nonce issued with the form
    #[serde(default)]
    pub book_nonce: Option<String>,
    #[serde(default)]
    pub book_name: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
}

impl BookFormSubmission {
    pub fn is_submission(&self) -> bool {
        self.submit_book.is_some()
    }

    /// Sanitized book and author names, empty when absent.
    pub fn sanitized_fields(&self) -> (String, String) {
        (
            sanitize_text_field(self.book_name.as_deref().unwrap_or_default()),
            sanitize_text_field(self.author_name.as_deref().unwrap_or_default()),
        )
    }
}

/// Query string for the create-form widget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookFormParams {
    #[serde(default)]
    pub book_added: Option<String>,
}

/// Query string for the list widget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookListWidgetParams {
    #[serde(default)]
    pub book_page: Option<String>,
    #[serde(default)]
    pub book_search: Option<String>,
}

impl BookListWidgetParams {
    /// Requested page; anything unparsable counts as 0 and is floored later.
    pub fn page(&self) -> i64 {
        self.book_page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(if self.book_page.is_some() { 0 } else { 1 })
    }

    pub fn search(&self) -> String {
        self.book_search
            .as_deref()
            .map(sanitize_text_field)
            .unwrap_or_default()
    }

    /// Builds the widget's fixed-order query.
    pub fn to_query(&self, per_page: u64) -> ListQuery {
        let per_page = i64::try_from(per_page).unwrap_or(i64::MAX);
        ListQuery::new(
            self.page(),
            per_page,
            OrderBy::BookName.as_str(),
            SortOrder::Asc.as_str(),
            self.search(),
        )
    }
}
