//! Validation Module
//!
//! Field presence and length checks for book records, plus the text
//! sanitizer applied by the REST and form layers before validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// == Public Constants ==
/// Minimum allowed length of a book or author name, in characters
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum allowed length of a book or author name, in characters
pub const MAX_NAME_LENGTH: usize = 50;

// == Book Field ==
/// The user-supplied fields of a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    BookName,
    AuthorName,
}

impl BookField {
    /// Column / parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::BookName => "book_name",
            BookField::AuthorName => "author_name",
        }
    }

    /// Display label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            BookField::BookName => "Book name",
            BookField::AuthorName => "Author name",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Validation Error ==
/// Reasons a book's fields can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field is empty or absent
    #[error("Invalid book name or author.")]
    EmptyField { field: BookField },

    /// A field's character count falls outside `[min, max]`
    #[error("{} must be between {min} and {max} characters.", .field.label())]
    Length {
        field: BookField,
        min: usize,
        max: usize,
    },
}

impl ValidationError {
    /// The field that failed.
    pub fn field(&self) -> BookField {
        match self {
            ValidationError::EmptyField { field } | ValidationError::Length { field, .. } => *field,
        }
    }

    /// Nature of the failure: `"empty"` or `"length"`.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { .. } => "empty",
            ValidationError::Length { .. } => "length",
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { .. } => "invalid_input",
            ValidationError::Length { .. } => "invalid_input_length",
        }
    }
}

/// Validates a book and author name pair.
///
/// Checks run in order and the first failure wins: emptiness of either
/// field, then the book name's length, then the author name's length.
/// Lengths are counted in characters so multi-byte text is measured the
/// way a reader sees it. No trimming or case folding happens here.
pub fn validate_book_fields(book_name: &str, author_name: &str) -> Result<(), ValidationError> {
    if book_name.is_empty() {
        return Err(ValidationError::EmptyField {
            field: BookField::BookName,
        });
    }
    if author_name.is_empty() {
        return Err(ValidationError::EmptyField {
            field: BookField::AuthorName,
        });
    }

    check_length(BookField::BookName, book_name)?;
    check_length(BookField::AuthorName, author_name)?;

    Ok(())
}

fn check_length(field: BookField, value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(ValidationError::Length {
            field,
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

// == Sanitization ==
static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*?>.*?</script>|<style[^>]*?>.*?</style>").unwrap()
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t ]+").unwrap());
static PERCENT_OCTET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());

/// Cleans user-entered text for storage and display.
///
/// Removes script/style elements with their content, strips remaining
/// tags, escapes a stray `<`, collapses line breaks, tabs and repeated
/// spaces, drops percent-encoded octets and trims both ends.
pub fn sanitize_text_field(text: &str) -> String {
    let mut cleaned = text.to_string();

    if cleaned.contains('<') {
        cleaned = SCRIPT_OR_STYLE.replace_all(&cleaned, "").into_owned();
        cleaned = TAG.replace_all(&cleaned, "").into_owned();
        cleaned = cleaned.replace('<', "&lt;");
    }

    cleaned = WHITESPACE.replace_all(&cleaned, " ").into_owned();

    // Removing one octet can expose another ("%%4141").
    while PERCENT_OCTET.is_match(&cleaned) {
        cleaned = PERCENT_OCTET.replace_all(&cleaned, "").into_owned();
    }

    cleaned.trim().to_string()
}
