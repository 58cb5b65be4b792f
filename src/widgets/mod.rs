//! Presentation Widgets
//!
//! Embeddable HTML fragments: a create form and a searchable table.
//! Every interpolated value is HTML-escaped.

use std::sync::LazyLock;

use regex::Regex;

mod form;
mod list;
mod nonce;

pub use form::{render_book_form, render_failure_page, NO_PERMISSION_MESSAGE};
pub use list::render_book_list;
pub use nonce::NonceRegistry;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap()
});

/// Escapes text for use in HTML content and attribute values.
///
/// Well-formed character references (`&lt;`, `&#039;`, `&#x27;`) are kept
/// as they are, so text that was already encoded is not encoded twice.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if ENTITY.is_match(&text[i..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
