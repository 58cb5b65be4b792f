//! Create-form widget

use crate::widgets::escape_html;

/// Shown instead of the form to callers who may not add books.
pub const NO_PERMISSION_MESSAGE: &str = "You do not have permission to add book.";

/// Renders the book submission form.
///
/// `nonce` is embedded as the hidden `book_nonce` field; `book_added`
/// shows the confirmation left by the previous successful submission.
pub fn render_book_form(action: &str, nonce: &str, book_added: bool) -> String {
    let notice = if book_added {
        "\n    <p>Book added successfully!</p>"
    } else {
        ""
    };

    format!(
        r#"<form method="post" action="{action}" id="book-form">{notice}
    <input type="hidden" name="book_nonce" value="{nonce}">
    <label for="book-name">Book Name:</label><br>
    <input type="text" id="book-name" name="book_name"><br>
    <label for="author-name">Author Name:</label><br>
    <input type="text" id="author-name" name="author_name"><br><br>
    <input type="submit" name="submit_book" value="Submit">
</form>
"#,
        action = escape_html(action),
        notice = notice,
        nonce = escape_html(nonce),
    )
}

/// Minimal page reporting why a submission failed.
pub fn render_failure_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>Error</title></head><body><p>{}</p></body></html>\n",
        escape_html(message)
    )
}
