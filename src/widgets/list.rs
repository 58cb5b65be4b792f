//! Book list widget

use crate::store::Book;
use crate::widgets::escape_html;

/// Renders a search form followed by a two-column table of `books`.
///
/// The search box is pre-filled with `search`. An empty page renders a
/// single placeholder row.
pub fn render_book_list(books: &[Book], search: &str) -> String {
    let mut html = format!(
        r#"<form method="get" id="search-form">
    <label for="book_search">Search:</label>
    <input type="text" id="book_search" name="book_search" value="{}">
    <input type="submit" value="Search">
</form>
<table class="book-list">
    <thead>
        <tr>
            <th>Book Name</th>
            <th>Author Name</th>
        </tr>
    </thead>
    <tbody>
"#,
        escape_html(search)
    );

    if books.is_empty() {
        html.push_str("        <tr>\n            <td colspan=\"2\">No books found.</td>\n        </tr>\n");
    }

    for book in books {
        html.push_str(&format!(
            "        <tr>\n            <td>{}</td>\n            <td>{}</td>\n        </tr>\n",
            escape_html(&book.book_name),
            escape_html(&book.author_name)
        ));
    }

    html.push_str("    </tbody>\n</table>\n");
    html
}
