//! Plain-text rendering of client state snapshots.

use std::fmt::Write;

use crate::books::{Book, ClientState, FieldValue};

const MISSING: &str = "-";

/// One-line banner for the loading/error state, if any.
pub fn render_status(state: &ClientState) -> Option<String> {
    if state.is_loading {
        return Some("Loading...".to_string());
    }
    state.error.as_ref().map(|err| match err.status {
        Some(status) => format!("Error ({}): {}", status, err.message),
        None => format!("Error: {}", err.message),
    })
}

/// Table of books, one per line.
pub fn render_listing(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    let id_width = books
        .iter()
        .map(|b| b.id.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for book in books {
        let _ = write!(
            out,
            "{:>width$}  {}",
            book.id.to_string(),
            field(&book.title),
            width = id_width
        );
        if let Some(author) = shown(&book.author) {
            let _ = write!(out, " by {}", author);
        }
        if let Some(year) = shown(&book.year) {
            let _ = write!(out, " ({})", year);
        }
        out.push('\n');
    }
    out
}

/// Detail page for one book. `base_url` resolves the cover image link.
pub fn render_detail(book: &Book, base_url: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", field(&book.title));
    let _ = writeln!(out, "Author: {}", field(&book.author));
    let _ = writeln!(out, "Year: {}", field(&book.year));
    let _ = writeln!(out, "Country: {}", field(&book.country));
    let _ = writeln!(out, "Pages: {}", field(&book.pages));
    let _ = writeln!(out, "Language: {}", field(&book.language));
    if let Some(url) = book.image_url(base_url) {
        let _ = writeln!(out, "Cover: {}", url);
    }
    out
}

/// A field worth printing: present and not null.
fn shown(value: &Option<FieldValue>) -> Option<&FieldValue> {
    value.as_ref().filter(|v| !v.is_null())
}

fn field(value: &Option<FieldValue>) -> String {
    shown(value).map_or_else(|| MISSING.to_string(), |v| v.to_string())
}
