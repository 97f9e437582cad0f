//! Presentation rules for book cards
//!
//! Truncation happens only on the way out; the [`BookSummary`] handed in is
//! never modified.

use crate::types::BookSummary;
use crate::viewmodel::{Mode, SearchState};
use std::borrow::Cow;
use std::fmt::Write;

/// Maximum number of characters of a description shown on a card
pub const DESCRIPTION_LIMIT: usize = 150;

/// Marker appended to truncated descriptions
pub const ELLIPSIS: &str = "...";

/// Shown in place of a cover image when the book has none
pub const COVER_PLACEHOLDER: &str = "[no cover]";

/// Shown when a fetch failed or returned nothing
pub const EMPTY_NOTICE: &str = "No results. Try again.";

/// Shorten a description for display, counting characters rather than bytes
pub fn truncate_description(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

/// Render a single book as a plain-text card
pub fn render_card(book: &BookSummary) -> String {
    let mut out = String::new();
    let title = if book.title.is_empty() {
        "(untitled)"
    } else {
        book.title.as_str()
    };

    let _ = writeln!(out, "{}  [{}]", title, book.id);
    if let Some(authors) = &book.authors {
        let _ = writeln!(out, "  by {}", authors);
    }
    let _ = writeln!(
        out,
        "  cover: {}",
        book.cover_url.as_deref().unwrap_or(COVER_PLACEHOLDER)
    );
    if let Some(description) = &book.description {
        let _ = writeln!(out, "  {}", truncate_description(description));
    }
    if let Some(date) = &book.published_date {
        let _ = writeln!(out, "  published: {}", date);
    }
    out
}

/// Render the whole catalog view: header, cards and any pending notice
pub fn render_page(state: &SearchState) -> String {
    let mut out = String::new();
    let heading = match state.mode {
        Mode::Browse => "Catalog",
        Mode::Search => "Search results",
    };

    let _ = write!(out, "{} - page {}", heading, state.page.saturating_add(1));
    if !state.query.is_empty() {
        let _ = write!(out, " - \"{}\"", state.query);
    }
    out.push('\n');

    if state.books.is_empty() || state.notice.is_some() {
        let _ = writeln!(out, "{}", state.notice.as_deref().unwrap_or(EMPTY_NOTICE));
    }
    for book in &state.books {
        out.push('\n');
        out.push_str(&render_card(book));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_borrowed() {
        let text = "A desert planet.";
        assert!(matches!(truncate_description(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_exact_limit_not_truncated() {
        let text = "a".repeat(DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(&text), text);
    }

    #[test]
    fn test_long_description_truncated() {
        let text = "b".repeat(DESCRIPTION_LIMIT + 1);
        let shown = truncate_description(&text);
        assert_eq!(shown, format!("{}...", "b".repeat(DESCRIPTION_LIMIT)));
    }

    #[test]
    fn test_multibyte_truncation() {
        let text = "é".repeat(DESCRIPTION_LIMIT + 10);
        let shown = truncate_description(&text);
        assert_eq!(shown.chars().count(), DESCRIPTION_LIMIT + ELLIPSIS.len());
    }

    #[test]
    fn test_render_does_not_mutate_summary() {
        let book = BookSummary::new("1", "Long").with_description("z".repeat(300));
        let before = book.clone();
        let card = render_card(&book);
        assert!(card.contains(&format!("{}...", "z".repeat(DESCRIPTION_LIMIT))));
        assert_eq!(book, before);
    }

    #[test]
    fn test_page_header_at_largest_index() {
        let mut state = SearchState::new();
        state.page = usize::MAX;
        let page = render_page(&state);
        assert!(page.starts_with(&format!("Catalog - page {}", usize::MAX)));
    }

    #[test]
    fn test_placeholder_for_missing_cover() {
        let card = render_card(&BookSummary::new("1", "No Art"));
        assert!(card.contains(COVER_PLACEHOLDER));
    }
}
