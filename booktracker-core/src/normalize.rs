//! Normalization of upstream book shapes into [`BookSummary`]
//!
//! Input contracts:
//!
//! * Local catalog ([`LocalBook`]): every field optional. The record's own
//!   `id` wins; `idVolume` is the fallback identifier. `authors` may be a
//!   string or a list.
//! * External search ([`Volume`]): `id` at the top level, everything else
//!   nested under `volumeInfo`. `authors` is a list, the cover is
//!   `imageLinks.thumbnail` (falling back to `smallThumbnail`).
//!
//! Output guarantees: `id` is never empty and is unique within one
//! normalized batch; blank strings become `None`; descriptions are kept in
//! full.

use crate::types::{AuthorsField, BookSummary, LocalBook, LocalPage, Volume, VolumeSearch};
use std::collections::HashSet;

/// Zoom parameter the search source appends to thumbnail links
const ZOOM_SUFFIX: &str = "&zoom=1";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn clean_thumbnail(url: String) -> String {
    match url.find(ZOOM_SUFFIX) {
        Some(idx) => url[..idx].to_string(),
        None => url,
    }
}

/// Normalize one local record. `position` is its 1-based absolute position in
/// the listing, used only when the record carries no identifier at all.
pub fn from_local(book: LocalBook, position: usize) -> BookSummary {
    let id = book
        .id
        .map(|id| id.to_string())
        .filter(|id| !id.trim().is_empty())
        .or_else(|| non_blank(book.id_volume))
        .unwrap_or_else(|| format!("local-{}", position));

    BookSummary {
        id,
        title: book.title.unwrap_or_default(),
        authors: book.authors.and_then(|a| a.joined()),
        cover_url: non_blank(book.cover_url),
        description: non_blank(book.description),
        published_date: non_blank(book.published_date),
    }
}

/// Normalize one external search item
pub fn from_volume(volume: Volume, position: usize) -> BookSummary {
    let info = volume.volume_info;
    let id = if volume.id.trim().is_empty() {
        format!("volume-{}", position)
    } else {
        volume.id
    };

    let authors = info
        .authors
        .map(AuthorsField::Many)
        .and_then(|names| names.joined());

    let cover_url = info
        .image_links
        .and_then(|links| non_blank(links.thumbnail).or(non_blank(links.small_thumbnail)))
        .map(clean_thumbnail);

    BookSummary {
        id,
        title: info.title.unwrap_or_default(),
        authors,
        cover_url,
        description: non_blank(info.description),
        published_date: non_blank(info.published_date),
    }
}

/// Drop later entries whose id was already seen, keeping order
fn dedupe(summaries: impl Iterator<Item = BookSummary>) -> Vec<BookSummary> {
    let mut seen = HashSet::new();
    summaries
        .filter(|summary| {
            let fresh = seen.insert(summary.id.clone());
            if !fresh {
                tracing::warn!(id = %summary.id, "Dropping duplicate book id in result set");
            }
            fresh
        })
        .collect()
}

/// Normalize a local listing page. `offset` is the number of records that
/// precede this page (`page * size`).
pub fn normalize_local(page: LocalPage, offset: usize) -> Vec<BookSummary> {
    dedupe(
        page.content
            .into_iter()
            .enumerate()
            .map(|(i, book)| from_local(book, offset.saturating_add(i + 1))),
    )
}

/// Normalize an external search response. `offset` as for [`normalize_local`].
pub fn normalize_volumes(search: VolumeSearch, offset: usize) -> Vec<BookSummary> {
    dedupe(
        search
            .items
            .into_iter()
            .enumerate()
            .map(|(i, volume)| from_volume(volume, offset.saturating_add(i + 1))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageLinks, RecordId, VolumeInfo};

    fn volume(id: &str, info: VolumeInfo) -> Volume {
        Volume {
            id: id.to_string(),
            volume_info: info,
        }
    }

    #[test]
    fn test_external_item_with_author_list() {
        let search: VolumeSearch = serde_json::from_value(serde_json::json!({
            "items": [{"id": "x1", "volumeInfo": {"title": "T", "authors": ["A", "B"]}}]
        }))
        .unwrap();

        let books = normalize_volumes(search, 0);
        assert_eq!(books, vec![BookSummary::new("x1", "T").with_authors("A, B")]);
    }

    #[test]
    fn test_external_item_missing_nested_fields() {
        let summary = from_volume(volume("v9", VolumeInfo::default()), 1);
        assert_eq!(summary.id, "v9");
        assert_eq!(summary.title, "");
        assert!(summary.authors.is_none());
        assert!(summary.cover_url.is_none());
    }

    #[test]
    fn test_external_authors_join_like_local() {
        let info = VolumeInfo {
            authors: Some(vec!["A".into(), "  ".into(), " B ".into()]),
            ..VolumeInfo::default()
        };
        assert_eq!(from_volume(volume("a", info), 1).authors.as_deref(), Some("A, B"));

        let blank = VolumeInfo {
            authors: Some(vec![" ".into()]),
            ..VolumeInfo::default()
        };
        assert!(from_volume(volume("b", blank), 1).authors.is_none());
    }

    #[test]
    fn test_thumbnail_zoom_suffix_stripped() {
        let info = VolumeInfo {
            image_links: Some(ImageLinks {
                thumbnail: Some(
                    "http://books.google.com/books/content?id=x&printsec=frontcover&img=1&zoom=1&source=gbs_api"
                        .to_string(),
                ),
                small_thumbnail: None,
            }),
            ..VolumeInfo::default()
        };
        let summary = from_volume(volume("x", info), 1);
        assert_eq!(
            summary.cover_url.as_deref(),
            Some("http://books.google.com/books/content?id=x&printsec=frontcover&img=1")
        );
    }

    #[test]
    fn test_small_thumbnail_fallback() {
        let info = VolumeInfo {
            image_links: Some(ImageLinks {
                thumbnail: Some(" ".to_string()),
                small_thumbnail: Some("http://small".to_string()),
            }),
            ..VolumeInfo::default()
        };
        assert_eq!(
            from_volume(volume("x", info), 1).cover_url.as_deref(),
            Some("http://small")
        );
    }

    #[test]
    fn test_local_missing_cover_is_absent() {
        let book = LocalBook {
            id: Some(RecordId::Number(3)),
            title: Some("Dune".into()),
            cover_url: Some(String::new()),
            ..LocalBook::default()
        };
        let summary = from_local(book, 1);
        assert_eq!(summary.id, "3");
        assert!(summary.cover_url.is_none());
    }

    #[test]
    fn test_local_id_precedence() {
        let with_both = LocalBook {
            id: Some(RecordId::Number(12)),
            id_volume: Some("vol-12".into()),
            ..LocalBook::default()
        };
        assert_eq!(from_local(with_both, 1).id, "12");

        let volume_only = LocalBook {
            id_volume: Some("vol-12".into()),
            ..LocalBook::default()
        };
        assert_eq!(from_local(volume_only, 1).id, "vol-12");

        assert_eq!(from_local(LocalBook::default(), 25).id, "local-25");
    }

    #[test]
    fn test_local_authors_string_or_list() {
        let single = LocalBook {
            authors: Some(AuthorsField::One("Ursula K. Le Guin".into())),
            ..LocalBook::default()
        };
        assert_eq!(
            from_local(single, 1).authors.as_deref(),
            Some("Ursula K. Le Guin")
        );

        let list = LocalBook {
            authors: Some(AuthorsField::Many(vec!["Pratchett".into(), "Gaiman".into()])),
            ..LocalBook::default()
        };
        assert_eq!(from_local(list, 1).authors.as_deref(), Some("Pratchett, Gaiman"));
    }

    #[test]
    fn test_positional_ids_use_offset() {
        let page = LocalPage::from_records(vec![LocalBook::default(), LocalBook::default()]);
        let ids: Vec<_> = normalize_local(page, 24).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["local-25", "local-26"]);
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let search = VolumeSearch {
            items: vec![
                volume("dup", VolumeInfo { title: Some("first".into()), ..VolumeInfo::default() }),
                volume("other", VolumeInfo::default()),
                volume("dup", VolumeInfo { title: Some("second".into()), ..VolumeInfo::default() }),
            ],
            total_items: None,
        };
        let books = normalize_volumes(search, 0);
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "first");
        assert_eq!(books[1].id, "other");
    }

    #[test]
    fn test_description_kept_in_full() {
        let long = "x".repeat(400);
        let book = LocalBook {
            id: Some(RecordId::Number(1)),
            description: Some(long.clone()),
            ..LocalBook::default()
        };
        assert_eq!(from_local(book, 1).description, Some(long));
    }
}
