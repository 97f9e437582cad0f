//! Records served by the first-party catalog backend
//!
//! The backend pages its listing and wraps records in a `content` array.
//! Older endpoints return a bare array instead; both decode to [`LocalPage`].
//! Field names follow the backend's camelCase, and a few legacy spellings
//! (`author`, `cover`, `publicationDate`) are accepted as aliases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier; the backend emits numeric ids, imports may use strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Authors as either a single preformatted string or a list of names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AuthorsField {
    One(String),
    Many(Vec<String>),
}

impl AuthorsField {
    /// Comma-joined names, or `None` when nothing printable is left
    pub fn joined(&self) -> Option<String> {
        let joined = match self {
            AuthorsField::One(name) => name.trim().to_string(),
            AuthorsField::Many(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        };
        (!joined.is_empty()).then_some(joined)
    }
}

/// One book record from the local catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalBook {
    #[serde(default)]
    pub id: Option<RecordId>,

    /// External volume id the record was imported from
    #[serde(default)]
    pub id_volume: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, alias = "author")]
    pub authors: Option<AuthorsField>,

    #[serde(default, alias = "cover")]
    pub cover_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, alias = "publicationDate")]
    pub published_date: Option<String>,
}

/// One page of the local catalog listing
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "LocalPageRepr")]
pub struct LocalPage {
    pub content: Vec<LocalBook>,
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    pub number: Option<u32>,
    pub last: Option<bool>,
}

impl LocalPage {
    /// Build a page from records alone, without paging metadata
    pub fn from_records(content: Vec<LocalBook>) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocalPageRepr {
    Paged(PagedRepr),
    Bare(Vec<LocalBook>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagedRepr {
    content: Vec<LocalBook>,
    #[serde(default)]
    total_elements: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    number: Option<u32>,
    #[serde(default)]
    last: Option<bool>,
}

impl From<LocalPageRepr> for LocalPage {
    fn from(repr: LocalPageRepr) -> Self {
        match repr {
            LocalPageRepr::Paged(p) => Self {
                content: p.content,
                total_elements: p.total_elements,
                total_pages: p.total_pages,
                number: p.number,
                last: p.last,
            },
            LocalPageRepr::Bare(content) => Self::from_records(content),
        }
    }
}
