//! The normalized, rendering-ready book representation

use serde::{Deserialize, Serialize};

/// A book as the presentation layer sees it, regardless of where it came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    /// Key for the rendering layer; unique within one loaded result set
    pub id: String,

    /// Display title (empty when upstream had none)
    #[serde(default)]
    pub title: String,

    /// Comma-joined author names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,

    /// Cover image URL; absent means the renderer shows a placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// Full description, never truncated here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication date exactly as upstream wrote it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl BookSummary {
    /// Create a summary with only the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: None,
            cover_url: None,
            description: None,
            published_date: None,
        }
    }

    /// Set authors
    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    /// Set cover URL
    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set publication date
    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }
}
