//! Items returned by the external keyword-search source
//!
//! Each item nests its bibliographic data under `volumeInfo`; authors are a
//! list and the cover is reached through `imageLinks.thumbnail`. Every nested
//! field may be missing.

use serde::{Deserialize, Serialize};

/// Search response envelope; `items` is omitted entirely when nothing matched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSearch {
    #[serde(default)]
    pub items: Vec<Volume>,

    #[serde(default)]
    pub total_items: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub authors: Option<Vec<String>>,

    #[serde(default)]
    pub image_links: Option<ImageLinks>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub published_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub small_thumbnail: Option<String>,
}
