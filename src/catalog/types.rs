//! Wire types for the books catalog HTTP API.
//!
//! The catalog speaks the Google-Books volume shape: a search returns an
//! object whose `items` array may be entirely absent when nothing matched,
//! and almost every field of a volume is optional in practice.

use serde::{Deserialize, Serialize};

/// One catalog entry. Immutable once fetched; never persisted by this app
/// beyond the current screen's memory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    pub title: String,
    pub subtitle: Option<String>,
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub categories: Vec<String>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

/// Search response envelope.
#[derive(Deserialize, Debug, Default)]
pub struct VolumeList {
    #[serde(default)]
    pub items: Vec<Volume>,
    #[serde(rename = "totalItems", default)]
    pub total_items: u32,
}

impl VolumeInfo {
    /// Authors joined for display ("A, B"). Empty string when unknown.
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// Preferred cover image URL, if the catalog provided one.
    pub fn cover_url(&self) -> Option<&str> {
        self.image_links
            .as_ref()
            .and_then(|links| links.thumbnail.as_deref().or(links.small_thumbnail.as_deref()))
    }
}
