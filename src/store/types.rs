//! Documents held in the cloud store.
//!
//! Field names match the store's snake_case schema (`started_reading_at`,
//! `finished_reading_at`, ...). A `LibraryBook` is created from a catalog
//! volume on "add to library" and owned exclusively by the store afterwards;
//! the app only ever holds a read-only snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Volume;

/// Ratings run 0..=5, matching a five-star rating widget.
pub const MAX_RATING: u8 = 5;

/// A user's personal tracking entry for one book.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LibraryBook {
    /// Store-assigned document id. None until the store has accepted the add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Catalog identifier this record was derived from.
    pub volume_id: String,
    pub title: String,
    pub authors: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_reading_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_reading_at: Option<DateTime<Utc>>,
}

impl LibraryBook {
    /// Derives a fresh library record from a catalog volume for `user_id`.
    /// Tracking fields (rating, notes, timestamps) start unset.
    pub fn from_volume(volume: &Volume, user_id: &str) -> Self {
        let info = &volume.volume_info;
        LibraryBook {
            id: None,
            volume_id: volume.id.clone(),
            title: info.title.clone(),
            authors: info.author_line(),
            user_id: user_id.to_string(),
            photo_url: info.cover_url().map(str::to_string),
            description: info.description.clone(),
            published_date: info.published_date.clone(),
            categories: if info.categories.is_empty() {
                None
            } else {
                Some(info.categories.join(", "))
            },
            page_count: info.page_count,
            rating: None,
            notes: None,
            started_reading_at: None,
            finished_reading_at: None,
        }
    }
}

/// Partial update for a library record. Only set fields are serialized and
/// sent to the store.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_reading_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_reading_at: Option<DateTime<Utc>>,
}

impl BookPatch {
    pub fn new() -> Self {
        BookPatch::default()
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Clamps to `MAX_RATING` rather than rejecting out-of-range input.
    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating.min(MAX_RATING));
        self
    }

    pub fn started_at(mut self, at: DateTime<Utc>) -> Self {
        self.started_reading_at = Some(at);
        self
    }

    pub fn finished_at(mut self, at: DateTime<Utc>) -> Self {
        self.finished_reading_at = Some(at);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_none()
            && self.rating.is_none()
            && self.started_reading_at.is_none()
            && self.finished_reading_at.is_none()
    }

    /// True if applying this patch to `book` would change anything. Unset
    /// patch fields mean "leave as is".
    pub fn changes(&self, book: &LibraryBook) -> bool {
        fn differs<T: PartialEq>(patch: &Option<T>, current: &Option<T>) -> bool {
            patch.is_some() && patch != current
        }
        differs(&self.notes, &book.notes)
            || differs(&self.rating, &book.rating)
            || differs(&self.started_reading_at, &book.started_reading_at)
            || differs(&self.finished_reading_at, &book.finished_reading_at)
    }
}

/// Profile document created in the `users` collection at sign-up.
/// Read-only thereafter in this app's scope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    pub avatar_url: String,
    pub quote: String,
    pub profession: String,
}

impl UserProfile {
    pub fn new(user_id: &str, display_name: &str) -> Self {
        UserProfile {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            avatar_url: String::new(),
            quote: String::new(),
            profession: String::new(),
        }
    }
}
