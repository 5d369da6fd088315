//! Home/library screen state holder.
//!
//! Holds the latest snapshot of the `books` collection; ownership and
//! reading-status views are derived at render time by the pure filters.
//! Mutation outcomes are routed into their own `Resource` channel (and
//! logged), never silently dropped.

use std::sync::Arc;

use log::warn;

use crate::catalog::Volume;
use crate::core::resource::Resource;
use crate::store::{BookPatch, DocumentStore, LibraryBook};

pub struct LibraryScreen {
    store: Arc<dyn DocumentStore>,
    /// Latest snapshot of the books collection.
    pub records: Resource<Vec<LibraryBook>>,
    /// Outcome of the most recent add/update/delete.
    pub mutation: Resource<()>,
}

impl LibraryScreen {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        LibraryScreen {
            store,
            records: Resource::default(),
            mutation: Resource::Loading(false),
        }
    }

    /// Re-queries the whole collection and republishes the snapshot.
    pub async fn refresh(&mut self) {
        self.records = Resource::Loading(true);
        let outcome = self.store.all_books().await;
        match outcome {
            Ok(books) => {
                self.records = Resource::Success(books);
            }
            Err(e) => {
                warn!("Library refresh failed: {}", e);
                self.records = Resource::Error(e.to_string());
            }
        }
    }

    /// Adds a catalog volume to `user_id`'s library and refreshes on success.
    pub async fn add(&mut self, volume: &Volume, user_id: &str) {
        let record = LibraryBook::from_volume(volume, user_id);
        self.mutation = Resource::Loading(true);
        let outcome = self.store.add_book(&record).await;
        match outcome {
            Ok(_id) => {
                self.mutation = Resource::Success(());
                self.refresh().await;
            }
            Err(e) => {
                warn!("Add failed: {}", e);
                self.mutation = Resource::Error(e.to_string());
            }
        }
    }

    /// Applies a partial update to one record and refreshes on success.
    ///
    /// If the patch is empty, or changes nothing relative to the held
    /// record, no store mutation is issued at all.
    pub async fn update_record(&mut self, id: &str, patch: &BookPatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(current) = self.held_record(id) {
            if !patch.changes(current) {
                return;
            }
        }
        self.mutation = Resource::Loading(true);
        let outcome = self.store.update_book(id, patch).await;
        match outcome {
            Ok(()) => {
                self.mutation = Resource::Success(());
                self.refresh().await;
            }
            Err(e) => {
                warn!("Update of {} failed: {}", id, e);
                self.mutation = Resource::Error(e.to_string());
            }
        }
    }

    /// Deletes one record and refreshes on success.
    pub async fn delete_record(&mut self, id: &str) {
        self.mutation = Resource::Loading(true);
        let outcome = self.store.delete_book(id).await;
        match outcome {
            Ok(()) => {
                self.mutation = Resource::Success(());
                self.refresh().await;
            }
            Err(e) => {
                warn!("Delete of {} failed: {}", id, e);
                self.mutation = Resource::Error(e.to_string());
            }
        }
    }

    /// The held snapshot's record with this document id, if loaded.
    pub fn held_record(&self, id: &str) -> Option<&LibraryBook> {
        self.records
            .data()
            .and_then(|books| books.iter().find(|b| b.id.as_deref() == Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::owned;
    use crate::test_support::{InMemoryStore, library_book, volume};
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_refresh_loads_snapshot() {
        let store = Arc::new(InMemoryStore::with_books(vec![
            library_book("b1", "u1"),
            library_book("b2", "u2"),
        ]));
        let mut screen = LibraryScreen::new(store);
        assert!(screen.records.is_loading());

        screen.refresh().await;
        assert_eq!(screen.records.data().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_stores_record_and_refreshes() {
        let store = Arc::new(InMemoryStore::new());
        let mut screen = LibraryScreen::new(store);

        screen.add(&volume("v1", "Dune"), "u1").await;

        assert_eq!(screen.mutation, Resource::Success(()));
        let records = screen.records.data().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].volume_id, "v1");
        assert!(records[0].id.is_some());
    }

    #[tokio::test]
    async fn test_unchanged_update_issues_no_mutation() {
        let mut book = library_book("b1", "u1");
        book.notes = Some("fine".to_string());
        book.rating = Some(3);
        let store = Arc::new(InMemoryStore::with_books(vec![book]));
        let mut screen = LibraryScreen::new(store.clone());
        screen.refresh().await;

        let unchanged = BookPatch::new().notes("fine").rating(3);
        screen.update_record("doc-b1", &unchanged).await;
        assert_eq!(store.write_count(), 0);

        let empty = BookPatch::new();
        screen.update_record("doc-b1", &empty).await;
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_changed_update_is_written_and_visible_after_refresh() {
        let store = Arc::new(InMemoryStore::with_books(vec![library_book("b1", "u1")]));
        let mut screen = LibraryScreen::new(store.clone());
        screen.refresh().await;

        let started = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let patch = BookPatch::new().rating(5).started_at(started);
        screen.update_record("doc-b1", &patch).await;

        assert_eq!(store.write_count(), 1);
        assert_eq!(screen.mutation, Resource::Success(()));
        let record = screen.held_record("doc-b1").unwrap();
        assert_eq!(record.rating, Some(5));
        assert_eq!(record.started_reading_at, Some(started));
    }

    #[tokio::test]
    async fn test_delete_removes_record_from_owned_view() {
        let store = Arc::new(InMemoryStore::with_books(vec![
            library_book("b1", "u1"),
            library_book("b2", "u1"),
        ]));
        let mut screen = LibraryScreen::new(store);
        screen.refresh().await;

        screen.delete_record("doc-b1").await;

        assert_eq!(screen.mutation, Resource::Success(()));
        let records = screen.records.data().unwrap();
        let mine = owned(records, "u1");
        assert_eq!(mine.len(), 1);
        assert!(mine.iter().all(|b| b.id.as_deref() != Some("doc-b1")));
    }

    #[tokio::test]
    async fn test_update_of_unknown_record_surfaces_error() {
        let store = Arc::new(InMemoryStore::new());
        let mut screen = LibraryScreen::new(store);
        screen.refresh().await;

        let patch = BookPatch::new().rating(2);
        screen.update_record("nope", &patch).await;

        let message = screen.mutation.error().unwrap();
        assert!(message.contains("not found"), "got: {message}");
    }
}
