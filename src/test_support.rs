//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::catalog::{Catalog, CatalogError, Volume, VolumeInfo};
use crate::store::{
    AuthSession, BookPatch, DocumentStore, Identity, LibraryBook, StoreError, UserProfile,
};

/// A catalog that answers every non-empty search with a fixed volume list.
pub struct StaticCatalog {
    pub volumes: Vec<Volume>,
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn search(&self, _query: &str) -> Result<Vec<Volume>, CatalogError> {
        Ok(self.volumes.clone())
    }

    async fn fetch(&self, volume_id: &str) -> Result<Volume, CatalogError> {
        self.volumes
            .iter()
            .find(|v| v.id == volume_id)
            .cloned()
            .ok_or_else(|| CatalogError::Api {
                status: 404,
                message: format!("volume {} not found", volume_id),
            })
    }
}

/// A catalog where every call fails with the given message.
pub struct FailingCatalog {
    pub message: String,
}

#[async_trait]
impl Catalog for FailingCatalog {
    async fn search(&self, _query: &str) -> Result<Vec<Volume>, CatalogError> {
        Err(CatalogError::Network(self.message.clone()))
    }

    async fn fetch(&self, _volume_id: &str) -> Result<Volume, CatalogError> {
        Err(CatalogError::Network(self.message.clone()))
    }
}

/// An in-memory document store. Counts write calls so tests can assert that
/// no-op updates never reach the store.
#[derive(Default)]
pub struct InMemoryStore {
    books: Mutex<Vec<LibraryBook>>,
    users: Mutex<Vec<UserProfile>>,
    write_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    pub fn with_books(books: Vec<LibraryBook>) -> Self {
        InMemoryStore {
            books: Mutex::new(books),
            ..Default::default()
        }
    }

    /// Number of add/update/delete calls that reached the store.
    pub fn write_count(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn user_profiles(&self) -> Vec<UserProfile> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn add_book(&self, book: &LibraryBook) -> Result<String, StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let id = uuid::Uuid::new_v4().to_string();
        let mut stored = book.clone();
        stored.id = Some(id.clone());
        self.books.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn update_book(&self, id: &str, patch: &BookPatch) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut books = self.books.lock().unwrap();
        let book = books
            .iter_mut()
            .find(|b| b.id.as_deref() == Some(id))
            .ok_or_else(|| StoreError::Api {
                status: 404,
                message: format!("document {} not found", id),
            })?;
        if let Some(ref notes) = patch.notes {
            book.notes = Some(notes.clone());
        }
        if let Some(rating) = patch.rating {
            book.rating = Some(rating);
        }
        if let Some(at) = patch.started_reading_at {
            book.started_reading_at = Some(at);
        }
        if let Some(at) = patch.finished_reading_at {
            book.finished_reading_at = Some(at);
        }
        Ok(())
    }

    async fn delete_book(&self, id: &str) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.books
            .lock()
            .unwrap()
            .retain(|b| b.id.as_deref() != Some(id));
        Ok(())
    }

    async fn all_books(&self) -> Result<Vec<LibraryBook>, StoreError> {
        Ok(self.books.lock().unwrap().clone())
    }

    async fn books_for_user(&self, user_id: &str) -> Result<Vec<LibraryBook>, StoreError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn add_user(&self, profile: &UserProfile) -> Result<String, StoreError> {
        self.users.lock().unwrap().push(profile.clone());
        Ok(uuid::Uuid::new_v4().to_string())
    }
}

/// An identity provider that accepts or rejects everyone.
pub struct InMemoryIdentity {
    pub fail: bool,
}

impl InMemoryIdentity {
    fn session_for(email: &str) -> AuthSession {
        let local = email.split('@').next().unwrap_or(email);
        AuthSession {
            user_id: format!("uid-{}", local),
            email: email.to_string(),
            token: None,
        }
    }
}

#[async_trait]
impl Identity for InMemoryIdentity {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthSession, StoreError> {
        if self.fail {
            return Err(StoreError::Api {
                status: 401,
                message: "invalid credentials".to_string(),
            });
        }
        Ok(Self::session_for(email))
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<AuthSession, StoreError> {
        if self.fail {
            return Err(StoreError::Api {
                status: 400,
                message: "email already registered".to_string(),
            });
        }
        Ok(Self::session_for(email))
    }
}

/// A minimal catalog volume for tests.
pub fn volume(id: &str, title: &str) -> Volume {
    Volume {
        id: id.to_string(),
        volume_info: VolumeInfo {
            title: title.to_string(),
            authors: vec!["Test Author".to_string()],
            ..Default::default()
        },
    }
}

/// A minimal library record for tests. Tracking fields start unset.
pub fn library_book(volume_id: &str, user_id: &str) -> LibraryBook {
    LibraryBook {
        id: Some(format!("doc-{}", volume_id)),
        volume_id: volume_id.to_string(),
        title: format!("Book {}", volume_id),
        authors: "Test Author".to_string(),
        user_id: user_id.to_string(),
        photo_url: None,
        description: None,
        published_date: None,
        categories: None,
        page_count: None,
        rating: None,
        notes: None,
        started_reading_at: None,
        finished_reading_at: None,
    }
}
