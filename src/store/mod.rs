pub mod auth;
pub mod client;
pub mod session;
pub mod types;

pub use auth::{AuthSession, HttpIdentity, Identity};
pub use client::{DocumentStore, HttpStore, StoreError, BOOKS_COLLECTION, USERS_COLLECTION};
pub use types::{BookPatch, LibraryBook, UserProfile, MAX_RATING};
