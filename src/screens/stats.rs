//! Stats screen state holder.
//!
//! Loads the signed-in user's records via the store's equality query and
//! derives the aggregate view with the pure filters.

use std::sync::Arc;

use log::warn;

use crate::core::filters::ReadingSummary;
use crate::core::resource::Resource;
use crate::store::{AuthSession, DocumentStore, LibraryBook};

pub struct StatsScreen {
    store: Arc<dyn DocumentStore>,
    pub records: Resource<Vec<LibraryBook>>,
}

impl StatsScreen {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        StatsScreen {
            store,
            records: Resource::default(),
        }
    }

    pub async fn refresh(&mut self, user_id: &str) {
        self.records = Resource::Loading(true);
        let outcome = self.store.books_for_user(user_id).await;
        match outcome {
            Ok(books) => {
                self.records = Resource::Success(books);
            }
            Err(e) => {
                warn!("Stats refresh failed: {}", e);
                self.records = Resource::Error(e.to_string());
            }
        }
    }

    /// Recomputed from the held snapshot on every read.
    pub fn summary(&self, session: &AuthSession) -> ReadingSummary {
        let records = self.records.data().map(Vec::as_slice).unwrap_or(&[]);
        ReadingSummary::for_user(records, &session.user_id, &session.email)
    }
}
