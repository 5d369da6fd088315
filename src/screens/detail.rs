//! Book detail screen state holder.

use std::sync::Arc;

use log::warn;

use crate::catalog::{Catalog, Volume};
use crate::core::resource::Resource;

pub struct DetailScreen {
    catalog: Arc<dyn Catalog>,
    pub book: Resource<Volume>,
}

impl DetailScreen {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        DetailScreen {
            catalog,
            book: Resource::default(),
        }
    }

    /// Looks up a single volume and republishes the outcome.
    pub async fn fetch(&mut self, volume_id: &str) {
        self.book = Resource::Loading(true);
        let outcome = self.catalog.fetch(volume_id).await;
        match outcome {
            Ok(volume) => {
                self.book = Resource::Success(volume);
            }
            Err(e) => {
                warn!("Fetch of {} failed: {}", volume_id, e);
                self.book = Resource::Error(e.to_string());
            }
        }
    }
}
