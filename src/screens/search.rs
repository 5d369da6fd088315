//! Search screen state holder.

use std::sync::Arc;

use log::warn;

use crate::catalog::{Catalog, Volume};
use crate::core::resource::Resource;

pub struct SearchScreen {
    catalog: Arc<dyn Catalog>,
    /// Latest search outcome. Starts as `Loading(true)` until the first
    /// search completes.
    pub results: Resource<Vec<Volume>>,
}

impl SearchScreen {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        SearchScreen {
            catalog,
            results: Resource::default(),
        }
    }

    /// Runs a keyword search and republishes the outcome.
    ///
    /// An empty query is a no-op, explicitly not an error: the held state is
    /// left exactly as it was.
    pub async fn search(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.results = Resource::Loading(true);
        let outcome = self.catalog.search(query).await;
        match outcome {
            Ok(volumes) => {
                self.results = Resource::Success(volumes);
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                self.results = Resource::Error(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingCatalog, StaticCatalog, volume};

    #[tokio::test]
    async fn test_search_publishes_success() {
        let catalog = Arc::new(StaticCatalog {
            volumes: vec![
                volume("v1", "Flutter in Action"),
                volume("v2", "Flutter for Dummies"),
                volume("v3", "Beginning Flutter"),
            ],
        });
        let mut screen = SearchScreen::new(catalog);
        screen.search("flutter").await;

        let results = screen.results.data().expect("should be Success");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "v1");
        assert_eq!(results[2].id, "v3");
    }

    #[tokio::test]
    async fn test_empty_query_leaves_state_untouched() {
        let catalog = Arc::new(StaticCatalog { volumes: vec![] });
        let mut screen = SearchScreen::new(catalog);
        assert!(screen.results.is_loading());

        screen.search("").await;
        // Still the initial Loading(true), not Success([]) and not Error
        assert_eq!(screen.results, Resource::Loading(true));
    }

    #[tokio::test]
    async fn test_search_with_no_hits_is_success_empty() {
        let catalog = Arc::new(StaticCatalog { volumes: vec![] });
        let mut screen = SearchScreen::new(catalog);
        screen.search("zzzz").await;
        assert_eq!(screen.results, Resource::Success(vec![]));
    }

    #[tokio::test]
    async fn test_search_failure_publishes_error() {
        let catalog = Arc::new(FailingCatalog {
            message: "connection refused".to_string(),
        });
        let mut screen = SearchScreen::new(catalog);
        screen.search("rust").await;
        assert_eq!(
            screen.results.error(),
            Some("network error: connection refused")
        );
    }
}
