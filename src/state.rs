//! Shared server state: the loaded catalog and the search cache.

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::search::{self, SearchCache, SearchResult};
use std::sync::Arc;
use tokio::sync::Mutex;

/// State shared by every tool invocation.
///
/// The catalog is immutable once loaded. The cache only memoizes rankings and
/// never changes what a search returns.
pub struct CatalogState {
    catalog: Arc<Catalog>,

    /// Memoized rankings (absent when caching is disabled)
    cache: Option<Mutex<SearchCache>>,

    /// Result limit applied when a request does not specify one
    default_limit: usize,
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("artifacts", &self.catalog.len())
            .field("has_cache", &self.cache.is_some())
            .field("default_limit", &self.default_limit)
            .finish()
    }
}

impl CatalogState {
    /// Create state around a loaded catalog.
    pub fn new(catalog: Catalog, config: &SearchConfig) -> Self {
        let cache = (config.cache_capacity > 0)
            .then(|| Mutex::new(SearchCache::new(config.cache_capacity)));
        Self {
            catalog: Arc::new(catalog),
            cache,
            default_limit: config.default_limit,
        }
    }

    /// Get the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank the whole catalog against `query`, using the cache when enabled.
    pub async fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        let artifacts = self.catalog.all_artifacts();
        match &self.cache {
            Some(cache) => cache.lock().await.search(query, artifacts),
            None => search::search(query, artifacts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[tokio::test]
    async fn test_cached_and_uncached_state_agree() {
        let cached = CatalogState::new(Catalog::embedded().unwrap(), &SearchConfig::default());
        let uncached = CatalogState::new(
            Catalog::embedded().unwrap(),
            &SearchConfig {
                cache_capacity: 0,
                ..SearchConfig::default()
            },
        );

        let a = cached.search("data").await;
        let b = uncached.search("data").await;
        check!(!a.is_empty());
        check!(a.len() == b.len());
        for (x, y) in a.iter().zip(&b) {
            check!(x.artifact.id() == y.artifact.id());
            check!(x.score == y.score);
            check!(x.matched_fields == y.matched_fields);
        }
    }
}
