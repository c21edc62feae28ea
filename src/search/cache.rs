//! Memoized rankings keyed by normalized query.
//!
//! Hits store the artifact's position in the catalog instead of a reference, so
//! the cache does not borrow the catalog. A cache must only be used with
//! the catalog it was filled from; call [`SearchCache::clear`] when the catalog
//! is replaced.

use super::scoring::{self, RankedHit, SearchResult};
use crate::catalog::Artifact;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of distinct queries kept.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// LRU cache of ranked hits.
pub struct SearchCache {
    entries: LruCache<String, Arc<[RankedHit]>>,
}

impl std::fmt::Debug for SearchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl SearchCache {
    /// Create a cache holding up to `capacity` queries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Same contract as [`scoring::search`], reusing a previous ranking when
    /// the normalized query was seen before.
    pub fn search<'a>(&mut self, query: &str, artifacts: &'a [Artifact]) -> Vec<SearchResult<'a>> {
        let Some(key) = scoring::normalize_query(query) else {
            return Vec::new();
        };

        if let Some(hits) = self.entries.get(&key) {
            tracing::trace!(query = %key, "Search cache hit");
            return scoring::materialize(hits.iter().cloned(), artifacts);
        }

        let hits: Arc<[RankedHit]> = scoring::rank(&key, artifacts).into();
        let results = scoring::materialize(hits.iter().cloned(), artifacts);
        self.entries.put(key, hits);
        results
    }
}
