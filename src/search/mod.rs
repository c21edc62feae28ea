//! Relevance search across all catalog tiers.
//!
//! This module provides the weighted field scorer and an optional LRU
//! memoization layer on top of it.

pub(crate) mod cache;
pub(crate) mod scoring;

pub use cache::{DEFAULT_CACHE_CAPACITY, SearchCache};
pub use scoring::{Field, SearchResult, normalize_query, search};
