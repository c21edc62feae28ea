//! Metadata standards catalog.
//!
//! Artifacts are organized in four tiers: authoritative guidance (1),
//! technical specifications (2A), domain profiles (2B) and tagging tools (3).
//! The crate loads the catalog, ranks artifacts against free-text queries,
//! resolves cross-tier references and serves everything as MCP tools.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod schema;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use catalog::{Artifact, Catalog, CatalogSummary, Tier};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use search::{Field, SearchResult, search};
pub use server::CatalogServer;
pub use state::CatalogState;
