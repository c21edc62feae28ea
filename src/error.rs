//! Error handling types and utilities.

use crate::catalog::Tier;
use std::path::PathBuf;

/// A specialized Result type for application-level operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the edges (config, CLI, server startup).
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading or validating catalog fixtures fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Fixture file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Fixture file is not a valid JSON array of artifacts.
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    /// A record's discriminant does not match the file it was loaded from.
    #[error("Record '{id}' in {file} is tagged {found} but the file holds {expected} records")]
    TierMismatch {
        file: String,
        id: String,
        expected: Tier,
        found: Tier,
    },
    /// Two records in the same tier share an id.
    #[error("Duplicate id '{id}' in {tier}")]
    DuplicateId { tier: Tier, id: String },
}
