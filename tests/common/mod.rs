//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `embedded_state`: server state over the catalog compiled into the binary
//! - `embedded_catalog`: the embedded catalog alone, for scorer tests
//!
//! [`TempWorkspace`] provides an on-disk data directory for loader tests and
//! for catalogs built from hand-written records.

use rstest::fixture;
use serde_json::{Value, json};
use standards_catalog::config::SearchConfig;
use standards_catalog::{Catalog, CatalogState, Tier};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
#[allow(dead_code)] // Used across different integration test crates
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// A temporary data directory for test isolation.
///
/// The directory is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Writes one tier's fixture file from JSON records.
    pub fn write_tier(&self, tier: Tier, records: &[Value]) {
        let content = serde_json::to_string_pretty(records).expect("Failed to encode records");
        self.create_file(tier.fixture_file(), &content);
    }

    /// Writes all four fixture files; tiers without records get an empty array.
    pub fn write_catalog(&self, records: &[Value]) {
        for tier in Tier::ALL {
            let of_tier: Vec<Value> = records
                .iter()
                .filter(|r| r["tier"] == tier.code())
                .cloned()
                .collect();
            self.write_tier(tier, &of_tier);
        }
    }

    /// Copies the shipped fixture files into this workspace.
    pub fn copy_shipped_fixtures(&self) {
        for tier in Tier::ALL {
            let source = project_root().join("data").join(tier.fixture_file());
            std::fs::copy(&source, self.root.join(tier.fixture_file()))
                .unwrap_or_else(|e| panic!("Failed to copy '{}': {}", source.display(), e));
        }
    }

    /// Loads the catalog from this workspace.
    pub fn load(&self) -> Catalog {
        Catalog::load_dir(&self.root).expect("Failed to load catalog")
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal guidance record; override fields with [`with`].
#[allow(dead_code)]
pub fn guidance(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "tier": "1",
        "title": title,
        "description": "",
        "status": "active",
        "hostingType": "stored",
        "keywords": [],
        "documentNumber": "",
        "issuingAuthority": "",
        "issueDate": "2024-01-01",
        "summary": ""
    })
}

/// Minimal spec record; override fields with [`with`].
#[allow(dead_code)]
pub fn spec(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "tier": "2A",
        "title": title,
        "description": "",
        "status": "active",
        "hostingType": "stored",
        "keywords": [],
        "version": "1.0",
        "managingOrganization": "",
        "category": ""
    })
}

/// Minimal profile record; override fields with [`with`].
#[allow(dead_code)]
pub fn profile(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "tier": "2B",
        "title": title,
        "description": "",
        "status": "active",
        "hostingType": "stored",
        "keywords": [],
        "owningOrganization": "",
        "domain": "",
        "version": "1.0"
    })
}

/// Minimal tool record; override fields with [`with`].
#[allow(dead_code)]
pub fn tool(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "tier": "3",
        "title": title,
        "description": "",
        "status": "active",
        "hostingType": "stored",
        "keywords": [],
        "vendor": "",
        "licenseType": "",
        "maturityLevel": "production"
    })
}

/// Returns `record` with the fields of `overrides` replaced.
#[allow(dead_code)]
pub fn with(mut record: Value, overrides: Value) -> Value {
    if let (Some(target), Value::Object(fields)) = (record.as_object_mut(), overrides) {
        target.extend(fields);
    }
    record
}

#[allow(dead_code)]
#[fixture]
pub fn embedded_catalog() -> Catalog {
    Catalog::embedded().expect("Embedded fixtures should load")
}

#[allow(dead_code)]
#[fixture]
pub fn embedded_state() -> Arc<CatalogState> {
    Arc::new(CatalogState::new(
        Catalog::embedded().expect("Embedded fixtures should load"),
        &SearchConfig::default(),
    ))
}
