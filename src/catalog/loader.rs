//! Fixture loading and integrity checks.
//!
//! Each tier lives in its own JSON file holding an array of tagged records.
//! The loader verifies that every record's `tier` tag matches its file and that
//! ids are unique within a tier. Ids may repeat across tiers.

use super::{Artifact, Catalog, HostingType, Tier};
use crate::error::CatalogError;
use std::collections::HashSet;
use std::path::Path;

/// Fixtures compiled into the binary, one per tier.
const EMBEDDED_FIXTURES: [(Tier, &str); 4] = [
    (Tier::Guidance, include_str!("../../data/guidance.json")),
    (Tier::Specification, include_str!("../../data/specs.json")),
    (Tier::Profile, include_str!("../../data/profiles.json")),
    (Tier::Tool, include_str!("../../data/tools.json")),
];

impl Catalog {
    /// Load the catalog shipped inside the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_sources(EMBEDDED_FIXTURES)
    }

    /// Load the four fixture files from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut sources = Vec::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            let path = dir.join(tier.fixture_file());
            let contents =
                std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?;
            sources.push((tier, contents));
        }

        let catalog = Self::from_sources(sources)?;
        tracing::info!(
            dir = %dir.display(),
            artifacts = catalog.len(),
            "Loaded catalog fixtures"
        );
        Ok(catalog)
    }

    /// Build a catalog from per-tier JSON sources.
    ///
    /// Sources may arrive in any order; the resulting collection is always
    /// ordered guidance, specs, profiles, tools. A tier without a source is empty.
    pub fn from_sources<I, S>(sources: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Tier, S)>,
        S: AsRef<str>,
    {
        let mut by_tier: [Vec<Artifact>; 4] = Default::default();

        for (tier, contents) in sources {
            let records = parse_tier_file(tier, contents.as_ref())?;
            by_tier[tier_slot(tier)].extend(records);
        }

        for (tier, records) in Tier::ALL.iter().zip(&by_tier) {
            check_unique_ids(*tier, records)?;
        }

        Ok(Self {
            artifacts: by_tier.into_iter().flatten().collect(),
        })
    }
}

const fn tier_slot(tier: Tier) -> usize {
    match tier {
        Tier::Guidance => 0,
        Tier::Specification => 1,
        Tier::Profile => 2,
        Tier::Tool => 3,
    }
}

fn parse_tier_file(tier: Tier, contents: &str) -> Result<Vec<Artifact>, CatalogError> {
    let file = tier.fixture_file();
    let records: Vec<Artifact> =
        serde_json::from_str(contents).map_err(|source| CatalogError::Parse {
            file: file.to_string(),
            source,
        })?;

    for record in &records {
        if record.tier() != tier {
            return Err(CatalogError::TierMismatch {
                file: file.to_string(),
                id: record.id().to_string(),
                expected: tier,
                found: record.tier(),
            });
        }

        let base = record.base();
        if base.hosting_type == HostingType::Linked && base.external_url.is_none() {
            tracing::warn!(id = %base.id, %tier, "Linked artifact has no external URL");
        }
    }

    tracing::debug!("Parsed {} records from {}", records.len(), file);
    Ok(records)
}

fn check_unique_ids(tier: Tier, records: &[Artifact]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(CatalogError::DuplicateId {
                tier,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}
