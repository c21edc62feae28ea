//! In-memory catalog of metadata-standards artifacts.
//!
//! The catalog is loaded once (from embedded fixtures or a data directory) and
//! is read-only afterwards. Search and lookups borrow from it.

pub(crate) mod filter;
pub(crate) mod loader;
pub(crate) mod lookup;
pub(crate) mod types;

pub use filter::{Facet, FacetOption, ListFilter};
pub use lookup::IdSuggestion;
pub use types::{
    Artifact, ArtifactBase, DomainProfile, GuidanceDocument, HostingType, IncorporatedSpec,
    MaturityLevel, ParseStatusError, ParseTierError, Status, TaggingTool, TechnicalSpec, Tier,
};

/// The full artifact collection across all four tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Ordered guidance, specs, profiles, tools; file order within a tier.
    artifacts: Vec<Artifact>,
}

/// Per-tier record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub guidance: usize,
    pub specs: usize,
    pub profiles: usize,
    pub tools: usize,
}

impl CatalogSummary {
    pub const fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Guidance => self.guidance,
            Tier::Specification => self.specs,
            Tier::Profile => self.profiles,
            Tier::Tool => self.tools,
        }
    }

    pub const fn total(&self) -> usize {
        self.guidance + self.specs + self.profiles + self.tools
    }
}

impl Catalog {
    /// Flattened collection of every artifact, in stable tier order.
    pub fn all_artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Artifacts belonging to one tier.
    pub fn of_tier(&self, tier: Tier) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(move |a| a.tier() == tier)
    }

    pub fn guidance(&self) -> impl Iterator<Item = &GuidanceDocument> {
        self.artifacts.iter().filter_map(|a| match a {
            Artifact::Guidance(g) => Some(g),
            _ => None,
        })
    }

    pub fn specs(&self) -> impl Iterator<Item = &TechnicalSpec> {
        self.artifacts.iter().filter_map(|a| match a {
            Artifact::Spec(s) => Some(s),
            _ => None,
        })
    }

    pub fn profiles(&self) -> impl Iterator<Item = &DomainProfile> {
        self.artifacts.iter().filter_map(|a| match a {
            Artifact::Profile(p) => Some(p),
            _ => None,
        })
    }

    pub fn tools(&self) -> impl Iterator<Item = &TaggingTool> {
        self.artifacts.iter().filter_map(|a| match a {
            Artifact::Tool(t) => Some(t),
            _ => None,
        })
    }

    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary::default();
        for artifact in &self.artifacts {
            match artifact.tier() {
                Tier::Guidance => summary.guidance += 1,
                Tier::Specification => summary.specs += 1,
                Tier::Profile => summary.profiles += 1,
                Tier::Tool => summary.tools += 1,
            }
        }
        summary
    }
}
