//! Kind-specific projections used when displaying artifacts.
//!
//! Both helpers are plain switches on the artifact's tier: where a record lives
//! and which few fields summarize it.

use crate::catalog::{Artifact, Tier};
use crate::search::SearchResult;

/// A labelled value shown next to an artifact's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataEntry<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

const fn entry<'a>(label: &'static str, value: &'a str) -> MetadataEntry<'a> {
    MetadataEntry { label, value }
}

/// Navigable location of an artifact, e.g. `/specs/spec-niem`.
pub fn route_for(artifact: &Artifact) -> String {
    format!("{}/{}", artifact.tier().route_prefix(), artifact.id())
}

/// The summary fields shown for each kind.
pub fn display_metadata(artifact: &Artifact) -> Vec<MetadataEntry<'_>> {
    match artifact {
        Artifact::Guidance(g) => vec![entry("Document", &g.document_number)],
        Artifact::Spec(s) => vec![entry("Version", &s.version), entry("Category", &s.category)],
        Artifact::Profile(p) => vec![entry("Domain", &p.domain), entry("Org", &p.owning_organization)],
        Artifact::Tool(t) => vec![entry("Vendor", &t.vendor), entry("License", &t.license_type)],
    }
}

/// Group results by tier in display order, keeping score order within a group.
///
/// Tiers without results are omitted.
pub fn group_by_tier<'r, 'a>(
    results: &'r [SearchResult<'a>],
) -> Vec<(Tier, Vec<&'r SearchResult<'a>>)> {
    Tier::ALL
        .into_iter()
        .filter_map(|tier| {
            let group: Vec<_> = results.iter().filter(|r| r.artifact.tier() == tier).collect();
            (!group.is_empty()).then_some((tier, group))
        })
        .collect()
}
