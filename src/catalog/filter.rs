//! Tier listings with text and attribute filters, plus facet counts.

use super::{Artifact, Catalog, Status, Tier};
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Criteria for listing one tier. Unset criteria match everything.
///
/// Attribute criteria that do not exist on a tier (e.g. `license` on guidance)
/// exclude every record of that tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub tier: Option<Tier>,
    /// Case-insensitive substring over the tier's listing fields.
    pub text: Option<String>,
    pub status: Option<Status>,
    /// Issuing authority, managing/owning organization, or vendor.
    pub organization: Option<String>,
    /// Spec category or profile domain.
    pub category: Option<String>,
    pub license: Option<String>,
    pub maturity: Option<String>,
    /// Tools supporting this spec id.
    pub supported_spec: Option<String>,
}

/// Attribute a facet groups records by.
///
/// DO NOT add doc comments to individual variants - schemars would emit `oneOf`
/// instead of a plain enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Status,
    Organization,
    Category,
    License,
    Maturity,
}

/// One distinct facet value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

impl Facet {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Organization => "organization",
            Self::Category => "category",
            Self::License => "license",
            Self::Maturity => "maturity",
        }
    }
}

impl ListFilter {
    pub fn for_tier(tier: Tier) -> Self {
        Self {
            tier: Some(tier),
            ..Self::default()
        }
    }

    /// Whether `artifact` passes every set criterion.
    pub fn matches(&self, artifact: &Artifact) -> bool {
        if self.tier.is_some_and(|tier| tier != artifact.tier()) {
            return false;
        }
        if self.status.is_some_and(|status| status != artifact.status()) {
            return false;
        }
        if let Some(text) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
            && !text_matches(artifact, &text.to_lowercase())
        {
            return false;
        }

        matches_attr(self.organization.as_deref(), organization_of(artifact))
            && matches_attr(self.category.as_deref(), category_of(artifact))
            && matches_attr(self.license.as_deref(), license_of(artifact))
            && matches_attr(self.maturity.as_deref(), maturity_of(artifact))
            && self
                .supported_spec
                .as_deref()
                .is_none_or(|spec_id| supports_spec(artifact, spec_id))
    }
}

impl Catalog {
    /// Artifacts passing `filter`, in catalog order.
    pub fn list(&self, filter: &ListFilter) -> Vec<&Artifact> {
        self.all_artifacts()
            .iter()
            .filter(|a| filter.matches(a))
            .collect()
    }

    /// Distinct values of `facet` within `tier`, sorted, with counts.
    pub fn facets(&self, tier: Tier, facet: Facet) -> Vec<FacetOption> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for artifact in self.of_tier(tier) {
            let value = match facet {
                Facet::Status => Some(artifact.status().as_str()),
                Facet::Organization => organization_of(artifact),
                Facet::Category => category_of(artifact),
                Facet::License => license_of(artifact),
                Facet::Maturity => maturity_of(artifact),
            };
            if let Some(value) = value {
                *counts.entry(value).or_default() += 1;
            }
        }

        counts
            .into_iter()
            .map(|(value, count)| FacetOption {
                value: value.to_string(),
                count,
            })
            .collect()
    }
}

fn matches_attr(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

fn organization_of(artifact: &Artifact) -> Option<&str> {
    Some(match artifact {
        Artifact::Guidance(g) => g.issuing_authority.as_str(),
        Artifact::Spec(s) => s.managing_organization.as_str(),
        Artifact::Profile(p) => p.owning_organization.as_str(),
        Artifact::Tool(t) => t.vendor.as_str(),
    })
}

fn category_of(artifact: &Artifact) -> Option<&str> {
    match artifact {
        Artifact::Spec(s) => Some(s.category.as_str()),
        Artifact::Profile(p) => Some(p.domain.as_str()),
        Artifact::Guidance(_) | Artifact::Tool(_) => None,
    }
}

fn license_of(artifact: &Artifact) -> Option<&str> {
    match artifact {
        Artifact::Tool(t) => Some(t.license_type.as_str()),
        _ => None,
    }
}

fn maturity_of(artifact: &Artifact) -> Option<&str> {
    match artifact {
        Artifact::Tool(t) => Some(t.maturity_level.as_str()),
        _ => None,
    }
}

fn supports_spec(artifact: &Artifact, spec_id: &str) -> bool {
    match artifact {
        Artifact::Tool(t) => t.supported_spec_ids.iter().any(|id| id == spec_id),
        _ => false,
    }
}

/// Listing text match. Fields are joined with spaces before matching, except
/// for specs, which match title, description or any single keyword.
fn text_matches(artifact: &Artifact, q: &str) -> bool {
    let base = artifact.base();
    let haystack: Vec<&str> = match artifact {
        Artifact::Guidance(g) => [
            base.title.as_str(),
            base.description.as_str(),
            g.document_number.as_str(),
        ]
        .into_iter()
        .chain(base.keywords.iter().map(String::as_str))
        .collect(),
        Artifact::Spec(_) => {
            return base.title.to_lowercase().contains(q)
                || base.description.to_lowercase().contains(q)
                || base.keywords.iter().any(|k| k.to_lowercase().contains(q));
        }
        Artifact::Profile(p) => [
            base.title.as_str(),
            base.description.as_str(),
            p.owning_organization.as_str(),
            p.domain.as_str(),
        ]
        .into_iter()
        .chain(base.keywords.iter().map(String::as_str))
        .collect(),
        Artifact::Tool(t) => [
            base.title.as_str(),
            base.description.as_str(),
            t.vendor.as_str(),
        ]
        .into_iter()
        .chain(t.capabilities.iter().map(String::as_str))
        .chain(base.keywords.iter().map(String::as_str))
        .collect(),
    };

    haystack.join(" ").to_lowercase().contains(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn listed_ids(catalog: &Catalog, filter: &ListFilter) -> Vec<String> {
        catalog
            .list(filter)
            .into_iter()
            .map(|a| a.id().to_string())
            .collect()
    }

    #[rstest]
    fn test_guidance_text_matches_document_number(catalog: Catalog) {
        let filter = ListFilter {
            text: Some("8320.07".to_string()),
            ..ListFilter::for_tier(Tier::Guidance)
        };
        check!(listed_ids(&catalog, &filter) == vec!["guid-002"]);
    }

    #[rstest]
    fn test_status_filter(catalog: Catalog) {
        let filter = ListFilter {
            status: Some(Status::Draft),
            ..ListFilter::for_tier(Tier::Profile)
        };
        check!(listed_ids(&catalog, &filter) == vec!["prof-af-cyber"]);
    }

    #[rstest]
    fn test_tool_filters_combine(catalog: Catalog) {
        let filter = ListFilter {
            license: Some("Commercial".to_string()),
            supported_spec: Some("spec-ic-ism".to_string()),
            ..ListFilter::for_tier(Tier::Tool)
        };
        check!(listed_ids(&catalog, &filter) == vec!["tool-titus"]);
    }

    #[rstest]
    fn test_inapplicable_criterion_excludes_tier(catalog: Catalog) {
        let filter = ListFilter {
            license: Some("Commercial".to_string()),
            ..ListFilter::for_tier(Tier::Guidance)
        };
        check!(catalog.list(&filter).is_empty());
    }

    #[rstest]
    fn test_unfiltered_listing_returns_whole_tier(catalog: Catalog) {
        let filter = ListFilter::for_tier(Tier::Specification);
        check!(catalog.list(&filter).len() == catalog.summary().specs);
    }

    #[rstest]
    fn test_spec_category_facets(catalog: Catalog) {
        let facets = catalog.facets(Tier::Specification, Facet::Category);
        let expected = vec![
            FacetOption { value: "Data Exchange".to_string(), count: 3 },
            FacetOption { value: "Descriptive Metadata".to_string(), count: 2 },
            FacetOption { value: "Information Security Marking".to_string(), count: 2 },
            FacetOption { value: "Metadata Registry".to_string(), count: 1 },
        ];
        check!(facets == expected);
    }

    #[rstest]
    #[case(Facet::Status, "status")]
    #[case(Facet::Organization, "organization")]
    #[case(Facet::Maturity, "maturity")]
    fn test_facet_name_matches_serde(#[case] facet: Facet, #[case] name: &str) {
        check!(facet.as_str() == name);
        check!(serde_json::to_value(facet).unwrap() == name);
    }

    #[rstest]
    fn test_facet_without_values_is_empty(catalog: Catalog) {
        check!(catalog.facets(Tier::Guidance, Facet::License).is_empty());
    }
}
