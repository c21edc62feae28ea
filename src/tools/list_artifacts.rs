//! Tier listing handler with attribute filters and facet counts.

use super::parse_tier_arg;
use crate::catalog::{Facet, ListFilter, Status};
use crate::format::{render_facets, render_listing};
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListArtifactsRequest {
    /// Tier to list ("1", "2A", "2B", "3", or guidance/specs/profiles/tools)
    pub tier: String,
    /// Case-insensitive text filter over the tier's listing fields
    #[serde(default)]
    pub text: Option<String>,
    /// Lifecycle status: active, superseded or draft
    #[serde(default)]
    pub status: Option<String>,
    /// Exact issuing authority, managing/owning organization, or vendor
    #[serde(default)]
    pub organization: Option<String>,
    /// Exact spec category or profile domain
    #[serde(default)]
    pub category: Option<String>,
    /// Exact tool license type (e.g., "Commercial", "Open Source")
    #[serde(default)]
    pub license: Option<String>,
    /// Tool maturity level: production, emerging or experimental
    #[serde(default)]
    pub maturity: Option<String>,
    /// Only tools supporting this spec id
    #[serde(default)]
    pub supported_spec: Option<String>,
    /// Also show the distinct values of this attribute with counts
    #[serde(default)]
    pub facet: Option<Facet>,
}

/// List one tier, narrowed by any combination of filters.
pub async fn handle_list_artifacts(
    state: &Arc<CatalogState>,
    request: ListArtifactsRequest,
) -> Result<String, String> {
    let tier = parse_tier_arg(Some(request.tier.as_str()))?
        .ok_or_else(|| "A tier is required (1, 2A, 2B or 3).".to_string())?;
    let status = request
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()
        .map_err(|e| e.to_string())?;

    let filter = ListFilter {
        tier: Some(tier),
        text: request.text,
        status,
        organization: non_empty(request.organization),
        category: non_empty(request.category),
        license: non_empty(request.license),
        maturity: non_empty(request.maturity).map(|m| m.to_lowercase()),
        supported_spec: non_empty(request.supported_spec),
    };

    let catalog = state.catalog();
    let artifacts = catalog.list(&filter);
    let tier_total = catalog.summary().count(tier);

    let mut output = String::new();
    render_listing(&mut output, tier, &artifacts, tier_total)
        .map_err(|e| format!("Failed to render listing: {}", e))?;

    if let Some(facet) = request.facet {
        let options = catalog.facets(tier, facet);
        output.push('\n');
        render_facets(&mut output, tier, facet, &options)
            .map_err(|e| format!("Failed to render facets: {}", e))?;
    }

    Ok(output)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
