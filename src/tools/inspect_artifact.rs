use super::parse_tier_arg;
use crate::catalog::Artifact;
use crate::format::{DetailLevel, render_artifact};
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InspectArtifactRequest {
    /// Artifact id (e.g., "spec-niem", "tool-titus")
    pub id: String,
    /// Tier to look in when the same id exists in more than one tier
    #[serde(default)]
    pub tier: Option<String>,
    /// Detail level: low (header only), medium (+description and attributes), high (+cross-references)
    #[serde(default = "default_detail_level")]
    pub detail_level: DetailLevel,
}

fn default_detail_level() -> DetailLevel {
    DetailLevel::Medium
}

/// Render one artifact by id, offering similar ids when nothing matches.
pub async fn handle_inspect_artifact(
    state: &Arc<CatalogState>,
    request: InspectArtifactRequest,
) -> Result<String, String> {
    let tier = parse_tier_arg(request.tier.as_deref())?;
    let id = request.id.trim();
    if id.is_empty() {
        return Err("Artifact id is empty.".to_string());
    }

    let catalog = state.catalog();
    let matches: Vec<&Artifact> = catalog
        .find(id)
        .into_iter()
        .filter(|a| tier.is_none_or(|t| a.tier() == t))
        .collect();

    if matches.is_empty() {
        let suggestions = catalog.suggest_ids(id);
        if suggestions.is_empty() {
            return Err(format!(
                "Artifact '{}' not found. Use search or list_artifacts to discover ids.",
                id
            ));
        }

        let mut result = format!("Artifact '{}' not found. Did you mean one of these?\n\n", id);
        for suggestion in suggestions {
            let _ = writeln!(
                result,
                "• `{}` - {} ({})",
                suggestion.artifact.id(),
                suggestion.artifact.title(),
                suggestion.artifact.tier()
            );
        }
        return Ok(result);
    }

    let mut output = String::new();
    for (idx, artifact) in matches.iter().enumerate() {
        if idx > 0 {
            output.push_str("\n---\n\n");
        }
        render_artifact(&mut output, catalog, artifact, request.detail_level)
            .map_err(|e| format!("Failed to render artifact: {}", e))?;
    }

    if matches.len() > 1 {
        let _ = writeln!(
            output,
            "\nNote: '{}' exists in {} tiers. Pass `tier` to select one.",
            id,
            matches.len()
        );
    }

    Ok(output)
}
