//! Cross-tier relevance search handler.

use super::parse_tier_arg;
use crate::format::render_search_results;
use crate::search::SearchResult;
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Search query term (case-insensitive substring match)
    pub query: String,
    /// Maximum number of results to return (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Only return results from this tier ("1", "2A", "2B", "3", or guidance/specs/profiles/tools)
    #[serde(default)]
    pub tier: Option<String>,
}

/// Score every artifact against the query and render the top results.
///
/// The tier filter is applied after ranking, so scores and relative order are
/// the same as for an unfiltered search. A blank query renders as no results.
pub async fn handle_search(
    state: &Arc<CatalogState>,
    request: SearchRequest,
) -> Result<String, String> {
    let tier = parse_tier_arg(request.tier.as_deref())?;

    let mut results: Vec<SearchResult<'_>> = state.search(&request.query).await;
    if let Some(tier) = tier {
        results.retain(|r| r.artifact.tier() == tier);
    }

    if results.is_empty() {
        let mut msg = String::new();
        let _ = render_search_results(&mut msg, &request.query, &results);
        if let Some(tier) = tier {
            let _ = writeln!(msg, "(searched {} only)", tier.label());
        }
        msg.push_str("\nSearch tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Search acronyms like 'NIEM', 'ISM' or 'EDH'\n");
        msg.push_str("• Try an organization or vendor name\n");
        msg.push_str("• Use list_artifacts to browse a tier\n");
        return Ok(msg);
    }

    let total = results.len();
    let limit = request.limit.unwrap_or_else(|| state.default_limit()).max(1);
    results.truncate(limit);

    let mut output = String::new();
    render_search_results(&mut output, &request.query, &results)
        .map_err(|e| format!("Failed to render results: {}", e))?;
    if total > results.len() {
        let _ = writeln!(
            output,
            "\nShowing the first {} of {} matches. Raise `limit` to see more.",
            results.len(),
            total
        );
    }

    tracing::debug!(query = %request.query, total, shown = results.len(), "search handled");
    Ok(output)
}
