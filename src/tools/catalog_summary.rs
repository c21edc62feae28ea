use crate::format::render_summary;
use crate::state::CatalogState;
use std::sync::Arc;

/// Per-tier record counts for the loaded catalog.
pub async fn handle_catalog_summary(state: &Arc<CatalogState>) -> Result<String, String> {
    let mut output = String::new();
    render_summary(&mut output, &state.catalog().summary())
        .map_err(|e| format!("Failed to render summary: {}", e))?;
    Ok(output)
}
