//! MCP server exposing the catalog tools over stdio.

use crate::schema::inline_schema_for_type;
use crate::state::CatalogState;
use crate::tools::catalog_summary::handle_catalog_summary;
use crate::tools::inspect_artifact::{InspectArtifactRequest, handle_inspect_artifact};
use crate::tools::list_artifacts::{ListArtifactsRequest, handle_list_artifacts};
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for metadata standards catalog queries
#[derive(Clone)]
pub struct CatalogServer {
    /// Loaded catalog and search cache
    state: Arc<CatalogState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for CatalogServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl CatalogServer {
    pub fn new(state: Arc<CatalogState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared state.
    pub fn state(&self) -> &Arc<CatalogState> {
        &self.state
    }

    #[tool(
        description = "Search guidance, specifications, profiles and tools by relevance. Matches titles, descriptions, keywords and tier-specific fields (document numbers, organizations, categories, domains, vendors). Results are grouped by tier with scores and matched fields.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "Show one artifact by id with configurable detail. High detail resolves cross-references: related guidance and specs, sub-specifications, profiles that incorporate a spec, and supporting tools.",
        input_schema = inline_schema_for_type::<InspectArtifactRequest>()
    )]
    async fn inspect_artifact(
        &self,
        Parameters(request): Parameters<InspectArtifactRequest>,
    ) -> std::result::Result<String, String> {
        handle_inspect_artifact(&self.state, request).await
    }

    #[tool(
        description = "List the artifacts of one tier, optionally filtered by text, status, organization, category or domain, license, maturity or supported spec. Can also report facet counts for an attribute.",
        input_schema = inline_schema_for_type::<ListArtifactsRequest>()
    )]
    async fn list_artifacts(
        &self,
        Parameters(request): Parameters<ListArtifactsRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_artifacts(&self.state, request).await
    }

    #[tool(description = "Count the artifacts in each tier of the catalog.")]
    async fn catalog_summary(&self) -> std::result::Result<String, String> {
        handle_catalog_summary(&self.state).await
    }
}

#[tool_handler]
impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "standards-catalog: DoD metadata standards organized in four tiers \
                 (1 guidance, 2A specifications, 2B domain profiles, 3 tagging tools). \
                 Use search to find artifacts, inspect_artifact for details and \
                 cross-references, and list_artifacts to browse a tier.",
            )
    }
}
