use anyhow::Context;
use clap::Parser;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use standards_catalog::cli::{Cli, Commands};
use standards_catalog::tools::{
    InspectArtifactRequest, ListArtifactsRequest, SearchRequest, handle_catalog_summary,
    handle_inspect_artifact, handle_list_artifacts, handle_search,
};
use standards_catalog::{Catalog, CatalogServer, CatalogState, Config};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging goes to stderr so stdout stays free for the MCP protocol
    standards_catalog::tracing::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_data_dir(cli.data_dir.as_deref());

    let catalog = match config.data_dir() {
        Some(dir) => Catalog::load_dir(&dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display()))?,
        None => Catalog::embedded().context("Failed to load embedded catalog")?,
    };
    let state = Arc::new(CatalogState::new(catalog, &config.search));

    let output = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => return serve(state).await,
        Commands::Search { query, limit, tier } => {
            handle_search(&state, SearchRequest { query, limit, tier }).await
        }
        Commands::Show { id, tier, detail } => {
            let request = InspectArtifactRequest {
                id,
                tier,
                detail_level: detail.into(),
            };
            handle_inspect_artifact(&state, request).await
        }
        Commands::List {
            tier,
            text,
            status,
            organization,
            category,
            license,
            maturity,
            supported_spec,
        } => {
            let request = ListArtifactsRequest {
                tier,
                text,
                status,
                organization,
                category,
                license,
                maturity,
                supported_spec,
                facet: None,
            };
            handle_list_artifacts(&state, request).await
        }
        Commands::Summary => handle_catalog_summary(&state).await,
    };

    match output {
        Ok(text) => {
            print!("{}", text);
            Ok(())
        }
        Err(message) => anyhow::bail!(message),
    }
}

async fn serve(state: Arc<CatalogState>) -> anyhow::Result<()> {
    tracing::info!(artifacts = state.catalog().len(), "Starting standards-catalog MCP server");

    let server = CatalogServer::new(state);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
