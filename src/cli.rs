use crate::format::DetailLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "standards-catalog")]
#[command(about = "Search and browse the metadata standards catalog", version, long_about = None)]
pub struct Cli {
    /// Directory holding guidance.json, specs.json, profiles.json and tools.json
    #[arg(long, global = true, env = "CATALOG_DATA_DIR")]
    pub data_dir: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the catalog tools over MCP on stdio (default)
    Serve,

    /// Rank artifacts across all tiers against a query
    Search {
        query: String,
        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Only show results from this tier (1, 2A, 2B, 3)
        #[arg(short, long)]
        tier: Option<String>,
    },

    /// Show one artifact with its cross-references
    Show {
        id: String,
        #[arg(short, long)]
        tier: Option<String>,
        #[arg(short, long, value_enum, default_value_t = Detail::High)]
        detail: Detail,
    },

    /// List the artifacts of one tier
    List {
        /// Tier to list (1, 2A, 2B, 3, or guidance/specs/profiles/tools)
        tier: String,
        /// Case-insensitive text filter
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        organization: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        license: Option<String>,
        #[arg(long)]
        maturity: Option<String>,
        #[arg(long)]
        supported_spec: Option<String>,
    },

    /// Count the artifacts in each tier
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Detail {
    Low,
    Medium,
    High,
}

impl From<Detail> for DetailLevel {
    fn from(detail: Detail) -> Self {
        match detail {
            Detail::Low => Self::Low,
            Detail::Medium => Self::Medium,
            Detail::High => Self::High,
        }
    }
}
