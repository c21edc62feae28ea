pub mod catalog_summary;
pub mod inspect_artifact;
pub mod list_artifacts;
pub mod search;

pub use catalog_summary::*;
pub use inspect_artifact::*;
pub use list_artifacts::*;
pub use search::*;

use crate::catalog::Tier;

/// Parse an optional tier argument, mapping the parse error to a tool message.
pub(crate) fn parse_tier_arg(tier: Option<&str>) -> Result<Option<Tier>, String> {
    tier.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Tier>().map_err(|e| e.to_string()))
        .transpose()
}
