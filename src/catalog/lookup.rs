//! Single-item lookups and cross-tier relationship helpers.

use super::{Artifact, Catalog, DomainProfile, GuidanceDocument, TaggingTool, TechnicalSpec};
use rapidfuzz::distance::jaro_winkler;

/// Minimum similarity for an id suggestion to be offered.
const SUGGESTION_THRESHOLD: f64 = 0.8;
/// Maximum number of id suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// A fuzzy id suggestion with relevance score.
#[derive(Debug, Clone)]
pub struct IdSuggestion<'a> {
    pub artifact: &'a Artifact,
    /// Jaro-Winkler similarity (0.0 to 1.0, higher is better).
    pub score: f64,
}

impl Catalog {
    pub fn guidance_by_id(&self, id: &str) -> Option<&GuidanceDocument> {
        self.guidance().find(|g| g.base.id == id)
    }

    pub fn spec_by_id(&self, id: &str) -> Option<&TechnicalSpec> {
        self.specs().find(|s| s.base.id == id)
    }

    pub fn profile_by_id(&self, id: &str) -> Option<&DomainProfile> {
        self.profiles().find(|p| p.base.id == id)
    }

    pub fn tool_by_id(&self, id: &str) -> Option<&TaggingTool> {
        self.tools().find(|t| t.base.id == id)
    }

    /// Every artifact with this id, in catalog order.
    ///
    /// Ids are only unique within a tier, so more than one match is possible.
    pub fn find(&self, id: &str) -> Vec<&Artifact> {
        self.all_artifacts().iter().filter(|a| a.id() == id).collect()
    }

    /// Specs that list this guidance document as related.
    pub fn related_specs(&self, guidance_id: &str) -> Vec<&TechnicalSpec> {
        self.specs()
            .filter(|s| s.related_guidance_ids.iter().any(|id| id == guidance_id))
            .collect()
    }

    /// Guidance documents referenced by a spec. Unknown ids are skipped.
    pub fn related_guidance(&self, spec_id: &str) -> Vec<&GuidanceDocument> {
        let Some(spec) = self.spec_by_id(spec_id) else {
            return Vec::new();
        };
        spec.related_guidance_ids
            .iter()
            .filter_map(|id| self.guidance_by_id(id))
            .collect()
    }

    /// Profiles that incorporate a spec.
    pub fn related_profiles(&self, spec_id: &str) -> Vec<&DomainProfile> {
        self.profiles()
            .filter(|p| p.incorporated_specs.iter().any(|s| s.spec_id == spec_id))
            .collect()
    }

    /// Specs incorporated by a profile. Unknown ids are skipped.
    pub fn specs_for_profile(&self, profile_id: &str) -> Vec<&TechnicalSpec> {
        let Some(profile) = self.profile_by_id(profile_id) else {
            return Vec::new();
        };
        profile
            .incorporated_specs
            .iter()
            .filter_map(|s| self.spec_by_id(&s.spec_id))
            .collect()
    }

    /// Tools that support a spec.
    pub fn tools_for_spec(&self, spec_id: &str) -> Vec<&TaggingTool> {
        self.tools()
            .filter(|t| t.supported_spec_ids.iter().any(|id| id == spec_id))
            .collect()
    }

    /// Sub-specifications whose parent is `parent_spec_id`.
    pub fn sub_specs(&self, parent_spec_id: &str) -> Vec<&TechnicalSpec> {
        self.specs()
            .filter(|s| s.parent_spec_id.as_deref() == Some(parent_spec_id))
            .collect()
    }

    /// The parent of a sub-specification, if it has one and it is known.
    pub fn parent_spec(&self, spec_id: &str) -> Option<&TechnicalSpec> {
        let parent_id = self.spec_by_id(spec_id)?.parent_spec_id.as_deref()?;
        self.spec_by_id(parent_id)
    }

    /// Artifacts whose id is similar to `id`, best first.
    pub fn suggest_ids(&self, id: &str) -> Vec<IdSuggestion<'_>> {
        let mut suggestions: Vec<IdSuggestion<'_>> = self
            .all_artifacts()
            .iter()
            .map(|artifact| IdSuggestion {
                artifact,
                score: jaro_winkler::similarity(id.chars(), artifact.id().chars()),
            })
            .filter(|s| s.score > SUGGESTION_THRESHOLD)
            .collect();

        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
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

    #[rstest]
    fn test_related_specs_for_guidance(catalog: Catalog) {
        let specs: Vec<&str> = catalog
            .related_specs("guid-002")
            .iter()
            .map(|s| s.base.id.as_str())
            .collect();
        check!(specs == vec!["spec-niem", "spec-ic-ism", "spec-ic-edh"]);
    }

    #[rstest]
    fn test_related_guidance_for_spec(catalog: Catalog) {
        let guidance: Vec<&str> = catalog
            .related_guidance("spec-dublin-core")
            .iter()
            .map(|g| g.base.id.as_str())
            .collect();
        check!(guidance == vec!["guid-001", "guid-003"]);
        check!(catalog.related_guidance("spec-missing").is_empty());
    }

    #[rstest]
    fn test_profiles_and_tools_for_spec(catalog: Catalog) {
        let profiles: Vec<&str> = catalog
            .related_profiles("spec-ic-edh")
            .iter()
            .map(|p| p.base.id.as_str())
            .collect();
        check!(profiles == vec!["prof-af-intel", "prof-af-cyber"]);

        let tools: Vec<&str> = catalog
            .tools_for_spec("spec-ic-ism")
            .iter()
            .map(|t| t.base.id.as_str())
            .collect();
        check!(tools == vec!["tool-dcamps", "tool-titus"]);
    }

    #[rstest]
    fn test_specs_for_profile(catalog: Catalog) {
        let specs: Vec<&str> = catalog
            .specs_for_profile("prof-af-personnel")
            .iter()
            .map(|s| s.base.id.as_str())
            .collect();
        check!(specs == vec!["spec-niem-core", "spec-iso-11179"]);
    }

    #[rstest]
    fn test_sub_specs_and_parent(catalog: Catalog) {
        let subs: Vec<&str> = catalog
            .sub_specs("spec-niem")
            .iter()
            .map(|s| s.base.id.as_str())
            .collect();
        check!(subs == vec!["spec-niem-core", "spec-niem-milops"]);

        let parent = catalog.parent_spec("spec-niem-core").map(|s| s.base.id.as_str());
        check!(parent == Some("spec-niem"));
        check!(catalog.parent_spec("spec-niem").is_none());
    }

    #[rstest]
    fn test_suggest_ids_for_typo(catalog: Catalog) {
        let suggestions = catalog.suggest_ids("spec-neim");
        check!(!suggestions.is_empty());
        check!(suggestions[0].artifact.id() == "spec-niem");
        check!(suggestions.len() <= MAX_SUGGESTIONS);
    }
}
