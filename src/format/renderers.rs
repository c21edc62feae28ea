//! Final output rendering for catalog display.
//!
//! Renderers write plain text into a caller-provided buffer. Search results are
//! grouped by tier; artifact details resolve cross-tier references through the
//! catalog and honor the requested detail level.

use super::DetailLevel;
use super::builders::{display_metadata, group_by_tier, route_for};
use crate::catalog::{
    Artifact, ArtifactBase, Catalog, CatalogSummary, DomainProfile, Facet, FacetOption,
    GuidanceDocument, TaggingTool, TechnicalSpec, Tier,
};
use crate::search::SearchResult;
use std::fmt::{self, Write as _};

/// Render ranked search results grouped by tier.
pub fn render_search_results(
    output: &mut String,
    query: &str,
    results: &[SearchResult<'_>],
) -> fmt::Result {
    let query = query.trim();
    if results.is_empty() {
        return writeln!(output, "No results found for \"{}\"", query);
    }

    let plural = if results.len() == 1 { "" } else { "s" };
    writeln!(output, "{} result{} for \"{}\"", results.len(), plural, query)?;

    let mut rank = 0;
    for (tier, group) in group_by_tier(results) {
        writeln!(output, "\n## {} ({})", tier.label(), group.len())?;
        for result in group {
            rank += 1;
            let fields: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
            writeln!(
                output,
                "{}. {} [{}] - score {} (matched: {})",
                rank,
                result.artifact.title(),
                result.artifact.id(),
                result.score,
                fields.join(", ")
            )?;
            write_metadata_line(output, result.artifact)?;
            writeln!(output, "   {}", route_for(result.artifact))?;
        }
    }

    Ok(())
}

/// Render one artifact with its cross-references.
pub fn render_artifact(
    output: &mut String,
    catalog: &Catalog,
    artifact: &Artifact,
    detail_level: DetailLevel,
) -> fmt::Result {
    let base = artifact.base();
    writeln!(output, "# {}", base.title)?;
    writeln!(
        output,
        "{} | {} | {} | {}",
        artifact.tier(),
        artifact.tier().label(),
        base.status,
        base.hosting_type.as_str()
    )?;
    writeln!(output, "id: {}  route: {}", base.id, route_for(artifact))?;
    if let Some(url) = &base.external_url {
        writeln!(output, "external: {}", url)?;
    }
    write_metadata_line(output, artifact)?;

    // Medium: description, keywords and kind-specific attributes
    if matches!(detail_level, DetailLevel::Medium | DetailLevel::High) {
        write_description(output, base)?;
        match artifact {
            Artifact::Guidance(g) => write_guidance_fields(output, g)?,
            Artifact::Spec(s) => write_spec_fields(output, s)?,
            Artifact::Profile(p) => write_profile_fields(output, p)?,
            Artifact::Tool(t) => write_tool_fields(output, t)?,
        }
    }

    // High: resolved relationships
    if matches!(detail_level, DetailLevel::High) {
        match artifact {
            Artifact::Guidance(g) => write_guidance_relations(output, catalog, g)?,
            Artifact::Spec(s) => write_spec_relations(output, catalog, s)?,
            Artifact::Profile(p) => write_profile_relations(output, catalog, p)?,
            Artifact::Tool(t) => write_tool_relations(output, catalog, t)?,
        }
    }

    Ok(())
}

/// Render a filtered tier listing.
pub fn render_listing(
    output: &mut String,
    tier: Tier,
    artifacts: &[&Artifact],
    tier_total: usize,
) -> fmt::Result {
    writeln!(output, "# {} ({})", tier.label(), tier)?;
    writeln!(
        output,
        "Showing {} of {} {}\n",
        artifacts.len(),
        tier_total,
        tier.label().to_lowercase()
    )?;

    if artifacts.is_empty() {
        return writeln!(output, "No {} match your filters.", tier.label().to_lowercase());
    }

    for artifact in artifacts {
        let sub = match artifact {
            Artifact::Spec(s) if s.parent_spec_id.is_some() => "  ",
            _ => "",
        };
        writeln!(
            output,
            "{}• {} [{}] ({})",
            sub,
            artifact.title(),
            artifact.id(),
            artifact.status()
        )?;
        write_metadata_line(output, artifact)?;
    }

    Ok(())
}

/// Render facet options with counts.
pub fn render_facets(
    output: &mut String,
    tier: Tier,
    facet: Facet,
    options: &[FacetOption],
) -> fmt::Result {
    writeln!(output, "{} by {}:", tier.label(), facet.as_str())?;
    for option in options {
        writeln!(output, "  {} ({})", option.value, option.count)?;
    }
    Ok(())
}

/// Render per-tier record counts.
pub fn render_summary(output: &mut String, summary: &CatalogSummary) -> fmt::Result {
    writeln!(output, "Metadata standards catalog: {} artifacts\n", summary.total())?;
    for tier in Tier::ALL {
        writeln!(
            output,
            "• {} - {}: {}",
            tier,
            tier.label(),
            summary.count(tier)
        )?;
    }
    Ok(())
}

fn write_metadata_line(output: &mut String, artifact: &Artifact) -> fmt::Result {
    let entries: Vec<String> = display_metadata(artifact)
        .into_iter()
        .map(|e| format!("{}: {}", e.label, e.value))
        .collect();
    writeln!(output, "   {}", entries.join(" | "))
}

fn write_description(output: &mut String, base: &ArtifactBase) -> fmt::Result {
    writeln!(output, "\n{}", base.description)?;
    if !base.keywords.is_empty() {
        writeln!(output, "\nKeywords: {}", base.keywords.join(", "))?;
    }
    Ok(())
}

fn write_list(output: &mut String, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(output, "\n{}:", heading)?;
    for item in items {
        writeln!(output, "  - {}", item)?;
    }
    Ok(())
}

fn write_guidance_fields(output: &mut String, g: &GuidanceDocument) -> fmt::Result {
    writeln!(output, "Issued by {} on {}", g.issuing_authority, g.issue_date)?;
    writeln!(output, "\nSummary: {}", g.summary)
}

fn write_spec_fields(output: &mut String, s: &TechnicalSpec) -> fmt::Result {
    writeln!(output, "Managed by {}", s.managing_organization)?;
    if let Some(elements) = &s.elements {
        write_list(output, "Key elements", elements)?;
    }
    Ok(())
}

fn write_profile_fields(output: &mut String, p: &DomainProfile) -> fmt::Result {
    writeln!(output, "Version {}", p.version)?;
    if !p.incorporated_specs.is_empty() {
        writeln!(output, "\nIncorporated specifications:")?;
        for spec in &p.incorporated_specs {
            writeln!(
                output,
                "  - {} ({}): {}",
                spec.spec_name,
                spec.spec_id,
                spec.elements_used.join(", ")
            )?;
        }
    }
    Ok(())
}

fn write_tool_fields(output: &mut String, t: &TaggingTool) -> fmt::Result {
    writeln!(output, "Maturity: {}", t.maturity_level.as_str())?;
    write_list(output, "Capabilities", &t.capabilities)?;
    if let Some(notes) = &t.integration_notes {
        writeln!(output, "\nIntegration notes: {}", notes)?;
    }
    Ok(())
}

fn write_refs<'a>(
    output: &mut String,
    heading: &str,
    refs: impl IntoIterator<Item = &'a ArtifactBase>,
) -> fmt::Result {
    let items: Vec<String> = refs
        .into_iter()
        .map(|b| format!("{} [{}]", b.title, b.id))
        .collect();
    write_list(output, heading, &items)
}

fn write_guidance_relations(
    output: &mut String,
    catalog: &Catalog,
    g: &GuidanceDocument,
) -> fmt::Result {
    let specs = catalog.related_specs(&g.base.id);
    write_refs(output, "Related specifications", specs.iter().map(|s| &s.base))
}

fn write_spec_relations(output: &mut String, catalog: &Catalog, s: &TechnicalSpec) -> fmt::Result {
    let id = &s.base.id;
    if let Some(parent) = catalog.parent_spec(id) {
        writeln!(output, "\nPart of: {} [{}]", parent.base.title, parent.base.id)?;
    }
    let subs = catalog.sub_specs(id);
    write_refs(output, "Sub-specifications", subs.iter().map(|s| &s.base))?;
    let guidance = catalog.related_guidance(id);
    write_refs(output, "Related guidance", guidance.iter().map(|g| &g.base))?;
    let profiles = catalog.related_profiles(id);
    write_refs(output, "Used by profiles", profiles.iter().map(|p| &p.base))?;
    let tools = catalog.tools_for_spec(id);
    write_refs(output, "Supporting tools", tools.iter().map(|t| &t.base))
}

fn write_profile_relations(
    output: &mut String,
    catalog: &Catalog,
    p: &DomainProfile,
) -> fmt::Result {
    let specs = catalog.specs_for_profile(&p.base.id);
    write_refs(output, "Built on", specs.iter().map(|s| &s.base))
}

fn write_tool_relations(output: &mut String, catalog: &Catalog, t: &TaggingTool) -> fmt::Result {
    let mut items = Vec::with_capacity(t.supported_spec_ids.len());
    for spec_id in &t.supported_spec_ids {
        // Unknown ids are still listed so broken links stay visible.
        match catalog.spec_by_id(spec_id) {
            Some(spec) => items.push(format!("{} [{}]", spec.base.title, spec_id)),
            None => items.push(format!("[{}] (not in catalog)", spec_id)),
        }
    }
    write_list(output, "Supported specifications", &items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[rstest]
    fn test_render_no_results(catalog: Catalog) {
        let results = search("zzz-nothing", catalog.all_artifacts());
        let mut output = String::new();
        render_search_results(&mut output, " zzz-nothing ", &results).unwrap();
        check!(output == "No results found for \"zzz-nothing\"\n");
    }

    #[rstest]
    fn test_render_results_header_and_sections(catalog: Catalog) {
        let results = search("microsoft", catalog.all_artifacts());
        let mut output = String::new();
        render_search_results(&mut output, "microsoft", &results).unwrap();

        check!(output.starts_with("1 result for \"microsoft\""));
        check!(output.contains("## Tagging & Labeling Tools (1)"));
        check!(output.contains("score 110 (matched: title, vendor)"));
        check!(output.contains("/tools/tool-purview"));
    }

    #[rstest]
    #[case(DetailLevel::Low, false, false)]
    #[case(DetailLevel::Medium, true, false)]
    #[case(DetailLevel::High, true, true)]
    fn test_render_spec_detail_levels(
        catalog: Catalog,
        #[case] level: DetailLevel,
        #[case] has_elements: bool,
        #[case] has_relations: bool,
    ) {
        let artifact = catalog.find("spec-niem")[0];
        let mut output = String::new();
        render_artifact(&mut output, &catalog, artifact, level).unwrap();

        check!(output.starts_with("# National Information Exchange Model (NIEM)"));
        check!(output.contains("Key elements:") == has_elements);
        check!(output.contains("Sub-specifications:") == has_relations);
        check!(output.contains("NIEM Core [spec-niem-core]") == has_relations);
    }

    #[rstest]
    fn test_render_listing_indents_sub_specs(catalog: Catalog) {
        let specs: Vec<&Artifact> = catalog.of_tier(Tier::Specification).collect();
        let mut output = String::new();
        render_listing(&mut output, Tier::Specification, &specs, specs.len()).unwrap();

        check!(output.contains("Showing 8 of 8 technical specifications"));
        check!(output.contains("\n  • NIEM Core [spec-niem-core]"));
    }

    #[rstest]
    fn test_render_summary(catalog: Catalog) {
        let mut output = String::new();
        render_summary(&mut output, &catalog.summary()).unwrap();
        check!(output.contains("• Tier 2B - Domain Profiles: 5"));
    }
}
