mod common;

use assert2::{check, let_assert};
use common::{TempWorkspace, embedded_catalog, guidance, spec, tool, with};
use rstest::rstest;
use serde_json::json;
use standards_catalog::{Catalog, CatalogError, Tier};

/// Test: The shipped data directory loads to the same catalog as the embedded copy.
#[rstest]
fn load_dir_matches_embedded(embedded_catalog: Catalog) {
    let workspace = TempWorkspace::new();
    workspace.copy_shipped_fixtures();

    check!(workspace.load() == embedded_catalog);
}

/// Test: The flattened collection is ordered guidance, specs, profiles, tools.
#[rstest]
fn all_artifacts_in_tier_order(embedded_catalog: Catalog) {
    let tiers: Vec<Tier> = embedded_catalog.all_artifacts().iter().map(|a| a.tier()).collect();
    let mut sorted = tiers.clone();
    sorted.sort();
    check!(tiers == sorted);

    let summary = embedded_catalog.summary();
    check!(summary.guidance == 4);
    check!(summary.specs == 8);
    check!(summary.profiles == 5);
    check!(summary.tools == 4);
    check!(summary.total() == embedded_catalog.len());
}

/// Test: A missing fixture file is an I/O error naming the file.
#[test]
fn missing_file_is_io_error() {
    let workspace = TempWorkspace::new();
    workspace.write_tier(Tier::Guidance, &[]);
    workspace.write_tier(Tier::Specification, &[]);
    workspace.write_tier(Tier::Profile, &[]);

    let_assert!(Err(CatalogError::Io { path, .. }) = Catalog::load_dir(workspace.path()));
    check!(path.ends_with("tools.json"));
}

/// Test: Malformed JSON is a parse error.
#[test]
fn malformed_json_is_parse_error() {
    let workspace = TempWorkspace::new();
    workspace.write_catalog(&[]);
    workspace.create_file("specs.json", "[{ not json");

    let_assert!(Err(CatalogError::Parse { .. }) = Catalog::load_dir(workspace.path()));
}

/// Test: A record filed under the wrong tier is rejected.
#[test]
fn tier_mismatch_is_rejected() {
    let workspace = TempWorkspace::new();
    workspace.write_catalog(&[]);
    workspace.write_tier(Tier::Guidance, &[spec("spec-stray", "Stray")]);

    let_assert!(
        Err(CatalogError::TierMismatch { id, expected, found, .. }) =
            Catalog::load_dir(workspace.path())
    );
    check!(id == "spec-stray");
    check!(expected == Tier::Guidance);
    check!(found == Tier::Specification);
}

/// Test: Ids must be unique within a tier but may repeat across tiers.
#[test]
fn duplicate_ids() {
    let workspace = TempWorkspace::new();
    workspace.write_catalog(&[guidance("shared-id", "Guidance"), tool("shared-id", "Tool")]);
    let catalog = workspace.load();
    check!(catalog.find("shared-id").len() == 2);

    workspace.write_tier(Tier::Tool, &[tool("tool-a", "A"), tool("tool-a", "B")]);
    let_assert!(Err(CatalogError::DuplicateId { tier, id }) = Catalog::load_dir(workspace.path()));
    check!(tier == Tier::Tool);
    check!(id == "tool-a");
}

/// Test: Linked records without a URL still load.
#[test]
fn linked_record_without_url_loads() {
    let workspace = TempWorkspace::new();
    workspace.write_catalog(&[with(spec("spec-linked", "Linked"), json!({ "hostingType": "linked" }))]);

    let catalog = workspace.load();
    let_assert!(Some(found) = catalog.spec_by_id("spec-linked"));
    check!(found.base.external_url.is_none());
}
