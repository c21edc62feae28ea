//! Relevance scoring across heterogeneous artifact kinds.
//!
//! A query is matched against a fixed set of weighted fields. Generic rules
//! apply to every artifact; each tier adds its own rules on top. All matching
//! is case-insensitive substring or equality on the lower-cased query: no
//! tokenization, stemming or fuzzy matching.
//!
//! Weights:
//! - 100: title equals query
//! - 60: title contains query (only when not equal)
//! - 50: guidance document number / tool vendor contains query
//! - 40: a keyword equals query
//! - 25: a keyword contains query (only when no keyword matched first as equal)
//! - 20: description contains query
//! - 15: spec category / profile domain contains query
//! - 10: remaining kind-specific fields

use crate::catalog::{Artifact, DomainProfile, GuidanceDocument, TaggingTool, TechnicalSpec};
use serde::Serialize;
use std::fmt;

pub(crate) const TITLE_EXACT: u32 = 100;
pub(crate) const TITLE_CONTAINS: u32 = 60;
pub(crate) const DESCRIPTION_CONTAINS: u32 = 20;
pub(crate) const KEYWORD_EXACT: u32 = 40;
pub(crate) const KEYWORD_CONTAINS: u32 = 25;
pub(crate) const DOCUMENT_NUMBER_CONTAINS: u32 = 50;
pub(crate) const VENDOR_CONTAINS: u32 = 50;
pub(crate) const CATEGORY_CONTAINS: u32 = 15;
pub(crate) const DOMAIN_CONTAINS: u32 = 15;
pub(crate) const MINOR_FIELD_CONTAINS: u32 = 10;

/// A field that can contribute to a search score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Description,
    Keywords,
    DocumentNumber,
    IssuingAuthority,
    Summary,
    ManagingOrganization,
    Category,
    Elements,
    OwningOrganization,
    Domain,
    Vendor,
    Capabilities,
    LicenseType,
}

impl Field {
    /// The field's name as it appears in the catalog's JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Keywords => "keywords",
            Self::DocumentNumber => "documentNumber",
            Self::IssuingAuthority => "issuingAuthority",
            Self::Summary => "summary",
            Self::ManagingOrganization => "managingOrganization",
            Self::Category => "category",
            Self::Elements => "elements",
            Self::OwningOrganization => "owningOrganization",
            Self::Domain => "domain",
            Self::Vendor => "vendor",
            Self::Capabilities => "capabilities",
            Self::LicenseType => "licenseType",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored artifact, borrowed from the collection it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub artifact: &'a Artifact,
    pub score: u32,
    /// Fields that contributed to `score`, in rule order, without duplicates.
    pub matched_fields: Vec<Field>,
}

/// Running score for one artifact.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Contribution {
    pub(crate) score: u32,
    pub(crate) fields: Vec<Field>,
}

impl Contribution {
    fn add(&mut self, field: Field, weight: u32) {
        self.score += weight;
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    fn add_if(&mut self, matched: bool, field: Field, weight: u32) {
        if matched {
            self.add(field, weight);
        }
    }
}

/// Normalize a raw query: trim and lower-case.
///
/// Byte-order marks count as whitespace when trimming. Returns `None` when
/// nothing is left to match.
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Rank `artifacts` against `query`.
///
/// Artifacts scoring zero are dropped. Results are ordered by descending score;
/// equal scores keep their input order. An empty or whitespace-only query
/// yields no results.
pub fn search<'a>(query: &str, artifacts: &'a [Artifact]) -> Vec<SearchResult<'a>> {
    let Some(q) = normalize_query(query) else {
        return Vec::new();
    };
    materialize(rank(&q, artifacts), artifacts)
}

/// A ranked hit identified by its position in the scored collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankedHit {
    pub(crate) position: usize,
    pub(crate) score: u32,
    pub(crate) matched_fields: Vec<Field>,
}

/// Score and order `artifacts` for an already-normalized query.
pub(crate) fn rank(q: &str, artifacts: &[Artifact]) -> Vec<RankedHit> {
    let mut hits: Vec<RankedHit> = artifacts
        .iter()
        .enumerate()
        .filter_map(|(position, artifact)| {
            let Contribution { score, fields } = score_artifact(artifact, q);
            (score > 0).then_some(RankedHit {
                position,
                score,
                matched_fields: fields,
            })
        })
        .collect();

    // `sort_by` is stable, so ties keep input order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(query = %q, hits = hits.len(), "Scored {} artifacts", artifacts.len());
    hits
}

/// Resolve ranked hits back to the artifacts they were computed from.
pub(crate) fn materialize<'a, I>(hits: I, artifacts: &'a [Artifact]) -> Vec<SearchResult<'a>>
where
    I: IntoIterator<Item = RankedHit>,
{
    hits.into_iter()
        .filter_map(|hit| {
            artifacts.get(hit.position).map(|artifact| SearchResult {
                artifact,
                score: hit.score,
                matched_fields: hit.matched_fields,
            })
        })
        .collect()
}

/// Score a single artifact against an already-normalized query.
pub(crate) fn score_artifact(artifact: &Artifact, q: &str) -> Contribution {
    let mut contribution = Contribution::default();
    score_generic(artifact, q, &mut contribution);

    match artifact {
        Artifact::Guidance(g) => score_guidance(g, q, &mut contribution),
        Artifact::Spec(s) => score_spec(s, q, &mut contribution),
        Artifact::Profile(p) => score_profile(p, q, &mut contribution),
        Artifact::Tool(t) => score_tool(t, q, &mut contribution),
    }

    contribution
}

fn contains(text: &str, q: &str) -> bool {
    text.to_lowercase().contains(q)
}

fn any_contains(values: &[String], q: &str) -> bool {
    values.iter().any(|v| contains(v, q))
}

fn score_generic(artifact: &Artifact, q: &str, c: &mut Contribution) {
    let title = artifact.title().to_lowercase();
    if title == q {
        c.add(Field::Title, TITLE_EXACT);
    } else if title.contains(q) {
        c.add(Field::Title, TITLE_CONTAINS);
    }

    c.add_if(contains(artifact.description(), q), Field::Description, DESCRIPTION_CONTAINS);

    // First keyword that matches either way decides the weight.
    for keyword in artifact.keywords() {
        let keyword = keyword.to_lowercase();
        if keyword == q {
            c.add(Field::Keywords, KEYWORD_EXACT);
            break;
        } else if keyword.contains(q) {
            c.add(Field::Keywords, KEYWORD_CONTAINS);
            break;
        }
    }
}

fn score_guidance(g: &GuidanceDocument, q: &str, c: &mut Contribution) {
    c.add_if(contains(&g.document_number, q), Field::DocumentNumber, DOCUMENT_NUMBER_CONTAINS);
    c.add_if(contains(&g.issuing_authority, q), Field::IssuingAuthority, MINOR_FIELD_CONTAINS);
    c.add_if(contains(&g.summary, q), Field::Summary, MINOR_FIELD_CONTAINS);
}

fn score_spec(s: &TechnicalSpec, q: &str, c: &mut Contribution) {
    c.add_if(
        contains(&s.managing_organization, q),
        Field::ManagingOrganization,
        MINOR_FIELD_CONTAINS,
    );
    c.add_if(contains(&s.category, q), Field::Category, CATEGORY_CONTAINS);
    if let Some(elements) = &s.elements {
        c.add_if(any_contains(elements, q), Field::Elements, MINOR_FIELD_CONTAINS);
    }
}

fn score_profile(p: &DomainProfile, q: &str, c: &mut Contribution) {
    c.add_if(
        contains(&p.owning_organization, q),
        Field::OwningOrganization,
        MINOR_FIELD_CONTAINS,
    );
    c.add_if(contains(&p.domain, q), Field::Domain, DOMAIN_CONTAINS);
}

fn score_tool(t: &TaggingTool, q: &str, c: &mut Contribution) {
    c.add_if(contains(&t.vendor, q), Field::Vendor, VENDOR_CONTAINS);
    c.add_if(any_contains(&t.capabilities, q), Field::Capabilities, MINOR_FIELD_CONTAINS);
    c.add_if(contains(&t.license_type, q), Field::LicenseType, MINOR_FIELD_CONTAINS);
}
