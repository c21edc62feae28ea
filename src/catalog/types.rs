//! Catalog record types shared by every tier.
//!
//! Records are deserialized from camelCase JSON. The `tier` field is the
//! discriminant: it selects the [`Artifact`] variant and therefore which
//! kind-specific fields exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Governance level of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "1")]
    Guidance,
    #[serde(rename = "2A")]
    Specification,
    #[serde(rename = "2B")]
    Profile,
    #[serde(rename = "3")]
    Tool,
}

impl Tier {
    /// All tiers in display order.
    pub const ALL: [Self; 4] = [Self::Guidance, Self::Specification, Self::Profile, Self::Tool];

    /// The discriminant as written in fixture files.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Guidance => "1",
            Self::Specification => "2A",
            Self::Profile => "2B",
            Self::Tool => "3",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Guidance => "Authoritative Guidance",
            Self::Specification => "Technical Specifications",
            Self::Profile => "Domain Profiles",
            Self::Tool => "Tagging & Labeling Tools",
        }
    }

    /// Route prefix used to build a navigable location for an artifact.
    pub const fn route_prefix(self) -> &'static str {
        match self {
            Self::Guidance => "/guidance",
            Self::Specification => "/specs",
            Self::Profile => "/profiles",
            Self::Tool => "/tools",
        }
    }

    /// Name of the fixture file holding this tier's records.
    pub const fn fixture_file(self) -> &'static str {
        match self {
            Self::Guidance => "guidance.json",
            Self::Specification => "specs.json",
            Self::Profile => "profiles.json",
            Self::Tool => "tools.json",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.code())
    }
}

/// Error returned when a tier name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier '{0}' (expected 1, 2A, 2B, 3, guidance, specs, profiles or tools)")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "guidance" => Ok(Self::Guidance),
            "2a" | "spec" | "specs" | "specification" | "specifications" => {
                Ok(Self::Specification)
            }
            "2b" | "profile" | "profiles" => Ok(Self::Profile),
            "3" | "tool" | "tools" => Ok(Self::Tool),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// Lifecycle status of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Superseded,
    Draft,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Superseded => "superseded",
            Self::Draft => "draft",
        }
    }
}

/// Error returned when a status name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}' (expected active, superseded or draft)")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "superseded" => Ok(Self::Superseded),
            "draft" => Ok(Self::Draft),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the artifact's content is held in the catalog or only referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostingType {
    Stored,
    Linked,
}

impl HostingType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Linked => "linked",
        }
    }
}

/// Maturity of a tagging tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityLevel {
    Production,
    Emerging,
    Experimental,
}

impl MaturityLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Emerging => "emerging",
            Self::Experimental => "experimental",
        }
    }
}

/// Fields shared by all artifacts across tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactBase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub hosting_type: HostingType,
    /// Present when `hosting_type` is `Linked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Tier 1: DoD instructions, memos and directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceDocument {
    #[serde(flatten)]
    pub base: ArtifactBase,
    pub document_number: String,
    pub issuing_authority: String,
    pub issue_date: String,
    pub summary: String,
    #[serde(default)]
    pub related_spec_ids: Vec<String>,
}

/// Tier 2A: technical metadata specifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSpec {
    #[serde(flatten)]
    pub base: ArtifactBase,
    pub version: String,
    pub managing_organization: String,
    pub category: String,
    /// Summary of key elements, usually only for stored specs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<String>>,
    #[serde(default)]
    pub related_guidance_ids: Vec<String>,
    #[serde(default)]
    pub related_profile_ids: Vec<String>,
    /// Set on sub-specifications, pointing at their parent spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_spec_id: Option<String>,
}

/// A specification a profile builds on, with the elements it uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorporatedSpec {
    pub spec_id: String,
    pub spec_name: String,
    #[serde(default)]
    pub elements_used: Vec<String>,
}

/// Tier 2B: organization-specific domain profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainProfile {
    #[serde(flatten)]
    pub base: ArtifactBase,
    pub owning_organization: String,
    pub domain: String,
    pub version: String,
    #[serde(default)]
    pub incorporated_specs: Vec<IncorporatedSpec>,
}

/// Tier 3: tagging and labeling tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggingTool {
    #[serde(flatten)]
    pub base: ArtifactBase,
    pub vendor: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub supported_spec_ids: Vec<String>,
    pub license_type: String,
    pub maturity_level: MaturityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_notes: Option<String>,
}

/// Any catalog record, tagged by tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier")]
pub enum Artifact {
    #[serde(rename = "1")]
    Guidance(GuidanceDocument),
    #[serde(rename = "2A")]
    Spec(TechnicalSpec),
    #[serde(rename = "2B")]
    Profile(DomainProfile),
    #[serde(rename = "3")]
    Tool(TaggingTool),
}

impl Artifact {
    pub const fn tier(&self) -> Tier {
        match self {
            Self::Guidance(_) => Tier::Guidance,
            Self::Spec(_) => Tier::Specification,
            Self::Profile(_) => Tier::Profile,
            Self::Tool(_) => Tier::Tool,
        }
    }

    pub const fn base(&self) -> &ArtifactBase {
        match self {
            Self::Guidance(g) => &g.base,
            Self::Spec(s) => &s.base,
            Self::Profile(p) => &p.base,
            Self::Tool(t) => &t.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn title(&self) -> &str {
        &self.base().title
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    pub const fn status(&self) -> Status {
        self.base().status
    }

    pub fn keywords(&self) -> &[String] {
        &self.base().keywords
    }
}
