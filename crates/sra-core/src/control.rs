//! # Controls — Individually Assessable Requirements
//!
//! Defines `Control`, one individually assessable Security Rule requirement,
//! together with its identity newtype and the core/supplemental tier split.
//!
//! Serde field names match the persisted v2 record format (camelCase, with
//! the tier serialized as `type`), so records written by earlier releases of
//! the tool load unchanged.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::SafeguardCategory;
use crate::error::SraError;
use crate::status::ControlStatus;

/// Stable unique identifier of a control within the catalog.
///
/// Identity is the id: two controls are the same control iff their ids are
/// equal. Ids come from the static catalog; nothing generates them at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    /// Create a control id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Control criticality tier.
///
/// `core` maps to the Security Rule's required implementation
/// specifications; `supplemental` maps to the addressable ones and to best
/// practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    /// Mandatory under the Security Rule.
    Core,
    /// Addressable / recommended.
    Supplemental,
}

impl ControlType {
    /// Returns the lowercase string identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Supplemental => "supplemental",
        }
    }
}

impl std::fmt::Display for ControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlType {
    type Err = SraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::Core),
            "supplemental" => Ok(Self::Supplemental),
            other => Err(SraError::UnknownControlType(other.to_string())),
        }
    }
}

/// One individually assessable regulatory requirement item.
///
/// Created once from the seed catalog and never deleted individually (only
/// bulk-reset). The mutable fields are `status` and `notes`; everything else
/// is catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// Stable unique key across the whole catalog.
    pub id: ControlId,
    /// Short requirement title.
    pub title: String,
    /// Regulatory citation (e.g., `164.308(a)(1)(ii)(A)`).
    pub reference: String,
    /// Criticality tier.
    #[serde(rename = "type")]
    pub control_type: ControlType,
    /// Safeguard category the control belongs to.
    pub category: SafeguardCategory,
    /// Longer description of what the requirement asks for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current self-scored answer.
    pub status: ControlStatus,
    /// Assessor's free-text notes.
    pub notes: String,
    /// Optional links to supporting evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_links: Option<Vec<String>>,
}
