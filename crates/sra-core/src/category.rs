//! # Safeguard Categories — Security Rule Groupings
//!
//! Defines `SafeguardCategory`, the four fixed regulatory groupings that
//! controls belong to, mirroring the structure of the HIPAA Security Rule:
//! administrative safeguards (45 CFR 164.308), physical safeguards
//! (164.310), technical safeguards (164.312), and the documentation
//! requirements (164.316).
//!
//! Each category carries its display metadata (human name, regulation
//! reference, description) so every surface renders the same wording.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SraError;

/// One of the four fixed Security Rule groupings.
///
/// The derive order is the canonical display order: administrative,
/// physical, technical, documentation. `Ord` follows it, so ordered maps
/// keyed by category iterate in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeguardCategory {
    /// Administrative safeguards (45 CFR 164.308).
    Administrative,
    /// Physical safeguards (45 CFR 164.310).
    Physical,
    /// Technical safeguards (45 CFR 164.312).
    Technical,
    /// Policies, procedures, and documentation requirements (45 CFR 164.316).
    Documentation,
}

/// Total number of safeguard categories. Used for compile-time assertions.
pub const SAFEGUARD_CATEGORY_COUNT: usize = 4;

impl SafeguardCategory {
    /// Returns all four categories in canonical display order.
    pub fn all() -> &'static [SafeguardCategory] {
        &[
            Self::Administrative,
            Self::Physical,
            Self::Technical,
            Self::Documentation,
        ]
    }

    /// Returns the lowercase string identifier for this category.
    ///
    /// This must match the serde serialization format and the category
    /// strings in persisted v2 records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrative => "administrative",
            Self::Physical => "physical",
            Self::Technical => "technical",
            Self::Documentation => "documentation",
        }
    }

    /// Human-readable category name, as shown on the dashboard.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Administrative => "Administrative Safeguards",
            Self::Physical => "Physical Safeguards",
            Self::Technical => "Technical Safeguards",
            Self::Documentation => "Policies, Procedures & Documentation",
        }
    }

    /// The Security Rule section this category covers.
    pub fn reference(&self) -> &'static str {
        match self {
            Self::Administrative => "164.308",
            Self::Physical => "164.310",
            Self::Technical => "164.312",
            Self::Documentation => "164.316",
        }
    }

    /// One-paragraph description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Administrative => {
                "Policies and procedures designed to clearly show how the entity \
                 will comply with the HIPAA Security Rule."
            }
            Self::Physical => {
                "Physical measures, policies, and procedures to protect electronic \
                 information systems and related buildings and equipment."
            }
            Self::Technical => {
                "Technology and the policy and procedures for its use that protect \
                 ePHI and control access to it."
            }
            Self::Documentation => {
                "Requirements for documentation and ongoing review of security \
                 policies and procedures."
            }
        }
    }
}

impl std::fmt::Display for SafeguardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafeguardCategory {
    type Err = SraError;

    /// Parse a category from its lowercase string identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrative" => Ok(Self::Administrative),
            "physical" => Ok(Self::Physical),
            "technical" => Ok(Self::Technical),
            "documentation" => Ok(Self::Documentation),
            other => Err(SraError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(SafeguardCategory::all().len(), SAFEGUARD_CATEGORY_COUNT);
    }

    #[test]
    fn test_all_unique() {
        let mut seen = std::collections::HashSet::new();
        for c in SafeguardCategory::all() {
            assert!(seen.insert(c), "duplicate category: {c}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for category in SafeguardCategory::all() {
            let parsed: SafeguardCategory = category.as_str().parse().unwrap();
            assert_eq!(*category, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("organizational".parse::<SafeguardCategory>().is_err());
        assert!("Administrative".parse::<SafeguardCategory>().is_err());
        assert!("".parse::<SafeguardCategory>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for category in SafeguardCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_ord_matches_display_order() {
        let mut sorted = SafeguardCategory::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, SafeguardCategory::all());
    }

    #[test]
    fn test_references_are_security_rule_sections() {
        for category in SafeguardCategory::all() {
            assert!(category.reference().starts_with("164.3"));
        }
    }
}
