//! # Control Status — Self-Score Answers
//!
//! Defines `ControlStatus`, the closed set of answers an assessor can give
//! for a single control. This is the ONE definition used across the whole
//! toolkit; every `match` on `ControlStatus` must be exhaustive, so a new
//! answer state forces every consumer to handle it at compile time.
//!
//! There is no ordering and no transition restriction between statuses: any
//! answer may be replaced by any other by direct user action at any time.
//! No terminal state, no automatic transitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SraError;

/// The self-scored state of a single control.
///
/// `no` and `not-started` are distinct answers ("we checked and the answer
/// is no" versus "nobody has checked yet") even though the dashboard rolls
/// both up as incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlStatus {
    /// The control is fully in place.
    Yes,
    /// The control is partially in place.
    Partial,
    /// The control is not in place.
    No,
    /// The control has not been assessed yet.
    NotStarted,
}

/// Total number of status variants. Used for compile-time assertions.
pub const CONTROL_STATUS_COUNT: usize = 4;

impl ControlStatus {
    /// Returns all statuses in canonical order.
    pub fn all() -> &'static [ControlStatus] {
        &[Self::Yes, Self::Partial, Self::No, Self::NotStarted]
    }

    /// Returns the kebab-case string identifier for this status.
    ///
    /// This must match the serde serialization format and the status strings
    /// in persisted v2 records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Partial => "partial",
            Self::No => "no",
            Self::NotStarted => "not-started",
        }
    }

    /// Whether this status counts as complete on the dashboard.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Whether this status counts as incomplete on the dashboard.
    ///
    /// `no` and `not-started` are merged here; the dashboard does not split
    /// them.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::No | Self::NotStarted)
    }
}

impl std::fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlStatus {
    type Err = SraError;

    /// Parse a status from its kebab-case identifier.
    ///
    /// Accepts the same identifiers produced by [`ControlStatus::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "partial" => Ok(Self::Partial),
            "no" => Ok(Self::No),
            "not-started" => Ok(Self::NotStarted),
            other => Err(SraError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(ControlStatus::all().len(), CONTROL_STATUS_COUNT);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for status in ControlStatus::all() {
            let parsed: ControlStatus = status.as_str().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("done".parse::<ControlStatus>().is_err());
        assert!("Yes".parse::<ControlStatus>().is_err()); // case-sensitive
        assert!("not_started".parse::<ControlStatus>().is_err());
        assert!("".parse::<ControlStatus>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for status in ControlStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_not_started_serializes_kebab() {
        let json = serde_json::to_string(&ControlStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");
    }

    #[test]
    fn test_complete_incomplete_partition() {
        // Every status is exactly one of complete, partial, incomplete.
        for status in ControlStatus::all() {
            let buckets = [
                status.is_complete(),
                *status == ControlStatus::Partial,
                status.is_incomplete(),
            ];
            assert_eq!(buckets.iter().filter(|b| **b).count(), 1, "{status}");
        }
    }
}
