//! # Assessment Record — The Persisted Unit of State
//!
//! Defines `AssessmentData`, the single record the store owns: catalog
//! controls with their mutable answers plus assessment metadata. One live
//! instance exists per process; every edit round-trips through the store so
//! auto-save observes it.

use serde::{Deserialize, Serialize};

use crate::catalog::seed_controls;
use crate::control::{Control, ControlId};
use crate::temporal::Timestamp;

/// Version tag written into every record. A loaded record with a different
/// tag is accepted as-is; there is no migration machinery.
pub const DATA_VERSION: &str = "2.0";

/// The full assessment record: metadata plus the ordered control list.
///
/// After a reset the control list is exactly the seed catalog; after edits,
/// only `status` and `notes` vary per control id. `last_modified` is stamped
/// by the store on save, and only there; export/import leave it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentData {
    /// Record format version tag.
    pub version: String,
    /// When the assessment was first created.
    pub assessment_date: Timestamp,
    /// When the record was last persisted.
    pub last_modified: Timestamp,
    /// Organization under assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Person performing the assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessor: Option<String>,
    /// Free-text names of in-scope systems.
    pub systems: Vec<String>,
    /// The controls, in catalog order.
    pub controls: Vec<Control>,
}

impl AssessmentData {
    /// Build a fresh record carrying the full seed catalog: every control
    /// `not-started` with empty notes, both timestamps set to `now`.
    pub fn seeded(now: Timestamp) -> Self {
        Self {
            version: DATA_VERSION.to_string(),
            assessment_date: now,
            last_modified: now,
            organization: None,
            assessor: None,
            systems: Vec::new(),
            controls: seed_controls(),
        }
    }

    /// Look up a control by id.
    pub fn control(&self, id: &ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == *id)
    }

    /// Look up a control by id, mutably.
    pub fn control_mut(&mut self, id: &ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SEED_CONTROL_COUNT;
    use crate::status::ControlStatus;
    use chrono::{TimeZone, Utc};

    fn fixed_now() -> Timestamp {
        Timestamp::from_utc(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_seeded_carries_full_catalog() {
        let data = AssessmentData::seeded(fixed_now());
        assert_eq!(data.version, DATA_VERSION);
        assert_eq!(data.controls.len(), SEED_CONTROL_COUNT);
        assert!(data.controls.iter().all(|c| c.status == ControlStatus::NotStarted));
        assert!(data.controls.iter().all(|c| c.notes.is_empty()));
        assert!(data.systems.is_empty());
        assert_eq!(data.assessment_date, data.last_modified);
    }

    #[test]
    fn test_control_lookup() {
        let mut data = AssessmentData::seeded(fixed_now());
        let id = data.controls[0].id.clone();
        assert!(data.control(&id).is_some());
        data.control_mut(&id).unwrap().status = ControlStatus::Yes;
        assert_eq!(data.control(&id).unwrap().status, ControlStatus::Yes);
        assert!(data.control(&ControlId::new("nonexistent")).is_none());
    }

    #[test]
    fn test_serde_metadata_field_names() {
        let data = AssessmentData::seeded(fixed_now());
        let json = serde_json::to_value(&data).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("assessmentDate"));
        assert!(obj.contains_key("lastModified"));
        assert!(obj.contains_key("systems"));
        assert!(obj.contains_key("controls"));
        // Unset organization/assessor are omitted, matching fresh records
        // written by the v2 browser release.
        assert!(!obj.contains_key("organization"));
        assert!(!obj.contains_key("assessor"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut data = AssessmentData::seeded(fixed_now());
        data.organization = Some("Lakeside Family Practice".to_string());
        data.systems.push("EHR".to_string());
        let json = serde_json::to_string(&data).unwrap();
        let parsed: AssessmentData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, parsed);
    }
}
