//! # Snapshot Digest — Compact Encoded Summary
//!
//! A reversible base64 encoding of four summary fields: assessment date,
//! version tag, total control count, and the count of `yes` answers. Useful
//! for eyeballing whether two records describe the same assessment state.
//!
//! This is NOT a cryptographic hash and must never be presented as
//! integrity or tamper verification. Anyone can decode it, edit it, and
//! re-encode it; that is by construction, not an oversight.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sra_core::{AssessmentData, ControlStatus, SraError, Timestamp};

/// The four summary fields the digest encodes. Serde names and field order
/// match the v2 tool's output, so digests are byte-compatible across both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestSnapshot {
    /// When the assessment was created.
    pub date: Timestamp,
    /// Record format version tag.
    pub version: String,
    /// Total control count.
    #[serde(rename = "controlCount")]
    pub control_count: usize,
    /// Controls answered `yes`.
    #[serde(rename = "completedCount")]
    pub completed_count: usize,
}

/// Why a digest string failed to decode.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Not base64.
    #[error("digest is not base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Decoded bytes are not a snapshot record.
    #[error("digest does not decode to a snapshot: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Encode the record's summary fields as a compact digest string.
pub fn snapshot_digest(data: &AssessmentData) -> Result<String, SraError> {
    let snapshot = DigestSnapshot {
        date: data.assessment_date,
        version: data.version.clone(),
        control_count: data.controls.len(),
        completed_count: data
            .controls
            .iter()
            .filter(|c| c.status == ControlStatus::Yes)
            .count(),
    };
    let json = serde_json::to_string(&snapshot).map_err(|e| SraError::Serialization(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

/// Recover the summary fields from a digest string.
pub fn decode_snapshot(digest: &str) -> Result<DigestSnapshot, DigestError> {
    let bytes = STANDARD.decode(digest)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(yes_count: usize, total: usize) -> AssessmentData {
        let mut data = AssessmentData::seeded(Timestamp::from_utc(
            Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
        ));
        data.controls.truncate(total);
        for control in data.controls.iter_mut().take(yes_count) {
            control.status = ControlStatus::Yes;
        }
        data
    }

    #[test]
    fn test_known_vector_matches_v2_output() {
        // btoa(JSON.stringify({date, version, controlCount, completedCount}))
        // for a 4-control record with 2 yes answers, created 2026-01-15.
        let digest = snapshot_digest(&sample(2, 4)).unwrap();
        assert_eq!(
            digest,
            "eyJkYXRlIjoiMjAyNi0wMS0xNVQxMjowMDowMFoiLCJ2ZXJzaW9uIjoiMi4wIiwiY29udHJvbENvdW50Ijo0LCJjb21wbGV0ZWRDb3VudCI6Mn0="
        );
    }

    #[test]
    fn test_digest_is_reversible() {
        let data = sample(3, 10);
        let snapshot = decode_snapshot(&snapshot_digest(&data).unwrap()).unwrap();
        assert_eq!(snapshot.date, data.assessment_date);
        assert_eq!(snapshot.version, "2.0");
        assert_eq!(snapshot.control_count, 10);
        assert_eq!(snapshot.completed_count, 3);
    }

    #[test]
    fn test_digest_ignores_notes_and_partial_answers() {
        let mut a = sample(2, 6);
        let mut b = sample(2, 6);
        a.controls[5].notes = "different notes".to_string();
        b.controls[5].status = ControlStatus::Partial;
        assert_eq!(snapshot_digest(&a).unwrap(), snapshot_digest(&b).unwrap());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_snapshot("!!!"), Err(DigestError::Encoding(_))));
        let not_a_snapshot = STANDARD.encode("[1, 2, 3]");
        assert!(matches!(
            decode_snapshot(&not_a_snapshot),
            Err(DigestError::Shape(_))
        ));
    }
}
