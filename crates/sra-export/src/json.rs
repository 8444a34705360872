//! # JSON Export and Import
//!
//! The structured export is pretty-printed JSON of the full record, and it
//! round-trips: importing an export reproduces the record exactly, and
//! re-exporting the import is byte-identical. Neither direction touches
//! `last_modified`; only the store's save stamps it.
//!
//! ## Import Validation
//!
//! Inbound text passes two gates before it can replace the live record:
//!
//! 1. The shape check the v2 browser tool applied: a truthy `version` field
//!    (JavaScript truthiness, so `""`, `0`, `false`, and `null` all reject)
//!    and an array-shaped `controls` field.
//! 2. Typed deserialization into the closed data model, so a control with
//!    an out-of-set status or category string rejects the import instead of
//!    passing through unchecked.
//!
//! Every failure is a typed rejection value. Nothing here panics or exits;
//! the caller decides how to present "import failed".

use serde_json::Value;
use thiserror::Error;

use sra_core::{AssessmentData, SraError};

/// Why an import was rejected.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input is not JSON at all.
    #[error("import failed: input is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The top-level `version` field is missing or falsy.
    #[error("import failed: record has no usable version tag")]
    MissingVersion,

    /// The top-level `controls` field is missing or not an array.
    #[error("import failed: record has no controls array")]
    MissingControls,

    /// The shape check passed but the record does not deserialize into the
    /// assessment model (for example, a control carries an unknown status).
    #[error("import failed: record is not a valid assessment: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Pretty-print the full record as the canonical structured export.
pub fn export_json(data: &AssessmentData) -> Result<String, SraError> {
    serde_json::to_string_pretty(data).map_err(|e| SraError::Serialization(e.to_string()))
}

/// Parse and validate an inbound export. On rejection the caller's current
/// record is untouched, since nothing is mutated here.
pub fn import_json(text: &str) -> Result<AssessmentData, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Parse)?;

    if !is_truthy(value.get("version")) {
        return Err(ImportError::MissingVersion);
    }
    if !matches!(value.get("controls"), Some(Value::Array(_))) {
        return Err(ImportError::MissingControls);
    }

    serde_json::from_value(value).map_err(ImportError::Malformed)
}

/// JavaScript truthiness for a JSON value; the shape check inherits it.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
