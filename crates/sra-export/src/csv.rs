//! # CSV Export — Flattened Tabular Form
//!
//! One header row, then one row per control in catalog order. The quoting
//! rules reproduce the v2 exporter exactly so exports diff cleanly against
//! records produced by earlier releases:
//!
//! - Title and Notes are individually double-quoted.
//! - Embedded quotes in Notes are escaped by doubling.
//! - Title is quoted but NOT escaped. Known formatting gap, kept as-is.
//! - ID, Category, Type, Reference, and Status are written bare.
//! - Rows are joined by `\n` with no trailing newline.

use sra_core::AssessmentData;

/// Header row of the tabular export.
pub const CSV_HEADER: &str = "ID,Category,Type,Title,Reference,Status,Notes";

/// Render the record as the flattened tabular export.
pub fn export_csv(data: &AssessmentData) -> String {
    let mut lines = Vec::with_capacity(data.controls.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for control in &data.controls {
        let row = [
            control.id.as_str().to_string(),
            control.category.as_str().to_string(),
            control.control_type.as_str().to_string(),
            format!("\"{}\"", control.title),
            control.reference.clone(),
            control.status.as_str().to_string(),
            format!("\"{}\"", control.notes.replace('"', "\"\"")),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}
