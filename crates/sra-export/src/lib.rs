//! # sra-export — Serialization Layer for the HIPAA SRA Toolkit
//!
//! Converts assessment records to and from their export representations:
//!
//! - **JSON** (`json.rs`): the canonical structured export, pretty-printed
//!   and exactly round-trippable; import applies the truthy-version /
//!   controls-array shape check before typed deserialization, returning a
//!   typed rejection value on any failure.
//!
//! - **CSV** (`csv.rs`): the flattened tabular export, with the v2 tool's
//!   exact quoting rules.
//!
//! - **Digest** (`digest.rs`): the reversible base64 snapshot of four
//!   summary fields. Not a cryptographic hash.
//!
//! Export files are named `hipaa-sra-<YYYY-MM-DD>.<ext>` after the UTC date
//! of the export.

use sra_core::Timestamp;

pub mod csv;
pub mod digest;
pub mod json;

pub use csv::{export_csv, CSV_HEADER};
pub use digest::{decode_snapshot, snapshot_digest, DigestError, DigestSnapshot};
pub use json::{export_json, import_json, ImportError};

/// The two downloadable export representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Structured record format, round-trippable through import.
    Json,
    /// Flattened tabular format.
    Csv,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Dated export file name, e.g. `hipaa-sra-2026-01-15.json`.
pub fn export_filename(format: ExportFormat, date: &Timestamp) -> String {
    format!("hipaa-sra-{}.{}", date.date_string(), format.extension())
}
