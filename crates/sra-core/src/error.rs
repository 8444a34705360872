//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across the SRA toolkit. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Enum parse failures carry the rejected input verbatim.
//! - Persistence failures never appear here: the store logs and swallows
//!   them, and `load` always produces a record.
//! - Import rejection has its own error type in `sra-export`, since it is a
//!   user-facing rejection value rather than an internal failure.

use thiserror::Error;

/// Top-level error type for the SRA toolkit.
#[derive(Error, Debug)]
pub enum SraError {
    /// A mutation referenced a control id that is not in the assessment.
    #[error("unknown control id: {0:?}")]
    UnknownControl(String),

    /// A status string outside the closed set of self-score answers.
    #[error("unknown control status: {0:?} (expected yes, partial, no, or not-started)")]
    UnknownStatus(String),

    /// A category string outside the four safeguard categories.
    #[error("unknown safeguard category: {0:?} (expected administrative, physical, technical, or documentation)")]
    UnknownCategory(String),

    /// A control type string outside the core/supplemental tier split.
    #[error("unknown control type: {0:?} (expected core or supplemental)")]
    UnknownControlType(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
