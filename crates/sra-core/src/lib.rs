//! # sra-core — Foundational Types for the HIPAA SRA Toolkit
//!
//! This crate is the bedrock of the toolkit. It defines the Security Rule
//! control catalog, the assessment data model, the closed answer/category
//! enumerations, and the statistics roll-up. Every other crate in the
//! workspace depends on `sra-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations for record fields.** `ControlStatus`,
//!    `SafeguardCategory`, and `ControlType` are sum types with exhaustive
//!    matches everywhere; invalid status strings are unrepresentable.
//!
//! 2. **One seed catalog.** Fresh records carry exactly
//!    `catalog::seed_controls()`. Control ids are unique across the catalog
//!    and nothing generates ids at runtime.
//!
//! 3. **Serde names match the persisted v2 format.** camelCase metadata
//!    keys, `type` for the tier, kebab-case statuses. Records written by the
//!    v2 browser release load unchanged.
//!
//! 4. **Statistics are a pure function of the record.** `compute_stats`
//!    never mutates its input and defines every zero-denominator percentage
//!    as `0.0`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sra-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug` and `Clone`, and the persisted
//!   ones implement `Serialize`/`Deserialize`.

pub mod assessment;
pub mod catalog;
pub mod category;
pub mod control;
pub mod error;
pub mod stats;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use assessment::{AssessmentData, DATA_VERSION};
pub use catalog::{seed_controls, SEED_CONTROL_COUNT};
pub use category::{SafeguardCategory, SAFEGUARD_CATEGORY_COUNT};
pub use control::{Control, ControlId, ControlType};
pub use error::SraError;
pub use stats::{compute_stats, CategoryStats, DashboardStats};
pub use status::{ControlStatus, CONTROL_STATUS_COUNT};
pub use temporal::Timestamp;
