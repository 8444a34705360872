//! # sra-store — Persistence for the HIPAA SRA Toolkit
//!
//! Implements the assessment store: a single file-backed slot, a debounced
//! auto-saver, and the `Session` state object that owns the live record.
//!
//! ## Modules
//!
//! - **Store** (`store.rs`): load/save/reset against the slot file. `load`
//!   never fails and `save` never raises; persistence failures degrade to a
//!   log line with the in-memory record staying authoritative.
//!
//! - **Auto-save** (`autosave.rs`): debounce with a 1000 ms quiet period.
//!   A burst of edits produces exactly one write carrying the final state.
//!
//! - **Session** (`session.rs`): the composition-root owner of the live
//!   `AssessmentData`; all mutation flows through its setters so every edit
//!   is observed by the auto-saver.
//!
//! ## Crate Policy
//!
//! - Single logical thread of control; the auto-save worker is the only
//!   spawned thread and it communicates solely through its cancel channel.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod autosave;
pub mod session;
pub mod store;

pub use autosave::{AutoSaver, AUTO_SAVE_DELAY};
pub use session::Session;
pub use store::{AssessmentStore, STORE_FILE_NAME};
