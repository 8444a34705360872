//! # Assessment Store — File-Backed Persistence Slot
//!
//! One named slot in the local filesystem holds the full assessment record
//! as pretty-printed JSON. The store's contract is deliberately lenient:
//!
//! - `load` never fails. Absence or a parse failure yields a freshly seeded
//!   default; the failure is logged, not raised.
//! - `save` never surfaces a hard failure. A write error (full disk,
//!   permissions) is logged and swallowed; the in-memory record stays
//!   authoritative.
//! - `reset` erases the slot; the next `load` reconstructs the default.
//!
//! Access is strictly single-threaded per store handle. Two independent
//! processes pointing at the same slot are last-writer-wins with no
//! conflict detection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sra_core::{AssessmentData, Timestamp, SEED_CONTROL_COUNT};

/// Default slot file name, matching the storage key used by the v2 browser
/// tool.
pub const STORE_FILE_NAME: &str = "hipaa-sra-v2-data.json";

/// Handle to the persistence slot.
///
/// Cloning is cheap; clones point at the same slot file.
#[derive(Debug, Clone)]
pub struct AssessmentStore {
    path: PathBuf,
}

impl AssessmentStore {
    /// Create a store backed by the given slot file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record, or a freshly seeded default if the slot
    /// is absent or unreadable. Never fails.
    pub fn load(&self) -> AssessmentData {
        match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str::<AssessmentData>(&text) {
                Ok(data) => {
                    if data.controls.len() != SEED_CONTROL_COUNT {
                        // Format-change signal; accepted as-is, no migration.
                        tracing::warn!(
                            loaded = data.controls.len(),
                            catalog = SEED_CONTROL_COUNT,
                            "stored control count differs from the seed catalog"
                        );
                    }
                    return data;
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "failed to parse stored assessment; starting fresh"
                    );
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no stored assessment; starting fresh");
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read stored assessment; starting fresh"
                );
            }
        }
        AssessmentData::seeded(Timestamp::now())
    }

    /// Stamp `last_modified` and write the record to the slot.
    ///
    /// This is the only place `last_modified` is updated. Write failure is
    /// logged and swallowed.
    pub fn save(&self, data: &mut AssessmentData) {
        data.last_modified = Timestamp::now();

        let text = match serde_json::to_string_pretty(data) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize assessment; record not persisted");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(
                        path = %parent.display(),
                        error = %e,
                        "failed to create data directory; record not persisted"
                    );
                    return;
                }
            }
        }

        match fs::write(&self.path, text) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "assessment persisted"),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to write assessment; in-memory state remains authoritative"
                );
            }
        }
    }

    /// Erase the slot. Absence is not an error; the next `load` returns the
    /// seeded default.
    pub fn reset(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "assessment slot cleared"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to clear assessment slot"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sra_core::ControlStatus;

    fn temp_store() -> (tempfile::TempDir, AssessmentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = AssessmentStore::new(dir.path().join(STORE_FILE_NAME));
        (dir, store)
    }

    #[test]
    fn test_load_absent_slot_returns_seeded_default() {
        let (_dir, store) = temp_store();
        let data = store.load();
        assert_eq!(data.controls.len(), SEED_CONTROL_COUNT);
        assert!(data.controls.iter().all(|c| c.status == ControlStatus::NotStarted));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, store) = temp_store();
        let mut data = store.load();
        data.controls[0].status = ControlStatus::Yes;
        data.controls[0].notes = "Annual risk analysis on file.".to_string();
        store.save(&mut data);

        let loaded = store.load();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_save_stamps_last_modified() {
        let (_dir, store) = temp_store();
        let mut data = store.load();
        let before = data.last_modified;
        // The stamp has seconds precision; a same-second save keeps it equal
        // or later, never earlier.
        store.save(&mut data);
        assert!(data.last_modified >= before);
        assert_eq!(store.load().last_modified, data.last_modified);
    }

    #[test]
    fn test_load_corrupt_slot_returns_seeded_default() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json !").unwrap();
        let data = store.load();
        assert_eq!(data.controls.len(), SEED_CONTROL_COUNT);
    }

    #[test]
    fn test_load_wrong_shape_returns_seeded_default() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"{"foo": 1}"#).unwrap();
        let data = store.load();
        assert_eq!(data.controls.len(), SEED_CONTROL_COUNT);
    }

    #[test]
    fn test_reset_then_load_reconstructs_default() {
        let (_dir, store) = temp_store();
        let mut data = store.load();
        data.controls[0].status = ControlStatus::Yes;
        store.save(&mut data);

        store.reset();
        assert!(!store.path().exists());

        let fresh = store.load();
        assert!(fresh.controls.iter().all(|c| c.status == ControlStatus::NotStarted));
        assert!(fresh.controls.iter().all(|c| c.notes.is_empty()));
        assert_eq!(fresh.controls.len(), SEED_CONTROL_COUNT);
    }

    #[test]
    fn test_reset_absent_slot_is_noop() {
        let (_dir, store) = temp_store();
        store.reset();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssessmentStore::new(dir.path().join("nested/slot").join(STORE_FILE_NAME));
        let mut data = store.load();
        store.save(&mut data);
        assert!(store.path().exists());
    }
}
