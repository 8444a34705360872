//! # Session — The Composition-Root State Object
//!
//! Owns the single live `AssessmentData` instance. Every mutation goes
//! through an explicit setter so the debounced auto-saver observes each
//! edit; no other component holds an authoritative copy.

use std::time::Duration;

use sra_core::{compute_stats, AssessmentData, ControlId, ControlStatus, DashboardStats, SraError};

use crate::autosave::AutoSaver;
use crate::store::AssessmentStore;

/// Live assessment state plus its persistence plumbing.
///
/// The store is the only writer of the slot; the session is the only owner
/// of the live record. Dropping the session flushes any pending auto-save.
pub struct Session {
    data: AssessmentData,
    store: AssessmentStore,
    autosaver: AutoSaver,
}

impl Session {
    /// Load (or seed) the record from the store and wrap it in a session.
    pub fn open(store: AssessmentStore) -> Self {
        let data = store.load();
        let autosaver = AutoSaver::new(store.clone());
        Self {
            data,
            store,
            autosaver,
        }
    }

    /// As [`Session::open`], with a custom auto-save quiet period.
    pub fn open_with_autosave_delay(store: AssessmentStore, delay: Duration) -> Self {
        let data = store.load();
        let autosaver = AutoSaver::with_delay(store.clone(), delay);
        Self {
            data,
            store,
            autosaver,
        }
    }

    /// Read-only view of the live record.
    pub fn data(&self) -> &AssessmentData {
        &self.data
    }

    /// Dashboard statistics for the live record.
    pub fn stats(&self) -> DashboardStats {
        compute_stats(&self.data)
    }

    /// Set a control's self-scored status.
    pub fn set_status(&mut self, id: &ControlId, status: ControlStatus) -> Result<(), SraError> {
        let control = self
            .data
            .control_mut(id)
            .ok_or_else(|| SraError::UnknownControl(id.to_string()))?;
        control.status = status;
        self.autosave();
        Ok(())
    }

    /// Set a control's free-text notes.
    pub fn set_notes(&mut self, id: &ControlId, notes: impl Into<String>) -> Result<(), SraError> {
        let control = self
            .data
            .control_mut(id)
            .ok_or_else(|| SraError::UnknownControl(id.to_string()))?;
        control.notes = notes.into();
        self.autosave();
        Ok(())
    }

    /// Set the organization under assessment.
    pub fn set_organization(&mut self, organization: Option<String>) {
        self.data.organization = organization;
        self.autosave();
    }

    /// Set the person performing the assessment.
    pub fn set_assessor(&mut self, assessor: Option<String>) {
        self.data.assessor = assessor;
        self.autosave();
    }

    /// Replace the in-scope system list.
    pub fn set_systems(&mut self, systems: Vec<String>) {
        self.data.systems = systems;
        self.autosave();
    }

    /// Replace the whole record, e.g. with a validated import.
    pub fn replace(&mut self, data: AssessmentData) {
        self.data = data;
        self.autosave();
    }

    /// Erase the slot and reload the seeded default as the live record.
    pub fn reset(&mut self) {
        // A pending save would re-create the slot after the erase.
        self.autosaver.cancel_pending();
        self.store.reset();
        self.data = self.store.load();
    }

    /// Persist the live record synchronously, superseding any pending
    /// auto-save.
    pub fn save_now(&mut self) {
        self.autosaver.cancel_pending();
        self.store.save(&mut self.data);
    }

    fn autosave(&mut self) {
        self.autosaver.schedule(self.data.clone());
    }
}
