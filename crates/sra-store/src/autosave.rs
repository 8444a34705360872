//! # Auto-Save — Debounced Persistence
//!
//! Collapses a burst of edits into a single write: each `schedule` call
//! cancels any pending save and starts a fresh quiet period, so only the
//! last state within a burst is persisted, exactly once, after the period
//! elapses. Debounce, not throttle.
//!
//! The pending save is an explicit cancellable handle: a worker thread
//! parked on a channel `recv_timeout`. Superseding or cancelling sends it a
//! cancel signal; `flush` sends a flush signal and the save fires
//! immediately. Dropping the `AutoSaver` flushes rather than discarding a
//! pending edit, since a short-lived process would otherwise lose every
//! write scheduled in its final quiet period.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use sra_core::AssessmentData;

use crate::store::AssessmentStore;

/// Quiet period between the last scheduled edit and the persisted write.
pub const AUTO_SAVE_DELAY: Duration = Duration::from_millis(1000);

enum Signal {
    Flush,
    Cancel,
}

/// A scheduled save that has not fired yet.
struct PendingSave {
    signal: Sender<Signal>,
    handle: JoinHandle<()>,
}

/// Debounced writer for the assessment slot.
pub struct AutoSaver {
    store: AssessmentStore,
    delay: Duration,
    pending: Option<PendingSave>,
    fired: Arc<AtomicUsize>,
}

impl AutoSaver {
    /// Create an auto-saver with the standard 1000 ms quiet period.
    pub fn new(store: AssessmentStore) -> Self {
        Self::with_delay(store, AUTO_SAVE_DELAY)
    }

    /// Create an auto-saver with a custom quiet period.
    pub fn with_delay(store: AssessmentStore, delay: Duration) -> Self {
        Self {
            store,
            delay,
            pending: None,
            fired: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Schedule `data` to be persisted after the quiet period.
    ///
    /// Cancels any pending save first; within a burst of calls only the
    /// last snapshot reaches the slot.
    pub fn schedule(&mut self, data: AssessmentData) {
        self.cancel_pending();

        let (signal, rx) = mpsc::channel();
        let store = self.store.clone();
        let fired = Arc::clone(&self.fired);
        let delay = self.delay;

        let handle = std::thread::spawn(move || {
            let mut data = data;
            match rx.recv_timeout(delay) {
                Err(RecvTimeoutError::Timeout) | Ok(Signal::Flush) => {
                    store.save(&mut data);
                    fired.fetch_add(1, Ordering::SeqCst);
                    tracing::debug!("debounced auto-save fired");
                }
                Ok(Signal::Cancel) | Err(RecvTimeoutError::Disconnected) => {}
            }
        });

        self.pending = Some(PendingSave { signal, handle });
    }

    /// Force any pending save to fire now instead of waiting out the quiet
    /// period. No-op when nothing is pending.
    pub fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.signal.send(Signal::Flush);
            let _ = pending.handle.join();
        }
    }

    /// Discard any pending save without writing.
    pub fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.signal.send(Signal::Cancel);
            let _ = pending.handle.join();
        }
    }

    /// Number of saves that have actually fired over this saver's lifetime.
    pub fn completed_saves(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Drop for AutoSaver {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::STORE_FILE_NAME;
    use sra_core::ControlStatus;
    use std::thread::sleep;

    const TEST_DELAY: Duration = Duration::from_millis(150);

    fn temp_saver() -> (tempfile::TempDir, AssessmentStore, AutoSaver) {
        let dir = tempfile::tempdir().unwrap();
        let store = AssessmentStore::new(dir.path().join(STORE_FILE_NAME));
        let saver = AutoSaver::with_delay(store.clone(), TEST_DELAY);
        (dir, store, saver)
    }

    fn marked(store: &AssessmentStore, note: &str) -> sra_core::AssessmentData {
        let mut data = store.load();
        data.controls[0].status = ControlStatus::Partial;
        data.controls[0].notes = note.to_string();
        data
    }

    #[test]
    fn test_burst_of_edits_fires_exactly_once_with_last_state() {
        let (_dir, store, mut saver) = temp_saver();

        saver.schedule(marked(&store, "first"));
        sleep(Duration::from_millis(30));
        saver.schedule(marked(&store, "second"));
        sleep(Duration::from_millis(30));
        saver.schedule(marked(&store, "third"));

        // Well past the quiet period measured from the last call.
        sleep(TEST_DELAY + Duration::from_millis(300));

        assert_eq!(saver.completed_saves(), 1);
        assert_eq!(store.load().controls[0].notes, "third");
    }

    #[test]
    fn test_nothing_persisted_before_quiet_period_elapses() {
        let (_dir, store, mut saver) = temp_saver();
        saver.schedule(marked(&store, "early"));
        sleep(Duration::from_millis(30));
        assert_eq!(saver.completed_saves(), 0);
        assert!(!store.path().exists());
        saver.cancel_pending();
    }

    #[test]
    fn test_cancel_discards_pending_save() {
        let (_dir, store, mut saver) = temp_saver();
        saver.schedule(marked(&store, "doomed"));
        saver.cancel_pending();
        sleep(TEST_DELAY + Duration::from_millis(100));
        assert_eq!(saver.completed_saves(), 0);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_flush_fires_immediately() {
        let (_dir, store, mut saver) = temp_saver();
        saver.schedule(marked(&store, "flushed"));
        saver.flush();
        assert_eq!(saver.completed_saves(), 1);
        assert_eq!(store.load().controls[0].notes, "flushed");
    }

    #[test]
    fn test_drop_flushes_pending_save() {
        let (_dir, store, mut saver) = temp_saver();
        saver.schedule(marked(&store, "kept"));
        drop(saver);
        assert_eq!(store.load().controls[0].notes, "kept");
    }

    #[test]
    fn test_separate_quiet_periods_fire_separately() {
        let (_dir, store, mut saver) = temp_saver();

        saver.schedule(marked(&store, "one"));
        sleep(TEST_DELAY + Duration::from_millis(150));
        assert_eq!(saver.completed_saves(), 1);

        saver.schedule(marked(&store, "two"));
        sleep(TEST_DELAY + Duration::from_millis(150));
        assert_eq!(saver.completed_saves(), 2);
        assert_eq!(store.load().controls[0].notes, "two");
    }
}
