//! Recording doubles for update sinks and listeners.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::update::{Update, UpdateSink};

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// An [`UpdateSink`] that keeps every update it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    updates: Mutex<Vec<Update>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates received so far.
    pub fn updates(&self) -> Vec<Update> {
        self.updates.lock().clone()
    }

    /// Drain the updates received so far.
    pub fn take(&self) -> Vec<Update> {
        std::mem::take(&mut *self.updates.lock())
    }
}

impl UpdateSink for RecordingSink {
    fn apply(&self, update: Update) {
        self.updates.lock().push(update);
    }
}

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// A cloneable call log for listeners. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    /// Entries in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}
