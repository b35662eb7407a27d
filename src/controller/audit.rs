//! Transition audit log.
//!
//! Demo instrumentation: an append-only list of variant changes, used to
//! visualize what the machine did. Not part of the correctness contract.

use parking_lot::Mutex;

/// One recorded variant change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: &'static str,
    pub event: &'static str,
    pub to: &'static str,
}

impl std::fmt::Display for TransitionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.event, self.to)
    }
}

/// Append-only, ordered log of state-variant changes.
///
/// Only appended when a transition changes the state's variant; no-ops
/// and same-variant updates (field edits) are not recorded.
#[derive(Default)]
pub struct TransitionLog {
    records: Mutex<Vec<TransitionRecord>>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, from: &'static str, event: &'static str, to: &'static str) {
        self.records.lock().push(TransitionRecord { from, event, to });
    }

    /// Copy of the log in append order.
    pub fn snapshot(&self) -> Vec<TransitionRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}
