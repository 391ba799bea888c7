use crate::rules::Category;
use crate::snapshot::Snapshot;

/// What the poll path should do with a freshly built snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Fingerprint equals the baseline; nothing happened.
    Unchanged,
    /// Content changed but the new snapshot is empty. The baseline must
    /// move (so stale content is not re-announced when it comes back
    /// unchanged later), but nothing goes out: disappearance is not news.
    ChangedEmpty,
    /// Content changed and there is something to send.
    Dispatch,
}

/// Whether the baseline advances when a dispatch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Advance regardless of the send outcome; a failed notification is
    /// dropped rather than repeated.
    Always,
    /// Advance only after a successful send; a failed dispatch is retried
    /// on the next poll.
    OnDelivery,
}

/// Per-category change detector. Holds the fingerprint of the last
/// committed snapshot, starting at the empty baseline. The split between
/// `decide` and `commit` leaves the dispatch-failure policy to the caller.
#[derive(Debug, Clone)]
pub struct DedupGate {
    baseline: String,
}

impl DedupGate {
    pub fn new(category: Category) -> Self {
        Self {
            baseline: Snapshot::empty(category).fingerprint,
        }
    }

    /// Compare a new snapshot against the baseline. Read-only; call
    /// `commit` to advance.
    pub fn decide(&self, snapshot: &Snapshot) -> GateDecision {
        if snapshot.fingerprint == self.baseline {
            GateDecision::Unchanged
        } else if snapshot.is_empty() {
            GateDecision::ChangedEmpty
        } else {
            GateDecision::Dispatch
        }
    }

    /// Make `snapshot` the new baseline.
    pub fn commit(&mut self, snapshot: &Snapshot) {
        self.baseline = snapshot.fingerprint.clone();
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }
}
