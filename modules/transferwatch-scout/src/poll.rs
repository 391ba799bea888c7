use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use transferwatch_core::{Category, CommitPolicy, DedupGate, GateDecision};

use crate::notify::Notifier;
use crate::render::render_snapshot;
use crate::scout::HeadlineScout;

/// Counters from one poll tick.
#[derive(Debug, Default)]
pub struct PollOutcome {
    pub categories: usize,
    pub dispatched: usize,
    pub unchanged: usize,
    pub cleared: usize,
    pub send_failures: usize,
}

impl fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "categories={} dispatched={} unchanged={} cleared={} send_failures={}",
            self.categories, self.dispatched, self.unchanged, self.cleared, self.send_failures,
        )
    }
}

/// Drives the fetch, classify, compare, dispatch cycle.
///
/// The gate map is locked for the whole tick, so ticks never interleave:
/// a stalled fetch delays the next tick rather than racing it. Command
/// handlers go straight to the scout and never touch the gates.
pub struct Poller {
    scout: Arc<HeadlineScout>,
    notifier: Arc<dyn Notifier>,
    gates: Mutex<HashMap<Category, DedupGate>>,
    interval: Duration,
    policy: CommitPolicy,
}

impl Poller {
    pub fn new(
        scout: Arc<HeadlineScout>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        policy: CommitPolicy,
    ) -> Self {
        let gates = scout
            .categories()
            .map(|category| (category, DedupGate::new(category)))
            .collect();
        Self {
            scout,
            notifier,
            gates: Mutex::new(gates),
            interval,
            policy,
        }
    }

    /// Run forever: tick, report, sleep, repeat. The first tick runs
    /// immediately, so a fresh deploy posts without waiting an interval.
    pub async fn run(&self) {
        info!(interval_secs = self.interval.as_secs(), "Poller starting");
        loop {
            let outcome = self.tick().await;
            info!(%outcome, "Poll tick complete");
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One fetch-compare-dispatch pass over every category.
    pub async fn tick(&self) -> PollOutcome {
        let mut gates = self.gates.lock().await;
        let mut outcome = PollOutcome::default();

        let snapshots = match self.scout.snapshot_all().await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                // Baselines stay as they are; a flaky source must not
                // read as a content change.
                warn!(error = %e, "Poll fetch failed, keeping baselines");
                return outcome;
            }
        };

        outcome.categories = snapshots.len();

        for snapshot in snapshots {
            let Some(gate) = gates.get_mut(&snapshot.category) else {
                continue;
            };

            match gate.decide(&snapshot) {
                GateDecision::Unchanged => {
                    outcome.unchanged += 1;
                }
                GateDecision::ChangedEmpty => {
                    // The list emptied out. Remember that silently so the
                    // same items reappearing later count as news again.
                    gate.commit(&snapshot);
                    outcome.cleared += 1;
                    info!(category = %snapshot.category, "Headline list emptied, baseline updated");
                }
                GateDecision::Dispatch => {
                    let embed = render_snapshot(&snapshot);
                    match self.notifier.send(&embed).await {
                        Ok(()) => {
                            gate.commit(&snapshot);
                            outcome.dispatched += 1;
                            info!(
                                category = %snapshot.category,
                                items = snapshot.len(),
                                "Dispatched snapshot"
                            );
                        }
                        Err(e) => {
                            outcome.send_failures += 1;
                            error!(category = %snapshot.category, error = %e, "Dispatch failed");
                            if self.policy == CommitPolicy::Always {
                                gate.commit(&snapshot);
                            }
                        }
                    }
                }
            }
        }

        outcome
    }
}
