pub mod catalog;
pub mod classify;
pub mod config;
pub mod gate;
pub mod rules;
pub mod snapshot;

pub use catalog::{EntityCatalog, League};
pub use classify::{classify, Headline, HeadlineMatch};
pub use config::Config;
pub use gate::{CommitPolicy, DedupGate, GateDecision};
pub use rules::{default_rules, Category, ClassificationRule, EntityScope};
pub use snapshot::Snapshot;
