use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::classify::HeadlineMatch;
use crate::rules::Category;

/// What one poll produced for one category: the capped, ordered match list
/// plus a fingerprint over its text content. Two snapshots are equal iff
/// their fingerprints are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub category: Category,
    pub items: Vec<HeadlineMatch>,
    pub fingerprint: String,
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    /// Cap the match list at `max_count`, then fingerprint what is left.
    /// Truncation happens first: an item scrolling past the cap reads the
    /// same as its removal. Links and the timestamp stay out of the hash;
    /// the identity of a snapshot is its ordered text content.
    pub fn build(category: Category, matches: Vec<HeadlineMatch>, max_count: usize) -> Self {
        let mut items = matches;
        items.truncate(max_count);
        let fingerprint = fingerprint_items(&items);
        Self {
            category,
            items,
            fingerprint,
            taken_at: Utc::now(),
        }
    }

    /// The baseline before anything has been seen.
    pub fn empty(category: Category) -> Self {
        Self::build(category, Vec::new(), 0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// SHA-256 over each item's text, length-prefixed so ["ab", "c"] and
/// ["a", "bc"] cannot collide. Hex-encoded.
fn fingerprint_items(items: &[HeadlineMatch]) -> String {
    let mut hasher = Sha256::new();
    for item in items {
        hasher.update((item.text.len() as u64).to_be_bytes());
        hasher.update(item.text.as_bytes());
    }
    hex::encode(hasher.finalize())
}
