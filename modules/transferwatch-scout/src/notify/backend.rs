use async_trait::async_trait;

use discord_client::Embed;

/// Pluggable dispatch backend for rendered snapshots.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one rendered snapshot.
    async fn send(&self, embed: &Embed) -> anyhow::Result<()>;
}
