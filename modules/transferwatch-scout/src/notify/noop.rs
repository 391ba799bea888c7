use async_trait::async_trait;

use discord_client::Embed;

use super::backend::Notifier;

/// No-op notifier for testing.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, _embed: &Embed) -> anyhow::Result<()> {
        Ok(())
    }
}
