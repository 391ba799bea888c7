use std::sync::Arc;

use async_trait::async_trait;

use discord_client::{DiscordClient, Embed};

use super::backend::Notifier;

/// Posts rendered snapshots to a Discord channel.
pub struct ChannelNotifier {
    client: Arc<DiscordClient>,
    channel_id: String,
}

impl ChannelNotifier {
    pub fn new(client: Arc<DiscordClient>, channel_id: String) -> Self {
        Self { client, channel_id }
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn send(&self, embed: &Embed) -> anyhow::Result<()> {
        self.client
            .create_message(&self.channel_id, std::slice::from_ref(embed))
            .await?;
        Ok(())
    }
}
