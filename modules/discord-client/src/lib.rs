pub mod error;
pub mod types;
pub mod verify;

pub use error::{DiscordError, Result};
pub use types::{
    Application, CommandSpec, Embed, EmbedField, Interaction, InteractionCallbackData,
    InteractionData, InteractionResponse,
};
pub use verify::verify_signature;

const BASE_URL: &str = "https://discord.com/api/v10";

pub struct DiscordClient {
    client: reqwest::Client,
    token: String,
}

impl DiscordClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }

    fn auth(&self) -> String {
        format!("Bot {}", self.token)
    }

    /// Fetch the application the configured bot token belongs to.
    pub async fn get_application(&self) -> Result<Application> {
        let url = format!("{}/applications/@me", BASE_URL);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", self.auth())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DiscordError::from_response(status.as_u16(), body));
        }

        let app: Application = resp.json().await?;
        Ok(app)
    }

    /// Overwrite the guild's slash commands with the given set.
    ///
    /// Guild commands propagate immediately, unlike global commands which
    /// can take up to an hour to roll out.
    pub async fn register_guild_commands(
        &self,
        application_id: &str,
        guild_id: &str,
        commands: &[CommandSpec],
    ) -> Result<()> {
        let url = format!(
            "{}/applications/{}/guilds/{}/commands",
            BASE_URL, application_id, guild_id
        );
        let resp = self
            .client
            .put(&url)
            .header("Authorization", self.auth())
            .json(&commands)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DiscordError::from_response(status.as_u16(), body));
        }

        tracing::info!(guild_id, count = commands.len(), "Registered guild commands");
        Ok(())
    }

    /// Post a message with the given embeds to a channel.
    pub async fn create_message(&self, channel_id: &str, embeds: &[Embed]) -> Result<()> {
        let url = format!("{}/channels/{}/messages", BASE_URL, channel_id);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", self.auth())
            .json(&serde_json::json!({ "embeds": embeds }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DiscordError::from_response(status.as_u16(), body));
        }

        tracing::info!(channel_id, count = embeds.len(), "Posted channel message");
        Ok(())
    }
}
