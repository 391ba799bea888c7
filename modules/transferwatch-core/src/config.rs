use std::env;

use tracing::info;

pub const DEFAULT_SOURCE_URL: &str = "https://www.goal.com/en/transfer-news";
pub const DEFAULT_SELECTOR: &str = ".type-article .title";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Discord
    pub discord_token: String,
    pub discord_guild_id: String,
    pub discord_channel_id: String,
    pub discord_public_key: String,

    // Source page
    pub source_url: String,
    pub source_selectors: Vec<String>,
    pub source_user_agent: String,

    // Polling
    pub poll_interval_secs: u64,
    pub snapshot_cap: usize,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            discord_token: required_env("DISCORD_TOKEN"),
            discord_guild_id: required_env("DISCORD_GUILD_ID"),
            discord_channel_id: required_env("DISCORD_CHANNEL_ID"),
            discord_public_key: required_env("DISCORD_PUBLIC_KEY"),
            source_url: env::var("SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            source_selectors: env::var("SOURCE_SELECTORS")
                .map(|raw| parse_selectors(&raw))
                .unwrap_or_else(|_| vec![DEFAULT_SELECTOR.to_string()]),
            source_user_agent: env::var("SOURCE_USER_AGENT")
                .unwrap_or_else(|_| "Mozilla/5.0".to_string()),
            poll_interval_secs: env::var("POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .expect("POLL_INTERVAL_SECS must be a number"),
            // Discord embeds allow at most 25 fields
            snapshot_cap: env::var("SNAPSHOT_CAP")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .expect("SNAPSHOT_CAP must be a number")
                .clamp(1, 25),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }

    /// Log the non-secret parts of the config at startup.
    pub fn log_redacted(&self) {
        info!(
            source_url = self.source_url.as_str(),
            selectors = ?self.source_selectors,
            poll_interval_secs = self.poll_interval_secs,
            snapshot_cap = self.snapshot_cap,
            web_host = self.web_host.as_str(),
            web_port = self.web_port,
            guild_id = self.discord_guild_id.as_str(),
            channel_id = self.discord_channel_id.as_str(),
            "Config loaded"
        );
    }
}

fn parse_selectors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
