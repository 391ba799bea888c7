use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use discord_client::{CommandSpec, DiscordClient};
use transferwatch_core::{default_rules, CommitPolicy, Config, EntityCatalog};
use transferwatch_scout::notify::ChannelNotifier;
use transferwatch_scout::{
    build_router, AppState, HeadlineScout, HttpFetcher, Poller, Source, CMD_RUMOURS, CMD_TRANSFERS,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("transferwatch=info".parse()?),
        )
        .init();

    info!("Transfer Watch starting...");

    // Load config
    let config = Config::from_env();
    config.log_redacted();

    let catalog = EntityCatalog::top_leagues();
    anyhow::ensure!(!catalog.is_empty(), "Entity catalog must not be empty");

    let fetcher = Arc::new(HttpFetcher::new(&config.source_user_agent));
    let scout = Arc::new(HeadlineScout::new(
        fetcher,
        Source {
            url: config.source_url.clone(),
            selectors: config.source_selectors.clone(),
        },
        catalog,
        default_rules(),
        config.snapshot_cap,
    ));

    // Register slash commands before serving traffic. Failing here is fatal:
    // a bot whose commands never registered is not worth keeping alive.
    let discord = Arc::new(DiscordClient::new(config.discord_token.clone()));
    let app = discord.get_application().await?;
    info!(application_id = app.id.as_str(), "Resolved Discord application");
    discord
        .register_guild_commands(
            &app.id,
            &config.discord_guild_id,
            &[
                CommandSpec::chat_input(
                    CMD_TRANSFERS,
                    "Shows latest transfer news from top leagues",
                ),
                CommandSpec::chat_input(
                    CMD_RUMOURS,
                    "Shows current transfer rumours from top leagues",
                ),
            ],
        )
        .await?;

    // Background poller
    let notifier = Arc::new(ChannelNotifier::new(
        discord,
        config.discord_channel_id.clone(),
    ));
    let poller = Arc::new(Poller::new(
        scout.clone(),
        notifier,
        Duration::from_secs(config.poll_interval_secs),
        CommitPolicy::Always,
    ));
    tokio::spawn({
        let poller = poller.clone();
        async move { poller.run().await }
    });

    // Interaction endpoint + liveness
    let state = AppState {
        scout,
        public_key: config.discord_public_key.clone(),
    };
    let addr = format!("{}:{}", config.web_host, config.web_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = addr.as_str(), "Serving interactions");
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
