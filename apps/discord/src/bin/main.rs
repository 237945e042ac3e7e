//! Narwhal Discord relay entry point.
//!
//! Loads TOML configuration, constructs the completions client and
//! event handler, and runs the serenity client with graceful shutdown
//! on ctrl-c.

use anyhow::Result;
use llm::{Client, Completions};
use narwhal_discord::{BotConfig, Handler};
use serenity::all::GatewayIntents;
use std::path::Path;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "narwhal.toml".to_string());
    let config = BotConfig::load(Path::new(&config_path))?;
    tracing::info!("loaded configuration from {config_path}");

    // Construct the completions client.
    let completions = Completions::new(Client::new(), &config.llm.endpoint);
    tracing::info!(
        "relaying to {} with model {}",
        config.llm.endpoint,
        config.llm.model
    );

    // Build the serenity client.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let token = config.discord.token.clone();
    let handler = Handler::new(completions, &config);
    let mut client = serenity::Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    // Shut the shards down on ctrl-c.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
        tracing::info!("received shutdown signal");
        shard_manager.shutdown_all().await;
    });

    client.start().await?;
    tracing::info!("relay shut down");
    Ok(())
}
