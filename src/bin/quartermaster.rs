//! Runs the Quartermaster Discord bot.
//!
//! Configuration is read from the environment (see [`BotConfig`]); a `.env`
//! file in the working directory is loaded first when present.

use std::sync::Arc;

use quartermaster::{
    config::BotConfig,
    discord::{self, Handler},
    item::{
        adapters::postgres::{PostgresItemCatalogue, connect_pool},
        services::ItemLookupService,
    },
    telemetry,
};
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), BoxError> {
    let config = BotConfig::from_env()?;
    telemetry::init_tracing()?;
    info!(
        channels = config.whitelist().len(),
        pool_size = config.pool_size(),
        "loaded configuration"
    );

    let database_url = config.database_url().to_owned();
    let pool_size = config.pool_size();
    let pool =
        tokio::task::spawn_blocking(move || connect_pool(&database_url, pool_size)).await??;

    let service = ItemLookupService::new(
        Arc::new(PostgresItemCatalogue::new(pool)),
        Arc::new(config.lookup_settings()),
    );
    let handler = Handler::new(service).with_sync_on_ready(config.sync_commands_on_startup());
    discord::run(config.discord_token(), handler).await?;
    Ok(())
}
