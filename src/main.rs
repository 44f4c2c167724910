mod bot;
mod config;
mod event;
mod replies;

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; deployments may set the variable directly
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,echobot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing configuration is a controlled early exit, not a crash
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e:#}");
            return Ok(());
        }
    };

    info!("Starting bot...");
    bot::run(Arc::new(config)).await?;

    Ok(())
}
