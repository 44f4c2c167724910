use anyhow::{Context, Result};

/// Startup configuration. Built once in `main` and passed by reference into
/// the dispatcher; nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token.
    pub bot_token: String,
}

impl Config {
    /// Read configuration from the process environment. `BOT_TOKEN` must be
    /// set and non-empty.
    pub fn from_env() -> Result<Self> {
        Self::from_token(std::env::var("BOT_TOKEN").ok())
    }

    fn from_token(token: Option<String>) -> Result<Self> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .context(
                "BOT_TOKEN not found! Please set it in your .env file or environment variables.",
            )?;
        Ok(Self { bot_token: token })
    }
}
