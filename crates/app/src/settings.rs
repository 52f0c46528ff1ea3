//! Handles settings for the application. Values come from an optional
//! `settings.toml` next to the binary and from the process environment
//! (`TELEGRAM_BOT`, `USER_ID`, and optionally `EXPENSE_LOG`, `REVENUE_LOG`,
//! `LEVEL`), the environment taking precedence.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_expense_log() -> String {
    "expenses.log".to_string()
}

fn default_revenue_log() -> String {
    "revenues.log".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Bot credential.
    pub telegram_bot: String,
    /// The only user id allowed to talk to the bot.
    pub user_id: u64,
    #[serde(default = "default_expense_log")]
    pub expense_log: String,
    #[serde(default = "default_revenue_log")]
    pub revenue_log: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Settings {
    /// Fails when the credential or the authorized user id is missing, so a
    /// misconfigured process never starts polling.
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }
}
