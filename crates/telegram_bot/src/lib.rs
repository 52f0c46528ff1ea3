//! Telegram bot.
//!
//! The bot is a thin front end: it walks the authorized user through the
//! entry flows and appends committed entries to the [`Ledger`]. All session
//! state is transient and lives in memory.

use ledger::Ledger;
use teloxide::prelude::*;

mod error;
mod flow;
mod handlers;
mod state;
mod ui;

#[derive(Clone)]
pub struct ConfigParameters {
    authorized_user: UserId,
    ledger: Ledger,
    sessions: state::SessionStore,
}

pub struct Bot {
    token: String,
    authorized_user: UserId,
    ledger: Ledger,
}

impl Bot {
    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        let parameters = ConfigParameters {
            authorized_user: self.authorized_user,
            ledger: self.ledger.clone(),
            sessions: state::SessionStore::default(),
        };

        let handler = Update::filter_message().endpoint(handlers::handle_message);

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default, Debug)]
pub struct BotBuilder {
    token: String,
    authorized_user: Option<UserId>,
    ledger: Option<Ledger>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    /// The only user id the bot answers to.
    pub fn authorized_user(mut self, user_id: u64) -> BotBuilder {
        self.authorized_user = Some(UserId(user_id));
        self
    }

    pub fn ledger(mut self, ledger: Ledger) -> BotBuilder {
        self.ledger = Some(ledger);
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");
        if self.token.is_empty() {
            return Err("bot token is required".to_string());
        }
        let authorized_user = self
            .authorized_user
            .ok_or_else(|| "authorized user id is required".to_string())?;
        let ledger = self
            .ledger
            .ok_or_else(|| "ledger is required".to_string())?;

        Ok(Bot {
            token: self.token,
            authorized_user,
            ledger,
        })
    }
}
