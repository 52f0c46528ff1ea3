use thiserror::Error;

/// Faults a handler can raise. Both variants end up in the dispatcher's
/// error handler; there is no retry.
#[derive(Error, Debug)]
pub(crate) enum BotError {
    #[error(transparent)]
    Telegram(#[from] teloxide::RequestError),
    #[error(transparent)]
    Ledger(#[from] ledger::LedgerError),
}
