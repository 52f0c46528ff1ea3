use telegram_bot::Bot;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},telegram_bot={level},ledger={level}",
            level = settings.level
        ))
        .init();

    tracing::info!(
        "Appending entries to {} and {}",
        settings.expense_log,
        settings.revenue_log
    );
    let ledger = ledger::Ledger::new(&settings.expense_log, &settings.revenue_log);

    let bot = Bot::builder()
        .token(&settings.telegram_bot)
        .authorized_user(settings.user_id)
        .ledger(ledger)
        .build()?;

    bot.run().await;

    Ok(())
}
