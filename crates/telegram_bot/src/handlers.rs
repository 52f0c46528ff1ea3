use ledger::EntryKind;
use teloxide::{prelude::*, types::UserId};

use crate::{
    ConfigParameters,
    error::BotError,
    flow::{self, Step},
    ui,
};

pub(crate) async fn handle_message(
    bot: Bot,
    msg: Message,
    cfg: ConfigParameters,
) -> Result<(), BotError> {
    let chat_id = msg.chat.id;

    // One authorized identity per process. Checked before routing so no
    // command, selector, or flow step runs for anyone else, and no session
    // state is touched.
    if !is_authorized(cfg.authorized_user, msg.from.as_ref().map(|user| user.id)) {
        bot.send_message(chat_id, "Operation not allowed").await?;
        return Ok(());
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Some(cmd) = parse_command(text) {
        match cmd {
            Command::Start => {
                // Re-renders the menu; flows in progress keep their state.
                bot.send_message(chat_id, "Welcome!")
                    .reply_markup(ui::main_menu())
                    .await?;
            }
            Command::Cancel => {
                cfg.sessions.update(chat_id, flow::cancel).await;
                bot.send_message(chat_id, "Operation cancelled.").await?;
            }
        }
        return Ok(());
    }

    if let Some(kind) = EntryKind::from_selector(text) {
        cfg.sessions
            .update(chat_id, |session| flow::start(session, kind))
            .await;
        bot.send_message(chat_id, "Enter the amount:").await?;
        return Ok(());
    }

    let mut step = Step::Parked;
    cfg.sessions
        .update(chat_id, |session| step = flow::advance(session, text))
        .await;

    match step {
        Step::AmountAccepted(kind) => {
            bot.send_message(chat_id, "Enter category:")
                .reply_markup(ui::category_keyboard(kind))
                .await?;
        }
        Step::Committed {
            kind,
            amount,
            category,
        } => {
            bot.send_message(chat_id, recorded_text(kind)).await?;
            cfg.ledger.record(kind, &amount, category)?;
        }
        Step::Parked => {
            // Unrecognized input never resets a flow.
            tracing::debug!("ignored message: {text:?}");
        }
    }

    Ok(())
}

fn is_authorized(authorized: UserId, from: Option<UserId>) -> bool {
    from.is_some_and(|user_id| user_id == authorized)
}

fn parse_command(text: &str) -> Option<Command> {
    let trimmed = text.trim();
    if !trimmed.starts_with('/') {
        return None;
    }
    let cmd = trimmed.split_whitespace().next().unwrap_or("");
    let cmd = cmd.split('@').next().unwrap_or(cmd);

    match cmd {
        "/start" => Some(Command::Start),
        "/cancel" => Some(Command::Cancel),
        _ => None,
    }
}

fn recorded_text(kind: EntryKind) -> String {
    format!("{} recorded!", kind.name())
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Start,
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_configured_user_is_authorized() {
        assert!(is_authorized(UserId(7), Some(UserId(7))));
        assert!(!is_authorized(UserId(7), Some(UserId(8))));
        assert!(!is_authorized(UserId(7), None));
    }

    #[test]
    fn commands_are_recognized() {
        assert!(matches!(parse_command("/start"), Some(Command::Start)));
        assert!(matches!(parse_command("/cancel"), Some(Command::Cancel)));
        assert!(matches!(
            parse_command("/cancel@some_bot"),
            Some(Command::Cancel)
        ));
        assert!(parse_command("/balance").is_none());
        assert!(parse_command("1500").is_none());
    }
}
