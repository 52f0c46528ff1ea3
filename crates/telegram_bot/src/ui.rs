//! Reply keyboards.

use ledger::{EntryKind, categories};
use teloxide::types::{KeyboardButton, KeyboardMarkup};

/// The top-level options keyboard. "🤝 Lend" and "⚖️ Balance" are shown but
/// have no handler yet.
pub(crate) fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(EntryKind::Expense.selector_label())],
        vec![KeyboardButton::new(EntryKind::Revenue.selector_label())],
        vec![KeyboardButton::new("🤝 Lend")],
        vec![KeyboardButton::new("⚖️ Balance")],
    ])
}

/// The category catalog for `kind`, one label per row.
pub(crate) fn category_keyboard(kind: EntryKind) -> KeyboardMarkup {
    let rows = categories(kind)
        .iter()
        .map(|&label| vec![KeyboardButton::new(label)])
        .collect::<Vec<_>>();

    KeyboardMarkup::new(rows)
}
