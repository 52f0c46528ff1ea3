//! Entry kinds and their menu labels.

/// The kind of a ledger entry. Each kind has its own category catalog and
/// its own sink file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Expense,
    Revenue,
}

impl EntryKind {
    /// Deterministic iteration order for the flow engine.
    pub const ALL: [EntryKind; 2] = [EntryKind::Expense, EntryKind::Revenue];

    /// The button label that starts a flow for this kind.
    pub fn selector_label(self) -> &'static str {
        match self {
            EntryKind::Expense => "💸 Expense",
            EntryKind::Revenue => "💰 Revenue",
        }
    }

    /// Matches a message text against the selector labels.
    pub fn from_selector(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector_label() == text.trim())
    }

    pub fn name(self) -> &'static str {
        match self {
            EntryKind::Expense => "Expense",
            EntryKind::Revenue => "Revenue",
        }
    }
}
