//! Category catalogs, one per entry kind.
//!
//! Labels carry a leading decorative glyph plus a space; the glyph is
//! dropped before storage. Only catalog members are accepted.

use crate::entry::EntryKind;

const EXPENSE_CATEGORIES: [&str; 9] = [
    // Essentials
    "🏠 Housing",
    "🏬 Pantry",
    "🚋 Transportation",
    "🍎 Healthcare",
    // Leisure
    "🍔 Takeout/eating out",
    "🍿 Entertainment",
    "🛍️ Shopping",
    "✈️ Lifestyle",
    // Financial growth
    "💰 Savings & Investments",
];

const REVENUE_CATEGORIES: [&str; 3] = ["💼 Salary", "📈 Investments", "🎁 Gifts"];

/// The selectable labels for `kind`, in keyboard order.
pub fn categories(kind: EntryKind) -> &'static [&'static str] {
    match kind {
        EntryKind::Expense => &EXPENSE_CATEGORIES,
        EntryKind::Revenue => &REVENUE_CATEGORIES,
    }
}

/// Matches `text` against the catalog for `kind` and returns the stored
/// category name: the label with its leading glyph token removed. Anything
/// that is not an exact catalog label is rejected.
pub fn resolve_category(kind: EntryKind, text: &str) -> Option<&'static str> {
    categories(kind)
        .iter()
        .find(|&&label| label == text)
        .map(|&label| strip_glyph(label))
}

fn strip_glyph(label: &str) -> &str {
    label.split_once(' ').map_or(label, |(_, name)| name)
}
