//! Append-only ledger for committed entries.
//!
//! Every committed entry becomes one line in the log file of its kind:
//!
//! ```text
//! DD/MM/YYYY-HH:MM:SS - $<amount> - <category>
//! ```
//!
//! Lines are never updated or removed.

use std::path::PathBuf;

use chrono::Local;

pub use catalog::{categories, resolve_category};
pub use entry::EntryKind;
pub use error::LedgerError;
use record::Sink;

pub mod amount;
mod catalog;
mod entry;
mod error;
mod record;

/// The two per-kind sinks. Cheap to clone: a `Ledger` is just the paths,
/// every append opens and closes its own handle.
#[derive(Clone, Debug)]
pub struct Ledger {
    expense: Sink,
    revenue: Sink,
}

impl Ledger {
    pub fn new(expense_log: impl Into<PathBuf>, revenue_log: impl Into<PathBuf>) -> Self {
        Self {
            expense: Sink::new(expense_log),
            revenue: Sink::new(revenue_log),
        }
    }

    /// Appends a committed entry to the sink for `kind`. The timestamp is
    /// taken at commit time, not when the amount was entered.
    pub fn record(&self, kind: EntryKind, amount: &str, category: &str) -> Result<(), LedgerError> {
        let line = record::format_line(Local::now(), amount, category);
        self.sink(kind).append(&line)?;
        tracing::debug!("recorded {}: {line}", kind.name());
        Ok(())
    }

    fn sink(&self, kind: EntryKind) -> &Sink {
        match kind {
            EntryKind::Expense => &self.expense,
            EntryKind::Revenue => &self.revenue,
        }
    }
}
