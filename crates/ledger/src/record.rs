//! Record formatting and the append-only sink.

use std::{fs::OpenOptions, io::Write, path::PathBuf};

use chrono::{DateTime, Local};

use crate::error::LedgerError;

/// Formats a committed entry as a single log line.
pub(crate) fn format_line(at: DateTime<Local>, amount: &str, category: &str) -> String {
    format!("{} - ${amount} - {category}", at.format("%d/%m/%Y-%H:%M:%S"))
}

/// An append-only text file. Created on first write; one line per append,
/// handle opened and closed per write.
#[derive(Clone, Debug)]
pub(crate) struct Sink {
    path: PathBuf,
}

impl Sink {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn append(&self, line: &str) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
