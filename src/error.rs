use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds surfaced by every ledger operation.
///
/// An operation that returns any of these has committed nothing.
#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    /// Malformed or out-of-range input.
    #[error("{0}")]
    Validation(String),
    /// The referenced id is absent from its sheet.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: i64 },
    /// The request does not fit the current state.
    #[error("{0}")]
    Conflict(String),
    #[error("ledger store not found: {}", .0.display())]
    StoreMissing(PathBuf),
    #[error("ledger store already exists: {}", .0.display())]
    StoreExists(PathBuf),
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),
}

impl LedgerError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// A sum or product that does not fit in a `Decimal`.
    pub(crate) fn out_of_range(what: &str) -> Self {
        Self::Validation(format!("{what} out of range"))
    }
}

pub(crate) type Result<T> = std::result::Result<T, LedgerError>;
