mod bosses;
mod contents;
mod export;
mod goal;
mod ids;
mod material;
mod records;
mod schema;

use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{LedgerError, Result};
use crate::models::normalize_month;
use crate::stats::Snapshot;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// The durable store holding every sheet of the ledger.
///
/// Mutations go through [`Database::write`], which wraps the whole
/// read-modify-write cycle in one IMMEDIATE transaction: either every
/// sheet touched by an operation is committed, or none is.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `path`, creating and initializing it if missing.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Self::initialize(path)
        }
    }

    /// Open an existing store. Fails with `StoreMissing` if there is none.
    /// Older stores are upgraded in place.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LedgerError::StoreMissing(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn, true)
    }

    /// Create a store at `path` with every sheet holding its default rows.
    /// Fails with `StoreExists` rather than touching an existing file.
    pub(crate) fn initialize(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(LedgerError::StoreExists(path.to_path_buf()));
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "initializing ledger store");
        Self::from_connection(conn, true)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, false)
    }

    fn from_connection(conn: Connection, on_disk: bool) -> Result<Self> {
        if on_disk {
            conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=FULL;")?;
        }
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let has_version_table: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        let stored = if has_version_table {
            tx.query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get::<_, i32>(0)
            })
            .optional()?
        } else {
            None
        };

        let current = match stored {
            Some(version) => version,
            None => {
                // Fresh store, or a version table with no row: lay down the
                // base sheets (idempotent) and upgrade like any other
                tx.execute_batch(schema::SCHEMA_V1)?;
                tx.execute("INSERT INTO schema_version (version) VALUES (1)", [])?;
                1
            }
        };

        if current < schema::CURRENT_VERSION {
            debug!(
                from = current,
                to = schema::CURRENT_VERSION,
                "applying schema migrations"
            );
        }
        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                tx.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            tx.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Run one mutating operation as a single atomic unit. The closure's
    /// writes are committed only if it returns `Ok`.
    pub(crate) fn write<T>(&mut self, op: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = op(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Run a read-only operation against a consistent view of the store.
    pub(crate) fn read<T>(&self, op: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        let out = op(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Everything the stats aggregator needs, read in one transaction.
    pub(crate) fn snapshot(&self, month: Option<&str>) -> Result<Snapshot> {
        let month = month.map(normalize_month).transpose()?;
        self.read(|conn| {
            Ok(Snapshot {
                records: records::list(conn, month.as_deref())?,
                bosses: bosses::list(conn)?,
                material: material::read(conn)?,
                goal: goal::read(conn)?,
                month,
            })
        })
    }

    #[cfg(test)]
    pub(crate) fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })?)
    }
}

/// Read a decimal stored as TEXT.
fn decimal_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(idx)?;
    Decimal::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Trimmed, non-empty name or a validation error.
fn required_name(field: &str, raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(LedgerError::validation(format!("{field} must not be empty")));
    }
    Ok(name.to_string())
}

fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
