use rusqlite::{params, Connection};

use super::Database;
use crate::error::Result;

/// Entity kinds with their own id sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdKind {
    Records,
    Contents,
    Bosses,
}

impl IdKind {
    fn column(&self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::Contents => "contents",
            Self::Bosses => "bosses",
        }
    }
}

/// Next-to-assign id for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IdCounters {
    pub(crate) records: i64,
    pub(crate) contents: i64,
    pub(crate) bosses: i64,
}

/// Hand out the next id for `kind` and advance its counter.
///
/// Must run inside the same transaction that inserts the entity, so the
/// counter and the row are committed together.
pub(super) fn next_id(conn: &Connection, kind: IdKind) -> Result<i64> {
    let column = kind.column();
    let id: i64 = conn.query_row(
        &format!("SELECT {column} FROM id_counters WHERE id = 1"),
        [],
        |row| row.get(0),
    )?;
    conn.execute(
        &format!("UPDATE id_counters SET {column} = ?1 WHERE id = 1"),
        params![id + 1],
    )?;
    Ok(id)
}

pub(super) fn read(conn: &Connection) -> Result<IdCounters> {
    Ok(conn.query_row(
        "SELECT records, contents, bosses FROM id_counters WHERE id = 1",
        [],
        |row| {
            Ok(IdCounters {
                records: row.get(0)?,
                contents: row.get(1)?,
                bosses: row.get(2)?,
            })
        },
    )?)
}

impl Database {
    #[cfg(test)]
    pub(crate) fn id_counters(&self) -> Result<IdCounters> {
        self.read(read)
    }
}
