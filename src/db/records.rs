use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::ids::{self, IdKind};
use super::{decimal_at, goal, now_timestamp, Database};
use crate::error::{LedgerError, Result};
use crate::models::*;

const RECORD_COLUMNS: &str = "id, type, amount, description, date, created_at, source, ref_id";

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<Record> {
    let kind_str: String = row.get(1)?;
    let kind = RecordType::parse(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown record type '{kind_str}'").into(),
        )
    })?;
    let source: String = row.get(6)?;
    let ref_id: Option<i64> = row.get(7)?;
    let origin = Origin::from_parts(&source, ref_id).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            6,
            rusqlite::types::Type::Text,
            format!("unknown record source '{source}'").into(),
        )
    })?;
    Ok(Record {
        id: row.get(0)?,
        kind,
        amount: decimal_at(row, 2)?,
        description: row.get(3)?,
        date: row.get(4)?,
        created_at: row.get(5)?,
        origin,
    })
}

/// Append a record and apply its effect on the goal balance.
///
/// Every path that creates a record (manual entry, catalog spend, boss
/// check, quick income) goes through here, inside the caller's transaction.
pub(super) fn insert(conn: &Connection, new: NewRecord) -> Result<Record> {
    ensure_non_negative("amount", new.amount)?;
    let date = match new.date.as_deref() {
        Some(d) => normalize_date(d)?,
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };

    let record = Record {
        id: ids::next_id(conn, IdKind::Records)?,
        kind: new.kind,
        amount: new.amount,
        description: new.description,
        date,
        created_at: now_timestamp(),
        origin: new.origin,
    };
    conn.execute(
        &format!("INSERT INTO records ({RECORD_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
        params![
            record.id,
            record.kind.as_str(),
            record.amount.to_string(),
            record.description,
            record.date,
            record.created_at,
            record.origin.as_str(),
            record.origin.ref_id(),
        ],
    )?;
    goal::adjust(conn, record.goal_delta())?;
    Ok(record)
}

fn find(conn: &Connection, id: i64) -> Result<Option<Record>> {
    Ok(conn
        .query_row(
            &format!("SELECT {RECORD_COLUMNS} FROM records WHERE id = ?1"),
            params![id],
            row_to_record,
        )
        .optional()?)
}

/// Remove a record and reverse its effect on the goal balance.
pub(super) fn remove(conn: &Connection, id: i64) -> Result<Record> {
    let record = find(conn, id)?.ok_or(LedgerError::NotFound { kind: "record", id })?;
    conn.execute("DELETE FROM records WHERE id = ?1", params![id])?;
    goal::adjust(conn, -record.goal_delta())?;
    Ok(record)
}

/// Records newest first (date, then id). `month` must already be "YYYY-MM".
pub(super) fn list(conn: &Connection, month: Option<&str>) -> Result<Vec<Record>> {
    let sql = format!(
        "SELECT {RECORD_COLUMNS} FROM records
         WHERE ?1 IS NULL OR substr(date, 1, 7) = ?1
         ORDER BY date DESC, id DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![month], row_to_record)?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

impl Database {
    pub(crate) fn create_record(&mut self, new: NewRecord) -> Result<Record> {
        let record = self.write(|tx| insert(tx, new))?;
        info!(
            id = record.id,
            kind = record.kind.as_str(),
            amount = %record.amount,
            source = record.origin.as_str(),
            "record created"
        );
        Ok(record)
    }

    pub(crate) fn delete_record(&mut self, id: i64) -> Result<Record> {
        let record = self.write(|tx| remove(tx, id))?;
        info!(id, kind = record.kind.as_str(), amount = %record.amount, "record deleted");
        Ok(record)
    }

    /// All records, or only those dated in `month` ("YYYY-MM").
    pub(crate) fn get_records(&self, month: Option<&str>) -> Result<Vec<Record>> {
        let month = month.map(normalize_month).transpose()?;
        let records = self.read(|conn| list(conn, month.as_deref()))?;
        debug!(month = ?month, count = records.len(), "records listed");
        Ok(records)
    }

    /// Quick manual income entry, dated today and tagged as such.
    pub(crate) fn record_quick_income(
        &mut self,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Record> {
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(QUICK_INCOME_DESCRIPTION);
        self.create_record(
            NewRecord::new(RecordType::Income, amount)
                .with_description(description)
                .with_origin(Origin::QuickIncome),
        )
    }
}
