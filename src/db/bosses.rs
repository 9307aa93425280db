use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::info;

use super::ids::{self, IdKind};
use super::{decimal_at, now_timestamp, records, required_name, Database};
use crate::error::{LedgerError, Result};
use crate::models::*;

const BOSS_COLUMNS: &str = "id, name, reward_amount, checked, checked_at";

fn row_to_boss(row: &Row<'_>) -> rusqlite::Result<Boss> {
    Ok(Boss {
        id: row.get(0)?,
        name: row.get(1)?,
        reward_amount: decimal_at(row, 2)?,
        checked: row.get(3)?,
        checked_at: row.get(4)?,
    })
}

/// Bosses in display order.
pub(super) fn list(conn: &Connection) -> Result<Vec<Boss>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOSS_COLUMNS} FROM bosses ORDER BY position, id"
    ))?;
    let rows = stmt.query_map([], row_to_boss)?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

fn find(conn: &Connection, id: i64) -> Result<Boss> {
    conn.query_row(
        &format!("SELECT {BOSS_COLUMNS} FROM bosses WHERE id = ?1"),
        params![id],
        row_to_boss,
    )
    .optional()?
    .ok_or(LedgerError::NotFound { kind: "boss", id })
}

/// `ordered` must name every existing boss exactly once.
fn ensure_permutation(existing: &[i64], ordered: &[i64]) -> Result<()> {
    let wanted: HashSet<i64> = ordered.iter().copied().collect();
    let have: HashSet<i64> = existing.iter().copied().collect();
    if ordered.len() != existing.len() || wanted.len() != ordered.len() || wanted != have {
        return Err(LedgerError::validation(format!(
            "Invalid reorder: expected each of {} boss ids exactly once",
            existing.len()
        )));
    }
    Ok(())
}

impl Database {
    pub(crate) fn get_bosses(&self) -> Result<Vec<Boss>> {
        self.read(list)
    }

    /// Add a boss at the end of the display order, unchecked.
    pub(crate) fn create_boss(&mut self, name: &str, reward_amount: Decimal) -> Result<Boss> {
        let name = required_name("name", name)?;
        ensure_non_negative("reward_amount", reward_amount)?;

        let boss = self.write(|tx| {
            let boss = Boss::new(ids::next_id(tx, IdKind::Bosses)?, name, reward_amount);
            tx.execute(
                "INSERT INTO bosses (id, name, reward_amount, checked, checked_at, position)
                 VALUES (?1, ?2, ?3, 0, NULL, (SELECT COALESCE(MAX(position), 0) + 1 FROM bosses))",
                params![boss.id, boss.name, boss.reward_amount.to_string()],
            )?;
            Ok(boss)
        })?;
        info!(id = boss.id, name = %boss.name, reward = %boss.reward_amount, "boss created");
        Ok(boss)
    }

    /// Mark a boss as cleared for this cycle and book its reward as income.
    /// `reward_amount` overrides the stored reward for this one record.
    pub(crate) fn check_boss(
        &mut self,
        boss_id: i64,
        reward_amount: Option<Decimal>,
    ) -> Result<(Boss, Record)> {
        let (boss, record) = self.write(|tx| {
            let mut boss = find(tx, boss_id)?;
            if boss.checked {
                return Err(LedgerError::Conflict(format!(
                    "Already checked: {} (id {boss_id})",
                    boss.name
                )));
            }
            let amount = reward_amount.unwrap_or(boss.reward_amount);

            boss.checked = true;
            boss.checked_at = Some(now_timestamp());
            tx.execute(
                "UPDATE bosses SET checked = 1, checked_at = ?1 WHERE id = ?2",
                params![boss.checked_at, boss.id],
            )?;

            let record = records::insert(
                tx,
                NewRecord::new(RecordType::Income, amount)
                    .with_description(boss.check_description())
                    .with_origin(Origin::Boss { boss_id }),
            )?;
            Ok((boss, record))
        })?;
        info!(boss_id, record_id = record.id, amount = %record.amount, "boss checked");
        Ok((boss, record))
    }

    /// Start a new cycle: clear every check. Records and the goal balance
    /// from earlier checks stay as they are.
    pub(crate) fn reset_bosses(&mut self) -> Result<Vec<Boss>> {
        let bosses = self.write(|tx| {
            tx.execute("UPDATE bosses SET checked = 0, checked_at = NULL", [])?;
            list(tx)
        })?;
        info!(count = bosses.len(), "boss checks reset");
        Ok(bosses)
    }

    /// Remove a boss. Income already booked by its checks is kept.
    pub(crate) fn delete_boss(&mut self, id: i64) -> Result<()> {
        self.write(|tx| {
            let removed = tx.execute("DELETE FROM bosses WHERE id = ?1", params![id])?;
            if removed == 0 {
                return Err(LedgerError::NotFound { kind: "boss", id });
            }
            Ok(())
        })?;
        info!(id, "boss deleted");
        Ok(())
    }

    /// Replace the display order. `ordered_ids` must be a permutation of the
    /// current boss ids.
    pub(crate) fn reorder_bosses(&mut self, ordered_ids: &[i64]) -> Result<()> {
        self.write(|tx| {
            let existing: Vec<i64> = list(tx)?.into_iter().map(|b| b.id).collect();
            ensure_permutation(&existing, ordered_ids)?;
            let mut stmt = tx.prepare("UPDATE bosses SET position = ?1 WHERE id = ?2")?;
            for (idx, id) in ordered_ids.iter().enumerate() {
                stmt.execute(params![idx as i64 + 1, id])?;
            }
            Ok(())
        })?;
        info!(order = ?ordered_ids, "bosses reordered");
        Ok(())
    }
}
