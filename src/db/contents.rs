use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

use super::ids::{self, IdKind};
use super::{decimal_at, records, required_name, Database};
use crate::error::{LedgerError, Result};
use crate::models::*;

fn row_to_content(row: &Row<'_>) -> rusqlite::Result<Content> {
    Ok(Content {
        id: row.get(0)?,
        name: row.get(1)?,
        cost: decimal_at(row, 2)?,
        category: row.get(3)?,
    })
}

fn find(conn: &Connection, id: i64) -> Result<Option<Content>> {
    Ok(conn
        .query_row(
            "SELECT id, name, cost, category FROM contents WHERE id = ?1",
            params![id],
            row_to_content,
        )
        .optional()?)
}

impl Database {
    pub(crate) fn get_contents(&self) -> Result<Vec<Content>> {
        self.read(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, cost, category FROM contents ORDER BY id")?;
            let rows = stmt.query_map([], row_to_content)?;
            Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
        })
    }

    pub(crate) fn create_content(&mut self, new: NewContent) -> Result<Content> {
        let name = required_name("name", &new.name)?;
        ensure_non_negative("cost", new.cost)?;
        let category = new
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let content = self.write(|tx| {
            let content = Content {
                id: ids::next_id(tx, IdKind::Contents)?,
                name,
                cost: new.cost,
                category,
            };
            tx.execute(
                "INSERT INTO contents (id, name, cost, category) VALUES (?1, ?2, ?3, ?4)",
                params![content.id, content.name, content.cost.to_string(), content.category],
            )?;
            Ok(content)
        })?;
        info!(id = content.id, name = %content.name, cost = %content.cost, "content created");
        Ok(content)
    }

    /// Spend a catalog item once: an expense record for its cost, with the
    /// goal balance reduced to match. The content row itself is unchanged.
    pub(crate) fn spend_content(&mut self, content_id: i64) -> Result<(Record, Content)> {
        let (record, content) = self.write(|tx| {
            let content = find(tx, content_id)?.ok_or(LedgerError::NotFound {
                kind: "content",
                id: content_id,
            })?;
            let record = records::insert(
                tx,
                NewRecord::new(RecordType::Expense, content.cost)
                    .with_description(content.spend_description())
                    .with_origin(Origin::Content { content_id }),
            )?;
            Ok((record, content))
        })?;
        info!(content_id, record_id = record.id, cost = %content.cost, "content spent");
        Ok((record, content))
    }

    /// Remove a catalog item. Records created by past spends are kept.
    pub(crate) fn delete_content(&mut self, id: i64) -> Result<()> {
        self.write(|tx| {
            let removed = tx.execute("DELETE FROM contents WHERE id = ?1", params![id])?;
            if removed == 0 {
                return Err(LedgerError::NotFound { kind: "content", id });
            }
            Ok(())
        })?;
        info!(id, "content deleted");
        Ok(())
    }
}
