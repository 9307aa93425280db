use rusqlite::{params, Connection};
use tracing::info;

use super::{decimal_at, Database};
use crate::error::{LedgerError, Result};
use crate::models::{ensure_non_negative, MaterialSettings, MaterialUpdate};

pub(super) fn read(conn: &Connection) -> Result<MaterialSettings> {
    Ok(conn.query_row(
        "SELECT meso_per_run, sol_erda_count, sol_erda_price, material_run_count
         FROM material_farming WHERE id = 1",
        [],
        |row| {
            Ok(MaterialSettings {
                meso_per_run: decimal_at(row, 0)?,
                sol_erda_count: row.get(1)?,
                sol_erda_price: decimal_at(row, 2)?,
                material_run_count: row.get(3)?,
            })
        },
    )?)
}

/// Every stored setting must still yield a projected income.
fn store(conn: &Connection, settings: &MaterialSettings) -> Result<()> {
    settings.projected_income()?;
    conn.execute(
        "UPDATE material_farming
         SET meso_per_run = ?1, sol_erda_count = ?2, sol_erda_price = ?3, material_run_count = ?4
         WHERE id = 1",
        params![
            settings.meso_per_run.to_string(),
            settings.sol_erda_count,
            settings.sol_erda_price.to_string(),
            settings.material_run_count,
        ],
    )?;
    Ok(())
}

fn validate(update: &MaterialUpdate) -> Result<()> {
    if let Some(v) = update.meso_per_run {
        ensure_non_negative("meso_per_run", v)?;
    }
    if let Some(v) = update.sol_erda_price {
        ensure_non_negative("sol_erda_price", v)?;
    }
    for (field, count) in [
        ("sol_erda_count", update.sol_erda_count),
        ("material_run_count", update.material_run_count),
    ] {
        if count.is_some_and(|c| c < 0) {
            return Err(LedgerError::validation(format!(
                "{field} must be zero or greater"
            )));
        }
    }
    Ok(())
}

impl Database {
    pub(crate) fn get_material_settings(&self) -> Result<MaterialSettings> {
        self.read(read)
    }

    pub(crate) fn update_material_settings(
        &mut self,
        update: MaterialUpdate,
    ) -> Result<MaterialSettings> {
        validate(&update)?;
        let settings = self.write(|tx| {
            let mut settings = read(tx)?;
            settings.apply(&update);
            store(tx, &settings)?;
            Ok(settings)
        })?;
        info!(?settings, "material settings updated");
        Ok(settings)
    }

    /// Step the run counter by `delta`, never below zero.
    pub(crate) fn adjust_material_runs(&mut self, delta: i64) -> Result<MaterialSettings> {
        let settings = self.write(|tx| {
            let mut settings = read(tx)?;
            settings.material_run_count = settings.material_run_count.saturating_add(delta).max(0);
            store(tx, &settings)?;
            Ok(settings)
        })?;
        info!(runs = settings.material_run_count, "material run counter adjusted");
        Ok(settings)
    }
}
