use std::path::Path;

use tracing::info;

use super::{records, Database};
use crate::error::Result;
use crate::models::normalize_month;

const HEADER: [&str; 8] = [
    "id",
    "type",
    "amount",
    "description",
    "date",
    "created_at",
    "source",
    "ref_id",
];

impl Database {
    /// Write the records sheet (optionally one month of it) to a CSV file.
    /// Returns the number of records written.
    pub(crate) fn export_to_csv(&self, path: &Path, month: Option<&str>) -> Result<usize> {
        let month = month.map(normalize_month).transpose()?;
        let rows = self.read(|conn| records::list(conn, month.as_deref()))?;

        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(HEADER)?;
        for r in &rows {
            wtr.write_record([
                r.id.to_string(),
                r.kind.as_str().to_string(),
                r.amount.to_string(),
                r.description.clone(),
                r.date.clone(),
                r.created_at.clone(),
                r.origin.as_str().to_string(),
                r.origin.ref_id().map(|id| id.to_string()).unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;

        info!(path = %path.display(), count = rows.len(), "records exported");
        Ok(rows.len())
    }
}
