use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::CallingRecord;

/// One sheet row; `None` leaves the cell empty
pub type SheetRow = Vec<Option<String>>;

/// A spreadsheet tab the records can be written to.
#[allow(async_fn_in_trait)]
pub trait SheetBackend {
    /// Remove all existing content from the tab
    async fn clear(&self) -> Result<()>;

    /// Append rows after the last row with content
    async fn append_rows(&self, rows: &[SheetRow]) -> Result<()>;
}

/// Replace the tab's contents with one row per record.
/// Returns the number of rows written.
pub async fn publish_records<S: SheetBackend>(sheet: &S, records: &[CallingRecord]) -> Result<usize> {
    let rows: Vec<SheetRow> = records.iter().map(CallingRecord::to_sheet_row).collect();

    sheet.clear().await.context("Failed to clear target tab")?;

    if rows.is_empty() {
        warn!("No calling records to publish, tab left empty");
        return Ok(0);
    }

    sheet
        .append_rows(&rows)
        .await
        .context("Failed to append calling records")?;

    info!(rows = rows.len(), "Published calling records");
    Ok(rows.len())
}
