//! Roster extraction: turns the callings table into `CallingRecord`s.

use tracing::{debug, info};

use crate::models::{CallingRecord, SetApart};
use crate::report::{ReportError, ReportReader, RosterRow};
use crate::utils::{extract_member_id, reformat_name, reformat_sustained_date};

/// Read every row of the callings table, in page order.
/// A malformed row fails the whole extraction.
pub fn extract_roster<R: ReportReader>(reader: &R) -> Result<Vec<CallingRecord>, ReportError> {
    let rows = reader.read_table_rows()?;
    let records: Vec<CallingRecord> = rows.iter().map(record_from_row).collect();

    let missing_ids = records.iter().filter(|r| r.member_id.is_empty()).count();
    if missing_ids > 0 {
        debug!(count = missing_ids, "Rows without a member profile id");
    }
    info!(count = records.len(), "Extracted calling records");
    Ok(records)
}

pub fn record_from_row(row: &RosterRow) -> CallingRecord {
    CallingRecord {
        name: reformat_name(&row.name),
        member_id: extract_member_id(&row.profile_href),
        organization: row.organization.clone(),
        calling: row.calling.clone(),
        sustained_date: reformat_sustained_date(&row.sustained),
        set_apart: SetApart::from_marker(row.set_apart_marked),
        class_name: None,
    }
}
