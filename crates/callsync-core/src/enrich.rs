//! Class enrichment from the organization reports.
//!
//! The callings report says *that* someone is a Primary or Sunday School
//! teacher but not *which* class. The organization pages list each class as
//! a `sub-org` block containing links to its teachers, so a member's class is
//! found by locating links to their profile and reading the enclosing heading.
//!
//! Each member lookup is isolated: a failure is logged and leaves that
//! record's class unset without affecting the others.

use std::ops::AddAssign;

use tracing::{debug, info, warn};

use crate::models::{
    CallingRecord, PRIMARY_ACTIVITIES_LEADER, PRIMARY_TEACHER, SUNDAY_SCHOOL_TEACHER,
};
use crate::report::{ReportError, ReportPage, ReportReader};

/// Heading text that marks the activities groups on the Primary page
pub const PRIMARY_ACTIVITIES_MARKER: &str = "Primary Activities";

/// How the links referencing a member are turned into a class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScan {
    /// Only the first link counts, no filtering
    FirstLink,
    /// Every link in document order until one passes `accepts_class_label`
    FirstAccepted,
}

#[derive(Debug, Clone, Copy)]
pub struct EnrichmentPass {
    pub page: ReportPage,
    pub callings: &'static [&'static str],
    pub scan: LinkScan,
}

impl EnrichmentPass {
    pub fn applies_to(&self, calling: &str) -> bool {
        self.callings.iter().any(|c| *c == calling)
    }
}

pub const PRIMARY_PASS: EnrichmentPass = EnrichmentPass {
    page: ReportPage::PrimaryOrganization,
    callings: &[PRIMARY_TEACHER, PRIMARY_ACTIVITIES_LEADER],
    scan: LinkScan::FirstAccepted,
};

pub const SUNDAY_SCHOOL_PASS: EnrichmentPass = EnrichmentPass {
    page: ReportPage::SundaySchoolOrganization,
    callings: &[SUNDAY_SCHOOL_TEACHER],
    scan: LinkScan::FirstLink,
};

/// Passes run by the workflow, in order
pub const ENRICHMENT_PASSES: [EnrichmentPass; 2] = [PRIMARY_PASS, SUNDAY_SCHOOL_PASS];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentSummary {
    /// Records whose calling the pass applies to
    pub candidates: usize,
    pub enriched: usize,
    /// Lookups that raised a report error
    pub failed: usize,
    /// Records with no member id to look up
    pub skipped: usize,
}

impl AddAssign for EnrichmentSummary {
    fn add_assign(&mut self, other: Self) {
        self.candidates += other.candidates;
        self.enriched += other.enriched;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}

/// Whether a class heading is consistent with the member's calling.
/// Activities leaders belong to an activities group; everyone else
/// belongs to a regular class.
pub fn accepts_class_label(calling: &str, label: &str) -> bool {
    let is_activities_group = label.contains(PRIMARY_ACTIVITIES_MARKER);
    if calling == PRIMARY_ACTIVITIES_LEADER {
        is_activities_group
    } else {
        !is_activities_group
    }
}

/// Run one enrichment pass over the records, writing `class_name` in place.
pub fn enrich_classes<R: ReportReader>(
    reader: &R,
    records: &mut [CallingRecord],
    pass: &EnrichmentPass,
) -> EnrichmentSummary {
    let mut summary = EnrichmentSummary::default();

    for record in records.iter_mut().filter(|r| pass.applies_to(&r.calling)) {
        summary.candidates += 1;

        // An empty id would match every link on the page
        if record.member_id.is_empty() {
            warn!(member = %record.name, page = %pass.page, "No member id, skipping class lookup");
            summary.skipped += 1;
            continue;
        }

        match lookup_class(reader, &record.calling, &record.member_id, pass.scan) {
            Ok(Some(class_name)) => {
                debug!(member = %record.name, class = %class_name, "Class found");
                record.class_name = Some(class_name);
                summary.enriched += 1;
            }
            Ok(None) => {
                debug!(member = %record.name, page = %pass.page, "No matching class");
            }
            Err(e) => {
                warn!(member = %record.name, page = %pass.page, error = %e, "Could not find class for member");
                summary.failed += 1;
            }
        }
    }

    info!(
        page = %pass.page,
        candidates = summary.candidates,
        enriched = summary.enriched,
        failed = summary.failed,
        skipped = summary.skipped,
        "Enrichment pass complete"
    );
    summary
}

fn lookup_class<R: ReportReader>(
    reader: &R,
    calling: &str,
    member_id: &str,
    scan: LinkScan,
) -> Result<Option<String>, ReportError> {
    let links = reader.find_links_by_id(member_id);

    match scan {
        LinkScan::FirstLink => {
            let link = links
                .first()
                .ok_or_else(|| ReportError::MemberNotFound(member_id.to_string()))?;
            reader.read_heading_near(link).map(Some)
        }
        LinkScan::FirstAccepted => {
            for link in &links {
                let label = reader.read_heading_near(link)?;
                if accepts_class_label(calling, &label) {
                    return Ok(Some(label));
                }
            }
            Ok(None)
        }
    }
}
