//! The sync run: log in, extract the roster, enrich classes, publish.
//!
//! `run` takes already provisioned collaborators so it can be driven by test
//! fakes; `sync_callings` builds the real ones from a `Config`.

use std::panic::AssertUnwindSafe;

use anyhow::{anyhow, Context, Result};
use futures::FutureExt;
use tracing::{info, warn};

use crate::config::{Config, PortalCredentials};
use crate::enrich::{enrich_classes, EnrichmentSummary, ENRICHMENT_PASSES};
use crate::portal::{BrowserPortal, Portal};
use crate::report::ReportPage;
use crate::roster::extract_roster;
use crate::sheets::{publish_records, SheetBackend, SheetsClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Records read from the callings report
    pub records: usize,
    /// Rows written to the sheet
    pub published: usize,
    pub enrichment: EnrichmentSummary,
}

/// Run the whole sync with real collaborators built from `config`.
pub async fn sync_callings(config: &Config) -> Result<RunOutcome> {
    let sheets = SheetsClient::connect(&config.service_account).await?;
    let worksheet = sheets
        .open_worksheet(&config.sheet.spreadsheet_name, &config.sheet.tab_name)
        .await?;

    let mut portal = BrowserPortal::connect(&config.browser, config.urls.clone()).await?;
    run(&mut portal, &worksheet, &config.credentials).await
}

/// Run the sync against a portal session and a sheet.
///
/// The portal is closed on every exit path, including a panic in any step;
/// a panic is reported as a failed run.
pub async fn run<P, S>(portal: &mut P, sheet: &S, credentials: &PortalCredentials) -> Result<RunOutcome>
where
    P: Portal,
    S: SheetBackend,
{
    let result = AssertUnwindSafe(run_steps(portal, sheet, credentials))
        .catch_unwind()
        .await;

    if let Err(e) = portal.close().await {
        warn!(error = %e, "Failed to close browser session");
    }

    match result {
        Ok(outcome) => outcome,
        Err(panic) => Err(anyhow!("Run aborted by panic: {}", panic_message(&*panic))),
    }
}

async fn run_steps<P, S>(portal: &mut P, sheet: &S, credentials: &PortalCredentials) -> Result<RunOutcome>
where
    P: Portal,
    S: SheetBackend,
{
    portal.login(credentials).await.context("Login failed")?;

    let roster = portal.open_report(ReportPage::Roster).await?;
    let mut records = extract_roster(&roster).context("Failed to read callings report")?;

    let mut enrichment = EnrichmentSummary::default();
    for pass in &ENRICHMENT_PASSES {
        let report = portal.open_report(pass.page).await?;
        enrichment += enrich_classes(&report, &mut records, pass);
    }

    let published = publish_records(sheet, &records).await?;

    info!(
        records = records.len(),
        published,
        classes = enrichment.enriched,
        "Sync complete"
    );
    Ok(RunOutcome {
        records: records.len(),
        published,
        enrichment,
    })
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
