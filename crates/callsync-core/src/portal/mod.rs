//! Authenticated access to the reporting portal.
//!
//! This module provides:
//! - `Portal`: the capability the workflow needs (login, open a report, close)
//! - `BrowserPortal`: a WebDriver-driven Chrome session implementing it
//!
//! A browser is required because the report pages are rendered client-side.

pub mod browser;

use anyhow::Result;

use crate::config::PortalCredentials;
use crate::report::{ReportPage, ReportReader};

pub use browser::BrowserPortal;

#[allow(async_fn_in_trait)]
pub trait Portal {
    type Report: ReportReader;

    /// Sign in through the two-step username/password form
    async fn login(&mut self, credentials: &PortalCredentials) -> Result<()>;

    /// Navigate to a report, wait for it to render, and snapshot it
    async fn open_report(&mut self, page: ReportPage) -> Result<Self::Report>;

    /// Release the session. Called exactly once, on every exit path.
    async fn close(&mut self) -> Result<()>;
}
