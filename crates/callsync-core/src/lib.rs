//! callsync core - republishes ward callings from the reporting portal to a
//! Google Sheet.
//!
//! A run signs in to the portal with a WebDriver-driven browser, reads the
//! members-with-callings report, looks up the class each Primary and Sunday
//! School teacher is assigned to, and overwrites a spreadsheet tab with the
//! result. See [`workflow::run`] for the sequence.

pub mod config;
pub mod enrich;
pub mod models;
pub mod portal;
pub mod report;
pub mod roster;
pub mod sheets;
pub mod utils;
pub mod workflow;

pub use config::{Config, ConfigError};
pub use models::{CallingRecord, SetApart};
pub use workflow::{run, sync_callings, RunOutcome};
