//! Google Sheets publishing.
//!
//! `SheetsClient` authenticates with a service-account key, finds the
//! spreadsheet by name through the Drive API, and hands out a `Worksheet`
//! for the target tab. The workflow only sees the `SheetBackend` trait, so
//! publishing can be exercised without network access.

pub mod auth;
pub mod client;
pub mod error;
pub mod publish;

pub use auth::ServiceAccountKey;
pub use client::{SheetsClient, Worksheet};
pub use error::SheetsError;
pub use publish::{publish_records, SheetBackend, SheetRow};
