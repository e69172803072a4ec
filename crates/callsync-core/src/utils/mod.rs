//! Utility functions for normalizing scraped report text.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{
    collapse_whitespace, extract_member_id, format_run_timestamp, reformat_name,
    reformat_sustained_date,
};
