use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Date format used by the callings report ("04 Mar 2023")
const REPORT_DATE_FORMAT: &str = "%d %b %Y";

/// Date format written to the sheet
const SHEET_DATE_FORMAT: &str = "%Y-%m-%d";

static MEMBER_PROFILE_RE: OnceLock<Regex> = OnceLock::new();

/// Reformat a "Last, First Middle" roster name as "First Last".
/// Only the first token after the comma is kept. Names without a comma
/// are returned unchanged.
pub fn reformat_name(name: &str) -> String {
    match name.split_once(',') {
        Some((last, rest)) => {
            let last = last.trim();
            match rest.split_whitespace().next() {
                Some(first) => format!("{} {}", first, last),
                None => last.to_string(),
            }
        }
        None => name.to_string(),
    }
}

/// Convert a "DD Mon YYYY" sustained date to ISO "YYYY-MM-DD".
/// Returns an empty string if the text doesn't parse.
pub fn reformat_sustained_date(date: &str) -> String {
    NaiveDate::parse_from_str(date.trim(), REPORT_DATE_FORMAT)
        .map(|d| d.format(SHEET_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Pull the numeric member id out of a profile link such as
/// `.../member-profile/123456?lang=eng`. Empty string if absent.
pub fn extract_member_id(href: &str) -> String {
    let re = MEMBER_PROFILE_RE.get_or_init(|| {
        Regex::new(r"member-profile/(\d+)\?lang=").expect("regex for member profile links")
    });
    re.captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Collapse runs of whitespace (including newlines from nested markup)
/// into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format a run timestamp for the completion log line,
/// e.g. "Friday, Oct 16th at 09:05AM".
pub fn format_run_timestamp(at: NaiveDateTime) -> String {
    let day = at.day();
    format!(
        "{}, {} {}{} at {}",
        at.format("%A"),
        at.format("%b"),
        day,
        ordinal_suffix(day),
        at.format("%I:%M%p")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
