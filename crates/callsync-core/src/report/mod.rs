//! Report reading for the portal's rendered pages.
//!
//! The scraping logic never talks to the browser directly. It works against
//! the `ReportReader` capability, which the live session satisfies with an
//! `HtmlReport` snapshot of the rendered page and tests satisfy with fixtures.

pub mod html;
mod selector;

#[cfg(test)]
pub(crate) mod fixtures;

use thiserror::Error;

use crate::config::PortalUrls;

pub use html::{HtmlReport, MemberLink};

/// Raw cell values of one row of the callings table, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterRow {
    pub name: String,
    pub profile_href: String,
    pub organization: String,
    pub calling: String,
    pub sustained: String,
    pub set_apart_marked: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Callings table not found on page")]
    TableNotFound,

    #[error("Row {row}: missing {cell}")]
    MissingCell { row: usize, cell: &'static str },

    #[error("No link references member {0}")]
    MemberNotFound(String),

    #[error("Link is not inside a sub-organization")]
    NoEnclosingOrg,

    #[error("Sub-organization has no class heading")]
    MissingHeading,

    #[error("Unknown link handle {0}")]
    UnknownLink(usize),
}

/// Narrow read capability over a rendered report page.
pub trait ReportReader {
    /// Handle to a hyperlink found on the page
    type Link;

    /// Read every body row of the callings table, in page order.
    /// Any row missing an expected cell fails the whole read.
    fn read_table_rows(&self) -> Result<Vec<RosterRow>, ReportError>;

    /// All links whose `href` contains the member id, in document order
    fn find_links_by_id(&self, member_id: &str) -> Vec<Self::Link>;

    /// Label of the sub-organization enclosing the given link
    fn read_heading_near(&self, link: &Self::Link) -> Result<String, ReportError>;
}

/// The portal pages the workflow visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportPage {
    Roster,
    PrimaryOrganization,
    SundaySchoolOrganization,
}

impl ReportPage {
    pub fn url<'a>(&self, urls: &'a PortalUrls) -> &'a str {
        match self {
            ReportPage::Roster => &urls.roster,
            ReportPage::PrimaryOrganization => &urls.primary,
            ReportPage::SundaySchoolOrganization => &urls.sunday_school,
        }
    }

    /// Organization pages only list every class after "All Organizations" is selected
    pub fn expands_all_orgs(&self) -> bool {
        !matches!(self, ReportPage::Roster)
    }

    /// CSS selector for the element that shows the page has rendered its data
    pub fn ready_selector(&self) -> &'static str {
        match self {
            ReportPage::Roster => r#"table[class*="table ng-scope"] tbody"#,
            ReportPage::PrimaryOrganization | ReportPage::SundaySchoolOrganization => "sub-org",
        }
    }
}

impl std::fmt::Display for ReportPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportPage::Roster => write!(f, "Members with Callings"),
            ReportPage::PrimaryOrganization => write!(f, "Primary"),
            ReportPage::SundaySchoolOrganization => write!(f, "Sunday School"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_page_urls() {
        let urls = PortalUrls::default();
        assert!(ReportPage::Roster.url(&urls).contains("members-with-callings"));
        assert!(ReportPage::PrimaryOrganization.url(&urls).contains("643828"));
        assert!(ReportPage::SundaySchoolOrganization.url(&urls).contains("498982"));
    }

    #[test]
    fn test_only_org_pages_expand() {
        assert!(!ReportPage::Roster.expands_all_orgs());
        assert!(ReportPage::PrimaryOrganization.expands_all_orgs());
        assert!(ReportPage::SundaySchoolOrganization.expands_all_orgs());
    }

    #[test]
    fn test_ready_selectors_match_fixtures() {
        let roster = scraper::Html::parse_document(fixtures::ROSTER_HTML);
        let roster_ready = scraper::Selector::parse(ReportPage::Roster.ready_selector()).unwrap();
        assert!(roster.select(&roster_ready).next().is_some());

        for (page, html) in [
            (ReportPage::PrimaryOrganization, fixtures::PRIMARY_ORG_HTML),
            (ReportPage::SundaySchoolOrganization, fixtures::SUNDAY_SCHOOL_ORG_HTML),
        ] {
            let doc = scraper::Html::parse_document(html);
            let ready = scraper::Selector::parse(page.ready_selector()).unwrap();
            assert!(doc.select(&ready).next().is_some(), "{} page", page);

            // Roster readiness must not be satisfied by an organization page
            let roster_ready = scraper::Selector::parse(ReportPage::Roster.ready_selector()).unwrap();
            assert!(doc.select(&roster_ready).next().is_none());
        }
    }
}
