//! `ReportReader` over a snapshot of a rendered report page.

use scraper::{ElementRef, Html};

use super::selector::StaticSelector;
use super::{ReportError, ReportReader, RosterRow};
use crate::utils::collapse_whitespace;

/// Custom element wrapping each class on the organization pages
const SUB_ORG_TAG: &str = "sub-org";

static ROSTER_TABLE: StaticSelector = StaticSelector::new(r#"table[class*="table ng-scope"]"#);
static TBODY: StaticSelector = StaticSelector::new("tbody");
static ROW: StaticSelector = StaticSelector::new("tr");
static NAME_CELL: StaticSelector = StaticSelector::new(".first.n.fn");
static ORGANIZATION_CELL: StaticSelector =
    StaticSelector::new(".hidden-phone.organization.ng-binding");
static CALLING_CELL: StaticSelector = StaticSelector::new(".position.ng-binding");
static SUSTAINED_CELL: StaticSelector =
    StaticSelector::new(".hidden-phone.sustained.nowrap.ng-binding");
static SET_APART_CELL: StaticSelector = StaticSelector::new(".hidden-phone.set-apart");
static MARKER: StaticSelector = StaticSelector::new("img");
static ANCHOR: StaticSelector = StaticSelector::new("a");
static DIV: StaticSelector = StaticSelector::new("div");
static HEADING: StaticSelector = StaticSelector::new("h2");

/// Position of a link among all `a` elements of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberLink {
    index: usize,
}

pub struct HtmlReport {
    document: Html,
}

impl HtmlReport {
    pub fn parse(source: &str) -> Self {
        Self {
            document: Html::parse_document(source),
        }
    }

    fn anchors(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document.select(&ANCHOR)
    }

    fn cell<'a>(
        row: ElementRef<'a>,
        selector: &StaticSelector,
        index: usize,
        cell: &'static str,
    ) -> Result<ElementRef<'a>, ReportError> {
        row.select(selector)
            .next()
            .ok_or(ReportError::MissingCell { row: index, cell })
    }

    fn read_row(index: usize, row: ElementRef<'_>) -> Result<RosterRow, ReportError> {
        let name_cell = Self::cell(row, &NAME_CELL, index, "name cell")?;
        let profile_href = Self::cell(name_cell, &ANCHOR, index, "profile link")?
            .value()
            .attr("href")
            .unwrap_or_default()
            .to_string();

        let organization = Self::cell(row, &ORGANIZATION_CELL, index, "organization cell")?;
        let calling = Self::cell(row, &CALLING_CELL, index, "calling cell")?;
        let sustained = Self::cell(row, &SUSTAINED_CELL, index, "sustained cell")?;
        let set_apart = Self::cell(row, &SET_APART_CELL, index, "set apart cell")?;

        Ok(RosterRow {
            name: text_of(name_cell),
            profile_href,
            organization: text_of(organization),
            calling: text_of(calling),
            sustained: text_of(sustained),
            set_apart_marked: set_apart.select(&MARKER).next().is_some(),
        })
    }
}

impl ReportReader for HtmlReport {
    type Link = MemberLink;

    fn read_table_rows(&self) -> Result<Vec<RosterRow>, ReportError> {
        let table = self
            .document
            .select(&ROSTER_TABLE)
            .next()
            .ok_or(ReportError::TableNotFound)?;
        let body = table.select(&TBODY).next().ok_or(ReportError::TableNotFound)?;

        body.select(&ROW)
            .enumerate()
            .map(|(index, row)| Self::read_row(index, row))
            .collect()
    }

    fn find_links_by_id(&self, member_id: &str) -> Vec<MemberLink> {
        self.anchors()
            .enumerate()
            .filter(|(_, a)| {
                a.value()
                    .attr("href")
                    .map(|href| href.contains(member_id))
                    .unwrap_or(false)
            })
            .map(|(index, _)| MemberLink { index })
            .collect()
    }

    fn read_heading_near(&self, link: &MemberLink) -> Result<String, ReportError> {
        let anchor = self
            .anchors()
            .nth(link.index)
            .ok_or(ReportError::UnknownLink(link.index))?;

        let sub_org = anchor
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == SUB_ORG_TAG)
            .ok_or(ReportError::NoEnclosingOrg)?;

        // The class label is the first h2 of the container's first div
        let heading = sub_org
            .select(&DIV)
            .next()
            .and_then(|div| div.select(&HEADING).next())
            .ok_or(ReportError::MissingHeading)?;

        Ok(text_of(heading))
    }
}

fn text_of(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
