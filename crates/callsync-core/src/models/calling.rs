pub const PRIMARY_TEACHER: &str = "Primary Teacher";
pub const PRIMARY_ACTIVITIES_LEADER: &str = "Primary Activities Leader";
pub const SUNDAY_SCHOOL_TEACHER: &str = "Sunday School Teacher";

/// Column order of a published sheet row.
pub const SHEET_COLUMNS: [&str; 7] = [
    "name",
    "member_id",
    "organization",
    "calling",
    "sustained_date",
    "set_apart",
    "class_name",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetApart {
    Yes,
    No,
}

impl SetApart {
    pub fn from_marker(has_marker: bool) -> Self {
        if has_marker {
            SetApart::Yes
        } else {
            SetApart::No
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SetApart::Yes => "Yes",
            SetApart::No => "No",
        }
    }
}

impl std::fmt::Display for SetApart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single calling held by a member, as read from the callings report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingRecord {
    pub name: String,
    pub member_id: String,
    pub organization: String,
    pub calling: String,
    pub sustained_date: String,
    pub set_apart: SetApart,
    pub class_name: Option<String>,
}

impl CallingRecord {
    /// Row values in `SHEET_COLUMNS` order. An unset class is `None`
    /// so the cell is left empty.
    pub fn to_sheet_row(&self) -> Vec<Option<String>> {
        vec![
            Some(self.name.clone()),
            Some(self.member_id.clone()),
            Some(self.organization.clone()),
            Some(self.calling.clone()),
            Some(self.sustained_date.clone()),
            Some(self.set_apart.to_string()),
            self.class_name.clone(),
        ]
    }
}
