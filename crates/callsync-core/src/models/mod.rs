//! Data models for ward calling records.
//!
//! - `CallingRecord`: one row of the members-with-callings report
//! - `SetApart`: whether the member has been set apart in the calling
//! - Calling name constants for the callings that carry a class assignment

pub mod calling;

pub use calling::{
    CallingRecord, SetApart, PRIMARY_ACTIVITIES_LEADER, PRIMARY_TEACHER, SHEET_COLUMNS,
    SUNDAY_SCHOOL_TEACHER,
};
