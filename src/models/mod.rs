pub mod catalog;
pub mod changelog;
pub mod project;
pub mod spec_item;
pub mod user;

pub use catalog::{MasterEntry, TemplateData, TemplateItem};
pub use changelog::ChangeLogEntry;
pub use project::{Project, ProjectStatus};
pub use spec_item::{SpecCategory, SpecItem, SpecItemInput, SpecSheetInput};
pub use user::UserProfile;

/// Fetch a cell by position, tolerating short rows the way a spreadsheet
/// scan does (a missing trailing cell reads as empty, not as an error).
pub(crate) fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}
