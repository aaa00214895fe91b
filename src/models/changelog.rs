use super::cell;
use crate::utils::{format_sheet_datetime, parse_sheet_datetime};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the change history sheet, immutable once written.
/// Column layout: timestamp, project id, action, old value, new value,
/// user name, user email.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogEntry {
    pub timestamp: Option<NaiveDateTime>,
    pub project_id: String,
    pub action: String,
    pub old_value: String,
    pub new_value: String,
    pub user_name: String,
    pub user_email: String,
}

impl ChangeLogEntry {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            timestamp: parse_sheet_datetime(&cell(row, 0)),
            project_id: cell(row, 1),
            action: cell(row, 2),
            old_value: cell(row, 3),
            new_value: cell(row, 4),
            user_name: cell(row, 5),
            user_email: cell(row, 6),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp
                .as_ref()
                .map(format_sheet_datetime)
                .unwrap_or_default(),
            self.project_id.clone(),
            self.action.clone(),
            self.old_value.clone(),
            self.new_value.clone(),
            self.user_name.clone(),
            self.user_email.clone(),
        ]
    }
}
