use super::cell;
use crate::errors::{AppError, AppResult};
use crate::utils::{format_sheet_datetime, parse_sheet_datetime};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Project lifecycle status.
/// Sheet cells carry the Japanese wire strings; the CLI accepts the short
/// English codes. Unknown stored values are kept verbatim so a scan never
/// destroys data written by other tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Meeting,
    Specified,
    Complete,
    Other(String),
}

impl ProjectStatus {
    pub fn to_sheet_str(&self) -> &str {
        match self {
            ProjectStatus::Meeting => "打ち合わせ中",
            ProjectStatus::Specified => "仕様確定",
            ProjectStatus::Complete => "完了",
            ProjectStatus::Other(s) => s,
        }
    }

    pub fn from_sheet_str(s: &str) -> Self {
        match s {
            "打ち合わせ中" => ProjectStatus::Meeting,
            "仕様確定" => ProjectStatus::Specified,
            "完了" => ProjectStatus::Complete,
            other => ProjectStatus::Other(other.to_string()),
        }
    }

    /// Parse the CLI filter code (meeting / specified / complete).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "meeting" => Some(ProjectStatus::Meeting),
            "specified" => Some(ProjectStatus::Specified),
            "complete" => Some(ProjectStatus::Complete),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sheet_str())
    }
}

/// One row of the project registry sheet.
/// Column layout: id, customer, project name, lot, assignee, status,
/// department, created, updated.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    pub customer_name: String,
    pub project_name: String,
    pub lot_number: String,
    pub assignee: String,
    pub status: ProjectStatus,
    pub department: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Project {
    pub fn from_row(row: &[String]) -> AppResult<Self> {
        let created = cell(row, 7);
        let updated = cell(row, 8);
        Ok(Self {
            id: cell(row, 0),
            customer_name: cell(row, 1),
            project_name: cell(row, 2),
            lot_number: cell(row, 3),
            assignee: cell(row, 4),
            status: ProjectStatus::from_sheet_str(&cell(row, 5)),
            department: cell(row, 6),
            created_at: parse_sheet_datetime(&created)
                .ok_or_else(|| AppError::InvalidDate(created.clone()))?,
            updated_at: parse_sheet_datetime(&updated)
                .ok_or_else(|| AppError::InvalidDate(updated.clone()))?,
        })
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer_name.clone(),
            self.project_name.clone(),
            self.lot_number.clone(),
            self.assignee.clone(),
            self.status.to_sheet_str().to_string(),
            self.department.clone(),
            format_sheet_datetime(&self.created_at),
            format_sheet_datetime(&self.updated_at),
        ]
    }
}

/// Minute-granularity project id: PRJ + YYMMDDHHmm.
/// Two projects created within the same minute collide; a known limitation
/// of the id scheme, kept observable rather than patched with hidden
/// uniqueness logic.
pub fn generate_project_id(now: &NaiveDateTime) -> String {
    format!("PRJ{}", now.format("%y%m%d%H%M"))
}
