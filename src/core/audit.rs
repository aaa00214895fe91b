//! Append-only change history.
//!
//! Audit writes must never fail the business operation they document:
//! every failure path here is downgraded to a warning.

use crate::errors::AppResult;
use crate::models::{ChangeLogEntry, UserProfile};
use crate::store::{Workbook, sheets};
use crate::ui::messages;
use crate::utils::date;

pub const ACTION_PROJECT_CREATED: &str = "案件作成";
pub const ACTION_SPEC_SAVED: &str = "仕様保存";
pub const ACTION_PDF_OUTPUT: &str = "PDF出力";

/// Append one change record for a project. Infallible from the caller's
/// point of view.
pub fn record(wb: &Workbook, project_id: &str, action: &str, old_value: &str, new_value: &str, user: &UserProfile) {
    let entry = ChangeLogEntry {
        timestamp: Some(date::now()),
        project_id: project_id.to_string(),
        action: action.to_string(),
        old_value: old_value.to_string(),
        new_value: new_value.to_string(),
        user_name: user.name.clone(),
        user_email: user.email.clone(),
    };

    if let Err(err) = try_record(wb, &entry) {
        messages::warning(format!("change log write failed: {}", err));
    }
}

fn try_record(wb: &Workbook, entry: &ChangeLogEntry) -> AppResult<()> {
    if !wb.sheet_exists(sheets::SHEET_CHANGE_LOG)? {
        messages::warning(format!(
            "change log sheet '{}' not found, entry dropped",
            sheets::SHEET_CHANGE_LOG
        ));
        return Ok(());
    }
    wb.append_row(sheets::SHEET_CHANGE_LOG, &entry.to_row())
}

/// Change records for one project, most recent first. A missing log sheet
/// reads as empty history.
pub fn get_history(wb: &Workbook, project_id: &str) -> AppResult<Vec<ChangeLogEntry>> {
    if !wb.sheet_exists(sheets::SHEET_CHANGE_LOG)? {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for (_, row) in wb.data_rows(sheets::SHEET_CHANGE_LOG)?.iter().rev() {
        if row.get(1).map(String::as_str) == Some(project_id) {
            out.push(ChangeLogEntry::from_row(row));
        }
    }
    Ok(out)
}
