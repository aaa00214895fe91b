use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;
use crate::store::{Workbook, sheets};

/// Resolve the acting identity against the user directory sheet by exact
/// match on the email column.
///
/// The lookup only validates existence: an inactive profile (有効 = FALSE)
/// still passes. Whether inactive users should be rejected is a product
/// decision the caller has to impose explicitly.
pub fn check_access(wb: &Workbook, email: &str) -> AppResult<UserProfile> {
    if !wb.sheet_exists(sheets::SHEET_USERS)? {
        return Err(AppError::SheetNotFound(sheets::SHEET_USERS.to_string()));
    }

    for (_, row) in wb.data_rows(sheets::SHEET_USERS)? {
        if row.get(1).map(String::as_str) == Some(email) {
            return Ok(UserProfile::from_row(&row));
        }
    }

    Err(AppError::AccessDenied(email.to_string()))
}

/// All registered profiles, in directory order.
pub fn list_users(wb: &Workbook) -> AppResult<Vec<UserProfile>> {
    if !wb.sheet_exists(sheets::SHEET_USERS)? {
        return Err(AppError::SheetNotFound(sheets::SHEET_USERS.to_string()));
    }

    Ok(wb
        .data_rows(sheets::SHEET_USERS)?
        .iter()
        .map(|(_, row)| UserProfile::from_row(row))
        .collect())
}
