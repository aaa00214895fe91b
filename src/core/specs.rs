use crate::core::{audit, projects};
use crate::errors::AppResult;
use crate::models::{SpecCategory, SpecItem, SpecItemInput, SpecSheetInput, UserProfile};
use crate::store::Workbook;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Both category datasets of one project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpecData {
    pub design: Vec<SpecItem>,
    pub interior: Vec<SpecItem>,
}

/// All specification rows of a project, per category, in sheet order.
/// A missing category sheet reads as an empty list.
pub fn get_specification(wb: &Workbook, project_id: &str) -> AppResult<SpecData> {
    Ok(SpecData {
        design: category_rows(wb, SpecCategory::Design, project_id)?,
        interior: category_rows(wb, SpecCategory::Interior, project_id)?,
    })
}

fn category_rows(wb: &Workbook, category: SpecCategory, project_id: &str) -> AppResult<Vec<SpecItem>> {
    if !wb.sheet_exists(category.sheet())? {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for (_, row) in wb.data_rows(category.sheet())? {
        if row.first().map(String::as_str) == Some(project_id) {
            out.push(SpecItem::from_row(&row));
        }
    }
    Ok(out)
}

/// Full-replace save: for each category present in the input, every stored
/// row of that project is deleted before the submitted items are appended.
/// Submitting an empty list therefore clears the category, and an absent
/// category is left untouched. There is no partial-failure recovery: if the
/// delete succeeds and an insert fails, the category stays empty.
pub fn save_specification(
    wb: &Workbook,
    project_id: &str,
    input: &SpecSheetInput,
    user: &UserProfile,
    now: NaiveDateTime,
) -> AppResult<()> {
    if let Some(items) = &input.design {
        replace_category(wb, SpecCategory::Design, project_id, items, user, now)?;
    }
    if let Some(items) = &input.interior {
        replace_category(wb, SpecCategory::Interior, project_id, items, user, now)?;
    }

    projects::touch_updated_at(wb, project_id, now)?;

    let serialized = serde_json::to_string(input)?;
    audit::record(wb, project_id, audit::ACTION_SPEC_SAVED, "", &serialized, user);

    Ok(())
}

fn replace_category(
    wb: &Workbook,
    category: SpecCategory,
    project_id: &str,
    items: &[SpecItemInput],
    user: &UserProfile,
    now: NaiveDateTime,
) -> AppResult<()> {
    // A category whose sheet is missing is skipped, not an error.
    if !wb.sheet_exists(category.sheet())? {
        return Ok(());
    }

    // Delete from the end so earlier positions stay valid while removing.
    let existing = wb.data_rows(category.sheet())?;
    for (pos, row) in existing.iter().rev() {
        if row.first().map(String::as_str) == Some(project_id) {
            wb.delete_row(category.sheet(), *pos)?;
        }
    }

    for item in items {
        let stored = item.clone().into_item(project_id, now, &user.name);
        wb.append_row(category.sheet(), &stored.to_row())?;
    }

    Ok(())
}
