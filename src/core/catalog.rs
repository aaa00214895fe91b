//! Read-only template and master picklist lookups.
//! Both are advisory data: a missing sheet yields an empty result plus a
//! warning, never an error.

use crate::errors::AppResult;
use crate::models::{MasterEntry, TemplateData, TemplateItem};
use crate::store::{Workbook, sheets};
use crate::ui::messages;

/// Starter dataset for a template type, partitioned by the leading
/// design/interior category tag.
pub fn get_template(wb: &Workbook, template_type: &str) -> AppResult<TemplateData> {
    let sheet = sheets::template_sheet(template_type);

    if !wb.sheet_exists(&sheet)? {
        messages::warning(format!("template sheet '{}' not found", sheet));
        return Ok(TemplateData::default());
    }

    let mut data = TemplateData::default();
    for (_, row) in wb.data_rows(&sheet)? {
        match row.first().map(String::as_str) {
            Some("design") => data.design.push(TemplateItem::from_row(&row)),
            Some("interior") => data.interior.push(TemplateItem::from_row(&row)),
            // Rows with any other tag are ignored.
            _ => {}
        }
    }
    Ok(data)
}

/// Master picklist for one category.
pub fn get_master_data(wb: &Workbook, category: &str) -> AppResult<Vec<MasterEntry>> {
    let sheet = sheets::master_sheet(category);

    if !wb.sheet_exists(&sheet)? {
        messages::warning(format!("master sheet '{}' not found", sheet));
        return Ok(Vec::new());
    }

    Ok(wb
        .data_rows(&sheet)?
        .iter()
        .map(|(_, row)| MasterEntry::from_row(row))
        .collect())
}
