use super::cell;
use serde::Serialize;

/// One starter entry of a template sheet (columns after the category tag:
/// item, manufacturer, product name, product code, color/design, notes).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    pub item: String,
    pub manufacturer: String,
    pub product_name: String,
    pub product_code: String,
    pub color_or_design: String,
    pub notes: String,
}

impl TemplateItem {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            item: cell(row, 1),
            manufacturer: cell(row, 2),
            product_name: cell(row, 3),
            product_code: cell(row, 4),
            color_or_design: cell(row, 5),
            notes: cell(row, 6),
        }
    }
}

/// A named starter bundle, partitioned by the leading category tag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateData {
    pub design: Vec<TemplateItem>,
    pub interior: Vec<TemplateItem>,
}

/// One row of a per-category master picklist sheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterEntry {
    pub id: String,
    pub item: String,
    pub manufacturer: String,
    pub product_name: String,
    pub product_code: String,
    pub color: String,
    pub design: String,
    pub notes: String,
}

impl MasterEntry {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            item: cell(row, 1),
            manufacturer: cell(row, 2),
            product_name: cell(row, 3),
            product_code: cell(row, 4),
            color: cell(row, 5),
            design: cell(row, 6),
            notes: cell(row, 7),
        }
    }
}
